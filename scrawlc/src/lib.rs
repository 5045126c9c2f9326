//! Drives the whole pipeline: repertoire → variants → tables → font files.
//!
//! The four styles share one base glyph set and compile independently, so
//! they fan out across threads. Companion assets are written once, after
//! every style has landed on disk.

use std::{collections::BTreeMap, fs, path::Path, path::PathBuf};

use log::{debug, info};
use rayon::prelude::*;

use scrawlbe::{
    cmap, font, glyphs, head, metrics_and_limits, name, os2, post,
    write::Tag,
};
use scrawlir::{
    glyph,
    ir::{FontMetrics, GlyphShape},
    variant::{apply_variant, FontVariant, VARIANTS},
};

mod args;
pub mod assets;
mod error;

pub use args::Args;
pub use error::Error;

/// Italic styles advertise this slant in the post table, in degrees
/// counter-clockwise from vertical.
const ITALIC_ANGLE: f64 = -11.0;

/// File name for one style, family spaces stripped.
pub fn font_file_name(family: &str, style_name: &str) -> String {
    let stem: String = family.chars().filter(|c| !c.is_whitespace()).collect();
    format!("{stem}-{style_name}.ttf")
}

fn require_dir(dir: &Path) -> Result<(), Error> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::DirectoryExpected(dir.to_path_buf()));
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    debug!("require_dir {dir:?}");
    Ok(())
}

/// Compile one style of the family to font bytes.
///
/// The glyph order is fixed: `.notdef`, then the printable ASCII range in
/// code point order. Every table indexes by that order.
pub fn compile_variant(
    family: &str,
    variant: &FontVariant,
    base: &BTreeMap<char, GlyphShape>,
    metrics: &FontMetrics,
) -> Result<Vec<u8>, Error> {
    let styled = apply_variant(base, variant, metrics);

    let mut shapes: Vec<GlyphShape> = Vec::with_capacity(styled.len() + 1);
    shapes.push(glyph::notdef(metrics));
    shapes.extend(styled.values().cloned());

    let encoded = shapes
        .iter()
        .map(|shape| glyphs::encode_simple_glyph(shape.contours()))
        .collect::<Result<Vec<_>, _>>()?;
    let glyf_loca = glyphs::GlyfLoca::new(&encoded);

    let advances: Vec<u16> = shapes.iter().map(GlyphShape::advance).collect();
    let metrics_and_limits::MetricTables {
        hmtx,
        hhea,
        maxp,
        font_bbox,
        avg_advance,
    } = metrics_and_limits::build(&advances, &encoded, metrics)?;

    // Glyph id 0 is .notdef; characters map to ids 1...
    let mappings: Vec<(u16, u16)> = styled
        .keys()
        .enumerate()
        .map(|(idx, ch)| (*ch as u16, idx as u16 + 1))
        .collect();

    let (selection, mac_style) = os2::style_flags(variant);
    let italic_angle = if variant.italic { ITALIC_ANGLE } else { 0.0 };

    let loca = glyf_loca.raw_loca();
    let tables = BTreeMap::from([
        (Tag::new(b"OS/2"), os2::build(avg_advance, variant.weight, selection, metrics)),
        (Tag::new(b"cmap"), cmap::build(&mappings)),
        (Tag::new(b"glyf"), glyf_loca.glyf),
        (Tag::new(b"head"), head::build(metrics, font_bbox, mac_style)),
        (Tag::new(b"hhea"), hhea),
        (Tag::new(b"hmtx"), hmtx),
        (Tag::new(b"loca"), loca),
        (Tag::new(b"maxp"), maxp),
        (Tag::new(b"name"), name::build(family, variant.style_name)),
        (Tag::new(b"post"), post::build(italic_angle)),
    ]);

    Ok(font::assemble(&tables)?)
}

fn generate_variant(
    output_dir: &Path,
    family: &str,
    variant: &FontVariant,
    base: &BTreeMap<char, GlyphShape>,
    metrics: &FontMetrics,
) -> Result<PathBuf, Error> {
    let bytes = compile_variant(family, variant, base, metrics)?;
    let path = output_dir.join(font_file_name(family, variant.style_name));
    fs::write(&path, &bytes)?;
    info!("wrote {} ({} bytes)", path.display(), bytes.len());
    Ok(path)
}

/// Generate the four font files, plus companion assets unless skipped.
///
/// Returns the font file paths in variant order.
pub fn generate_fonts(args: &Args) -> Result<Vec<PathBuf>, Error> {
    let metrics = FontMetrics::default();
    let base = glyph::build_ascii_glyphs(&metrics)?;
    require_dir(&args.output_dir)?;

    let paths = VARIANTS
        .par_iter()
        .map(|variant| generate_variant(&args.output_dir, &args.family, variant, &base, &metrics))
        .collect::<Result<Vec<_>, Error>>()?;

    if !args.skip_assets {
        assets::write_assets(&args.output_dir, &args.family)?;
    }
    Ok(paths)
}
