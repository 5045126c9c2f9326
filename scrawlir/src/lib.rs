//! Glyph geometry for the scrawl font generator.
//!
//! This crate owns everything that happens before binary compilation: the
//! seeded noise source, the stroke kernel that turns skeleton segments into
//! rough closed polygons, the per-character skeleton data, and the style
//! variant transform. The output of this crate is a set of [ir::GlyphShape]
//! values in design units; `scrawlbe` turns those into font tables.

pub mod error;
pub mod glyph;
pub mod ir;
pub mod noise;
mod skeletons;
pub mod stroke;
pub mod variant;
