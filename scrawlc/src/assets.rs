//! Companion text assets: stylesheet, specimen page, and manifest.
//!
//! These consume only the family name and the generated file names; no
//! geometry or binary work happens here.

use std::{fmt::Write as _, fs, path::Path};

use log::debug;

use scrawlir::variant::{FontVariant, VARIANTS};

use crate::{error::Error, font_file_name};

/// Unicode coverage advertised in the manifest.
const COVERAGE: &str = "U+0020 to U+007E";

fn css_style(variant: &FontVariant) -> &'static str {
    if variant.italic {
        "italic"
    } else {
        "normal"
    }
}

fn stylesheet(family: &str) -> String {
    let mut css = String::new();
    for variant in VARIANTS {
        let file = font_file_name(family, variant.style_name);
        let _ = write!(
            css,
            "@font-face {{\n  \
               font-family: '{family}';\n  \
               src: url('./{file}') format('truetype');\n  \
               font-weight: {};\n  \
               font-style: {};\n\
             }}\n\n",
            variant.weight,
            css_style(variant),
        );
    }
    css
}

fn specimen(family: &str) -> String {
    format!(
        r##"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width,initial-scale=1" />
  <title>{family} Specimen</title>
  <link rel="stylesheet" href="./font.css" />
  <style>
    body {{
      margin: 0;
      min-height: 100vh;
      display: grid;
      place-items: center;
      background: radial-gradient(circle at 20% 10%, #262626 0, #111 45%, #000 100%);
      color: #f5f5f5;
      font-family: '{family}', serif;
    }}
    .wrap {{ width: min(1000px, 92vw); padding: 2rem; }}
    h1 {{ margin: 0 0 1rem; font-size: clamp(3rem, 10vw, 7rem); letter-spacing: 0.03em; font-weight: 700; }}
    p {{ margin: 0.5rem 0; font-size: clamp(1.1rem, 2.4vw, 2rem); line-height: 1.35; letter-spacing: 0.02em; }}
    .small {{ font-size: clamp(0.95rem, 1.8vw, 1.3rem); opacity: 0.9; }}
    .italic {{ font-style: italic; }}
    .bold {{ font-weight: 700; }}
  </style>
</head>
<body>
  <main class="wrap">
    <h1>{caps}</h1>
    <p>ABCDEFGHIJKLMNOPQRSTUVWXYZ</p>
    <p class="italic">abcdefghijklmnopqrstuvwxyz</p>
    <p class="bold">0123456789 !"#$%&'()*+,-./:;&lt;=&gt;?@[\]^_`{{|}}~</p>
    <p class="bold italic">EVERY STROKE CUT BY A DIFFERENT HAND</p>
    <p class="small">Original display font set generated from procedural strokes.</p>
  </main>
</body>
</html>
"##,
        caps = family.to_uppercase(),
    )
}

fn readme(family: &str) -> String {
    let mut files = String::new();
    for variant in VARIANTS {
        let _ = writeln!(files, "- `{}`", font_file_name(family, variant.style_name));
    }
    format!(
        "# {family} Font Set\n\n\
         Generated files:\n\
         {files}\
         - `font.css`\n\
         - `specimen.html`\n\n\
         Coverage:\n\
         - ASCII printable range: {COVERAGE}\n\n\
         Usage:\n\
         ```css\n\
         font-family: '{family}', serif;\n\
         ```\n\n\
         This is an original design generated from procedural strokes.\n"
    )
}

/// Write the stylesheet, specimen page, and README next to the fonts.
pub fn write_assets(output_dir: &Path, family: &str) -> Result<(), Error> {
    fs::write(output_dir.join("font.css"), stylesheet(family))?;
    fs::write(output_dir.join("specimen.html"), specimen(family))?;
    fs::write(output_dir.join("README.md"), readme(family))?;
    debug!("companion assets written to {}", output_dir.display());
    Ok(())
}
