//! Driver: renders, encodes, resizes and writes the complete icon set.

use std::fs;
use std::path::{Path, PathBuf};

use crate::manifest::Manifest;
use crate::png;
use crate::render::render;
use crate::resize::Resizer;
use crate::{Theme, DIRECT_RENDER_MIN, ICON_SIZES, MASTER_FILENAME, MASTER_SIZE};

/// What a generation run produced.
#[derive(Debug, Default)]
pub struct Report {
    /// Files written, in generation order (master first, then variants,
    /// then the manifest)
    pub written: Vec<PathBuf>,
    /// Variants whose external resize failed; their files are absent
    pub failed: Vec<&'static str>,
}

/// Generate every icon variant plus `Contents.json` into `out_dir`.
///
/// The 1024px master is rendered once and written under its
/// `icon_512x512@2x.png` name. Variants of at least [`DIRECT_RENDER_MIN`]
/// pixels are re-rendered at their exact size; smaller ones are downsampled
/// from the master file by `resizer`. A resize failure is logged and
/// recorded in the report, and generation continues — I/O errors abort the
/// run.
pub fn generate_icon_set(out_dir: &Path, theme: &Theme, resizer: &dyn Resizer) -> crate::Result<Report> {
    fs::create_dir_all(out_dir)?;
    let mut report = Report::default();

    println!("Generating {MASTER_SIZE}x{MASTER_SIZE} master icon...");
    let master = render(MASTER_SIZE, theme);
    let master_path = out_dir.join(MASTER_FILENAME);
    fs::write(&master_path, png::encode_buffer(&master)?)?;
    println!("  Written: {}", master_path.display());
    report.written.push(master_path.clone());

    for spec in &ICON_SIZES {
        let px = spec.pixels();
        if px == MASTER_SIZE {
            // Covered by the master render
            continue;
        }

        let out_path = out_dir.join(spec.filename);
        if px >= DIRECT_RENDER_MIN {
            println!("Generating {px}x{px} ({})...", spec.filename);
            let buf = render(px, theme);
            fs::write(&out_path, png::encode_buffer(&buf)?)?;
        } else {
            println!("Resizing to {px}x{px} ({})...", spec.filename);
            if let Err(e) = resizer.resize(&master_path, px, px, &out_path) {
                log::warn!("{}: {e}", spec.filename);
                report.failed.push(spec.filename);
                continue;
            }
        }
        println!("  Written: {}", out_path.display());
        report.written.push(out_path);
    }

    let manifest_path = out_dir.join("Contents.json");
    fs::write(&manifest_path, Manifest::from_sizes(&ICON_SIZES).to_json()?)?;
    println!("  Updated: {}", manifest_path.display());
    report.written.push(manifest_path);

    Ok(report)
}
