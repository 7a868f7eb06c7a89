use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use knobicon::resize::SipsResizer;
use knobicon::{generate_icon_set, Theme};

/// Generate the app icon set: every AppIcon.appiconset PNG plus its
/// Contents.json manifest.
#[derive(Parser, Debug)]
#[command(name = "knobicon", version, about)]
struct Cli {
    /// Directory the icon set is written into
    #[arg(long, default_value = "AppIcon.appiconset")]
    out_dir: PathBuf,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let report = generate_icon_set(&cli.out_dir, &Theme::default(), &SipsResizer)
        .with_context(|| format!("generating icon set in {}", cli.out_dir.display()))?;

    if !report.failed.is_empty() {
        eprintln!(
            "warning: {} variant(s) could not be resized: {}",
            report.failed.len(),
            report.failed.join(", ")
        );
    }
    println!("\nDone! App icon generated.");
    Ok(())
}
