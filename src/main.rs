//! bannergen CLI
//!
//! Usage:
//!   bannergen [OPTIONS] [CONFIG]
//!
//! Reads a JSON configuration mapping banner names to style records and writes
//! one SVG per banner (plus optional PNG/JPEG) and an index.html into the
//! output directory. A broken entry is reported and skipped; only a broken
//! configuration or output directory aborts the run.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use bannergen::{generate, BannerConfig, GenerateOptions, RenderConfig, SvgConfig};

#[cfg(feature = "raster")]
use bannergen::RasterFormat;

#[derive(Parser)]
#[command(name = "bannergen")]
#[command(about = "Render text banners from a JSON configuration to SVG and bitmap files")]
struct Cli {
    /// Configuration file (JSON)
    #[arg(default_value = "config.json")]
    config: PathBuf,

    /// Output directory, created if absent
    #[arg(short, long, default_value = "dist")]
    out_dir: PathBuf,

    /// Skip PNG/JPEG output and write SVG files only
    #[cfg(feature = "raster")]
    #[arg(long)]
    svg_only: bool,

    /// Emit compact SVG without indentation
    #[arg(long)]
    compact: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let config = match BannerConfig::from_file(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let options = GenerateOptions::new(&cli.out_dir);
    #[cfg(feature = "raster")]
    let options = if cli.svg_only {
        options
    } else {
        options.with_formats(vec![RasterFormat::Jpeg, RasterFormat::Png])
    };

    let mut svg_config = SvgConfig::default();
    if cli.compact {
        svg_config = svg_config.with_pretty_print(false);
    }
    let render_config = RenderConfig::new().with_svg(svg_config);

    let summary = match generate(&config, &options, &render_config) {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    println!(
        "Generated {} banner(s), {} file(s) in {}",
        summary.rendered.len(),
        summary.written.len(),
        cli.out_dir.display()
    );
    for err in &summary.failed {
        eprintln!("Warning: {}", err);
    }

    // Per-entry failures do not change the exit status.
    ExitCode::SUCCESS
}
