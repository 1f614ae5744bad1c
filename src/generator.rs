//! Whole-run driver
//!
//! Iterates the configuration in entry order, rendering and writing each banner
//! independently. A failure in one entry is logged and recorded but never stops
//! the run; only configuration and output-directory failures are fatal. There
//! is no cleanup of partially written entries.

use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::config::{BannerConfig, BannerSpec};
use crate::error::{ConfigError, EntryError};
use crate::renderer;
use crate::style::ResolvedStyle;
use crate::RenderConfig;

#[cfg(feature = "raster")]
use crate::renderer::{RasterFormat, Rasterizer, ResvgRasterizer};

/// Options for a generation run
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Output directory; created if absent
    pub out_dir: PathBuf,

    /// Bitmap formats to emit alongside each SVG
    #[cfg(feature = "raster")]
    pub formats: Vec<RasterFormat>,
}

impl GenerateOptions {
    /// Create options writing SVG files only
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            #[cfg(feature = "raster")]
            formats: vec![],
        }
    }

    /// Also emit the given bitmap formats per banner
    #[cfg(feature = "raster")]
    pub fn with_formats(mut self, formats: Vec<RasterFormat>) -> Self {
        self.formats = formats;
        self
    }
}

/// Outcome of a generation run
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Names of entries whose SVG was rendered and written, in run order
    pub rendered: Vec<String>,
    /// Every file written, including raster outputs and the index
    pub written: Vec<PathBuf>,
    /// Per-entry failures; the run continued past each of these
    pub failed: Vec<EntryError>,
}

impl RunSummary {
    /// True when every entry rendered cleanly
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Render every configured banner into the output directory
///
/// Writes `<name>.svg` per entry (plus raster formats when requested) and an
/// `index.html` listing every rendered banner. Returns the run summary; per
/// entry failures live in [`RunSummary::failed`].
pub fn generate(
    config: &BannerConfig,
    options: &GenerateOptions,
    render_config: &RenderConfig,
) -> Result<RunSummary, ConfigError> {
    fs::create_dir_all(&options.out_dir).map_err(|source| ConfigError::CreateDir {
        path: options.out_dir.clone(),
        source,
    })?;

    #[cfg(feature = "raster")]
    let rasterizer = if options.formats.is_empty() {
        None
    } else {
        Some(ResvgRasterizer::new())
    };

    let mut summary = RunSummary::default();

    for (name, spec) in config.iter() {
        let svg = match render_entry(name, spec, render_config) {
            Ok(svg) => svg,
            Err(err) => {
                warn!("{}", err);
                summary.failed.push(err);
                continue;
            }
        };

        let svg_path = options.out_dir.join(format!("{}.svg", name));
        if let Err(err) = write_output(name, &svg_path, svg.as_bytes()) {
            warn!("{}", err);
            summary.failed.push(err);
            continue;
        }
        info!("wrote {}", svg_path.display());
        summary.written.push(svg_path);
        // The SVG exists, so the entry is listed in the index even if a
        // raster format fails afterwards.
        summary.rendered.push(name.to_string());

        #[cfg(feature = "raster")]
        if let Some(rasterizer) = rasterizer.as_ref() {
            if let Err(err) = rasterize_entry(name, &svg, rasterizer, options, &mut summary) {
                warn!("{}", err);
                summary.failed.push(err);
            }
        }
    }

    let index_path = options.out_dir.join("index.html");
    let index = renderer::render_index(&summary.rendered);
    fs::write(&index_path, index).map_err(|source| ConfigError::WriteIndex {
        path: index_path.clone(),
        source,
    })?;
    summary.written.push(index_path);

    Ok(summary)
}

/// Resolve the style and render the SVG for one entry
fn render_entry(
    name: &str,
    spec: &BannerSpec,
    render_config: &RenderConfig,
) -> Result<String, EntryError> {
    let style = ResolvedStyle::resolve(spec).map_err(|source| EntryError::Style {
        name: name.to_string(),
        source,
    })?;
    Ok(renderer::render_svg(
        &style,
        &render_config.layout,
        &render_config.svg,
    ))
}

/// Encode and write every requested bitmap format for one entry
#[cfg(feature = "raster")]
fn rasterize_entry(
    name: &str,
    svg: &str,
    rasterizer: &ResvgRasterizer,
    options: &GenerateOptions,
    summary: &mut RunSummary,
) -> Result<(), EntryError> {
    for format in &options.formats {
        let bytes = rasterizer
            .rasterize(svg, *format)
            .map_err(|source| EntryError::Raster {
                name: name.to_string(),
                source,
            })?;
        let path = options
            .out_dir
            .join(format!("{}.{}", name, format.extension()));
        write_output(name, &path, &bytes)?;
        info!("wrote {}", path.display());
        summary.written.push(path);
    }
    Ok(())
}

fn write_output(name: &str, path: &Path, bytes: &[u8]) -> Result<(), EntryError> {
    fs::write(path, bytes).map_err(|source| EntryError::Write {
        name: name.to_string(),
        path: path.to_path_buf(),
        source,
    })
}
