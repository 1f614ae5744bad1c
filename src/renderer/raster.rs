//! Optional raster output sink
//!
//! Rasterization is a pluggable capability behind the [`Rasterizer`] trait so
//! the layout engine stays independent of any bitmap pipeline. The default
//! implementation parses the SVG with `usvg`, renders through `resvg` into a
//! `tiny_skia` pixmap, and encodes PNG directly or JPEG via the `image` crate.

use std::io::Cursor;
use std::sync::Arc;

use resvg::{tiny_skia, usvg};
use thiserror::Error;

/// Bitmap output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RasterFormat {
    Png,
    Jpeg,
}

impl RasterFormat {
    /// File extension for the format
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpg",
        }
    }
}

/// Errors produced while rasterizing an SVG document
#[derive(Debug, Error)]
pub enum RasterError {
    /// The SVG markup could not be parsed
    #[error("failed to parse SVG: {0}")]
    Parse(#[from] usvg::Error),

    /// The document has a zero-sized canvas
    #[error("cannot rasterize a zero-sized canvas")]
    ZeroCanvas,

    /// Bitmap encoding failed
    #[error("failed to encode {format}: {message}")]
    Encode { format: &'static str, message: String },
}

/// Capability interface: SVG text in, encoded bitmap bytes out
pub trait Rasterizer {
    fn rasterize(&self, svg: &str, format: RasterFormat) -> Result<Vec<u8>, RasterError>;
}

/// Default rasterizer backed by resvg with system fonts
pub struct ResvgRasterizer {
    fontdb: Arc<usvg::fontdb::Database>,
}

impl ResvgRasterizer {
    /// Create a rasterizer, loading system fonts once
    pub fn new() -> Self {
        let mut fontdb = usvg::fontdb::Database::new();
        fontdb.load_system_fonts();
        Self {
            fontdb: Arc::new(fontdb),
        }
    }

    fn render_pixmap(&self, svg: &str) -> Result<tiny_skia::Pixmap, RasterError> {
        let options = usvg::Options {
            fontdb: self.fontdb.clone(),
            ..usvg::Options::default()
        };
        let tree = usvg::Tree::from_str(svg, &options)?;

        let size = tree.size().to_int_size();
        let mut pixmap =
            tiny_skia::Pixmap::new(size.width(), size.height()).ok_or(RasterError::ZeroCanvas)?;
        resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());
        Ok(pixmap)
    }
}

impl Default for ResvgRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Rasterizer for ResvgRasterizer {
    fn rasterize(&self, svg: &str, format: RasterFormat) -> Result<Vec<u8>, RasterError> {
        let pixmap = self.render_pixmap(svg)?;

        match format {
            RasterFormat::Png => pixmap.encode_png().map_err(|e| RasterError::Encode {
                format: "PNG",
                message: e.to_string(),
            }),
            RasterFormat::Jpeg => encode_jpeg(&pixmap),
        }
    }
}

/// Encode a pixmap as JPEG, dropping alpha onto the opaque background
fn encode_jpeg(pixmap: &tiny_skia::Pixmap) -> Result<Vec<u8>, RasterError> {
    let mut rgba = image::RgbaImage::new(pixmap.width(), pixmap.height());
    for (pixel, out) in pixmap.pixels().iter().zip(rgba.pixels_mut()) {
        let c = pixel.demultiply();
        *out = image::Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
    }

    let rgb = image::DynamicImage::ImageRgba8(rgba).to_rgb8();
    let mut bytes = Vec::new();
    rgb.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Jpeg)
        .map_err(|e| RasterError::Encode {
            format: "JPEG",
            message: e.to_string(),
        })?;
    Ok(bytes)
}
