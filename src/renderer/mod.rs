//! Output rendering: SVG documents, the HTML index, and optional raster sinks

pub mod config;
pub mod html;
#[cfg(feature = "raster")]
pub mod raster;
pub mod svg;

pub use config::SvgConfig;
pub use html::render_index;
#[cfg(feature = "raster")]
pub use raster::{RasterError, RasterFormat, Rasterizer, ResvgRasterizer};
pub use svg::render_svg;
