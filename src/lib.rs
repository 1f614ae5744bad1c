//! bannergen - render named text banners from a JSON configuration to SVG
//!
//! This library provides a style resolver, layout engine, and renderer for a
//! small declarative banner format, plus a whole-run generator that writes one
//! SVG file per configured banner (optionally rasterized to PNG/JPEG) and an
//! HTML index page.
//!
//! # Example
//!
//! ```rust
//! use bannergen::{render_banner, BannerSpec};
//!
//! let spec: BannerSpec = serde_json::from_str(r##"{
//!     "text": "Hello",
//!     "font_size": "20px",
//!     "color": "#FF0000"
//! }"##).unwrap();
//!
//! let svg = render_banner(&spec).unwrap();
//! assert!(svg.contains("<svg"));
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod layout;
pub mod renderer;
pub mod style;

pub use config::{BannerConfig, BannerSpec, CtaSpec};
pub use error::{ConfigError, EntryError};
pub use generator::{generate, GenerateOptions, RunSummary};
pub use layout::LayoutConfig;
#[cfg(feature = "raster")]
pub use renderer::{RasterFormat, Rasterizer, ResvgRasterizer};
pub use renderer::SvgConfig;
pub use style::{ResolvedStyle, StyleError};

/// Configuration for the complete render pipeline
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// Layout constants
    pub layout: LayoutConfig,
    /// SVG output configuration
    pub svg: SvgConfig,
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the layout configuration
    pub fn with_layout(mut self, config: LayoutConfig) -> Self {
        self.layout = config;
        self
    }

    /// Set the SVG configuration
    pub fn with_svg(mut self, config: SvgConfig) -> Self {
        self.svg = config;
        self
    }
}

/// Render one banner spec to SVG with default configuration
///
/// This is the main library entry point: it resolves the spec's style fields
/// to typed values, computes the layout, and assembles the document. The
/// function is pure; rendering the same spec twice yields identical markup.
pub fn render_banner(spec: &BannerSpec) -> Result<String, StyleError> {
    render_banner_with_config(spec, &RenderConfig::default())
}

/// Render one banner spec to SVG with custom configuration
///
/// # Example
///
/// ```rust
/// use bannergen::{render_banner_with_config, BannerSpec, RenderConfig, SvgConfig};
///
/// let spec: BannerSpec = serde_json::from_str(r##"{
///     "text": "Hi",
///     "font_size": "16px",
///     "color": "#224466"
/// }"##).unwrap();
///
/// let config = RenderConfig::new().with_svg(SvgConfig::default().with_pretty_print(false));
/// let svg = render_banner_with_config(&spec, &config).unwrap();
/// assert!(svg.contains("<svg"));
/// ```
pub fn render_banner_with_config(
    spec: &BannerSpec,
    config: &RenderConfig,
) -> Result<String, StyleError> {
    let style = ResolvedStyle::resolve(spec)?;
    Ok(renderer::render_svg(&style, &config.layout, &config.svg))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(json: &str) -> BannerSpec {
        serde_json::from_str(json).expect("Should parse spec")
    }

    #[test]
    fn test_render_single_line_banner() {
        let svg = render_banner(&spec(
            r##"{"text": "Hello", "font_size": "20px", "color": "#FF0000"}"##,
        ))
        .unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("</svg>"));
        assert!(svg.contains("Hello"));
        assert!(svg.contains(r##"fill="#FF0000""##));
        // A single short line sits on the height floor.
        assert!(svg.contains(r#"height="100""#));
    }

    #[test]
    fn test_render_multiline_banner() {
        let svg = render_banner(&spec(
            r##"{"text": "a\nb\nc", "font_size": "30px", "color": "navy"}"##,
        ))
        .unwrap();
        assert_eq!(svg.matches("<tspan").count(), 3);
    }

    #[test]
    fn test_render_invalid_font_size_is_error() {
        let result = render_banner(&spec(
            r##"{"text": "x", "font_size": "abc", "color": "red"}"##,
        ));
        assert!(matches!(result, Err(StyleError::InvalidLength { .. })));
    }

    #[test]
    fn test_render_with_compact_config() {
        let config = RenderConfig::new().with_svg(
            SvgConfig::default()
                .with_pretty_print(false)
                .with_standalone(false),
        );
        let svg = render_banner_with_config(
            &spec(r##"{"text": "x", "font_size": "16px", "color": "red"}"##),
            &config,
        )
        .unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(!svg.contains('\n'));
    }
}
