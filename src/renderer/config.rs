//! Configuration for SVG rendering

/// Configuration options for SVG output
#[derive(Debug, Clone)]
pub struct SvgConfig {
    /// Whether to include the XML declaration
    pub standalone: bool,

    /// Whether to format output with indentation
    pub pretty_print: bool,

    /// Font family applied to all text via an embedded style block
    pub font_family: String,

    /// Optional stylesheet import URL for the font family
    pub font_import_url: Option<String>,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            standalone: true,
            pretty_print: true,
            font_family: "'Noto Sans JP', sans-serif".to_string(),
            font_import_url: Some(
                "https://fonts.googleapis.com/css2?family=Noto+Sans+JP&display=swap".to_string(),
            ),
        }
    }
}

impl SvgConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether output includes the XML declaration
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    /// Set whether to pretty-print output
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    /// Set the font family
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    /// Remove the font stylesheet import
    pub fn without_font_import(mut self) -> Self {
        self.font_import_url = None;
        self
    }
}
