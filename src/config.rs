//! JSON configuration model
//!
//! The configuration is a single JSON object mapping banner names to
//! [`BannerSpec`] records. The name is used verbatim as the output file stem.
//! Optional style fields keep their raw string form here; typed resolution
//! happens once per entry in [`crate::style`].

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

/// One named entry in the configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct BannerSpec {
    /// Banner text; literal newlines are explicit line breaks
    pub text: String,
    /// Font size with pixel suffix, e.g. `"32px"`
    pub font_size: String,
    /// Fallback background color when `background_color` is absent
    pub color: String,
    /// Rectangle fill, overrides `color`
    #[serde(default)]
    pub background_color: Option<String>,
    /// Glyph fill, defaults to black
    #[serde(default)]
    pub text_color: Option<String>,
    /// CSS font-weight keyword or numeric string
    #[serde(default)]
    pub font_weight: Option<String>,
    /// `left` (default) or `center`
    #[serde(default)]
    pub text_align: Option<String>,
    /// `top` (default) or `middle`
    #[serde(default)]
    pub vertical_align: Option<String>,
    /// CSS-shorthand-like padding string, e.g. `"10"` or `"10 0 20"`
    #[serde(default)]
    pub padding: Option<String>,
    /// Corner radius in pixels
    #[serde(default)]
    pub border_radius: Option<String>,
    /// Optional call-to-action block rendered below the text
    #[serde(default)]
    pub banner: Option<CtaSpec>,
}

/// Call-to-action sub-block: a linked rectangle with a centered label
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CtaSpec {
    /// Hyperlink target
    pub link: String,
    /// Rectangle fill
    #[serde(default)]
    pub color: Option<String>,
    /// Label fill
    #[serde(default)]
    pub text_color: Option<String>,
    /// Label text
    #[serde(default)]
    pub text: Option<String>,
}

/// The full configuration: banner name -> spec, in deterministic order
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(transparent)]
pub struct BannerConfig {
    pub banners: BTreeMap<String, BannerSpec>,
}

impl BannerConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse configuration from a JSON string
    pub fn from_str(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Number of configured banners
    pub fn len(&self) -> usize {
        self.banners.len()
    }

    /// True when no banners are configured
    pub fn is_empty(&self) -> bool {
        self.banners.is_empty()
    }

    /// Iterate entries in name order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &BannerSpec)> {
        self.banners.iter()
    }
}
