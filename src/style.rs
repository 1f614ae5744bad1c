//! Per-entry style resolution
//!
//! The configuration carries style fields as raw strings (`"32px"`, `"10 5"`).
//! This module maps each optional field to a concrete typed value in one pass,
//! using the documented defaults, before any layout math runs. Malformed numeric
//! strings fail with a [`StyleError`] instead of coercing to zero.

use thiserror::Error;

use crate::config::{BannerSpec, CtaSpec};

/// Errors produced while resolving raw style strings to typed values
#[derive(Debug, Error, PartialEq)]
pub enum StyleError {
    /// A pixel length field did not parse to a positive integer
    #[error("invalid length in '{field}': '{value}'")]
    InvalidLength { field: String, value: String },

    /// A padding token did not parse to a non-negative integer
    #[error("invalid padding token '{token}' in '{value}'")]
    InvalidPadding { token: String, value: String },
}

impl StyleError {
    pub fn invalid_length(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidLength {
            field: field.into(),
            value: value.into(),
        }
    }
}

/// Horizontal text alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
}

/// Vertical block alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerticalAlign {
    #[default]
    Top,
    Middle,
}

/// Vertical padding parsed from the CSS-like shorthand string
///
/// The first token is the top padding; the third token, when present, is the
/// bottom padding, otherwise bottom mirrors top. The top token also serves as
/// the left inset for left-aligned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Padding {
    pub top: u32,
    pub bottom: u32,
}

impl Padding {
    /// Parse a whitespace-separated shorthand like `"10"` or `"10 0 20"`
    pub fn parse(value: &str) -> Result<Self, StyleError> {
        let tokens: Vec<&str> = value.split_whitespace().collect();
        if tokens.is_empty() {
            return Ok(Self::default());
        }

        let parse_token = |token: &str| {
            token.parse::<u32>().map_err(|_| StyleError::InvalidPadding {
                token: token.to_string(),
                value: value.to_string(),
            })
        };

        let top = parse_token(tokens[0])?;
        let bottom = match tokens.get(2) {
            Some(token) => parse_token(token)?,
            None => top,
        };
        // Remaining tokens must still be numeric even though only the
        // vertical components are used.
        for token in tokens.iter().skip(1).take(2) {
            parse_token(token)?;
        }

        Ok(Self { top, bottom })
    }

    /// Combined vertical padding
    pub fn vertical(&self) -> u32 {
        self.top + self.bottom
    }
}

/// Resolved CTA styling with defaults applied
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedCta {
    pub link: String,
    pub color: String,
    pub text_color: String,
    pub text: String,
}

impl ResolvedCta {
    fn from_spec(spec: &CtaSpec) -> Self {
        Self {
            link: spec.link.clone(),
            color: spec.color.clone().unwrap_or_else(|| "#2196f3".to_string()),
            text_color: spec
                .text_color
                .clone()
                .unwrap_or_else(|| "white".to_string()),
            text: spec.text.clone().unwrap_or_else(|| "Learn more".to_string()),
        }
    }
}

/// Fully typed style record ready for layout and rendering
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedStyle {
    pub text: String,
    pub font_size: u32,
    pub background_color: String,
    pub text_color: String,
    pub font_weight: String,
    pub text_align: TextAlign,
    pub vertical_align: VerticalAlign,
    pub padding: Padding,
    pub border_radius: u32,
    pub cta: Option<ResolvedCta>,
}

impl ResolvedStyle {
    /// Resolve a raw [`BannerSpec`] into typed values
    ///
    /// Defaults: `text_color` black, `font_weight` normal, `text_align` left,
    /// `vertical_align` top, `padding` 0, `border_radius` 0. The background is
    /// `background_color` when present, else `color`.
    pub fn resolve(spec: &BannerSpec) -> Result<Self, StyleError> {
        let font_size = parse_px("font_size", &spec.font_size)?;

        let padding = match &spec.padding {
            Some(value) => Padding::parse(value)?,
            None => Padding::default(),
        };

        let border_radius = match &spec.border_radius {
            Some(value) => value
                .trim()
                .parse::<u32>()
                .map_err(|_| StyleError::invalid_length("border_radius", value))?,
            None => 0,
        };

        let text_align = match spec.text_align.as_deref() {
            Some("center") => TextAlign::Center,
            _ => TextAlign::Left,
        };
        let vertical_align = match spec.vertical_align.as_deref() {
            Some("middle") => VerticalAlign::Middle,
            _ => VerticalAlign::Top,
        };

        Ok(Self {
            text: spec.text.clone(),
            font_size,
            background_color: spec
                .background_color
                .clone()
                .unwrap_or_else(|| spec.color.clone()),
            text_color: spec
                .text_color
                .clone()
                .unwrap_or_else(|| "black".to_string()),
            font_weight: spec
                .font_weight
                .clone()
                .unwrap_or_else(|| "normal".to_string()),
            text_align,
            vertical_align,
            padding,
            border_radius,
            cta: spec.banner.as_ref().map(ResolvedCta::from_spec),
        })
    }
}

/// Parse a length like `"32px"` (or bare `"32"`) to a positive integer
fn parse_px(field: &str, value: &str) -> Result<u32, StyleError> {
    let digits = value.trim().trim_end_matches("px");
    match digits.parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(StyleError::invalid_length(field, value)),
    }
}
