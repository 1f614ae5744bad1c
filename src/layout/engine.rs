//! Canvas sizing and text positioning
//!
//! The engine is a pure function of the resolved style: split lines, derive the
//! canvas height from line count and padding, then position each line so that
//! consecutive baselines are exactly one line height apart. Only the first
//! line's offset changes between alignment modes.

use crate::style::{Padding, TextAlign, VerticalAlign};

use super::config::LayoutConfig;
use super::types::{LineMetrics, PositionedLine, TextAnchor, TextBlock};

/// Split text on literal newlines and derive line spacing
///
/// Empty lines are kept; each still consumes one line height.
pub fn line_metrics(text: &str, font_size: u32, config: &LayoutConfig) -> LineMetrics {
    LineMetrics {
        lines: text.split('\n').map(str::to_string).collect(),
        line_height: f64::from(font_size) * config.line_height_factor,
    }
}

/// Compute the canvas height for a text block
///
/// Margins, padding, and the optional CTA reservation are added to the block
/// height, then the result is ceiled to an integer and clamped to the floor.
pub fn canvas_height(
    metrics: &LineMetrics,
    padding: Padding,
    has_cta: bool,
    config: &LayoutConfig,
) -> u32 {
    let mut height = config.top_margin
        + metrics.block_height()
        + config.bottom_margin
        + f64::from(padding.vertical());
    if has_cta {
        height += config.cta_extra_height;
    }

    (height.ceil() as u32).max(config.min_height)
}

/// Position every line of the block on the canvas
///
/// Horizontal: centered text anchors at the canvas midpoint; anything else
/// starts at the left inset taken from the top padding token. Vertical: a
/// top-aligned block hangs from the top margin; a middle-aligned block is
/// centered by shifting only the first line's offset relative to the canvas
/// midpoint. Every subsequent line advances by exactly one line height.
pub fn position_text(
    metrics: &LineMetrics,
    align: TextAlign,
    valign: VerticalAlign,
    padding: Padding,
    canvas_height: u32,
    config: &LayoutConfig,
) -> TextBlock {
    let (x, anchor) = match align {
        TextAlign::Center => (config.center_x(), TextAnchor::Middle),
        TextAlign::Left => (f64::from(padding.top), TextAnchor::Start),
    };

    let (origin_y, first_dy) = match valign {
        VerticalAlign::Top => (config.top_margin + f64::from(padding.top), 0.0),
        VerticalAlign::Middle => (
            f64::from(canvas_height) / 2.0,
            -(metrics.block_height() / 2.0) + metrics.line_height / 2.0,
        ),
    };

    let lines = metrics
        .lines
        .iter()
        .enumerate()
        .map(|(index, text)| PositionedLine {
            text: text.clone(),
            x,
            dy: if index == 0 {
                first_dy
            } else {
                metrics.line_height
            },
            anchor,
        })
        .collect();

    TextBlock { origin_y, lines }
}

/// Bottom y of the text block under top alignment
///
/// The CTA rectangle always hangs below this point, even when the text itself
/// is middle-aligned.
pub fn top_aligned_text_bottom(metrics: &LineMetrics, config: &LayoutConfig) -> f64 {
    config.top_margin + metrics.block_height()
}
