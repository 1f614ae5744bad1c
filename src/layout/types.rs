//! Core types for the layout engine

/// Text anchor for a positioned line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
}

impl TextAnchor {
    /// The SVG `text-anchor` attribute value
    pub fn as_svg(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
        }
    }
}

/// Line splitting and spacing metrics for a text block
#[derive(Debug, Clone, PartialEq)]
pub struct LineMetrics {
    /// Lines in document order; empty lines are kept and consume height
    pub lines: Vec<String>,
    /// Baseline-to-baseline distance
    pub line_height: f64,
}

impl LineMetrics {
    /// Number of lines, counting empty ones
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Total height of the text block
    pub fn block_height(&self) -> f64 {
        self.lines.len() as f64 * self.line_height
    }
}

/// One line positioned for emission as a `<tspan>`
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedLine {
    pub text: String,
    pub x: f64,
    /// Offset from the previous baseline; the first line's offset is relative
    /// to the block's reference y
    pub dy: f64,
    pub anchor: TextAnchor,
}

/// A fully positioned multi-line text block
#[derive(Debug, Clone, PartialEq)]
pub struct TextBlock {
    /// Reference y of the enclosing `<text>` element
    pub origin_y: f64,
    pub lines: Vec<PositionedLine>,
}
