//! Configuration for the layout engine

/// Layout constants for canvas sizing and text placement
///
/// Heights are intentionally generous: margins guarantee no line is clipped
/// rather than fitting the text tightly.
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Fixed canvas width in logical units
    pub canvas_width: u32,

    /// Line height as a multiple of the font size
    pub line_height_factor: f64,

    /// Breathing room above the text block
    pub top_margin: f64,

    /// Breathing room below the text block
    pub bottom_margin: f64,

    /// Canvas height never drops below this floor
    pub min_height: u32,

    /// Extra canvas height reserved when a CTA block is present
    pub cta_extra_height: f64,

    /// Height of the CTA rectangle
    pub cta_height: f64,

    /// Gap between the text bottom and the CTA rectangle
    pub cta_gap: f64,

    /// Corner radius of the CTA rectangle
    pub cta_radius: f64,

    /// Horizontal inset of the CTA rectangle from both canvas edges
    pub cta_inset_x: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            canvas_width: 800,
            line_height_factor: 1.2,
            top_margin: 30.0,
            bottom_margin: 40.0,
            min_height: 100,
            cta_extra_height: 60.0,
            cta_height: 50.0,
            cta_gap: 20.0,
            cta_radius: 10.0,
            cta_inset_x: 50.0,
        }
    }
}

impl LayoutConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the canvas width
    pub fn with_canvas_width(mut self, width: u32) -> Self {
        self.canvas_width = width;
        self
    }

    /// Set the minimum canvas height
    pub fn with_min_height(mut self, height: u32) -> Self {
        self.min_height = height;
        self
    }

    /// Set the top margin
    pub fn with_top_margin(mut self, margin: f64) -> Self {
        self.top_margin = margin;
        self
    }

    /// Set the bottom margin
    pub fn with_bottom_margin(mut self, margin: f64) -> Self {
        self.bottom_margin = margin;
        self
    }

    /// Horizontal center of the canvas
    pub fn center_x(&self) -> f64 {
        f64::from(self.canvas_width) / 2.0
    }

    /// Width of the CTA rectangle
    pub fn cta_width(&self) -> f64 {
        f64::from(self.canvas_width) - 2.0 * self.cta_inset_x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LayoutConfig::default();
        assert_eq!(config.canvas_width, 800);
        assert_eq!(config.line_height_factor, 1.2);
        assert_eq!(config.min_height, 100);
        assert_eq!(config.center_x(), 400.0);
        assert_eq!(config.cta_width(), 700.0);
    }

    #[test]
    fn test_builder_pattern() {
        let config = LayoutConfig::new()
            .with_canvas_width(600)
            .with_min_height(150)
            .with_top_margin(20.0);

        assert_eq!(config.canvas_width, 600);
        assert_eq!(config.min_height, 150);
        assert_eq!(config.top_margin, 20.0);
        assert_eq!(config.center_x(), 300.0);
    }
}
