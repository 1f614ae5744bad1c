//! SVG generation from layout results

use crate::layout::{self, LayoutConfig, TextBlock};
use crate::style::ResolvedCta;

use super::SvgConfig;

/// Build SVG elements incrementally
pub struct SvgBuilder {
    config: SvgConfig,
    width: u32,
    height: u32,
    defs: Vec<String>,
    elements: Vec<String>,
}

impl SvgBuilder {
    /// Create a builder for a canvas of the given size
    pub fn new(config: SvgConfig, width: u32, height: u32) -> Self {
        Self {
            config,
            width,
            height,
            defs: vec![],
            elements: vec![],
        }
    }

    fn indent_str(&self) -> &str {
        if self.config.pretty_print {
            "  "
        } else {
            ""
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    /// Add the embedded style block carrying the font family
    pub fn add_font_style(&mut self) {
        let import = self
            .config
            .font_import_url
            .as_ref()
            .map(|url| format!("@import url('{}'); ", url))
            .unwrap_or_default();
        self.defs.push(format!(
            "<style type=\"text/css\">{}text {{ font-family: {}; }}</style>",
            import, self.config.font_family
        ));
    }

    /// Add the full-canvas background rectangle
    pub fn add_background(&mut self, fill: &str, radius: u32) {
        let radius_attrs = if radius > 0 {
            format!(r#" rx="{}" ry="{}""#, radius, radius)
        } else {
            String::new()
        };
        self.elements.push(format!(
            r#"{}<rect width="{}" height="{}"{} fill="{}"/>"#,
            self.indent_str(),
            self.width,
            self.height,
            radius_attrs,
            fill
        ));
    }

    /// Add the positioned multi-line text block
    pub fn add_text_block(
        &mut self,
        block: &TextBlock,
        font_size: u32,
        font_weight: &str,
        fill: &str,
    ) {
        let mut spans = String::new();
        for line in &block.lines {
            spans.push_str(&format!(
                r#"<tspan x="{}" dy="{}" text-anchor="{}">{}</tspan>"#,
                line.x,
                line.dy,
                line.anchor.as_svg(),
                escape_xml(&line.text)
            ));
        }
        self.elements.push(format!(
            r#"{}<text y="{}" font-size="{}px" font-weight="{}" fill="{}">{}</text>"#,
            self.indent_str(),
            block.origin_y,
            font_size,
            font_weight,
            fill,
            spans
        ));
    }

    /// Add the call-to-action block: a linked rounded rectangle with a label
    ///
    /// The rectangle hangs from `text_bottom`, which is always the top-aligned
    /// text bottom regardless of the block's vertical alignment.
    pub fn add_cta(&mut self, cta: &ResolvedCta, text_bottom: f64, layout: &LayoutConfig) {
        let indent = self.indent_str().to_string();
        let nl = self.newline().to_string();
        let rect_y = text_bottom + layout.cta_gap;
        let label_y = rect_y + layout.cta_height / 2.0;

        self.elements.push(format!(
            r#"{indent}<a href="{link}">{nl}{indent}{indent}<rect x="{x}" y="{y}" width="{w}" height="{h}" rx="{r}" ry="{r}" fill="{fill}"/>{nl}{indent}{indent}<text x="{cx}" y="{cy}" text-anchor="middle" dominant-baseline="middle" font-size="20px" fill="{text_fill}">{label}</text>{nl}{indent}</a>"#,
            indent = indent,
            nl = nl,
            link = escape_xml(&cta.link),
            x = layout.cta_inset_x,
            y = rect_y,
            w = layout.cta_width(),
            h = layout.cta_height,
            r = layout.cta_radius,
            fill = cta.color,
            cx = layout.center_x(),
            cy = label_y,
            text_fill = cta.text_color,
            label = escape_xml(&cta.text)
        ));
    }

    /// Build the final SVG string
    pub fn build(self) -> String {
        let nl = self.newline();
        let mut svg = String::new();

        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        svg.push_str(&format!(
            r#"<svg width="{w}" height="{h}" viewBox="0 0 {w} {h}" xmlns="http://www.w3.org/2000/svg">"#,
            w = self.width,
            h = self.height
        ));
        svg.push_str(nl);

        if !self.defs.is_empty() {
            svg.push_str(self.indent_str());
            svg.push_str("<defs>");
            svg.push_str(nl);
            for def in &self.defs {
                svg.push_str(self.indent_str());
                svg.push_str(self.indent_str());
                svg.push_str(def);
                svg.push_str(nl);
            }
            svg.push_str(self.indent_str());
            svg.push_str("</defs>");
            svg.push_str(nl);
        }

        for elem in &self.elements {
            svg.push_str(elem);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");
        svg
    }
}

/// Render one resolved banner style to an SVG document string
pub fn render_svg(
    style: &crate::style::ResolvedStyle,
    layout_config: &LayoutConfig,
    svg_config: &SvgConfig,
) -> String {
    let metrics = layout::line_metrics(&style.text, style.font_size, layout_config);
    let height = layout::canvas_height(
        &metrics,
        style.padding,
        style.cta.is_some(),
        layout_config,
    );
    let block = layout::position_text(
        &metrics,
        style.text_align,
        style.vertical_align,
        style.padding,
        height,
        layout_config,
    );

    let mut builder = SvgBuilder::new(svg_config.clone(), layout_config.canvas_width, height);
    builder.add_font_style();
    builder.add_background(&style.background_color, style.border_radius);
    builder.add_text_block(&block, style.font_size, &style.font_weight, &style.text_color);

    if let Some(cta) = &style.cta {
        let text_bottom = layout::top_aligned_text_bottom(&metrics, layout_config);
        builder.add_cta(cta, text_bottom, layout_config);
    }

    builder.build()
}

/// Escape special XML characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
