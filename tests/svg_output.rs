//! Document-level assertions on rendered SVG output

use pretty_assertions::assert_eq;

use bannergen::{render_banner, render_banner_with_config, BannerSpec, RenderConfig, SvgConfig};

fn spec(json: &str) -> BannerSpec {
    serde_json::from_str(json).expect("Should parse spec")
}

#[test]
fn minimal_banner_matches_expected_document_shape() {
    let svg = render_banner(&spec(
        r##"{"text": "Hello", "font_size": "20px", "color": "#FF0000"}"##,
    ))
    .unwrap();

    assert!(svg.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(svg.contains(r#"<svg width="800" height="100" viewBox="0 0 800 100" xmlns="http://www.w3.org/2000/svg">"#));
    assert!(svg.contains(r##"<rect width="800" height="100" fill="#FF0000"/>"##));
    assert!(svg.contains(r#"font-size="20px""#));
    assert!(svg.contains(r#"font-weight="normal""#));
    assert!(svg.contains(r#"fill="black""#));
    // Left-aligned, top-aligned single line: zero inset, zero first offset.
    assert!(svg.contains(r#"<tspan x="0" dy="0" text-anchor="start">Hello</tspan>"#));
    assert!(svg.trim_end().ends_with("</svg>"));
}

#[test]
fn centered_three_line_banner() {
    let svg = render_banner(&spec(
        r##"{
            "text": "Line1\nLine2\nLine3",
            "font_size": "30px",
            "color": "#333333",
            "text_align": "center",
            "vertical_align": "middle"
        }"##,
    ))
    .unwrap();

    // 30px font: line height 36; three centered lines spaced 36 apart.
    assert!(svg.contains(r#"<tspan x="400" dy="-36" text-anchor="middle">Line1</tspan>"#));
    assert!(svg.contains(r#"<tspan x="400" dy="36" text-anchor="middle">Line2</tspan>"#));
    assert!(svg.contains(r#"<tspan x="400" dy="36" text-anchor="middle">Line3</tspan>"#));
}

#[test]
fn rendering_twice_is_byte_identical() {
    let spec = spec(
        r##"{
            "text": "a\nb",
            "font_size": "24px",
            "color": "teal",
            "padding": "10 0 30",
            "border_radius": "6"
        }"##,
    );
    assert_eq!(render_banner(&spec).unwrap(), render_banner(&spec).unwrap());
}

#[test]
fn padding_grows_canvas_and_insets_text() {
    let without = render_banner(&spec(
        r##"{"text": "a\nb\nc\nd", "font_size": "30px", "color": "red"}"##,
    ))
    .unwrap();
    let with = render_banner(&spec(
        r##"{"text": "a\nb\nc\nd", "font_size": "30px", "color": "red", "padding": "20 0 40"}"##,
    ))
    .unwrap();

    // 30 + 144 + 40 = 214 without padding, plus 60 with it.
    assert!(without.contains(r#"height="214""#));
    assert!(with.contains(r#"height="274""#));
    assert!(with.contains(r#"<tspan x="20""#));
}

#[test]
fn cta_banner_is_linked_and_positioned_from_top_aligned_text() {
    let svg = render_banner(&spec(
        r##"{
            "text": "Join us",
            "font_size": "40px",
            "color": "#000080",
            "vertical_align": "middle",
            "banner": {"link": "https://example.com/join", "text": "Join now"}
        }"##,
    ))
    .unwrap();

    assert!(svg.contains(r#"<a href="https://example.com/join">"#));
    // Text bottom under top alignment: 30 + 48; CTA rect 20 below that.
    assert!(svg.contains(r#"<rect x="50" y="98" width="700" height="50" rx="10" ry="10""#));
    assert!(svg.contains(">Join now</text>"));
    assert!(svg.contains(r#"fill="white""#));
}

#[test]
fn font_style_block_is_embedded() {
    let svg = render_banner(&spec(
        r##"{"text": "x", "font_size": "16px", "color": "red"}"##,
    ))
    .unwrap();
    assert!(svg.contains("<defs>"));
    assert!(svg.contains("font-family: 'Noto Sans JP', sans-serif"));
    assert!(svg.contains("fonts.googleapis.com"));
}

#[test]
fn compact_rendering_strips_whitespace_only() {
    let spec = spec(r##"{"text": "x\ny", "font_size": "16px", "color": "red"}"##);
    let pretty = render_banner(&spec).unwrap();
    let compact = render_banner_with_config(
        &spec,
        &RenderConfig::new().with_svg(SvgConfig::default().with_pretty_print(false)),
    )
    .unwrap();

    assert!(pretty.contains('\n'));
    let mut squashed = String::new();
    for line in pretty.lines() {
        squashed.push_str(line.trim_start());
    }
    assert_eq!(squashed, compact);
}
