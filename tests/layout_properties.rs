//! Property-style tests for the layout engine
//!
//! These pin the documented layout contracts: fixed line-height multiplier,
//! uniform line spacing across alignment modes, monotone canvas growth, and
//! the height floor.

use bannergen::layout::{self, LayoutConfig, TextAnchor};
use bannergen::style::{Padding, TextAlign, VerticalAlign};

#[test]
fn line_height_is_fixed_multiple_of_font_size() {
    let cfg = LayoutConfig::default();
    for font_size in [10, 16, 20, 30, 48] {
        let metrics = layout::line_metrics("a\nb", font_size, &cfg);
        assert_eq!(metrics.line_height, f64::from(font_size) * 1.2);
    }
}

#[test]
fn consecutive_lines_are_one_line_height_apart_in_both_modes() {
    let cfg = LayoutConfig::default();
    let metrics = layout::line_metrics("one\ntwo\nthree\nfour\nfive", 20, &cfg);
    let height = layout::canvas_height(&metrics, Padding::default(), false, &cfg);

    for valign in [VerticalAlign::Top, VerticalAlign::Middle] {
        let block = layout::position_text(
            &metrics,
            TextAlign::Left,
            valign,
            Padding::default(),
            height,
            &cfg,
        );
        assert_eq!(block.lines.len(), 5);
        for line in &block.lines[1..] {
            assert_eq!(line.dy, metrics.line_height);
        }
    }
}

#[test]
fn only_the_first_line_offset_differs_between_modes() {
    let cfg = LayoutConfig::default();
    let metrics = layout::line_metrics("a\nb\nc", 30, &cfg);
    let height = layout::canvas_height(&metrics, Padding::default(), false, &cfg);

    let top = layout::position_text(
        &metrics,
        TextAlign::Left,
        VerticalAlign::Top,
        Padding::default(),
        height,
        &cfg,
    );
    let middle = layout::position_text(
        &metrics,
        TextAlign::Left,
        VerticalAlign::Middle,
        Padding::default(),
        height,
        &cfg,
    );

    assert_eq!(top.lines[0].dy, 0.0);
    assert_ne!(middle.lines[0].dy, 0.0);
    for (a, b) in top.lines[1..].iter().zip(&middle.lines[1..]) {
        assert_eq!(a.dy, b.dy);
    }
}

#[test]
fn canvas_height_is_monotone_in_line_count() {
    let cfg = LayoutConfig::default();
    for font_size in [12, 24, 40] {
        let mut text = String::from("line");
        let mut previous = 0;
        for _ in 0..10 {
            let metrics = layout::line_metrics(&text, font_size, &cfg);
            let height = layout::canvas_height(&metrics, Padding { top: 5, bottom: 5 }, false, &cfg);
            assert!(
                height >= previous,
                "height shrank when a line was added (font {})",
                font_size
            );
            previous = height;
            text.push_str("\nline");
        }
    }
}

#[test]
fn canvas_height_never_drops_below_floor() {
    let cfg = LayoutConfig::default();
    let metrics = layout::line_metrics("x", 1, &cfg);
    let height = layout::canvas_height(&metrics, Padding::default(), false, &cfg);
    assert_eq!(height, cfg.min_height);
}

#[test]
fn center_alignment_anchors_every_line_at_canvas_midpoint() {
    let cfg = LayoutConfig::default();
    let metrics = layout::line_metrics("a\nb\nc\nd", 18, &cfg);
    let block = layout::position_text(
        &metrics,
        TextAlign::Center,
        VerticalAlign::Top,
        Padding { top: 25, bottom: 0 },
        200,
        &cfg,
    );
    for line in &block.lines {
        assert_eq!(line.x, 400.0);
        assert_eq!(line.anchor, TextAnchor::Middle);
    }
}

#[test]
fn middle_alignment_centers_the_block_on_the_canvas() {
    let cfg = LayoutConfig::default();
    let metrics = layout::line_metrics("a\nb\nc", 30, &cfg);
    let canvas = layout::canvas_height(&metrics, Padding::default(), false, &cfg);
    let block = layout::position_text(
        &metrics,
        TextAlign::Left,
        VerticalAlign::Middle,
        Padding::default(),
        canvas,
        &cfg,
    );

    // The visual top of the block plus half its height lands on the canvas
    // center, within the fixed-metric approximation.
    let first_baseline = block.origin_y + block.lines[0].dy;
    let block_top = first_baseline - metrics.line_height / 2.0;
    let block_center = block_top + metrics.block_height() / 2.0;
    assert!((block_center - f64::from(canvas) / 2.0).abs() < 1e-9);
}

#[test]
fn empty_lines_still_consume_height() {
    let cfg = LayoutConfig::default();
    let with_gap = layout::line_metrics("a\n\nb", 20, &cfg);
    let without_gap = layout::line_metrics("a\nb", 20, &cfg);
    assert_eq!(with_gap.line_count(), 3);
    assert_eq!(
        with_gap.block_height() - without_gap.block_height(),
        with_gap.line_height
    );
}
