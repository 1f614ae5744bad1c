//! Layout engine for banner canvases
//!
//! This module takes a resolved style and computes the spatial layout: canvas
//! height derived from line count and padding, and per-line text positions.

pub mod config;
pub mod engine;
pub mod types;

pub use config::LayoutConfig;
pub use engine::{canvas_height, line_metrics, position_text, top_aligned_text_bottom};
pub use types::*;
