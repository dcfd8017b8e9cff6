//! Fitting images onto A4 canvases.
//!
//! This module provides:
//! - Contain/cover geometry (`compute_fit`)
//! - A4 pixel dimensions for a given DPI (`compute_page_size_from_dpi`)
//! - Rasterizing a bitmap onto a solid background (`render_fit`)
//! - Parsing the background color control value (`parse_hex_color`)
//!
//! # Coordinate System
//!
//! - Origin is the top-left corner of the target canvas
//! - Offsets may be negative in cover mode, the overflow is clipped

mod color;
mod compose;
mod geometry;

use thiserror::Error;

pub use color::{parse_hex_color, WHITE};
pub use compose::{render_fit, MAX_CANVAS_PIXELS};
pub use geometry::{
    compute_fit, compute_page_size_from_dpi, FitMode, FitResult, PageSize, A4_HEIGHT_IN,
    A4_WIDTH_IN,
};

pub(crate) use geometry::round_half_up;

/// Errors that can occur while rendering a fitted canvas.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The target canvas has no area (e.g. DPI of zero).
    #[error("Invalid target size: width ({width}) and height ({height}) must be non-zero")]
    EmptyTarget { width: u32, height: u32 },

    /// The target canvas is larger than a browser canvas can hold.
    #[error("Canvas too large: {width}x{height} exceeds {max} pixels")]
    TargetTooLarge { width: u32, height: u32, max: u64 },

    /// The source pixel buffer does not match its dimensions.
    #[error("Invalid source bitmap: expected {expected} bytes (width * height * 4), got {actual}")]
    InvalidSource { expected: usize, actual: usize },

    /// The background color string could not be parsed.
    #[error("Invalid color: {0:?}")]
    InvalidColor(String),
}
