//! Image encoding for export.
//!
//! This module provides functionality for:
//! - Encoding bitmaps to PNG (lossless) and JPEG (lossy, quality 0..1)
//! - Packaging encoded bytes as an [`ExportFile`] for a client-side download
//!
//! # Architecture
//!
//! Encoding is synchronous. Any failure is returned as an [`EncodeError`] and
//! the caller must not trigger a download; an export is only produced from a
//! non-empty encoded buffer.
//!
//! # Examples
//!
//! ```ignore
//! use a4kit_core::encode::{encode, ExportFormat};
//!
//! let png = encode(&bitmap, ExportFormat::Png)?;
//! let jpeg = encode(&bitmap, ExportFormat::jpeg_default())?;
//! ```

mod jpeg;
mod png;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::decode::Bitmap;

pub use jpeg::{encode_jpeg, quality_to_percent, DEFAULT_JPEG_QUALITY};
pub use png::encode_png;

/// Errors that can occur during encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 4), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// The underlying encoder failed
    #[error("Encoding failed: {0}")]
    EncodingFailed(String),

    /// The encoder reported success but produced no bytes
    #[error("Encoding produced no data")]
    EmptyOutput,
}

/// Output raster format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ExportFormat {
    /// Lossless RGBA PNG.
    Png,
    /// Lossy JPEG with canvas-style quality in [0, 1].
    Jpeg { quality: f64 },
}

impl ExportFormat {
    /// JPEG at the default quality used for PDF embedding.
    pub fn jpeg_default() -> Self {
        ExportFormat::Jpeg {
            quality: DEFAULT_JPEG_QUALITY,
        }
    }

    /// MIME type of the encoded output.
    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Png => "image/png",
            ExportFormat::Jpeg { .. } => "image/jpeg",
        }
    }

    /// File extension without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Jpeg { .. } => "jpg",
        }
    }
}

/// Encode a bitmap in the requested format.
pub fn encode(bitmap: &Bitmap, format: ExportFormat) -> Result<Vec<u8>, EncodeError> {
    match format {
        ExportFormat::Png => encode_png(bitmap),
        ExportFormat::Jpeg { quality } => encode_jpeg(bitmap, quality),
    }
}

/// A finished export, ready to be saved by the browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    /// Download name, e.g. `holiday_A4.pdf`.
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl ExportFile {
    /// Wrap encoded bytes.
    ///
    /// Returns `EncodeError::EmptyOutput` for an empty buffer so that an
    /// empty file can never reach the save step.
    pub fn new(
        file_name: impl Into<String>,
        mime_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Result<Self, EncodeError> {
        if bytes.is_empty() {
            return Err(EncodeError::EmptyOutput);
        }
        Ok(Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            bytes,
        })
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Shared precondition of every encoder.
fn validate(bitmap: &Bitmap) -> Result<(), EncodeError> {
    if bitmap.width == 0 || bitmap.height == 0 {
        return Err(EncodeError::InvalidDimensions {
            width: bitmap.width,
            height: bitmap.height,
        });
    }

    let expected = Bitmap::expected_len(bitmap.width, bitmap.height);
    if bitmap.pixels.len() != expected {
        return Err(EncodeError::InvalidPixelData {
            expected,
            actual: bitmap.pixels.len(),
        });
    }

    Ok(())
}
