//! Image decoding for A4Kit.
//!
//! This module provides functionality for:
//! - Decoding common raster formats (JPEG, PNG, WebP, GIF, BMP) to RGBA
//! - Applying EXIF orientation the way a browser does when drawing a photo
//!
//! # Architecture
//!
//! Decoding is called from the WASM bindings on the main thread. All
//! operations are synchronous and single-threaded.
//!
//! # Examples
//!
//! ```ignore
//! use a4kit_core::decode::decode_image;
//!
//! let bytes = std::fs::read("photo.jpg").unwrap();
//! let bitmap = decode_image(&bytes).unwrap();
//! println!("Decoded {}x{} image", bitmap.width, bitmap.height);
//! ```

mod raster;
mod types;

pub use raster::{decode_image, get_orientation};
pub use types::{Bitmap, DecodeError, Orientation, CHANNELS};
