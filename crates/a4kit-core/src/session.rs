//! The state behind the three tools.
//!
//! A [`Session`] holds the currently selected photo, the last blue-filtered
//! copy and the status line. Every tool action reads the loaded bitmap and
//! produces its own output; nothing here touches the browser.
//!
//! Actions invoked with no image loaded are silent no-ops: they return
//! `Ok(None)` (or `None`) instead of an error.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::decode::{decode_image, Bitmap, DecodeError};
use crate::encode::{encode, EncodeError, ExportFile, ExportFormat};
use crate::filename::{export_name, format_bytes};
use crate::filter::{apply_color_transform, BlueMode, ColorTransformRequest};
use crate::fit::{
    compute_page_size_from_dpi, parse_hex_color, render_fit, FitMode, PageSize, RenderError,
    WHITE,
};
use crate::pdf::{build_page, DocumentBackend, PageLayout, PageOrientation, PdfError};

/// Status shown when the selected file cannot be decoded.
pub const LOAD_FAILED_STATUS: &str = "Could not load the image. Try another one.";

const PDF_MIME: &str = "application/pdf";

/// Errors from the export actions.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Pdf(#[from] PdfError),
}

/// Options of the image to PDF tool.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfOptions {
    pub orientation: PageOrientation,
    pub margin_mm: f64,
}

impl Default for PdfOptions {
    fn default() -> Self {
        Self {
            orientation: PageOrientation::Portrait,
            margin_mm: 0.0,
        }
    }
}

impl PdfOptions {
    pub fn layout(&self) -> PageLayout {
        PageLayout::a4(self.orientation, self.margin_mm)
    }
}

/// Options of the A4 raster tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct A4Options {
    pub dpi: f64,
    pub mode: FitMode,
    /// CSS hex color, e.g. `#ffffff`.
    pub background: String,
}

impl Default for A4Options {
    fn default() -> Self {
        Self {
            dpi: 300.0,
            mode: FitMode::Contain,
            background: "#ffffff".to_string(),
        }
    }
}

impl A4Options {
    pub fn page_size(&self) -> PageSize {
        compute_page_size_from_dpi(self.dpi)
    }

    /// Background as RGBA. Unparseable colors fall back to white.
    pub fn background_rgba(&self) -> [u8; 4] {
        match parse_hex_color(&self.background) {
            Ok(rgba) => rgba,
            Err(e) => {
                tracing::warn!(error = %e, "falling back to white background");
                WHITE
            }
        }
    }
}

/// Options of the blue filter tool.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlueOptions {
    /// 0 to 100.
    pub strength: f64,
    pub mode: BlueMode,
}

impl Default for BlueOptions {
    fn default() -> Self {
        Self {
            strength: 50.0,
            mode: BlueMode::Shift,
        }
    }
}

impl From<BlueOptions> for ColorTransformRequest {
    fn from(options: BlueOptions) -> Self {
        ColorTransformRequest::new(options.strength, options.mode)
    }
}

/// The photo the user picked.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub file_name: String,
    pub file_size: u64,
    pub bitmap: Bitmap,
}

/// Per-page session state.
#[derive(Debug, Default)]
pub struct Session {
    image: Option<LoadedImage>,
    filtered: Option<Bitmap>,
    status: String,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode `bytes` and make it the current image.
    ///
    /// Any previous image and filtered copy are discarded whether or not
    /// decoding succeeds.
    ///
    /// # Errors
    ///
    /// Returns the `DecodeError`; the status line is set to
    /// [`LOAD_FAILED_STATUS`] and the session is left without an image.
    pub fn load(&mut self, file_name: &str, bytes: &[u8]) -> Result<&LoadedImage, DecodeError> {
        self.filtered = None;
        self.status = format!(
            "Selected: {} ({})",
            file_name,
            format_bytes(bytes.len() as u64)
        );

        let bitmap = match decode_image(bytes) {
            Ok(bitmap) => bitmap,
            Err(e) => {
                tracing::warn!(file_name, error = %e, "could not decode selected image");
                self.image = None;
                self.status = LOAD_FAILED_STATUS.to_string();
                return Err(e);
            }
        };

        tracing::info!(
            file_name,
            width = bitmap.width,
            height = bitmap.height,
            bytes = bytes.len(),
            "image loaded"
        );

        Ok(self.image.insert(LoadedImage {
            file_name: file_name.to_string(),
            file_size: bytes.len() as u64,
            bitmap,
        }))
    }

    /// Whether the export controls should be enabled.
    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    pub fn image(&self) -> Option<&LoadedImage> {
        self.image.as_ref()
    }

    /// The last blue-filtered bitmap, if the filter has been applied.
    pub fn filtered(&self) -> Option<&Bitmap> {
        self.filtered.as_ref()
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// Export the image as a single A4 page PDF named `<base>_A4.pdf`.
    pub fn export_pdf(
        &self,
        options: &PdfOptions,
        backend: &dyn DocumentBackend,
    ) -> Result<Option<ExportFile>, ExportError> {
        let Some(image) = &self.image else {
            return Ok(None);
        };

        let bytes = build_page(&image.bitmap, &options.layout(), backend)?;
        let file = ExportFile::new(export_name(&image.file_name, "_A4.pdf"), PDF_MIME, bytes)?;

        tracing::info!(file_name = %file.file_name, bytes = file.len(), "exported pdf");
        Ok(Some(file))
    }

    /// Rasterize the image onto an A4 canvas at the requested DPI.
    pub fn render_a4(&self, options: &A4Options) -> Result<Option<Bitmap>, ExportError> {
        let Some(image) = &self.image else {
            return Ok(None);
        };

        let canvas = render_fit(
            &image.bitmap,
            options.page_size(),
            options.mode,
            options.background_rgba(),
        )?;
        Ok(Some(canvas))
    }

    /// Render and export the A4 canvas as `<base>_A4.png`.
    pub fn export_a4_png(&self, options: &A4Options) -> Result<Option<ExportFile>, ExportError> {
        let Some(image) = &self.image else {
            return Ok(None);
        };
        let Some(canvas) = self.render_a4(options)? else {
            return Ok(None);
        };

        let file = png_file(&image.file_name, "_A4", &canvas)?;
        tracing::info!(
            file_name = %file.file_name,
            width = canvas.width,
            height = canvas.height,
            bytes = file.len(),
            "exported a4 png"
        );
        Ok(Some(file))
    }

    /// Filter a copy of the image and keep it as the current result.
    pub fn apply_blue(&mut self, options: &BlueOptions) -> Option<&Bitmap> {
        let image = self.image.as_ref()?;
        let filtered = apply_color_transform(image.bitmap.clone(), (*options).into());

        tracing::debug!(
            strength = options.strength,
            mode = ?options.mode,
            "applied blue filter"
        );
        Some(self.filtered.insert(filtered))
    }

    /// Export the filtered image as `<base>_blue.png`.
    ///
    /// If the filter has not been applied since the image was loaded it is
    /// applied once with `options`; otherwise the existing result is saved
    /// as is.
    pub fn export_blue(
        &mut self,
        options: &BlueOptions,
    ) -> Result<Option<ExportFile>, ExportError> {
        if self.image.is_none() {
            return Ok(None);
        }
        if self.filtered.is_none() {
            self.apply_blue(options);
        }

        let (Some(image), Some(filtered)) = (&self.image, &self.filtered) else {
            return Ok(None);
        };

        let file = png_file(&image.file_name, "_blue", filtered)?;
        tracing::info!(file_name = %file.file_name, bytes = file.len(), "exported blue png");
        Ok(Some(file))
    }

    /// Forget the image, the filtered copy and the status line.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Encode `bitmap` as `<base><tag>.png`.
fn png_file(original: &str, tag: &str, bitmap: &Bitmap) -> Result<ExportFile, EncodeError> {
    let format = ExportFormat::Png;
    let file_name = export_name(original, &format!("{tag}.{}", format.extension()));
    ExportFile::new(file_name, format.mime_type(), encode(bitmap, format)?)
}
