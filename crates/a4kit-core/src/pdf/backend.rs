//! Document generation backends.
//!
//! The page builder only decides *where* the image goes. Turning that into
//! page-description bytes is delegated to a [`DocumentBackend`], so the
//! placement logic can be tested without producing real documents.

use lopdf::{dictionary, Document, Object, Stream};

use super::{PagePlacement, PdfError};

/// Points per millimeter (72 pt per inch, 25.4 mm per inch).
pub const PT_PER_MM: f64 = 72.0 / 25.4;

/// Resource name of the embedded image on the page.
const IMAGE_RESOURCE: &str = "Im0";

/// A JPEG ready to be embedded, with its pixel dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbeddedImage {
    pub jpeg: Vec<u8>,
    pub width_px: u32,
    pub height_px: u32,
}

/// Produces a single-page document showing one image.
pub trait DocumentBackend {
    /// Render a page of `placement.page_width` x `placement.page_height`
    /// millimeters with `image` drawn at the placement rectangle.
    fn render(&self, placement: &PagePlacement, image: &EmbeddedImage)
        -> Result<Vec<u8>, PdfError>;
}

/// PDF backend built on `lopdf`.
#[derive(Debug, Clone, Copy)]
pub struct LopdfBackend {
    /// Flate-compress the content stream.
    pub compress: bool,
}

impl Default for LopdfBackend {
    fn default() -> Self {
        Self { compress: true }
    }
}

impl LopdfBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DocumentBackend for LopdfBackend {
    fn render(
        &self,
        placement: &PagePlacement,
        image: &EmbeddedImage,
    ) -> Result<Vec<u8>, PdfError> {
        if image.jpeg.is_empty() || image.width_px == 0 || image.height_px == 0 {
            return Err(PdfError::EmptyImage);
        }

        let mut doc = Document::with_version("1.5");

        // DCTDecode data is already compressed
        let mut image_stream = Stream::new(
            dictionary! {
                "Type" => Object::Name(b"XObject".to_vec()),
                "Subtype" => Object::Name(b"Image".to_vec()),
                "Width" => Object::Integer(image.width_px as i64),
                "Height" => Object::Integer(image.height_px as i64),
                "ColorSpace" => Object::Name(b"DeviceRGB".to_vec()),
                "BitsPerComponent" => Object::Integer(8),
                "Filter" => Object::Name(b"DCTDecode".to_vec()),
            },
            image.jpeg.clone(),
        );
        image_stream.allows_compression = false;
        let image_id = doc.add_object(Object::Stream(image_stream));

        let content = Stream::new(dictionary! {}, content_stream(placement).into_bytes());
        let content_id = doc.add_object(Object::Stream(content));

        let page_id = doc.add_object(dictionary! {
            "Type" => Object::Name(b"Page".to_vec()),
            "MediaBox" => vec![
                0.into(),
                0.into(),
                mm_to_pt(placement.page_width).into(),
                mm_to_pt(placement.page_height).into(),
            ],
            "Contents" => Object::Reference(content_id),
            "Resources" => dictionary! {
                "XObject" => dictionary! {
                    IMAGE_RESOURCE => Object::Reference(image_id),
                },
            },
        });

        let pages_id = doc.add_object(dictionary! {
            "Type" => Object::Name(b"Pages".to_vec()),
            "Kids" => vec![Object::Reference(page_id)],
            "Count" => Object::Integer(1),
        });

        if let Ok(Object::Dictionary(ref mut dict)) = doc.get_object_mut(page_id) {
            dict.set("Parent", Object::Reference(pages_id));
        }

        let catalog_id = doc.add_object(dictionary! {
            "Type" => Object::Name(b"Catalog".to_vec()),
            "Pages" => Object::Reference(pages_id),
        });
        doc.trailer.set("Root", Object::Reference(catalog_id));

        let info_id = doc.add_object(dictionary! {
            "Producer" => Object::string_literal(concat!("a4kit ", env!("CARGO_PKG_VERSION"))),
        });
        doc.trailer.set("Info", Object::Reference(info_id));

        if self.compress {
            doc.compress();
        }

        let mut buf = Vec::new();
        doc.save_to(&mut buf)
            .map_err(|e| PdfError::Document(e.to_string()))?;

        tracing::debug!(
            page_width_mm = placement.page_width,
            page_height_mm = placement.page_height,
            bytes = buf.len(),
            "rendered pdf page"
        );
        Ok(buf)
    }
}

#[inline]
fn mm_to_pt(mm: f64) -> f32 {
    (mm * PT_PER_MM) as f32
}

/// Content stream drawing the image XObject.
///
/// PDF user space has its origin at the bottom-left, so the top-left `y`
/// of the placement is flipped against the page height.
fn content_stream(placement: &PagePlacement) -> String {
    let width = placement.width * PT_PER_MM;
    let height = placement.height * PT_PER_MM;
    let x = placement.x * PT_PER_MM;
    let y = (placement.page_height - placement.y - placement.height) * PT_PER_MM;

    format!("q {width:.4} 0 0 {height:.4} {x:.4} {y:.4} cm /{IMAGE_RESOURCE} Do Q")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::Bitmap;
    use crate::encode::encode_jpeg;
    use crate::pdf::{compute_placement, PageLayout, PageOrientation};

    fn test_image(width: u32, height: u32) -> EmbeddedImage {
        let bitmap = Bitmap::filled(width, height, [40, 80, 160, 255]);
        EmbeddedImage {
            jpeg: encode_jpeg(&bitmap, 0.92).unwrap(),
            width_px: width,
            height_px: height,
        }
    }

    fn media_box(doc: &Document) -> Vec<f32> {
        let page_id = *doc.get_pages().get(&1).unwrap();
        let page = doc.get_object(page_id).unwrap().as_dict().unwrap();
        page.get(b"MediaBox")
            .unwrap()
            .as_array()
            .unwrap()
            .iter()
            .map(|o| o.as_float().unwrap())
            .collect()
    }

    #[test]
    fn test_mm_to_pt() {
        assert!((mm_to_pt(25.4) - 72.0).abs() < 1e-4);
        assert!((mm_to_pt(210.0) - 595.2756).abs() < 1e-3);
        assert!((mm_to_pt(297.0) - 841.8898).abs() < 1e-3);
    }

    #[test]
    fn test_content_stream_flips_y() {
        let placement = PagePlacement {
            page_width: 210.0,
            page_height: 297.0,
            x: 0.0,
            y: 10.0,
            width: 25.4,
            height: 25.4,
        };
        // bottom = 297 - 10 - 25.4 = 261.6 mm = 741.5433 pt
        assert_eq!(
            content_stream(&placement),
            "q 72.0000 0 0 72.0000 0.0000 741.5433 cm /Im0 Do Q"
        );
    }

    #[test]
    fn test_render_single_page_pdf() {
        let image = test_image(40, 30);
        let placement = compute_placement(40, 30, &PageLayout::default());
        let bytes = LopdfBackend::new().render(&placement, &image).unwrap();

        assert!(bytes.starts_with(b"%PDF-1.5"));

        let doc = Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 1);

        let mb = media_box(&doc);
        assert_eq!(mb.len(), 4);
        assert!((mb[2] - 595.2756).abs() < 1e-2);
        assert!((mb[3] - 841.8898).abs() < 1e-2);
    }

    #[test]
    fn test_render_landscape_media_box() {
        let image = test_image(10, 10);
        let layout = PageLayout::a4(PageOrientation::Landscape, 0.0);
        let placement = compute_placement(10, 10, &layout);
        let bytes = LopdfBackend::new().render(&placement, &image).unwrap();

        let doc = Document::load_mem(&bytes).unwrap();
        let mb = media_box(&doc);
        assert!(mb[2] > mb[3]);
    }

    #[test]
    fn test_render_embeds_jpeg_untouched() {
        let image = test_image(16, 16);
        let placement = compute_placement(16, 16, &PageLayout::default());
        let bytes = LopdfBackend::new().render(&placement, &image).unwrap();

        let doc = Document::load_mem(&bytes).unwrap();
        let page_id = *doc.get_pages().get(&1).unwrap();
        let page = doc.get_object(page_id).unwrap().as_dict().unwrap();
        let resources = page.get(b"Resources").unwrap().as_dict().unwrap();
        let xobjects = resources.get(b"XObject").unwrap().as_dict().unwrap();
        let image_ref = xobjects.get(b"Im0").unwrap().as_reference().unwrap();
        let stream = doc.get_object(image_ref).unwrap().as_stream().unwrap();

        assert_eq!(stream.content, image.jpeg);
        assert_eq!(stream.dict.get(b"Width").unwrap().as_i64().unwrap(), 16);
    }

    #[test]
    fn test_render_content_places_image() {
        let image = test_image(20, 10);
        let placement = compute_placement(20, 10, &PageLayout::default());
        let bytes = LopdfBackend { compress: false }
            .render(&placement, &image)
            .unwrap();

        let doc = Document::load_mem(&bytes).unwrap();
        let page_id = *doc.get_pages().get(&1).unwrap();
        let content = String::from_utf8(doc.get_page_content(page_id).unwrap()).unwrap();

        assert!(content.contains(" cm /Im0 Do"));
        assert!(content.starts_with("q 595.2756 0 0 297.6378"));
    }

    #[test]
    fn test_render_rejects_empty_image() {
        let image = EmbeddedImage {
            jpeg: vec![],
            width_px: 10,
            height_px: 10,
        };
        let placement = PagePlacement::default();
        assert!(matches!(
            LopdfBackend::new().render(&placement, &image),
            Err(PdfError::EmptyImage)
        ));
    }
}
