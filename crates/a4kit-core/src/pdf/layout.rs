//! Page layout and image placement in millimeters.
//!
//! Placement uses a top-left origin like the drawing APIs it replaces.
//! Backends convert to their own coordinate system.

use serde::{Deserialize, Serialize};

/// A4 width in millimeters (portrait).
pub const A4_WIDTH_MM: f64 = 210.0;
/// A4 height in millimeters (portrait).
pub const A4_HEIGHT_MM: f64 = 297.0;
/// The usable area never shrinks below this, whatever the margin.
pub const MIN_USABLE_MM: f64 = 10.0;

/// Page orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageOrientation {
    #[default]
    Portrait,
    Landscape,
}

/// Physical page description.
///
/// `page_width_mm` and `page_height_mm` are the portrait dimensions; the
/// orientation decides which one is horizontal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageLayout {
    pub page_width_mm: f64,
    pub page_height_mm: f64,
    pub margin_mm: f64,
    pub orientation: PageOrientation,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self::a4(PageOrientation::Portrait, 0.0)
    }
}

impl PageLayout {
    /// An A4 page with the given orientation and margin.
    pub fn a4(orientation: PageOrientation, margin_mm: f64) -> Self {
        Self {
            page_width_mm: A4_WIDTH_MM,
            page_height_mm: A4_HEIGHT_MM,
            margin_mm,
            orientation,
        }
    }

    /// Oriented page size as (width, height).
    pub fn page_size_mm(&self) -> (f64, f64) {
        match self.orientation {
            PageOrientation::Portrait => (self.page_width_mm, self.page_height_mm),
            PageOrientation::Landscape => (self.page_height_mm, self.page_width_mm),
        }
    }

    /// Margin with negative and non-finite values treated as zero.
    pub fn effective_margin_mm(&self) -> f64 {
        if self.margin_mm.is_finite() {
            self.margin_mm.max(0.0)
        } else {
            0.0
        }
    }

    /// Area available for the image, floored at [`MIN_USABLE_MM`] per axis.
    pub fn usable_size_mm(&self) -> (f64, f64) {
        let (page_w, page_h) = self.page_size_mm();
        let margin = self.effective_margin_mm();
        (
            (page_w - 2.0 * margin).max(MIN_USABLE_MM),
            (page_h - 2.0 * margin).max(MIN_USABLE_MM),
        )
    }
}

/// Where the image goes on the page, in millimeters from the top-left.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PagePlacement {
    pub page_width: f64,
    pub page_height: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Fit an `image_w`x`image_h` bitmap inside the usable area and center it
/// on the page.
///
/// This is contain-fitting done directly in millimeters: start from the
/// full usable width and shrink to the usable height if needed.
pub fn compute_placement(image_w: u32, image_h: u32, layout: &PageLayout) -> PagePlacement {
    let (page_w, page_h) = layout.page_size_mm();

    if image_w == 0 || image_h == 0 {
        return PagePlacement {
            page_width: page_w,
            page_height: page_h,
            x: page_w / 2.0,
            y: page_h / 2.0,
            width: 0.0,
            height: 0.0,
        };
    }

    let (usable_w, usable_h) = layout.usable_size_mm();
    let aspect = image_w as f64 / image_h as f64;

    let mut width = usable_w;
    let mut height = width / aspect;
    if height > usable_h {
        height = usable_h;
        width = height * aspect;
    }

    PagePlacement {
        page_width: page_w,
        page_height: page_h,
        x: (page_w - width) / 2.0,
        y: (page_h - height) / 2.0,
        width,
        height,
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: the image stays inside the usable area and is centered.
        #[test]
        fn prop_placement_inside_usable_area(
            w in 1u32..=10_000,
            h in 1u32..=10_000,
            margin in 0.0f64..120.0,
            landscape in any::<bool>(),
        ) {
            let orientation = if landscape { PageOrientation::Landscape } else { PageOrientation::Portrait };
            let layout = PageLayout::a4(orientation, margin);
            let (usable_w, usable_h) = layout.usable_size_mm();
            let p = compute_placement(w, h, &layout);

            prop_assert!(p.width <= usable_w + 1e-9);
            prop_assert!(p.height <= usable_h + 1e-9);
            prop_assert!((p.x * 2.0 + p.width - p.page_width).abs() < 1e-9);
            prop_assert!((p.y * 2.0 + p.height - p.page_height).abs() < 1e-9);
        }

        /// Property: placement preserves the image aspect ratio.
        #[test]
        fn prop_placement_preserves_aspect(
            w in 1u32..=10_000,
            h in 1u32..=10_000,
        ) {
            let p = compute_placement(w, h, &PageLayout::default());
            let expected = w as f64 / h as f64;
            prop_assert!((p.width / p.height - expected).abs() / expected < 1e-9);
        }

        /// Property: one axis always touches the usable bound.
        #[test]
        fn prop_placement_fills_one_axis(
            w in 1u32..=10_000,
            h in 1u32..=10_000,
            margin in 0.0f64..50.0,
        ) {
            let layout = PageLayout::a4(PageOrientation::Portrait, margin);
            let (usable_w, usable_h) = layout.usable_size_mm();
            let p = compute_placement(w, h, &layout);
            prop_assert!(
                (p.width - usable_w).abs() < 1e-9 || (p.height - usable_h).abs() < 1e-9
            );
        }
    }
}
