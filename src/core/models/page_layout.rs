use serde::{Deserialize, Serialize};

use crate::core::models::RunError;
use crate::global_constants::{
    A4_PAGE_HEIGHT_MM, A4_PAGE_WIDTH_MM, DEFAULT_MARGIN_MM, MILLIMETERS_PER_INCH,
};

/// Physical page format and margins, all in millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageLayout {
    pub page_width_mm: f32,
    pub page_height_mm: f32,
    pub left_margin_mm: f32,
    pub right_margin_mm: f32,
    pub top_margin_mm: f32,
    pub bottom_margin_mm: f32,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            page_width_mm: A4_PAGE_WIDTH_MM,
            page_height_mm: A4_PAGE_HEIGHT_MM,
            left_margin_mm: DEFAULT_MARGIN_MM,
            right_margin_mm: DEFAULT_MARGIN_MM,
            top_margin_mm: DEFAULT_MARGIN_MM,
            bottom_margin_mm: DEFAULT_MARGIN_MM,
        }
    }
}

/// Where an image lands on a page, in PDF space (origin at bottom-left).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImagePlacement {
    pub translate_x_mm: f32,
    pub translate_y_mm: f32,
    pub scale_x: f32,
    pub scale_y: f32,
}

impl PageLayout {
    pub fn content_width_mm(&self) -> f32 {
        self.page_width_mm - self.left_margin_mm - self.right_margin_mm
    }

    pub fn content_height_mm(&self) -> f32 {
        self.page_height_mm - self.top_margin_mm - self.bottom_margin_mm
    }

    pub fn validate(&self) -> Result<(), RunError> {
        let margins = [
            self.left_margin_mm,
            self.right_margin_mm,
            self.top_margin_mm,
            self.bottom_margin_mm,
        ];
        if margins.iter().any(|margin| !margin.is_finite() || *margin < 0.0) {
            return Err(RunError::InvalidConfiguration(format!(
                "page margins must be non-negative, got {:?}",
                margins
            )));
        }

        if !(self.content_width_mm() > 0.0 && self.content_height_mm() > 0.0) {
            return Err(RunError::InvalidConfiguration(format!(
                "page {}x{} mm leaves no content area after margins",
                self.page_width_mm, self.page_height_mm
            )));
        }

        Ok(())
    }

    /// Stretches an image of the given pixel size to exactly fill the content
    /// rectangle, ignoring its aspect ratio.
    pub fn placement_for_image(&self, width_pixels: u32, height_pixels: u32, dpi: f32) -> ImagePlacement {
        let natural_width_mm = width_pixels as f32 / dpi * MILLIMETERS_PER_INCH;
        let natural_height_mm = height_pixels as f32 / dpi * MILLIMETERS_PER_INCH;

        ImagePlacement {
            translate_x_mm: self.left_margin_mm,
            translate_y_mm: self.bottom_margin_mm,
            scale_x: self.content_width_mm() / natural_width_mm,
            scale_y: self.content_height_mm() / natural_height_mm,
        }
    }
}
