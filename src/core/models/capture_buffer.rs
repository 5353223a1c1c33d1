use anyhow::{Context, Result};
use image::{ImageFormat, RgbaImage};

use crate::global_constants::ERROR_CONTEXT_PNG_ENCODE;

#[derive(Clone)]
pub struct CaptureBuffer {
    pub scale_factor: f64,
    pub width: u32,
    pub height: u32,
    raw_data: Vec<u8>,
}

impl std::fmt::Debug for CaptureBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CaptureBuffer")
            .field("scale_factor", &self.scale_factor)
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

impl CaptureBuffer {
    pub fn build_from_raw_data(
        scale_factor: f64,
        width_pixels: u32,
        height_pixels: u32,
        raw_rgba_data: Vec<u8>,
    ) -> Self {
        log::debug!(
            "[CAPTURE_BUFFER] building buffer: {}x{}, scale={}",
            width_pixels,
            height_pixels,
            scale_factor
        );

        Self {
            scale_factor,
            width: width_pixels,
            height: height_pixels,
            raw_data: raw_rgba_data,
        }
    }

    pub fn raw_data(&self) -> &[u8] {
        &self.raw_data
    }

    /// Cuts out a sub-rectangle. The rectangle must lie fully inside the buffer.
    pub fn crop_region(&self, x: u32, y: u32, crop_width: u32, crop_height: u32) -> Result<Self> {
        if crop_width == 0 || crop_height == 0 {
            anyhow::bail!("Crop dimensions must be greater than zero");
        }

        let exceeds_width = u64::from(x) + u64::from(crop_width) > u64::from(self.width);
        let exceeds_height = u64::from(y) + u64::from(crop_height) > u64::from(self.height);
        if exceeds_width || exceeds_height {
            anyhow::bail!(
                "Crop region {}x{} at ({}, {}) exceeds image bounds {}x{}",
                crop_width,
                crop_height,
                x,
                y,
                self.width,
                self.height
            );
        }

        log::debug!(
            "[CAPTURE_BUFFER] Cropping region: {}x{} at ({}, {}) from {}x{}",
            crop_width,
            crop_height,
            x,
            y,
            self.width,
            self.height
        );

        let row_stride = self.width as usize * 4;
        let mut cropped_data = Vec::with_capacity(crop_width as usize * crop_height as usize * 4);

        for row in y..(y + crop_height) {
            let row_start = row as usize * row_stride + x as usize * 4;
            let row_end = row_start + crop_width as usize * 4;

            let row_pixels = self
                .raw_data
                .get(row_start..row_end)
                .context("Crop region exceeds raw buffer length")?;
            cropped_data.extend_from_slice(row_pixels);
        }

        Ok(Self::build_from_raw_data(
            self.scale_factor,
            crop_width,
            crop_height,
            cropped_data,
        ))
    }

    /// Lossless canonical encoding used both for equality checks and persistence.
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        let image = RgbaImage::from_raw(self.width, self.height, self.raw_data.clone())
            .with_context(|| {
                format!(
                    "raw buffer of {} bytes does not match {}x{} RGBA",
                    self.raw_data.len(),
                    self.width,
                    self.height
                )
            })?;

        let mut png_bytes = Vec::new();
        image
            .write_to(&mut std::io::Cursor::new(&mut png_bytes), ImageFormat::Png)
            .context(ERROR_CONTEXT_PNG_ENCODE)?;

        Ok(png_bytes)
    }
}
