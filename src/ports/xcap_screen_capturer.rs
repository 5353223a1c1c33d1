use anyhow::{Context, Result};

use crate::core::interfaces::ports::ScreenCapturer;
use crate::core::models::{CaptureBuffer, CaptureRegion, ScreenPoint};
use crate::global_constants::{
    ERROR_CONTEXT_CAPTURE_MONITOR, ERROR_CONTEXT_MONITOR_GEOMETRY, ERROR_CONTEXT_SCALE_FACTOR,
    LOG_TAG_CAPTURE,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MonitorGeometry {
    x_position: i32,
    y_position: i32,
    width: u32,
    height: u32,
}

/// Pixel rectangle inside a captured monitor image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PixelRectangle {
    x: u32,
    y: u32,
    width: u32,
    height: u32,
}

pub struct XcapScreenCapturer;

impl XcapScreenCapturer {
    pub fn initialize() -> Self {
        log::debug!("{} initializing xcap screen capturer", LOG_TAG_CAPTURE);
        Self
    }

    fn get_monitor_at_position(&self, point: ScreenPoint) -> Result<xcap::Monitor> {
        xcap::Monitor::from_point(point.x_position, point.y_position).with_context(|| {
            format!(
                "failed to find monitor at ({}, {})",
                point.x_position, point.y_position
            )
        })
    }

    fn extract_monitor_geometry(&self, monitor: &xcap::Monitor) -> Result<MonitorGeometry> {
        Ok(MonitorGeometry {
            x_position: monitor.x().context(ERROR_CONTEXT_MONITOR_GEOMETRY)?,
            y_position: monitor.y().context(ERROR_CONTEXT_MONITOR_GEOMETRY)?,
            width: monitor.width().context(ERROR_CONTEXT_MONITOR_GEOMETRY)?,
            height: monitor.height().context(ERROR_CONTEXT_MONITOR_GEOMETRY)?,
        })
    }

    fn extract_scale_factor_from_monitor(&self, monitor: &xcap::Monitor) -> Result<f64> {
        let scale_factor = monitor
            .scale_factor()
            .with_context(|| ERROR_CONTEXT_SCALE_FACTOR)?;

        log::debug!("{} monitor scale factor: {}", LOG_TAG_CAPTURE, scale_factor);
        Ok(scale_factor as f64)
    }

    fn capture_monitor_image(&self, monitor: &xcap::Monitor) -> Result<xcap::image::RgbaImage> {
        monitor
            .capture_image()
            .with_context(|| ERROR_CONTEXT_CAPTURE_MONITOR)
    }

    fn convert_image_to_capture_buffer(
        &self,
        image: xcap::image::RgbaImage,
        scale_factor: f64,
    ) -> CaptureBuffer {
        let width_pixels = image.width();
        let height_pixels = image.height();
        let raw_rgba_data = image.into_raw();

        log::debug!(
            "{} captured {}x{} monitor image, scale_factor={}",
            LOG_TAG_CAPTURE,
            width_pixels,
            height_pixels,
            scale_factor
        );

        CaptureBuffer::build_from_raw_data(scale_factor, width_pixels, height_pixels, raw_rgba_data)
    }

    /// Maps a region in screen coordinates onto the monitor image's pixels.
    ///
    /// Monitor geometry can be reported in logical points while the image is in
    /// physical pixels, so the ratio between the two is applied to every edge.
    fn locate_region_in_image(
        &self,
        region: &CaptureRegion,
        geometry: MonitorGeometry,
        image_width: u32,
        image_height: u32,
    ) -> Result<PixelRectangle> {
        let relative_x = i64::from(region.x_position) - i64::from(geometry.x_position);
        let relative_y = i64::from(region.y_position) - i64::from(geometry.y_position);
        let relative_right = relative_x + i64::from(region.width);
        let relative_bottom = relative_y + i64::from(region.height);

        if relative_x < 0
            || relative_y < 0
            || relative_right > i64::from(geometry.width)
            || relative_bottom > i64::from(geometry.height)
        {
            anyhow::bail!(
                "capture region {:?} is not fully inside monitor {:?}",
                region,
                geometry
            );
        }

        let horizontal_ratio = image_width as f64 / geometry.width as f64;
        let vertical_ratio = image_height as f64 / geometry.height as f64;

        let left = (relative_x as f64 * horizontal_ratio).round() as u32;
        let top = (relative_y as f64 * vertical_ratio).round() as u32;
        let right = ((relative_right as f64 * horizontal_ratio).round() as u32).min(image_width);
        let bottom = ((relative_bottom as f64 * vertical_ratio).round() as u32).min(image_height);

        Ok(PixelRectangle {
            x: left,
            y: top,
            width: right.saturating_sub(left),
            height: bottom.saturating_sub(top),
        })
    }
}

impl ScreenCapturer for XcapScreenCapturer {
    fn capture_screen_region(&self, region: &CaptureRegion) -> Result<CaptureBuffer> {
        log::debug!(
            "{} capturing {}x{} at ({}, {})",
            LOG_TAG_CAPTURE,
            region.width,
            region.height,
            region.x_position,
            region.y_position
        );

        let monitor_at_position = self.get_monitor_at_position(region.origin())?;
        let geometry = self.extract_monitor_geometry(&monitor_at_position)?;
        let scale_factor = self.extract_scale_factor_from_monitor(&monitor_at_position)?;
        let captured_image = self.capture_monitor_image(&monitor_at_position)?;
        let monitor_buffer = self.convert_image_to_capture_buffer(captured_image, scale_factor);

        let pixels = self.locate_region_in_image(
            region,
            geometry,
            monitor_buffer.width,
            monitor_buffer.height,
        )?;

        monitor_buffer.crop_region(pixels.x, pixels.y, pixels.width, pixels.height)
    }
}
