use anyhow::Result;

use crate::core::models::{CaptureBuffer, CaptureRegion};

pub trait ScreenCapturer: Send + Sync {
    fn capture_screen_region(&self, region: &CaptureRegion) -> Result<CaptureBuffer>;
}
