mod capture_buffer;
mod capture_settings;
mod captured_frame;
mod page_layout;
mod run_error;
mod run_state;
mod screen_region;

pub use capture_buffer::CaptureBuffer;
pub use capture_settings::{AdvanceAction, AdvanceKey, CaptureSettings};
pub use captured_frame::{
    frame_file_name, frame_number_capacity, frames_have_identical_content, CapturedFrame,
};
pub use page_layout::{ImagePlacement, PageLayout};
pub use run_error::RunError;
pub use run_state::RunState;
pub use screen_region::{CaptureRegion, ScreenPoint};
