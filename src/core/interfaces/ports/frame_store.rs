use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::core::models::CapturedFrame;

/// Append-only set of persisted frames, read back in sorted file-name order.
pub trait FrameStore: Send + Sync {
    fn location(&self) -> &Path;

    /// Makes the location usable and returns how many frame files it already holds.
    fn prepare(&self) -> Result<usize>;

    fn frame_path(&self, sequence_number: u32) -> PathBuf;

    fn persist_frame(&self, frame: &CapturedFrame) -> Result<PathBuf>;

    fn list_frames(&self) -> Result<Vec<PathBuf>>;
}
