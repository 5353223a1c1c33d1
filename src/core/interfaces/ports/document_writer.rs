use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::core::models::PageLayout;

pub trait DocumentWriter: Send + Sync {
    /// Writes one page per frame, in the given order, and returns the page count.
    fn write_document(
        &self,
        frame_paths: &[PathBuf],
        page_layout: &PageLayout,
        output_path: &Path,
    ) -> Result<usize>;
}
