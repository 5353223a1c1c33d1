use std::path::PathBuf;
use std::sync::Arc;

use crate::core::interfaces::ports::{DocumentWriter, FrameStore};
use crate::core::models::{PageLayout, RunError};
use crate::global_constants::LOG_TAG_ASSEMBLY;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssemblySummary {
    pub page_count: usize,
    pub output_path: PathBuf,
}

/// Builds the output document purely from what is in the frame store.
pub struct DocumentAssembler {
    frame_store: Arc<dyn FrameStore>,
    document_writer: Arc<dyn DocumentWriter>,
    page_layout: PageLayout,
    output_path: PathBuf,
}

impl DocumentAssembler {
    pub fn build(
        frame_store: Arc<dyn FrameStore>,
        document_writer: Arc<dyn DocumentWriter>,
        page_layout: PageLayout,
        output_path: PathBuf,
    ) -> Self {
        Self {
            frame_store,
            document_writer,
            page_layout,
            output_path,
        }
    }

    pub fn assemble(&self) -> Result<AssemblySummary, RunError> {
        let location = self.frame_store.location().to_path_buf();

        let frame_paths = self
            .frame_store
            .list_frames()
            .map_err(|source| RunError::DirectoryRead {
                path: location.clone(),
                source,
            })?;

        if frame_paths.is_empty() {
            return Err(RunError::EmptyFrameSet { path: location });
        }

        log::info!(
            "{} assembling {} frames from {:?} into {:?}",
            LOG_TAG_ASSEMBLY,
            frame_paths.len(),
            location,
            self.output_path
        );

        let page_count = self
            .document_writer
            .write_document(&frame_paths, &self.page_layout, &self.output_path)
            .map_err(|source| RunError::DocumentWrite {
                path: self.output_path.clone(),
                source,
            })?;

        log::info!(
            "{} wrote {} pages to {:?}",
            LOG_TAG_ASSEMBLY,
            page_count,
            self.output_path
        );

        Ok(AssemblySummary {
            page_count,
            output_path: self.output_path.clone(),
        })
    }
}
