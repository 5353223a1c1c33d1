use std::path::PathBuf;

use thiserror::Error;

use crate::core::models::RunState;

/// Every way a capture-and-assemble run can fail.
///
/// Orchestrators return these instead of exiting so that callers decide how to
/// abort. None of them is retried.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("run cannot start from state {0:?}")]
    InvalidState(RunState),

    #[error("screen capture failed for frame {sequence_number}")]
    Capture {
        sequence_number: u32,
        #[source]
        source: anyhow::Error,
    },

    #[error("PNG encoding failed for frame {sequence_number}")]
    Encode {
        sequence_number: u32,
        #[source]
        source: anyhow::Error,
    },

    #[error("failed to persist frame to {}", .path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("advance action failed after frame {sequence_number}")]
    Advance {
        sequence_number: u32,
        #[source]
        source: anyhow::Error,
    },

    #[error("failed to read frame directory {}", .path.display())]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("no frames found in {}", .path.display())]
    EmptyFrameSet { path: PathBuf },

    #[error("failed to write document {}", .path.display())]
    DocumentWrite {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },
}
