use std::sync::Arc;
use std::time::Duration;

use crate::core::interfaces::ports::{FrameStore, PageAdvancer, ScreenCapturer};
use crate::core::models::{
    frame_number_capacity, frames_have_identical_content, CaptureRegion, CapturedFrame, RunError,
};
use crate::global_constants::{LOG_TAG_CAPTURE, USER_MESSAGE_SAVING_FRAME};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureSummary {
    pub persisted_frames: u32,
    pub advance_count: u32,
    pub terminating_sequence_number: u32,
}

pub struct CaptureOrchestrator {
    screen_capturer: Arc<dyn ScreenCapturer>,
    page_advancer: Arc<dyn PageAdvancer>,
    frame_store: Arc<dyn FrameStore>,
    capture_region: CaptureRegion,
    settle_delay: Duration,
    frame_number_width: usize,
}

impl CaptureOrchestrator {
    pub fn build(
        screen_capturer: Arc<dyn ScreenCapturer>,
        page_advancer: Arc<dyn PageAdvancer>,
        frame_store: Arc<dyn FrameStore>,
        capture_region: CaptureRegion,
        settle_delay: Duration,
        frame_number_width: usize,
    ) -> Self {
        log::debug!(
            "{} building capture orchestrator: region={:?}, settle_delay={:?}",
            LOG_TAG_CAPTURE,
            capture_region,
            settle_delay
        );

        Self {
            screen_capturer,
            page_advancer,
            frame_store,
            capture_region,
            settle_delay,
            frame_number_width,
        }
    }

    /// Captures pages until a capture repeats the previous one.
    ///
    /// The repeated capture is not persisted and no advance follows it.
    pub fn capture_all_frames(&self) -> Result<CaptureSummary, RunError> {
        self.prepare_frame_store()?;

        let capacity = frame_number_capacity(self.frame_number_width);
        let mut previous_frame: Option<CapturedFrame> = None;
        let mut sequence_counter: u32 = 0;
        let mut advance_count: u32 = 0;

        loop {
            std::thread::sleep(self.settle_delay);
            sequence_counter += 1;

            if u64::from(sequence_counter) == capacity + 1 {
                log::warn!(
                    "{} frame {} exceeds {}-digit numbering, file names will no longer sort in capture order",
                    LOG_TAG_CAPTURE,
                    sequence_counter,
                    self.frame_number_width
                );
            }

            let frame = self.capture_frame(sequence_counter)?;

            if frames_have_identical_content(previous_frame.as_ref(), Some(&frame)) {
                log::info!(
                    "{} frame {} repeats frame {}, end of content reached",
                    LOG_TAG_CAPTURE,
                    sequence_counter,
                    sequence_counter - 1
                );
                break;
            }

            println!("{}", saving_frame_message(sequence_counter));
            self.persist_frame(&frame)?;
            previous_frame = Some(frame);

            self.page_advancer
                .advance_to_next_page()
                .map_err(|source| RunError::Advance {
                    sequence_number: sequence_counter,
                    source,
                })?;
            advance_count += 1;
        }

        Ok(CaptureSummary {
            persisted_frames: sequence_counter - 1,
            advance_count,
            terminating_sequence_number: sequence_counter,
        })
    }

    fn prepare_frame_store(&self) -> Result<(), RunError> {
        let existing_entries = self
            .frame_store
            .prepare()
            .map_err(|source| RunError::Persist {
                path: self.frame_store.location().to_path_buf(),
                source,
            })?;

        if existing_entries > 0 {
            log::warn!(
                "{} {:?} already holds {} entries, they will be included in the document",
                LOG_TAG_CAPTURE,
                self.frame_store.location(),
                existing_entries
            );
        }

        Ok(())
    }

    fn capture_frame(&self, sequence_number: u32) -> Result<CapturedFrame, RunError> {
        let buffer = self
            .screen_capturer
            .capture_screen_region(&self.capture_region)
            .map_err(|source| RunError::Capture {
                sequence_number,
                source,
            })?;

        CapturedFrame::encode(sequence_number, &buffer).map_err(|source| RunError::Encode {
            sequence_number,
            source,
        })
    }

    fn persist_frame(&self, frame: &CapturedFrame) -> Result<(), RunError> {
        let frame_path = self
            .frame_store
            .persist_frame(frame)
            .map_err(|source| RunError::Persist {
                path: self.frame_store.frame_path(frame.sequence_number),
                source,
            })?;

        log::debug!(
            "{} frame {} persisted to {:?}",
            LOG_TAG_CAPTURE,
            frame.sequence_number,
            frame_path
        );
        Ok(())
    }
}

fn saving_frame_message(sequence_number: u32) -> String {
    format!("\t{} {}.", USER_MESSAGE_SAVING_FRAME, sequence_number)
}
