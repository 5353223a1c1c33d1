use std::sync::Arc;
use std::time::Duration;

use crate::core::interfaces::ports::{DocumentWriter, FrameStore, PageAdvancer, ScreenCapturer};
use crate::core::models::{CaptureSettings, RunError, RunState};
use crate::core::orchestrators::capture_orchestrator::{CaptureOrchestrator, CaptureSummary};
use crate::core::orchestrators::document_assembler::{AssemblySummary, DocumentAssembler};
use crate::global_constants::{
    LOG_TAG_RUN, USER_MESSAGE_FINISHED_CAPTURE, USER_MESSAGE_FINISHED_DOCUMENT,
    USER_MESSAGE_STARTING_CAPTURE, USER_MESSAGE_STARTUP_COUNTDOWN_PREFIX,
    USER_MESSAGE_STARTUP_COUNTDOWN_SUFFIX,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub capture: Option<CaptureSummary>,
    pub assembly: AssemblySummary,
}

/// Drives one run: Idle -> Capturing -> Assembling -> Done, or Failed on any error.
pub struct RunOrchestrator {
    capture_orchestrator: CaptureOrchestrator,
    document_assembler: DocumentAssembler,
    startup_delay: Duration,
    state: RunState,
}

impl RunOrchestrator {
    pub fn build(
        settings: &CaptureSettings,
        screen_capturer: Arc<dyn ScreenCapturer>,
        page_advancer: Arc<dyn PageAdvancer>,
        frame_store: Arc<dyn FrameStore>,
        document_writer: Arc<dyn DocumentWriter>,
    ) -> Result<Self, RunError> {
        settings.validate()?;
        let capture_region = settings.capture_region()?;

        log::info!(
            "{} building run: region={:?}, frames={:?}, output={:?}",
            LOG_TAG_RUN,
            capture_region,
            settings.frames_directory,
            settings.output_document_path
        );

        let capture_orchestrator = CaptureOrchestrator::build(
            screen_capturer,
            page_advancer,
            frame_store.clone(),
            capture_region,
            settings.settle_delay(),
            settings.frame_number_width,
        );
        let document_assembler = DocumentAssembler::build(
            frame_store,
            document_writer,
            settings.page_layout,
            settings.output_document_path.clone(),
        );

        Ok(Self {
            capture_orchestrator,
            document_assembler,
            startup_delay: settings.startup_delay(),
            state: RunState::Idle,
        })
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn run(&mut self) -> Result<RunReport, RunError> {
        self.ensure_idle()?;
        self.wait_for_startup();

        self.transition_to(RunState::Capturing);
        println!("{}", USER_MESSAGE_STARTING_CAPTURE);
        let capture_summary = self.capture_orchestrator.capture_all_frames();
        let capture_summary = self.record_failure(capture_summary)?;
        println!("{}", USER_MESSAGE_FINISHED_CAPTURE);

        let assembly_summary = self.assemble()?;

        Ok(RunReport {
            capture: Some(capture_summary),
            assembly: assembly_summary,
        })
    }

    /// Skips capture and builds the document from frames already on disk.
    pub fn run_assembly_only(&mut self) -> Result<RunReport, RunError> {
        self.ensure_idle()?;

        let assembly_summary = self.assemble()?;

        Ok(RunReport {
            capture: None,
            assembly: assembly_summary,
        })
    }

    fn assemble(&mut self) -> Result<AssemblySummary, RunError> {
        self.transition_to(RunState::Assembling);
        let assembly_summary = self.document_assembler.assemble();
        let assembly_summary = self.record_failure(assembly_summary)?;
        println!("{}", USER_MESSAGE_FINISHED_DOCUMENT);

        self.transition_to(RunState::Done);
        Ok(assembly_summary)
    }

    fn ensure_idle(&self) -> Result<(), RunError> {
        if self.state != RunState::Idle {
            return Err(RunError::InvalidState(self.state));
        }
        Ok(())
    }

    fn wait_for_startup(&self) {
        println!("{}", startup_countdown_message(self.startup_delay));
        std::thread::sleep(self.startup_delay);
    }

    fn record_failure<T>(&mut self, result: Result<T, RunError>) -> Result<T, RunError> {
        if let Err(error) = &result {
            log::error!("{} {} failed: {}", LOG_TAG_RUN, self.state, error);
            self.transition_to(RunState::Failed);
        }
        result
    }

    fn transition_to(&mut self, next_state: RunState) {
        log::debug!("{} {} -> {}", LOG_TAG_RUN, self.state, next_state);
        self.state = next_state;
    }
}

// Whole seconds only, a 1500 ms delay reads as 1.
fn startup_countdown_message(startup_delay: Duration) -> String {
    format!(
        "{} {} {}",
        USER_MESSAGE_STARTUP_COUNTDOWN_PREFIX,
        startup_delay.as_secs(),
        USER_MESSAGE_STARTUP_COUNTDOWN_SUFFIX
    )
}
