pub mod capture_orchestrator;
pub mod document_assembler;
pub mod pointer_reporter;
pub mod run_orchestrator;

pub use capture_orchestrator::{CaptureOrchestrator, CaptureSummary};
pub use document_assembler::{AssemblySummary, DocumentAssembler};
pub use pointer_reporter::PointerReporter;
pub use run_orchestrator::{RunOrchestrator, RunReport};
