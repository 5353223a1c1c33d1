use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;

use page_capture::adapters::{PngFrameStore, PrintpdfDocumentWriter};
use page_capture::core::models::CaptureSettings;
use page_capture::core::orchestrators::RunOrchestrator;
use page_capture::global_constants::{APPLICATION_NAME, LOG_TAG_RUN};
use page_capture::ports::{platform_permissions, RdevPageAdvancer, XcapScreenCapturer};

#[derive(Parser)]
#[command(name = "page-capture")]
#[command(about = "Capture on-screen pages until the content repeats, then assemble them into a PDF")]
#[command(version)]
struct Cli {
    /// Settings file (defaults to settings.json in the user config directory)
    #[arg(short, long)]
    settings: Option<PathBuf>,

    /// Only assemble the frames already in the frame directory
    #[arg(long)]
    skip_capture: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    log::info!("{} Starting {}", LOG_TAG_RUN, APPLICATION_NAME);

    let settings = match &cli.settings {
        Some(settings_path) => CaptureSettings::load_from(settings_path)?,
        None => CaptureSettings::load()?,
    };

    if !cli.skip_capture {
        platform_permissions::warn_on_missing_permissions();
    }

    let mut orchestrator = RunOrchestrator::build(
        &settings,
        Arc::new(XcapScreenCapturer::initialize()),
        Arc::new(RdevPageAdvancer::initialize(
            settings.advance_target,
            settings.advance_action,
        )),
        Arc::new(PngFrameStore::new(
            settings.frames_directory.clone(),
            settings.frame_number_width,
        )),
        Arc::new(PrintpdfDocumentWriter::new()),
    )?;

    let report = if cli.skip_capture {
        orchestrator.run_assembly_only()?
    } else {
        orchestrator.run()?
    };

    log::info!(
        "{} Finished in state {}: {} pages written to {:?}",
        LOG_TAG_RUN,
        orchestrator.state(),
        report.assembly.page_count,
        report.assembly.output_path
    );

    Ok(())
}
