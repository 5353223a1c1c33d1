use clap::Parser;
use std::sync::Arc;
use std::time::Duration;

use page_capture::core::orchestrators::PointerReporter;
use page_capture::global_constants::{DEFAULT_POINTER_INTERVAL_MS, LOG_TAG_POINTER};
use page_capture::ports::SystemMousePositionProvider;

#[derive(Parser)]
#[command(name = "pointer-reporter")]
#[command(about = "Print the pointer position on a fixed interval until halted")]
#[command(version)]
struct Cli {
    /// Milliseconds between position reports
    #[arg(long, default_value_t = DEFAULT_POINTER_INTERVAL_MS)]
    interval_ms: u64,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    log::info!("{} Starting pointer reporter", LOG_TAG_POINTER);

    let reporter = PointerReporter::build(
        Arc::new(SystemMousePositionProvider::initialize()),
        Duration::from_millis(cli.interval_ms),
    );

    let stdout = std::io::stdout();
    let mut output = stdout.lock();
    reporter.run(&mut output)
}
