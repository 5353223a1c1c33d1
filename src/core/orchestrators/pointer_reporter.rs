use anyhow::{Context, Result};
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use crate::core::interfaces::ports::MousePositionProvider;
use crate::core::models::ScreenPoint;
use crate::global_constants::LOG_TAG_POINTER;

pub struct PointerReporter {
    mouse_provider: Arc<dyn MousePositionProvider>,
    interval: Duration,
}

impl PointerReporter {
    pub fn build(mouse_provider: Arc<dyn MousePositionProvider>, interval: Duration) -> Self {
        log::debug!("{} building reporter with interval {:?}", LOG_TAG_POINTER, interval);

        Self {
            mouse_provider,
            interval,
        }
    }

    pub fn report_position(&self, output: &mut dyn Write) -> Result<ScreenPoint> {
        let position = self.mouse_provider.get_current_mouse_position()?;

        writeln!(output, "{}, {}", position.x_position, position.y_position)
            .context("failed to write pointer position")?;
        output.flush().context("failed to flush pointer output")?;

        Ok(position)
    }

    /// Reports forever; only a failed query or write ends the loop.
    pub fn run(&self, output: &mut dyn Write) -> Result<()> {
        writeln!(
            output,
            "Returning mouse location every {} ms. Halt the program to stop...",
            self.interval.as_millis()
        )
        .context("failed to write banner")?;

        loop {
            std::thread::sleep(self.interval);
            self.report_position(output)?;
        }
    }
}
