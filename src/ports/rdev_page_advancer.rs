use anyhow::Result;
use rdev::{simulate, Button, EventType, Key};
use std::time::Duration;

use crate::core::interfaces::ports::PageAdvancer;
use crate::core::models::{AdvanceAction, AdvanceKey, ScreenPoint};
use crate::global_constants::{INPUT_EVENT_GAP_MS, LOG_TAG_ADVANCE};

/// Injects a click or key press through the OS input queue.
pub struct RdevPageAdvancer {
    target: ScreenPoint,
    action: AdvanceAction,
    event_gap: Duration,
}

impl RdevPageAdvancer {
    pub fn initialize(target: ScreenPoint, action: AdvanceAction) -> Self {
        log::debug!(
            "{} initializing advancer: {} at ({}, {})",
            LOG_TAG_ADVANCE,
            action,
            target.x_position,
            target.y_position
        );

        Self {
            target,
            action,
            event_gap: Duration::from_millis(INPUT_EVENT_GAP_MS),
        }
    }

    fn map_advance_key(key: AdvanceKey) -> Key {
        match key {
            AdvanceKey::RightArrow => Key::RightArrow,
            AdvanceKey::DownArrow => Key::DownArrow,
            AdvanceKey::PageDown => Key::PageDown,
            AdvanceKey::Space => Key::Space,
            AdvanceKey::Return => Key::Return,
        }
    }

    fn build_event_sequence(&self) -> Vec<EventType> {
        match self.action {
            AdvanceAction::Click => vec![
                EventType::MouseMove {
                    x: f64::from(self.target.x_position),
                    y: f64::from(self.target.y_position),
                },
                EventType::ButtonPress(Button::Left),
                EventType::ButtonRelease(Button::Left),
            ],
            AdvanceAction::KeyPress(advance_key) => {
                let key = Self::map_advance_key(advance_key);
                vec![EventType::KeyPress(key), EventType::KeyRelease(key)]
            }
        }
    }

    fn send_event(&self, event_type: &EventType) -> Result<()> {
        simulate(event_type)
            .map_err(|error| anyhow::anyhow!("failed to simulate {:?}: {:?}", event_type, error))?;

        // Some platforms drop events that arrive back to back.
        std::thread::sleep(self.event_gap);
        Ok(())
    }
}

impl PageAdvancer for RdevPageAdvancer {
    fn advance_to_next_page(&self) -> Result<()> {
        log::debug!("{} advancing with {}", LOG_TAG_ADVANCE, self.action);

        for event_type in self.build_event_sequence() {
            self.send_event(&event_type)?;
        }

        Ok(())
    }
}
