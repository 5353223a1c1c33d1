use anyhow::Result;
use mouse_position::mouse_position::Mouse;

use crate::core::interfaces::ports::MousePositionProvider;
use crate::core::models::ScreenPoint;
use crate::global_constants::{LOG_TAG_POINTER, MESSAGE_MOUSE_POSITION_FAILED};

pub struct SystemMousePositionProvider;

impl SystemMousePositionProvider {
    pub fn initialize() -> Self {
        log::debug!("{} initializing mouse position provider", LOG_TAG_POINTER);
        Self
    }

    fn query_system_mouse_position(&self) -> Mouse {
        Mouse::get_mouse_position()
    }

    fn convert_mouse_result_to_point(&self, mouse_result: Mouse) -> Result<ScreenPoint> {
        match mouse_result {
            Mouse::Position { x, y } => {
                log::debug!("{} current position: ({}, {})", LOG_TAG_POINTER, x, y);
                Ok(ScreenPoint::at_coordinates(x, y))
            }
            Mouse::Error => {
                log::error!("{} {}", LOG_TAG_POINTER, MESSAGE_MOUSE_POSITION_FAILED);
                anyhow::bail!(MESSAGE_MOUSE_POSITION_FAILED)
            }
        }
    }
}

impl MousePositionProvider for SystemMousePositionProvider {
    fn get_current_mouse_position(&self) -> Result<ScreenPoint> {
        let mouse_position_result = self.query_system_mouse_position();
        self.convert_mouse_result_to_point(mouse_position_result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_mouse_result_with_valid_position_returns_point() {
        let provider = SystemMousePositionProvider::initialize();

        let point = provider
            .convert_mouse_result_to_point(Mouse::Position { x: 100, y: 200 })
            .unwrap();

        assert_eq!(point, ScreenPoint::at_coordinates(100, 200));
    }

    #[test]
    fn test_convert_mouse_result_with_error_fails() {
        let provider = SystemMousePositionProvider::initialize();

        let result = provider.convert_mouse_result_to_point(Mouse::Error);

        assert!(result.unwrap_err().to_string().contains("mouse position"));
    }

    #[test]
    fn test_convert_mouse_result_keeps_negative_coordinates() {
        let provider = SystemMousePositionProvider::initialize();

        let point = provider
            .convert_mouse_result_to_point(Mouse::Position { x: -50, y: -100 })
            .unwrap();

        assert_eq!(point.x_position, -50);
        assert_eq!(point.y_position, -100);
    }
}
