use serde::{Deserialize, Serialize};

use crate::core::models::RunError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x_position: i32,
    pub y_position: i32,
}

impl ScreenPoint {
    pub fn at_coordinates(x_position: i32, y_position: i32) -> Self {
        log::debug!(
            "[SCREEN_POINT] creating point at ({}, {})",
            x_position,
            y_position
        );

        Self {
            x_position,
            y_position,
        }
    }
}

/// Axis-aligned screen rectangle captured on every iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureRegion {
    pub x_position: i32,
    pub y_position: i32,
    pub width: u32,
    pub height: u32,
}

impl CaptureRegion {
    /// Lower-right must be strictly below and to the right of upper-left.
    pub fn from_corners(upper_left: ScreenPoint, lower_right: ScreenPoint) -> Result<Self, RunError> {
        if lower_right.x_position <= upper_left.x_position
            || lower_right.y_position <= upper_left.y_position
        {
            return Err(RunError::InvalidConfiguration(format!(
                "capture lower-right corner ({}, {}) must be greater than upper-left corner ({}, {}) on both axes",
                lower_right.x_position,
                lower_right.y_position,
                upper_left.x_position,
                upper_left.y_position
            )));
        }

        let width = (i64::from(lower_right.x_position) - i64::from(upper_left.x_position)) as u32;
        let height = (i64::from(lower_right.y_position) - i64::from(upper_left.y_position)) as u32;

        log::debug!(
            "[SCREEN_REGION] capture region {}x{} at ({}, {})",
            width,
            height,
            upper_left.x_position,
            upper_left.y_position
        );

        Ok(Self {
            x_position: upper_left.x_position,
            y_position: upper_left.y_position,
            width,
            height,
        })
    }

    pub fn origin(&self) -> ScreenPoint {
        ScreenPoint {
            x_position: self.x_position,
            y_position: self.y_position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_corners_computes_origin_and_size() {
        let region = CaptureRegion::from_corners(
            ScreenPoint::at_coordinates(278, 204),
            ScreenPoint::at_coordinates(1012, 1351),
        )
        .unwrap();

        assert_eq!(region.x_position, 278);
        assert_eq!(region.y_position, 204);
        assert_eq!(region.width, 734);
        assert_eq!(region.height, 1147);
        assert_eq!(region.origin(), ScreenPoint::at_coordinates(278, 204));
    }

    #[test]
    fn test_from_corners_accepts_negative_origin() {
        let region = CaptureRegion::from_corners(
            ScreenPoint::at_coordinates(-1920, -10),
            ScreenPoint::at_coordinates(-1820, 90),
        )
        .unwrap();

        assert_eq!(region.width, 100);
        assert_eq!(region.height, 100);
    }

    #[test]
    fn test_from_corners_rejects_equal_x() {
        let result = CaptureRegion::from_corners(
            ScreenPoint::at_coordinates(100, 100),
            ScreenPoint::at_coordinates(100, 200),
        );

        assert!(matches!(result, Err(RunError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_from_corners_rejects_inverted_y() {
        let result = CaptureRegion::from_corners(
            ScreenPoint::at_coordinates(100, 300),
            ScreenPoint::at_coordinates(200, 200),
        );

        assert!(matches!(result, Err(RunError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_screen_point_deserializes_from_json() {
        let point: ScreenPoint =
            serde_json::from_str(r#"{"x_position": 12, "y_position": -4}"#).unwrap();

        assert_eq!(point, ScreenPoint::at_coordinates(12, -4));
    }
}
