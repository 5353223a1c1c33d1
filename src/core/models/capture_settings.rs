use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::models::{CaptureRegion, PageLayout, RunError, ScreenPoint};
use crate::global_constants::{self, LOG_TAG_SETTINGS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdvanceKey {
    RightArrow,
    DownArrow,
    PageDown,
    Space,
    Return,
}

/// How the next page is requested once a frame has been saved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdvanceAction {
    Click,
    KeyPress(AdvanceKey),
}

impl Default for AdvanceAction {
    fn default() -> Self {
        AdvanceAction::Click
    }
}

impl fmt::Display for AdvanceAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdvanceAction::Click => write!(f, "Click"),
            AdvanceAction::KeyPress(key) => write!(f, "KeyPress({:?})", key),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureSettings {
    pub capture_upper_left: ScreenPoint,
    pub capture_lower_right: ScreenPoint,
    pub advance_target: ScreenPoint,
    #[serde(default)]
    pub advance_action: AdvanceAction,
    pub frames_directory: PathBuf,
    pub output_document_path: PathBuf,
    pub startup_delay_ms: u64,
    pub settle_delay_ms: u64,
    #[serde(default)]
    pub page_layout: PageLayout,
    #[serde(default = "default_frame_number_width")]
    pub frame_number_width: usize,
}

fn default_frame_number_width() -> usize {
    global_constants::DEFAULT_FRAME_NUMBER_WIDTH
}

impl Default for CaptureSettings {
    fn default() -> Self {
        let (upper_left_x, upper_left_y) = global_constants::DEFAULT_CAPTURE_UPPER_LEFT;
        let (lower_right_x, lower_right_y) = global_constants::DEFAULT_CAPTURE_LOWER_RIGHT;
        let (advance_x, advance_y) = global_constants::DEFAULT_ADVANCE_TARGET;

        Self {
            capture_upper_left: ScreenPoint::at_coordinates(upper_left_x, upper_left_y),
            capture_lower_right: ScreenPoint::at_coordinates(lower_right_x, lower_right_y),
            advance_target: ScreenPoint::at_coordinates(advance_x, advance_y),
            advance_action: AdvanceAction::default(),
            frames_directory: PathBuf::from(global_constants::DEFAULT_FRAMES_DIRECTORY),
            output_document_path: PathBuf::from(global_constants::DEFAULT_OUTPUT_DOCUMENT_PATH),
            startup_delay_ms: global_constants::DEFAULT_STARTUP_DELAY_MS,
            settle_delay_ms: global_constants::DEFAULT_SETTLE_DELAY_MS,
            page_layout: PageLayout::default(),
            frame_number_width: global_constants::DEFAULT_FRAME_NUMBER_WIDTH,
        }
    }
}

impl CaptureSettings {
    /// Loads from the user config directory, writing defaults there on first use.
    pub fn load() -> anyhow::Result<Self> {
        let settings_path = Self::get_settings_file_path()?;
        Self::load_from(&settings_path)
    }

    pub fn load_from(settings_path: &Path) -> anyhow::Result<Self> {
        if !settings_path.exists() {
            log::info!(
                "{} No settings file at {:?}, writing defaults",
                LOG_TAG_SETTINGS,
                settings_path
            );
            let default_settings = Self::default();
            default_settings.save_to(settings_path)?;
            return Ok(default_settings);
        }

        let contents = std::fs::read_to_string(settings_path)?;
        let settings: CaptureSettings = serde_json::from_str(&contents)?;

        log::info!("{} Loaded settings from {:?}", LOG_TAG_SETTINGS, settings_path);
        log::debug!(
            "{} Capture corners: {:?} -> {:?}",
            LOG_TAG_SETTINGS,
            settings.capture_upper_left,
            settings.capture_lower_right
        );
        log::debug!(
            "{} Advance: {} at {:?}",
            LOG_TAG_SETTINGS,
            settings.advance_action,
            settings.advance_target
        );

        Ok(settings)
    }

    pub fn save_to(&self, settings_path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = settings_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(settings_path, contents)?;

        log::info!("{} Saved settings to {:?}", LOG_TAG_SETTINGS, settings_path);
        Ok(())
    }

    fn get_settings_file_path() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join(global_constants::SETTINGS_DIRECTORY_NAME);

        Ok(config_dir.join(global_constants::SETTINGS_FILE_NAME))
    }

    pub fn capture_region(&self) -> Result<CaptureRegion, RunError> {
        CaptureRegion::from_corners(self.capture_upper_left, self.capture_lower_right)
    }

    pub fn startup_delay(&self) -> Duration {
        Duration::from_millis(self.startup_delay_ms)
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    pub fn validate(&self) -> Result<(), RunError> {
        self.capture_region()?;
        self.page_layout.validate()?;

        if self.frame_number_width == 0 {
            return Err(RunError::InvalidConfiguration(
                "frame_number_width must be at least 1".to_string(),
            ));
        }

        if self.output_document_path.as_os_str().is_empty() {
            return Err(RunError::InvalidConfiguration(
                "output_document_path must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_match_reference_constants() {
        let settings = CaptureSettings::default();

        assert_eq!(settings.capture_upper_left, ScreenPoint::at_coordinates(278, 204));
        assert_eq!(settings.capture_lower_right, ScreenPoint::at_coordinates(1012, 1351));
        assert_eq!(settings.advance_target, ScreenPoint::at_coordinates(1168, 791));
        assert_eq!(settings.advance_action, AdvanceAction::Click);
        assert_eq!(settings.startup_delay(), Duration::from_secs(5));
        assert_eq!(settings.settle_delay(), Duration::from_millis(1200));
        assert_eq!(settings.frame_number_width, 5);
        assert_eq!(settings.output_document_path, PathBuf::from("./output/final.pdf"));
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_inverted_capture_corners() {
        let settings = CaptureSettings {
            capture_upper_left: ScreenPoint::at_coordinates(500, 500),
            capture_lower_right: ScreenPoint::at_coordinates(400, 600),
            ..CaptureSettings::default()
        };

        assert!(matches!(
            settings.validate(),
            Err(RunError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_validate_rejects_zero_frame_number_width() {
        let settings = CaptureSettings {
            frame_number_width: 0,
            ..CaptureSettings::default()
        };

        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_deserialization_fills_optional_fields_with_defaults() {
        let json = r#"{
            "capture_upper_left": {"x_position": 0, "y_position": 0},
            "capture_lower_right": {"x_position": 800, "y_position": 600},
            "advance_target": {"x_position": 900, "y_position": 300},
            "frames_directory": "frames",
            "output_document_path": "book.pdf",
            "startup_delay_ms": 0,
            "settle_delay_ms": 250
        }"#;

        let settings: CaptureSettings = serde_json::from_str(json).unwrap();

        assert_eq!(settings.advance_action, AdvanceAction::Click);
        assert_eq!(settings.page_layout, PageLayout::default());
        assert_eq!(settings.frame_number_width, 5);
        assert_eq!(settings.settle_delay(), Duration::from_millis(250));
    }

    #[test]
    fn test_key_press_action_deserializes() {
        let action: AdvanceAction = serde_json::from_str(r#"{"KeyPress": "RightArrow"}"#).unwrap();

        assert_eq!(action, AdvanceAction::KeyPress(AdvanceKey::RightArrow));
        assert_eq!(format!("{}", action), "KeyPress(RightArrow)");
    }

    #[test]
    fn test_load_from_missing_file_writes_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        let settings_path = temp_dir.path().join("nested").join("settings.json");

        let settings = CaptureSettings::load_from(&settings_path).unwrap();

        assert!(settings_path.exists());
        assert_eq!(settings.settle_delay_ms, 1200);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let settings_path = temp_dir.path().join("settings.json");
        let original_settings = CaptureSettings {
            advance_action: AdvanceAction::KeyPress(AdvanceKey::PageDown),
            settle_delay_ms: 900,
            frame_number_width: 6,
            ..CaptureSettings::default()
        };

        original_settings.save_to(&settings_path).unwrap();
        let loaded_settings = CaptureSettings::load_from(&settings_path).unwrap();

        assert_eq!(loaded_settings.advance_action, original_settings.advance_action);
        assert_eq!(loaded_settings.settle_delay_ms, 900);
        assert_eq!(loaded_settings.frame_number_width, 6);
        assert_eq!(loaded_settings.page_layout, original_settings.page_layout);
    }

    #[test]
    fn test_load_from_malformed_file_fails() {
        let temp_dir = tempfile::tempdir().unwrap();
        let settings_path = temp_dir.path().join("settings.json");
        std::fs::write(&settings_path, "{ not json").unwrap();

        assert!(CaptureSettings::load_from(&settings_path).is_err());
    }
}
