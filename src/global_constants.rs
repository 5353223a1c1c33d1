pub const APPLICATION_NAME: &str = "page-capture";
pub const DOCUMENT_TITLE: &str = "Captured pages";
pub const DOCUMENT_LAYER_NAME: &str = "Page";

pub const SETTINGS_DIRECTORY_NAME: &str = "page-capture";
pub const SETTINGS_FILE_NAME: &str = "settings.json";

pub const LOG_TAG_RUN: &str = "[RUN]";
pub const LOG_TAG_CAPTURE: &str = "[CAPTURE]";
pub const LOG_TAG_ASSEMBLY: &str = "[ASSEMBLY]";
pub const LOG_TAG_ADVANCE: &str = "[ADVANCE]";
pub const LOG_TAG_POINTER: &str = "[POINTER]";
pub const LOG_TAG_SETTINGS: &str = "[SETTINGS]";
pub const LOG_TAG_FRAME_STORE: &str = "[FRAME_STORE]";
pub const LOG_TAG_PDF: &str = "[PDF]";
pub const LOG_TAG_PERMISSIONS: &str = "[PERMISSIONS]";

pub const DEFAULT_CAPTURE_UPPER_LEFT: (i32, i32) = (278, 204);
pub const DEFAULT_CAPTURE_LOWER_RIGHT: (i32, i32) = (1012, 1351);
pub const DEFAULT_ADVANCE_TARGET: (i32, i32) = (1168, 791);

pub const DEFAULT_FRAMES_DIRECTORY: &str = "./screenshots";
pub const DEFAULT_OUTPUT_DOCUMENT_PATH: &str = "./output/final.pdf";

pub const DEFAULT_STARTUP_DELAY_MS: u64 = 5000;
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 1200;
pub const DEFAULT_POINTER_INTERVAL_MS: u64 = 1000;

pub const DEFAULT_FRAME_NUMBER_WIDTH: usize = 5;
pub const FRAME_FILE_EXTENSION: &str = "png";

pub const A4_PAGE_WIDTH_MM: f32 = 210.0;
pub const A4_PAGE_HEIGHT_MM: f32 = 297.0;
pub const DEFAULT_MARGIN_MM: f32 = 25.0;
pub const PDF_IMAGE_DPI: f32 = 300.0;
pub const MILLIMETERS_PER_INCH: f32 = 25.4;

pub const INPUT_EVENT_GAP_MS: u64 = 20;

pub const ERROR_CONTEXT_CAPTURE_MONITOR: &str = "failed to capture monitor image";
pub const ERROR_CONTEXT_SCALE_FACTOR: &str = "failed to read monitor scale factor";
pub const ERROR_CONTEXT_MONITOR_GEOMETRY: &str = "failed to read monitor geometry";
pub const ERROR_CONTEXT_PNG_ENCODE: &str = "failed to encode frame as PNG";

pub const MESSAGE_MOUSE_POSITION_FAILED: &str = "failed to get mouse position";

pub const USER_MESSAGE_STARTUP_COUNTDOWN_PREFIX: &str = "Starting process in";
pub const USER_MESSAGE_STARTUP_COUNTDOWN_SUFFIX: &str = "seconds.";
pub const USER_MESSAGE_SAVING_FRAME: &str = "Saving screenshot number";
pub const USER_MESSAGE_STARTING_CAPTURE: &str = "Starting getting screenshots";
pub const USER_MESSAGE_FINISHED_CAPTURE: &str = "Finished getting screenshots.";
pub const USER_MESSAGE_FINISHED_DOCUMENT: &str = "Finished creating PDF file.";
