mod mouse_position_provider;
pub mod platform_permissions;
mod rdev_page_advancer;
mod xcap_screen_capturer;

pub use mouse_position_provider::SystemMousePositionProvider;
pub use rdev_page_advancer::RdevPageAdvancer;
pub use xcap_screen_capturer::XcapScreenCapturer;
