mod document_writer;
mod frame_store;
mod mouse_position_provider;
mod page_advancer;
mod screen_capturer;

pub use document_writer::DocumentWriter;
pub use frame_store::FrameStore;
pub use mouse_position_provider::MousePositionProvider;
pub use page_advancer::PageAdvancer;
pub use screen_capturer::ScreenCapturer;
