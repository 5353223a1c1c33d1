mod png_frame_store;
mod printpdf_document_writer;

pub use png_frame_store::PngFrameStore;
pub use printpdf_document_writer::PrintpdfDocumentWriter;
