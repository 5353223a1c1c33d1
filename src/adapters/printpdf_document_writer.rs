use anyhow::{Context, Result};
use printpdf::{image_crate, Image, ImageTransform, Mm, PdfDocument};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use crate::core::interfaces::ports::DocumentWriter;
use crate::core::models::PageLayout;
use crate::global_constants::{DOCUMENT_LAYER_NAME, DOCUMENT_TITLE, LOG_TAG_PDF, PDF_IMAGE_DPI};

struct DecodedFrame {
    width: u32,
    height: u32,
    rgb_data: Vec<u8>,
}

pub struct PrintpdfDocumentWriter {
    document_title: String,
    image_dpi: f32,
}

impl PrintpdfDocumentWriter {
    pub fn new() -> Self {
        Self {
            document_title: DOCUMENT_TITLE.to_string(),
            image_dpi: PDF_IMAGE_DPI,
        }
    }

    fn decode_frame(&self, frame_path: &Path) -> Result<DecodedFrame> {
        let rgb_image = image::open(frame_path)
            .with_context(|| format!("failed to decode frame {:?}", frame_path))?
            .to_rgb8();

        Ok(DecodedFrame {
            width: rgb_image.width(),
            height: rgb_image.height(),
            rgb_data: rgb_image.into_raw(),
        })
    }

    fn convert_to_pdf_image(&self, frame: DecodedFrame) -> Result<Image> {
        let rgb_image = image_crate::RgbImage::from_raw(frame.width, frame.height, frame.rgb_data)
            .context("decoded frame does not match its dimensions")?;

        Ok(Image::from_dynamic_image(&image_crate::DynamicImage::ImageRgb8(
            rgb_image,
        )))
    }

    fn create_parent_directory(&self, output_path: &Path) -> Result<()> {
        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create output directory {:?}", parent))?;
            }
        }
        Ok(())
    }
}

impl Default for PrintpdfDocumentWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentWriter for PrintpdfDocumentWriter {
    fn write_document(
        &self,
        frame_paths: &[PathBuf],
        page_layout: &PageLayout,
        output_path: &Path,
    ) -> Result<usize> {
        anyhow::ensure!(!frame_paths.is_empty(), "a document needs at least one frame");

        let page_width = Mm(page_layout.page_width_mm);
        let page_height = Mm(page_layout.page_height_mm);
        let (document, first_page, first_layer) = PdfDocument::new(
            self.document_title.as_str(),
            page_width,
            page_height,
            DOCUMENT_LAYER_NAME,
        );

        for (page_index, frame_path) in frame_paths.iter().enumerate() {
            let (page, layer) = if page_index == 0 {
                (first_page, first_layer)
            } else {
                document.add_page(page_width, page_height, DOCUMENT_LAYER_NAME)
            };
            let current_layer = document.get_page(page).get_layer(layer);

            let frame = self.decode_frame(frame_path)?;
            let placement = page_layout.placement_for_image(frame.width, frame.height, self.image_dpi);
            let pdf_image = self.convert_to_pdf_image(frame)?;

            pdf_image.add_to_layer(
                current_layer,
                ImageTransform {
                    translate_x: Some(Mm(placement.translate_x_mm)),
                    translate_y: Some(Mm(placement.translate_y_mm)),
                    scale_x: Some(placement.scale_x),
                    scale_y: Some(placement.scale_y),
                    dpi: Some(self.image_dpi),
                    ..Default::default()
                },
            );

            log::debug!(
                "{} page {} <- {:?}",
                LOG_TAG_PDF,
                page_index + 1,
                frame_path
            );
        }

        self.create_parent_directory(output_path)?;
        let output_file = File::create(output_path)
            .with_context(|| format!("failed to create {:?}", output_path))?;
        document
            .save(&mut BufWriter::new(output_file))
            .map_err(|error| anyhow::anyhow!("failed to save PDF: {:?}", error))?;

        log::info!(
            "{} saved {} pages to {:?}",
            LOG_TAG_PDF,
            frame_paths.len(),
            output_path
        );
        Ok(frame_paths.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn write_frames(directory: &Path, count: u32) -> Vec<PathBuf> {
        (1..=count)
            .map(|sequence_number| {
                let frame_path = directory.join(format!("{:05}.png", sequence_number));
                let shade = (sequence_number * 40) as u8;
                RgbaImage::from_pixel(30, 45, Rgba([shade, 0, 255 - shade, 255]))
                    .save(&frame_path)
                    .unwrap();
                frame_path
            })
            .collect()
    }

    fn count_pages(document_path: &Path) -> usize {
        lopdf::Document::load(document_path)
            .unwrap()
            .get_pages()
            .len()
    }

    #[test]
    fn test_three_frames_produce_three_pages() {
        let temp_dir = tempfile::tempdir().unwrap();
        let frame_paths = write_frames(temp_dir.path(), 3);
        let output_path = temp_dir.path().join("output").join("final.pdf");
        let writer = PrintpdfDocumentWriter::new();

        let page_count = writer
            .write_document(&frame_paths, &PageLayout::default(), &output_path)
            .unwrap();

        assert_eq!(page_count, 3);
        assert_eq!(count_pages(&output_path), 3);
    }

    #[test]
    fn test_existing_output_is_overwritten() {
        let temp_dir = tempfile::tempdir().unwrap();
        let frame_paths = write_frames(temp_dir.path(), 1);
        let output_path = temp_dir.path().join("final.pdf");
        std::fs::write(&output_path, b"stale contents").unwrap();
        let writer = PrintpdfDocumentWriter::new();

        writer
            .write_document(&frame_paths, &PageLayout::default(), &output_path)
            .unwrap();

        let written = std::fs::read(&output_path).unwrap();
        assert!(written.starts_with(b"%PDF"));
        assert_eq!(count_pages(&output_path), 1);
    }

    #[test]
    fn test_undecodable_frame_fails() {
        let temp_dir = tempfile::tempdir().unwrap();
        let broken_frame = temp_dir.path().join("00001.png");
        std::fs::write(&broken_frame, b"not a png").unwrap();
        let writer = PrintpdfDocumentWriter::new();

        let result = writer.write_document(
            &[broken_frame],
            &PageLayout::default(),
            &temp_dir.path().join("final.pdf"),
        );

        assert!(result.is_err());
    }

    #[test]
    fn test_empty_frame_list_fails() {
        let temp_dir = tempfile::tempdir().unwrap();
        let writer = PrintpdfDocumentWriter::new();

        let result = writer.write_document(
            &[],
            &PageLayout::default(),
            &temp_dir.path().join("final.pdf"),
        );

        assert!(result.is_err());
    }
}
