use anyhow::Result;

use crate::core::models::CaptureBuffer;
use crate::global_constants::FRAME_FILE_EXTENSION;

/// One capture of the region, held in its encoded form.
///
/// Only the most recent persisted frame is kept alive by the capture loop.
#[derive(Debug, Clone)]
pub struct CapturedFrame {
    pub sequence_number: u32,
    pub width: u32,
    pub height: u32,
    png_bytes: Vec<u8>,
}

impl CapturedFrame {
    pub fn encode(sequence_number: u32, buffer: &CaptureBuffer) -> Result<Self> {
        let png_bytes = buffer.encode_png()?;

        log::debug!(
            "[FRAME] frame {} encoded: {}x{}, {} bytes",
            sequence_number,
            buffer.width,
            buffer.height,
            png_bytes.len()
        );

        Ok(Self {
            sequence_number,
            width: buffer.width,
            height: buffer.height,
            png_bytes,
        })
    }

    pub fn png_bytes(&self) -> &[u8] {
        &self.png_bytes
    }
}

/// Two frames match only when both exist and their PNG bytes are identical.
pub fn frames_have_identical_content(
    first: Option<&CapturedFrame>,
    second: Option<&CapturedFrame>,
) -> bool {
    match (first, second) {
        (Some(first), Some(second)) => first.png_bytes == second.png_bytes,
        _ => false,
    }
}

pub fn frame_file_name(sequence_number: u32, number_width: usize) -> String {
    format!(
        "{:0width$}.{}",
        sequence_number,
        FRAME_FILE_EXTENSION,
        width = number_width
    )
}

/// Highest sequence number whose file name still sorts in capture order.
pub fn frame_number_capacity(number_width: usize) -> u64 {
    10u64.saturating_pow(number_width as u32).saturating_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_frame(sequence_number: u32, fill: u8) -> CapturedFrame {
        let buffer = CaptureBuffer::build_from_raw_data(1.0, 8, 8, vec![fill; 8 * 8 * 4]);
        CapturedFrame::encode(sequence_number, &buffer).unwrap()
    }

    #[test]
    fn test_absent_frames_are_never_equal() {
        let frame = build_frame(1, 0);

        assert!(!frames_have_identical_content(None, Some(&frame)));
        assert!(!frames_have_identical_content(Some(&frame), None));
        assert!(!frames_have_identical_content(None, None));
    }

    #[test]
    fn test_independently_encoded_identical_pixels_are_equal() {
        let first = build_frame(1, 42);
        let second = build_frame(2, 42);

        assert!(frames_have_identical_content(Some(&first), Some(&second)));
    }

    #[test]
    fn test_single_pixel_difference_is_not_equal() {
        let first = build_frame(1, 42);
        let mut raw_data = vec![42u8; 8 * 8 * 4];
        raw_data[17] = 43;
        let changed = CapturedFrame::encode(
            2,
            &CaptureBuffer::build_from_raw_data(1.0, 8, 8, raw_data),
        )
        .unwrap();

        assert!(!frames_have_identical_content(Some(&first), Some(&changed)));
    }

    #[test]
    fn test_frame_file_name_is_zero_padded() {
        assert_eq!(frame_file_name(1, 5), "00001.png");
        assert_eq!(frame_file_name(42, 5), "00042.png");
        assert_eq!(frame_file_name(99999, 5), "99999.png");
    }

    #[test]
    fn test_frame_file_names_sort_in_capture_order_within_capacity() {
        let capacity = frame_number_capacity(3) as u32;
        let mut names: Vec<String> = (1..=capacity).rev().map(|n| frame_file_name(n, 3)).collect();

        names.sort();

        let expected: Vec<String> = (1..=capacity).map(|n| frame_file_name(n, 3)).collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn test_frame_file_names_break_order_past_capacity() {
        assert_eq!(frame_number_capacity(5), 99_999);

        let last_in_capacity = frame_file_name(99_999, 5);
        let first_past_capacity = frame_file_name(100_000, 5);

        assert_eq!(first_past_capacity, "100000.png");
        assert!(first_past_capacity < last_in_capacity);
    }
}
