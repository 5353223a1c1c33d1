use anyhow::{Context, Result};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::interfaces::ports::FrameStore;
use crate::core::models::{frame_file_name, CapturedFrame};
use crate::global_constants::LOG_TAG_FRAME_STORE;

/// Stores each frame as `<directory>/<zero-padded number>.png`.
pub struct PngFrameStore {
    directory: PathBuf,
    frame_number_width: usize,
}

impl PngFrameStore {
    pub fn new(directory: PathBuf, frame_number_width: usize) -> Self {
        log::debug!(
            "{} using {:?} with {}-digit frame numbers",
            LOG_TAG_FRAME_STORE,
            directory,
            frame_number_width
        );

        Self {
            directory,
            frame_number_width,
        }
    }

    /// Names of the directory's non-directory entries, in read order.
    fn frame_file_names(&self) -> Result<Vec<OsString>> {
        let mut file_names = Vec::new();

        for entry in fs::read_dir(&self.directory)
            .with_context(|| format!("failed to read frame directory {:?}", self.directory))?
        {
            let entry = entry.with_context(|| {
                format!("failed to read entry in frame directory {:?}", self.directory)
            })?;
            let file_type = entry
                .file_type()
                .with_context(|| format!("failed to inspect {:?}", entry.path()))?;

            if file_type.is_dir() {
                log::debug!(
                    "{} skipping sub-directory {:?}",
                    LOG_TAG_FRAME_STORE,
                    entry.path()
                );
                continue;
            }

            file_names.push(entry.file_name());
        }

        Ok(file_names)
    }
}

impl FrameStore for PngFrameStore {
    fn location(&self) -> &Path {
        &self.directory
    }

    fn prepare(&self) -> Result<usize> {
        fs::create_dir_all(&self.directory)
            .with_context(|| format!("failed to create frame directory {:?}", self.directory))?;

        Ok(self.frame_file_names()?.len())
    }

    fn frame_path(&self, sequence_number: u32) -> PathBuf {
        self.directory
            .join(frame_file_name(sequence_number, self.frame_number_width))
    }

    fn persist_frame(&self, frame: &CapturedFrame) -> Result<PathBuf> {
        let frame_path = self.frame_path(frame.sequence_number);

        fs::write(&frame_path, frame.png_bytes())
            .with_context(|| format!("failed to write frame {:?}", frame_path))?;

        log::debug!(
            "{} wrote {} bytes to {:?}",
            LOG_TAG_FRAME_STORE,
            frame.png_bytes().len(),
            frame_path
        );
        Ok(frame_path)
    }

    fn list_frames(&self) -> Result<Vec<PathBuf>> {
        let mut file_names = self.frame_file_names()?;
        file_names.sort();

        log::debug!(
            "{} found {} frames in {:?}",
            LOG_TAG_FRAME_STORE,
            file_names.len(),
            self.directory
        );

        Ok(file_names
            .into_iter()
            .map(|file_name| self.directory.join(file_name))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::CaptureBuffer;

    fn build_frame(sequence_number: u32, fill: u8) -> CapturedFrame {
        let buffer = CaptureBuffer::build_from_raw_data(1.0, 2, 2, vec![fill; 16]);
        CapturedFrame::encode(sequence_number, &buffer).unwrap()
    }

    fn listed_names(store: &PngFrameStore) -> Vec<String> {
        store
            .list_frames()
            .unwrap()
            .iter()
            .map(|path| path.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_prepare_creates_missing_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = PngFrameStore::new(temp_dir.path().join("screenshots"), 5);

        let existing_entries = store.prepare().unwrap();

        assert_eq!(existing_entries, 0);
        assert!(temp_dir.path().join("screenshots").is_dir());
    }

    #[test]
    fn test_prepare_counts_existing_entries() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join("00001.png"), b"old").unwrap();
        let store = PngFrameStore::new(temp_dir.path().to_path_buf(), 5);

        assert_eq!(store.prepare().unwrap(), 1);
    }

    #[test]
    fn test_prepare_does_not_count_sub_directories() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join("00001.png"), b"old").unwrap();
        fs::create_dir(temp_dir.path().join("archive")).unwrap();
        let store = PngFrameStore::new(temp_dir.path().to_path_buf(), 5);

        assert_eq!(store.prepare().unwrap(), 1);
    }

    #[test]
    fn test_persist_frame_writes_encoded_bytes_under_padded_name() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = PngFrameStore::new(temp_dir.path().to_path_buf(), 5);
        let frame = build_frame(7, 128);

        let frame_path = store.persist_frame(&frame).unwrap();

        assert_eq!(frame_path, temp_dir.path().join("00007.png"));
        assert_eq!(fs::read(&frame_path).unwrap(), frame.png_bytes());
        let decoded = image::open(&frame_path).unwrap();
        assert_eq!(decoded.width(), 2);
        assert_eq!(decoded.height(), 2);
    }

    #[test]
    fn test_list_frames_returns_capture_order() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = PngFrameStore::new(temp_dir.path().to_path_buf(), 5);
        for sequence_number in [10, 2, 1, 100, 9] {
            store.persist_frame(&build_frame(sequence_number, 0)).unwrap();
        }

        let names = listed_names(&store);

        assert_eq!(
            names,
            vec!["00001.png", "00002.png", "00009.png", "00010.png", "00100.png"]
        );
    }

    #[test]
    fn test_list_frames_includes_foreign_files_and_skips_directories() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = PngFrameStore::new(temp_dir.path().to_path_buf(), 5);
        store.persist_frame(&build_frame(1, 0)).unwrap();
        fs::write(temp_dir.path().join("notes.txt"), b"x").unwrap();
        fs::create_dir(temp_dir.path().join("archive")).unwrap();

        let names = listed_names(&store);

        assert_eq!(names, vec!["00001.png", "notes.txt"]);
    }

    #[test]
    fn test_list_frames_fails_for_missing_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = PngFrameStore::new(temp_dir.path().join("absent"), 5);

        assert!(store.list_frames().is_err());
    }

    #[test]
    fn test_persist_frame_fails_when_directory_is_missing() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = PngFrameStore::new(temp_dir.path().join("absent"), 5);

        assert!(store.persist_frame(&build_frame(1, 0)).is_err());
    }
}
