//! In-memory listing of the image files in the selected folder.

use crate::error::Result;
use crate::file_utils;
use log::debug;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Image file names of one folder, built lazily.
#[derive(Debug, Default)]
pub struct FileListCache {
    folder: Option<PathBuf>,
    files: Vec<OsString>,
}

impl FileListCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the cache with an already validated listing.
    pub fn replace(&mut self, folder: PathBuf, files: Vec<OsString>) {
        debug!("File list for {} replaced ({} files)", folder.display(), files.len());
        self.folder = Some(folder);
        self.files = files;
    }

    /// Returns the listing for `folder`, scanning it if the cache holds another folder or nothing.
    pub fn files_for(&mut self, folder: &Path) -> Result<&[OsString]> {
        if self.folder.as_deref() != Some(folder) || self.files.is_empty() {
            let start = std::time::Instant::now();
            let files = file_utils::validate_folder(folder)?;
            debug!(
                "Scanned {} in {:?}: {} image files",
                folder.display(),
                start.elapsed(),
                files.len()
            );
            self.replace(folder.to_path_buf(), files);
        }

        Ok(&self.files)
    }
}
