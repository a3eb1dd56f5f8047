//! Durable key-value record for the selected folder and the daily generations.
//!
//! The record is a small JSON document:
//!
//! ```json
//! {
//!   "folder_path": "/home/me/Pictures",
//!   "days_generated": { "2024-01-01": "/home/me/Pictures/x.png" }
//! }
//! ```
//!
//! Every call reads the file again so the file stays the single source of truth.

use crate::error::{AppError, Result};
use chrono::NaiveDate;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Calendar date to the image path generated on that date.
pub type GenerationRecord = BTreeMap<NaiveDate, String>;

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    folder_path: Option<String>,
    #[serde(default)]
    days_generated: GenerationRecord,
}

/// File-backed persistence store.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// Opens the store at `path`. The file is created on first write.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        info!("Using store at {}", path.display());
        Self { path }
    }

    /// Returns the selected folder, or `None` if none was ever selected.
    pub fn get_folder(&self) -> Result<Option<PathBuf>> {
        Ok(self.read()?.folder_path.map(PathBuf::from))
    }

    /// Like `get_folder`, but a missing folder is `StoreEmpty`.
    pub fn require_folder(&self) -> Result<PathBuf> {
        self.get_folder()?.ok_or(AppError::StoreEmpty)
    }

    /// Overwrites the selected folder.
    pub fn set_folder(&mut self, folder: &Path) -> Result<()> {
        let mut data = self.read()?;
        data.folder_path = Some(folder.to_string_lossy().into_owned());
        self.write(&data)
    }

    /// Returns every recorded generation, empty if none were stored yet.
    pub fn get_generation_record(&self) -> Result<GenerationRecord> {
        Ok(self.read()?.days_generated)
    }

    /// Merges one date entry into the stored record.
    pub fn set_generation_entry(&mut self, date: NaiveDate, image_path: &Path) -> Result<()> {
        let mut data = self.read()?;
        data.days_generated
            .insert(date, image_path.to_string_lossy().into_owned());
        self.write(&data)
    }

    fn read(&self) -> Result<StoreData> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(StoreData::default()),
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                return Err(AppError::StoreCorrupted(e.to_string()));
            }
            Err(e) => return Err(AppError::StoreUnavailable(e.to_string())),
        };

        if content.trim().is_empty() {
            return Ok(StoreData::default());
        }

        Ok(serde_json::from_str(&content)?)
    }

    fn write(&self, data: &StoreData) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(data)?;

        write_replacing(&self.path, json.as_bytes())?;
        debug!("Store written to {}", self.path.display());
        Ok(())
    }
}

/// Writes `contents` to a sibling temp file, then renames it over `path`.
///
/// The temp file is removed again when either step fails.
fn write_replacing(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let mut tmp_name = path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_default();
    tmp_name.push(".tmp");
    let tmp_path = path.with_file_name(tmp_name);

    let result = fs::write(&tmp_path, contents).and_then(|_| fs::rename(&tmp_path, path));
    if result.is_err() {
        let _ = fs::remove_file(&tmp_path);
    }
    result
}
