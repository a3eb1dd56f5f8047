//! Unified error types for the daily image selector.

use std::path::PathBuf;
use thiserror::Error;

/// Application-specific errors.
///
/// Every variant except `DecodeFailure` ends the current user action.
#[derive(Debug, Error)]
pub enum AppError {
    /// The store file could not be read or written
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),
    /// The store file exists but cannot be parsed
    #[error("store corrupted: {0}")]
    StoreCorrupted(String),
    /// No folder has been selected yet
    #[error("no folder has been selected")]
    StoreEmpty,
    /// The chosen or stored folder is not a readable directory
    #[error("folder unavailable: {}", .0.display())]
    FolderUnavailable(PathBuf),
    /// The folder contains no files at all
    #[error("folder contains no files: {}", .0.display())]
    EmptyFolder(PathBuf),
    /// The folder contains files, none with a supported extension
    #[error("folder contains no files with supported extensions: {}", .0.display())]
    NoValidExtensions(PathBuf),
    /// Every attempt picked a file that failed to decode
    #[error("no decodable image found after {attempts} attempts")]
    NoValidImageFound { attempts: usize },
    /// Today's recorded image no longer exists
    #[error("previously generated image is missing: {}", .0.display())]
    StaleReference(PathBuf),
    /// A single file failed to decode or encode
    #[error("failed to decode {}: {reason}", .path.display())]
    DecodeFailure { path: PathBuf, reason: String },
}

impl AppError {
    /// Message shown to the user, telling them what to do next.
    pub fn user_message(&self) -> String {
        match self {
            AppError::StoreUnavailable(_) => {
                "The saved data could not be accessed.\nPlease try again.".to_string()
            }
            AppError::StoreCorrupted(_) => {
                "The saved folder selection was corrupted and cannot be read.\nPlease select a folder again!"
                    .to_string()
            }
            AppError::StoreEmpty => {
                "You haven't selected a folder yet!\nPlease use the \"Select folder\" button to do so!"
                    .to_string()
            }
            AppError::FolderUnavailable(path) => format!(
                "The folder {} cannot be opened.\nIt might have been moved or deleted. Please select a folder again!",
                path.display()
            ),
            AppError::EmptyFolder(_) => {
                "The selected directory contains no files!\nPlease select a different folder!"
                    .to_string()
            }
            AppError::NoValidExtensions(_) => {
                "The selected directory contains no files with valid extensions!\nPlease select a different folder!"
                    .to_string()
            }
            AppError::NoValidImageFound { attempts } => format!(
                "No valid image was found in the given directory after {} files were checked.\nPlease consider selecting a different folder!",
                attempts
            ),
            AppError::StaleReference(_) => {
                "Unfortunately, today's image couldn't be found.\nPlease configure the selected folder, as it might have been moved or deleted."
                    .to_string()
            }
            AppError::DecodeFailure { .. } => {
                "An unexpected error occurred. Please try again.".to_string()
            }
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::StoreUnavailable(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            AppError::StoreUnavailable(err.to_string())
        } else {
            AppError::StoreCorrupted(err.to_string())
        }
    }
}

/// Type alias for Results in this application.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_errors_map_to_corrupted() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        assert!(matches!(AppError::from(err), AppError::StoreCorrupted(_)));
    }

    #[test]
    fn test_io_errors_map_to_unavailable() {
        let err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert!(matches!(AppError::from(err), AppError::StoreUnavailable(_)));
    }

    #[test]
    fn test_user_messages_are_distinct() {
        let folder = PathBuf::from("/imgs");
        let errors = [
            AppError::StoreUnavailable("x".into()),
            AppError::StoreCorrupted("x".into()),
            AppError::StoreEmpty,
            AppError::FolderUnavailable(folder.clone()),
            AppError::EmptyFolder(folder.clone()),
            AppError::NoValidExtensions(folder.clone()),
            AppError::NoValidImageFound { attempts: 5000 },
            AppError::StaleReference(folder.join("x.png")),
        ];
        let messages: std::collections::HashSet<String> =
            errors.iter().map(AppError::user_message).collect();
        assert_eq!(messages.len(), errors.len());
    }
}
