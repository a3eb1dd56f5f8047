//! Application configuration constants and runtime settings.

use std::env;
use std::path::PathBuf;

/// Supported image file suffixes. Matching is a case-sensitive `ends_with`.
pub const SUPPORTED_IMAGE_EXTENSIONS: [&str; 6] = [".png", ".jpeg", ".jpg", ".gif", ".webp", ".bmp"];

/// How many random picks are tried before giving up on a folder.
pub const MAX_SELECTION_ATTEMPTS: usize = 5000;

/// Longer side of the displayed image, in pixels.
pub const DISPLAY_SIZE: u32 = 430;

/// Directory name used under the platform data directory.
pub const APP_DIR_NAME: &str = "daily-image-selector";

/// File name of the persisted record.
pub const STORE_FILE_NAME: &str = "store.json";

/// Environment variable overriding the store location.
pub const STORE_PATH_ENV: &str = "DAILY_IMAGE_STORE";

/// Settings resolved once at startup.
#[derive(Debug, Clone)]
pub struct Settings {
    pub store_path: PathBuf,
    pub max_attempts: usize,
    pub display_size: u32,
}

impl Settings {
    /// Resolves settings from the environment and platform directories.
    pub fn from_env() -> Self {
        Self {
            store_path: resolve_store_path(env::var_os(STORE_PATH_ENV).map(PathBuf::from)),
            max_attempts: MAX_SELECTION_ATTEMPTS,
            display_size: DISPLAY_SIZE,
        }
    }
}

/// Picks the store file: explicit override, then the platform data dir, then `./data`.
fn resolve_store_path(override_path: Option<PathBuf>) -> PathBuf {
    if let Some(path) = override_path.filter(|p| !p.as_os_str().is_empty()) {
        return path;
    }

    dirs::data_dir()
        .map(|dir| dir.join(APP_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from("data"))
        .join(STORE_FILE_NAME)
}
