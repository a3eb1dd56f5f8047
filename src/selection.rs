//! Random image selection with bounded retries.

use crate::error::{AppError, Result};
use crate::image_loader::{self, DisplayImage};
use log::{debug, info};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// A successfully chosen and prepared image.
#[derive(Debug, Clone)]
pub struct Selection {
    pub path: PathBuf,
    pub image: DisplayImage,
}

/// Parameters of the selection loop.
#[derive(Debug, Clone, Copy)]
pub struct SelectionOptions {
    pub max_attempts: usize,
    pub display_size: u32,
}

/// Picks random files from `files` until one decodes, at most `max_attempts` times.
///
/// Picks are independent and with replacement. A file that fails to decode
/// only costs one attempt.
pub fn select_random_image<R: Rng + ?Sized>(
    folder: &Path,
    files: &[OsString],
    options: SelectionOptions,
    rng: &mut R,
) -> Result<Selection> {
    if files.is_empty() {
        return Err(AppError::NoValidExtensions(folder.to_path_buf()));
    }

    for attempt in 1..=options.max_attempts {
        let Some(name) = files.choose(rng) else {
            break;
        };
        let path = folder.join(name);

        match image_loader::load_for_display(&path, options.display_size) {
            Ok(image) => {
                info!(
                    "Selected {} after {} attempt(s) ({}x{})",
                    path.display(),
                    attempt,
                    image.width,
                    image.height
                );
                return Ok(Selection { path, image });
            }
            Err(e) => debug!("Attempt {}: {}", attempt, e),
        }
    }

    Err(AppError::NoValidImageFound {
        attempts: options.max_attempts,
    })
}
