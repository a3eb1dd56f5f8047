//! Service for selecting folders and generating the image of the day.
//!
//! Coordinates the store, the daily gate, the file list cache and the
//! selection loop. Every call runs to completion and leaves the service ready
//! for the next action, whatever the outcome.

use crate::clock::{Clock, SystemClock};
use crate::config::Settings;
use crate::error::{AppError, Result};
use crate::file_utils;
use crate::gate::{self, GateDecision, PreviousImage};
use crate::image_loader::{self, DisplayImage};
use crate::selection::{self, Selection, SelectionOptions};
use crate::state::FileListCache;
use crate::store::Store;
use log::{info, warn};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};

/// What the display surface should show after a generation attempt.
#[derive(Debug, Default)]
pub struct GenerationOutcome {
    pub image: Option<DisplayImage>,
    pub source: Option<PathBuf>,
    pub status: Option<String>,
    pub error: Option<AppError>,
}

impl GenerationOutcome {
    fn failed(error: AppError) -> Self {
        Self {
            error: Some(error),
            ..Self::default()
        }
    }

    fn displayed(selection: Selection) -> Self {
        Self {
            image: Some(selection.image),
            source: Some(selection.path),
            ..Self::default()
        }
    }
}

/// Message shown when today's image was already generated.
pub fn already_generated_message(wait: &str) -> String {
    format!(
        "You already generated an image today!\nTime until you can generate again: {}.",
        wait
    )
}

/// The daily image selector.
pub struct DailyImageSelector<C, R> {
    store: Store,
    files: FileListCache,
    clock: C,
    rng: R,
    options: SelectionOptions,
}

impl DailyImageSelector<SystemClock, StdRng> {
    /// Creates a selector backed by the system clock and an OS-seeded RNG.
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            Store::open(settings.store_path.clone()),
            SystemClock,
            StdRng::from_os_rng(),
            SelectionOptions {
                max_attempts: settings.max_attempts,
                display_size: settings.display_size,
            },
        )
    }
}

impl<C: Clock, R: Rng> DailyImageSelector<C, R> {
    pub fn new(store: Store, clock: C, rng: R, options: SelectionOptions) -> Self {
        Self {
            store,
            files: FileListCache::new(),
            clock,
            rng,
            options,
        }
    }

    #[cfg(test)]
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Currently stored folder, if any.
    pub fn current_folder(&self) -> Result<Option<PathBuf>> {
        self.store.get_folder()
    }

    /// Validates and stores a newly chosen folder.
    ///
    /// On rejection the previously stored folder stays in place.
    pub fn select_folder(&mut self, folder: &Path) -> Result<PathBuf> {
        let files = file_utils::validate_folder(folder)?;
        self.store.set_folder(folder)?;
        info!("Folder selected: {} ({} image files)", folder.display(), files.len());
        self.files.replace(folder.to_path_buf(), files);
        Ok(folder.to_path_buf())
    }

    /// Generates a new image, or explains why it cannot today.
    ///
    /// With `daily_generations` off the gate is skipped and nothing is recorded.
    pub fn generate(&mut self, daily_generations: bool) -> GenerationOutcome {
        let today = if daily_generations {
            match gate::check(&self.store, self.clock.now()) {
                Ok(GateDecision::Allowed { today }) => Some(today),
                Ok(GateDecision::Blocked {
                    previous,
                    wait_message,
                    ..
                }) => return self.blocked_outcome(previous, &wait_message),
                Err(e) => return GenerationOutcome::failed(e),
            }
        } else {
            None
        };

        let selection = match self.select() {
            Ok(selection) => selection,
            Err(e) => return GenerationOutcome::failed(e),
        };

        let commit = today.map(|today| self.store.set_generation_entry(today, &selection.path));
        let mut outcome = GenerationOutcome::displayed(selection);
        if let Some(Err(e)) = commit {
            warn!("Failed to record today's image: {}", e);
            outcome.error = Some(e);
        }
        outcome
    }

    fn select(&mut self) -> Result<Selection> {
        let folder = self.store.require_folder()?;
        if !folder.is_dir() {
            return Err(AppError::FolderUnavailable(folder));
        }

        let files = self.files.files_for(&folder)?;
        selection::select_random_image(&folder, files, self.options, &mut self.rng)
    }

    fn blocked_outcome(&self, previous: PreviousImage, wait_message: &str) -> GenerationOutcome {
        let mut outcome = GenerationOutcome {
            status: Some(already_generated_message(wait_message)),
            ..GenerationOutcome::default()
        };

        match previous {
            PreviousImage::Available(path) => {
                match image_loader::load_for_display(&path, self.options.display_size) {
                    Ok(image) => outcome.image = Some(image),
                    Err(e) => warn!("Could not display today's image again: {}", e),
                }
                outcome.source = Some(path);
            }
            PreviousImage::Stale(path) => {
                outcome.error = Some(AppError::StaleReference(path));
            }
        }

        outcome
    }
}
