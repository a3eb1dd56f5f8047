//! State management for the daily image selector.

use crate::clock::SystemClock;
use crate::config::Settings;
use crate::services::DailyImageSelector;
use rand::rngs::StdRng;
use std::sync::{Arc, Mutex};

pub mod file_list;

pub use file_list::FileListCache;

/// Selector used by the running application.
pub type AppSelector = DailyImageSelector<SystemClock, StdRng>;

/// Application-wide state container.
///
/// The selector owns the store; the mutex keeps folder selection and
/// generation from interleaving their read-modify-write cycles.
#[derive(Clone)]
pub struct AppState {
    pub selector: Arc<Mutex<AppSelector>>,
}

impl AppState {
    pub fn new(settings: &Settings) -> Self {
        Self {
            selector: Arc::new(Mutex::new(DailyImageSelector::from_settings(settings))),
        }
    }
}
