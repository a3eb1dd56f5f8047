//! UI module for handling user interactions and UI updates.
//!
//! Threading model:
//! - `slint::spawn_local`: the folder dialog, which must run on the main thread
//! - `rayon::spawn`: folder validation and image generation, which decode files
//! - `slint::invoke_from_event_loop`: hands results from rayon back to the UI thread
//!
//! The `busy` flag disables every action until the running one has reported back.

pub mod handlers;
pub mod image_display;
mod state_helpers;

pub use handlers::setup_handlers;
pub use state_helpers::*;
