//! Core of the daily image selector: persistence, the daily gate and random
//! image selection. The slint shell in `main.rs` only renders what this
//! library returns.

pub mod clock;
pub mod config;
pub mod error;
pub mod file_utils;
pub mod gate;
pub mod image_loader;
pub mod selection;
pub mod services;
pub mod state;
pub mod store;
pub mod wait_format;
