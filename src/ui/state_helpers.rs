//! Helper functions to set related ViewState properties together.

use daily_image::error::AppError;
use log::error;
use slint::ComponentHandle;
use std::path::Path;

/// Enables or disables the action buttons.
pub fn set_busy(ui: &crate::AppWindow, busy: bool) {
    ui.global::<crate::ViewState>().set_busy(busy);
}

/// Shows the currently stored folder.
pub fn set_folder_info(ui: &crate::AppWindow, folder: Option<&Path>) {
    let text = folder
        .map(|f| f.display().to_string())
        .unwrap_or_default();
    ui.global::<crate::ViewState>().set_folder_path(text.into());
}

/// Sets the status line, or clears it with `None`.
pub fn set_status(ui: &crate::AppWindow, status: Option<&str>) {
    ui.global::<crate::ViewState>()
        .set_status_message(status.unwrap_or_default().into());
}

/// Logs an error and shows its user-facing message.
pub fn set_error(ui: &crate::AppWindow, prefix: &str, err: &AppError) {
    error!("{}: {}", prefix, err);
    ui.global::<crate::ViewState>()
        .set_error_message(err.user_message().into());
}

/// Clears the error line.
pub fn clear_error(ui: &crate::AppWindow) {
    ui.global::<crate::ViewState>()
        .set_error_message("".into());
}
