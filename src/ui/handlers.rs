//! Event handlers for UI callbacks.
//!
//! Sets up the Logic callbacks (select_folder, generate) using the
//! appropriate threading model for each operation type.

use crate::ui::image_display::{prepare, show_outcome};
use crate::ui::{clear_error, set_busy, set_error, set_folder_info};
use daily_image::state::{AppSelector, AppState};
use log::debug;
use rfd::AsyncFileDialog;
use slint::ComponentHandle;
use std::sync::{MutexGuard, PoisonError};

fn lock_selector(state: &AppState) -> MutexGuard<'_, AppSelector> {
    state
        .selector
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

/// Shows the stored folder, or why it cannot be read.
fn show_initial_folder(ui: &crate::AppWindow, state: &AppState) {
    match lock_selector(state).current_folder() {
        Ok(folder) => set_folder_info(ui, folder.as_deref()),
        Err(e) => set_error(ui, "Failed to read stored folder", &e),
    }
}

/// Sets up all UI event handlers for the application.
pub fn setup_handlers(ui: &crate::AppWindow, state: AppState) {
    show_initial_folder(ui, &state);

    // Folder selection handler
    // Uses slint::spawn_local because AsyncFileDialog must run on the main thread
    ui.global::<crate::Logic>().on_select_folder({
        let ui_handle = ui.as_weak();
        let state = state.clone();
        move || {
            let ui_handle = ui_handle.clone();
            let state = state.clone();

            if let Some(ui) = ui_handle.upgrade() {
                if ui.global::<crate::ViewState>().get_busy() {
                    return;
                }
                set_busy(&ui, true);
            }

            let _ = slint::spawn_local(async move {
                let Some(folder_handle) = AsyncFileDialog::new()
                    .set_title("Select folder")
                    .pick_folder()
                    .await
                else {
                    debug!("Folder selection cancelled");
                    if let Some(ui) = ui_handle.upgrade() {
                        set_busy(&ui, false);
                    }
                    return;
                };

                let folder = folder_handle.path().to_path_buf();

                // Validation lists the folder, so it runs on rayon.
                rayon::spawn(move || {
                    let result = lock_selector(&state).select_folder(&folder);

                    let _ = slint::invoke_from_event_loop(move || {
                        if let Some(ui) = ui_handle.upgrade() {
                            match result {
                                Ok(folder) => {
                                    set_folder_info(&ui, Some(&folder));
                                    clear_error(&ui);
                                }
                                Err(e) => set_error(&ui, "Folder rejected", &e),
                            }
                            set_busy(&ui, false);
                        }
                    });
                });
            });
        }
    });

    // Generate handler
    ui.global::<crate::Logic>().on_generate({
        let ui_handle = ui.as_weak();
        let state = state.clone();
        move || {
            let Some(ui) = ui_handle.upgrade() else {
                return;
            };
            let view_state = ui.global::<crate::ViewState>();
            if view_state.get_busy() {
                return;
            }
            let daily_generations = view_state.get_daily_generations();
            set_busy(&ui, true);

            let ui_handle = ui_handle.clone();
            let state = state.clone();
            rayon::spawn(move || {
                let outcome = lock_selector(&state).generate(daily_generations);
                let prepared = prepare(outcome);

                let _ = slint::invoke_from_event_loop(move || {
                    if let Some(ui) = ui_handle.upgrade() {
                        show_outcome(&ui, prepared);
                        set_busy(&ui, false);
                    }
                });
            });
        }
    });
}
