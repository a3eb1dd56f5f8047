//! Turning generation outcomes into what the window shows.
//!
//! `prepare` runs on the rayon worker and decodes the PNG into raw RGBA pixels;
//! `show_outcome` runs on the UI thread and only wraps them in a `slint::Image`.

use crate::ui::{clear_error, set_error, set_status};
use daily_image::error::AppError;
use daily_image::services::GenerationOutcome;
use image::ImageFormat;
use log::{info, warn};
use slint::{ComponentHandle, Image, Rgba8Pixel, SharedPixelBuffer};

/// RGBA8 pixels of a display image.
pub struct DecodedImage {
    data: Vec<u8>,
    width: u32,
    height: u32,
}

/// A generation outcome whose image is ready to be handed to slint.
pub struct PreparedOutcome {
    image: Option<DecodedImage>,
    status: Option<String>,
    error: Option<AppError>,
}

fn decode_png(png: &[u8]) -> Option<DecodedImage> {
    match image::load_from_memory_with_format(png, ImageFormat::Png) {
        Ok(image) => {
            let rgba = image.to_rgba8();
            let (width, height) = rgba.dimensions();
            Some(DecodedImage {
                data: rgba.into_raw(),
                width,
                height,
            })
        }
        Err(e) => {
            warn!("Display image could not be decoded: {}", e);
            None
        }
    }
}

/// Decodes the outcome's image off the UI thread.
pub fn prepare(outcome: GenerationOutcome) -> PreparedOutcome {
    if let Some(source) = &outcome.source {
        info!("Displaying {}", source.display());
    }

    PreparedOutcome {
        image: outcome.image.as_ref().and_then(|image| decode_png(&image.png)),
        status: outcome.status,
        error: outcome.error,
    }
}

fn create_slint_image(image: DecodedImage) -> Image {
    let buffer =
        SharedPixelBuffer::<Rgba8Pixel>::clone_from_slice(&image.data, image.width, image.height);
    Image::from_rgba8(buffer)
}

fn clear_image(ui: &crate::AppWindow) {
    let view_state = ui.global::<crate::ViewState>();
    view_state.set_dynamic_image(Image::default());
    view_state.set_image_loaded(false);
}

/// Updates the window with a prepared outcome.
///
/// Errors that mean today's image is gone also clear the picture; other
/// errors leave whatever is shown in place.
pub fn show_outcome(ui: &crate::AppWindow, prepared: PreparedOutcome) {
    match prepared.image {
        Some(image) => {
            let view_state = ui.global::<crate::ViewState>();
            view_state.set_dynamic_image(create_slint_image(image));
            view_state.set_image_loaded(true);
        }
        None => {
            if matches!(
                prepared.error,
                Some(AppError::StaleReference(_)) | Some(AppError::NoValidImageFound { .. })
            ) {
                clear_image(ui);
            }
        }
    }

    set_status(ui, prepared.status.as_deref());

    match &prepared.error {
        Some(err) => set_error(ui, "Generation failed", err),
        None => clear_error(ui),
    }
}
