use crate::error::{AppError, Result};
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat, ImageReader};
use std::io::Cursor;
use std::path::Path;

/// An image scaled for display and encoded as PNG.
#[derive(Debug, Clone)]
pub struct DisplayImage {
    pub png: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Scales `(width, height)` so that the longer side becomes `target`.
///
/// The shorter side keeps the aspect ratio, rounded half to even and never below one pixel.
pub fn fit_dimensions(width: u32, height: u32, target: u32) -> (u32, u32) {
    let scale = |long: u32, short: u32| -> u32 {
        let ratio = target as f64 / long as f64;
        ((ratio * short as f64).round_ties_even() as u32).max(1)
    };

    if width > height {
        (target, scale(width, height))
    } else {
        (scale(height, width), target)
    }
}

/// Decodes an image file, sniffing the format from its content.
pub fn decode(path: &Path) -> Result<DynamicImage> {
    let failure = |reason: String| AppError::DecodeFailure {
        path: path.to_path_buf(),
        reason,
    };

    ImageReader::open(path)
        .map_err(|e| failure(e.to_string()))?
        .with_guessed_format()
        .map_err(|e| failure(e.to_string()))?
        .decode()
        .map_err(|e| failure(e.to_string()))
}

/// Decodes, resizes to fit `target` and re-encodes an image as PNG.
pub fn load_for_display(path: &Path, target: u32) -> Result<DisplayImage> {
    let image = decode(path)?;
    let (width, height) = fit_dimensions(image.width(), image.height(), target);

    let resized = image.resize_exact(width, height, FilterType::CatmullRom);
    let rgba = DynamicImage::ImageRgba8(resized.to_rgba8());

    let mut png = Vec::new();
    rgba.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .map_err(|e| AppError::DecodeFailure {
            path: path.to_path_buf(),
            reason: format!("PNG encoding failed: {}", e),
        })?;

    Ok(DisplayImage { png, width, height })
}
