//! Image assets for the window icon and the dashboard photo

use crate::{HealthDeskError, Result};
use egui::{ColorImage, IconData};
use std::path::Path;

/// Longest side of the dashboard photo, in pixels
pub const PHOTO_SIZE: u32 = 100;

fn open_image(path: &Path) -> Result<image::DynamicImage> {
    image::open(path).map_err(|e| HealthDeskError::AssetError(format!("{}: {e}", path.display())))
}

/// Load the window icon
pub fn load_icon(path: &Path) -> Result<IconData> {
    let rgba = open_image(path)?.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(IconData {
        rgba: rgba.into_raw(),
        width,
        height,
    })
}

/// Load an image scaled to fit inside `max_side` x `max_side`, keeping aspect ratio
pub fn load_photo(path: &Path, max_side: u32) -> Result<ColorImage> {
    let img = open_image(path)?
        .thumbnail(max_side, max_side)
        .to_rgba8();
    let size = [img.width() as usize, img.height() as usize];
    Ok(ColorImage::from_rgba_unmultiplied(size, img.as_raw()))
}
