use crate::error::StudioError;
use image::RgbaImage;
use std::path::Path;

/// Display bounds of the processing canvas.
pub const MAX_WIDTH: f64 = 550.0;
pub const MAX_HEIGHT: f64 = 400.0;

/// File extensions the picker accepts.
pub const ACCEPTED_EXTENSIONS: &[&str] = &["bmp", "png", "jpg", "jpeg"];

const NOT_AN_IMAGE: &str = "Будь ласка, виберіть файл зображення (BMP, PNG або JPEG)";

/// Decoded raster image plus its natural pixel dimensions. Owned by the
/// processing page and replaced wholesale when a new file is chosen.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub name: String,
    pub pixels: RgbaImage,
    pub natural_width: u32,
    pub natural_height: u32,
}

/// Largest rectangle within the given maxima preserving aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitRect {
    pub width: f64,
    pub height: f64,
}

impl FitRect {
    /// Canvas pixel dimensions for this rect, never below 1x1.
    pub fn pixel_size(&self) -> (u32, u32) {
        (
            (self.width.round() as u32).max(1),
            (self.height.round() as u32).max(1),
        )
    }
}

/// Uniform scale so the image fits both bounds.
///
/// The ratio may exceed 1, enlarging small images; there is deliberately no
/// upscaling guard.
pub fn fit_to_bounds(natural_w: f64, natural_h: f64, max_w: f64, max_h: f64) -> FitRect {
    let ratio = (max_w / natural_w).min(max_h / natural_h);
    FitRect {
        width: natural_w * ratio,
        height: natural_h * ratio,
    }
}

/// Decode the file at `path` into RGBA pixels.
///
/// Anything that is not an accepted raster image reports [`StudioError::Decode`]
/// with the user-facing message; nothing crashes the page.
pub fn load_image(path: &Path) -> Result<LoadedImage, StudioError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    if !matches!(ext.as_deref(), Some(e) if ACCEPTED_EXTENSIONS.contains(&e)) {
        return Err(StudioError::Decode(NOT_AN_IMAGE.into()));
    }

    let img = image::open(path).map_err(|e| {
        tracing::error!("failed to decode {}: {e}", path.display());
        StudioError::Decode(NOT_AN_IMAGE.into())
    })?;

    let pixels = img.to_rgba8();
    let (natural_width, natural_height) = (pixels.width(), pixels.height());
    let name = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("зображення")
        .to_string();
    tracing::info!("loaded image '{name}' ({natural_width}x{natural_height})");

    Ok(LoadedImage {
        name,
        pixels,
        natural_width,
        natural_height,
    })
}
