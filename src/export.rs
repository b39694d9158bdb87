use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Local};

use crate::plot::Canvas;

/// Writes the canvas as an RGBA PNG
pub fn save_png(canvas: &Canvas, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let (width, height) = canvas.dimensions();
    let image = image::RgbaImage::from_raw(width, height, canvas.pixels().to_vec())
        .context("Canvas buffer does not match its dimensions")?;

    image
        .save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("Failed to write PNG: {}", path.display()))?;

    log::info!("Saved {}x{} plot to {}", width, height, path.display());
    Ok(())
}

/// `bones_<YYYYmmdd_HHMMSS>.png`
pub fn screenshot_path(now: DateTime<Local>) -> PathBuf {
    PathBuf::from(format!("bones_{}.png", now.format("%Y%m%d_%H%M%S")))
}
