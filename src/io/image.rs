//! Grayscale image loading and PNG export

use std::path::Path;

use image::{GrayImage, RgbImage};

use crate::io::error::{AnalysisError, Result};

/// Load an image file as 8-bit grayscale
///
/// Color images are converted with the usual luma weights.
///
/// # Errors
///
/// Returns [`AnalysisError::ImageLoad`] if the file cannot be opened or decoded
pub fn load_grayscale(path: &Path) -> Result<GrayImage> {
    let img = image::open(path).map_err(|e| AnalysisError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(img.to_luma8())
}

/// Save an RGB image as PNG, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn save_png(image: &RgbImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| AnalysisError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    image
        .save_with_format(output_path, image::ImageFormat::Png)
        .map_err(|e| AnalysisError::ImageEncode {
            format: "png",
            source: e,
        })
}
