//! PNG and base64 data-URL transport encoding of rendered images

use std::io::Cursor;

use base64::{Engine, engine::general_purpose::STANDARD};
use image::{DynamicImage, ImageFormat, RgbImage};
use serde::Serialize;

use crate::io::configuration::PNG_DATA_URL_PREFIX;
use crate::io::error::{AnalysisError, Result};

/// Image payload encoded as a `data:image/png;base64,` URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EncodedImage(String);

impl EncodedImage {
    /// Encoded data URL
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decode back into an image
    ///
    /// # Errors
    ///
    /// Returns an error if the payload is not a base64 PNG data URL
    pub fn decode(&self) -> Result<DynamicImage> {
        decode_data_url(&self.0)
    }
}

/// Encode an RGB image as PNG bytes
///
/// # Errors
///
/// Returns [`AnalysisError::ImageEncode`] if the PNG encoder fails
pub fn encode_png(image: &RgbImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|e| AnalysisError::ImageEncode {
            format: "png",
            source: e,
        })?;
    Ok(bytes)
}

/// Encode an RGB image as a PNG data URL
///
/// # Errors
///
/// Returns [`AnalysisError::ImageEncode`] if the PNG encoder fails
pub fn to_data_url(image: &RgbImage) -> Result<EncodedImage> {
    let png = encode_png(image)?;
    Ok(EncodedImage(format!(
        "{PNG_DATA_URL_PREFIX}{}",
        STANDARD.encode(png)
    )))
}

/// Decode a PNG data URL, with or without the `data:` prefix
///
/// # Errors
///
/// Returns an error if the payload is not valid base64 or not a decodable PNG
pub fn decode_data_url(url: &str) -> Result<DynamicImage> {
    let payload = url.strip_prefix(PNG_DATA_URL_PREFIX).unwrap_or(url);

    let bytes = STANDARD
        .decode(payload.trim())
        .map_err(|e| AnalysisError::InvalidSourceData {
            reason: format!("image payload is not valid base64: {e}"),
        })?;

    image::load_from_memory_with_format(&bytes, ImageFormat::Png).map_err(|e| {
        AnalysisError::InvalidSourceData {
            reason: format!("image payload is not a PNG: {e}"),
        }
    })
}
