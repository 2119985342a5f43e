//! Rendering of display slices and region overlays

/// PNG and data-URL transport encoding
pub mod encoding;
/// Intensity normalization for display
pub mod normalize;
/// Region color blending over grayscale slices
pub mod overlay;

pub use encoding::EncodedImage;
pub use overlay::{Opacity, compose_overlay};
