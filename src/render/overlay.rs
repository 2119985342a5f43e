//! Color overlay of tumor regions on a grayscale scan slice

use image::{GrayImage, Luma, Rgb, RgbImage};

use crate::io::configuration::DEFAULT_OVERLAY_ALPHA;
use crate::io::error::{AnalysisError, Result, invalid_parameter};
use crate::labels::{LabelSlice, RegionClass};

/// Blend weight of a region color, in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Opacity(f64);

impl Default for Opacity {
    fn default() -> Self {
        Self(DEFAULT_OVERLAY_ALPHA)
    }
}

impl Opacity {
    /// Validate a blend weight
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `alpha` is outside [0, 1] or not a number
    pub fn new(alpha: f64) -> Result<Self> {
        if (0.0..=1.0).contains(&alpha) {
            Ok(Self(alpha))
        } else {
            Err(invalid_parameter(
                "alpha",
                &alpha,
                &"overlay opacity must lie in [0, 1]",
            ))
        }
    }

    /// Blend weight
    pub const fn value(self) -> f64 {
        self.0
    }
}

// Grid the blended value snaps to before rounding; exact halves such as
// 0.7 * 45 = 31.5 must round up even when the float sum lands just below
const BLEND_SNAP_STEPS: f64 = 1e9;

// Round half up, clamped to the 8-bit range
fn quantize(value: f64) -> u8 {
    let snapped = (value * BLEND_SNAP_STEPS).round() / BLEND_SNAP_STEPS;
    (snapped + 0.5).floor().clamp(0.0, 255.0) as u8
}

/// Blend one channel: `(1 - alpha) * gray + alpha * color`
pub fn blend_channel(gray: u8, color: u8, alpha: Opacity) -> u8 {
    let a = alpha.value();
    quantize((1.0 - a).mul_add(f64::from(gray), a * f64::from(color)))
}

/// Output pixel for a grayscale value under a region
///
/// Background leaves the gray level untouched on all three channels.
pub fn blend_pixel(gray: u8, region: RegionClass, alpha: Opacity) -> Rgb<u8> {
    if !region.is_tumor() {
        return Rgb([gray; 3]);
    }
    Rgb(region
        .color()
        .map(|channel| blend_channel(gray, channel, alpha)))
}

/// Blend region colors over a grayscale base image
///
/// The base image must have exactly the label slice's size; nothing is
/// resampled or cropped.
///
/// # Errors
///
/// Returns [`AnalysisError::DimensionMismatch`] if the sizes differ
pub fn compose_overlay(
    base: &GrayImage,
    labels: &LabelSlice<'_>,
    alpha: Opacity,
) -> Result<RgbImage> {
    let base_dim = (base.height() as usize, base.width() as usize);
    if base_dim != labels.dim() {
        return Err(AnalysisError::DimensionMismatch {
            base: base_dim,
            labels: labels.dim(),
        });
    }

    Ok(RgbImage::from_fn(base.width(), base.height(), |x, y| {
        let Luma([gray]) = *base.get_pixel(x, y);
        let region = labels
            .region_at(y as usize, x as usize)
            .unwrap_or(RegionClass::Background);
        blend_pixel(gray, region, alpha)
    }))
}

/// Replicate a grayscale image across three channels
pub fn grayscale_to_rgb(base: &GrayImage) -> RgbImage {
    RgbImage::from_fn(base.width(), base.height(), |x, y| {
        let Luma([gray]) = *base.get_pixel(x, y);
        Rgb([gray; 3])
    })
}

/// Place two images of equal height next to each other
///
/// # Errors
///
/// Returns [`AnalysisError::DimensionMismatch`] if the heights differ
pub fn side_by_side(left: &RgbImage, right: &RgbImage) -> Result<RgbImage> {
    if left.height() != right.height() {
        return Err(AnalysisError::DimensionMismatch {
            base: (left.height() as usize, left.width() as usize),
            labels: (right.height() as usize, right.width() as usize),
        });
    }

    let split = left.width();
    Ok(RgbImage::from_fn(
        split + right.width(),
        left.height(),
        |x, y| {
            if x < split {
                *left.get_pixel(x, y)
            } else {
                *right.get_pixel(x - split, y)
            }
        },
    ))
}
