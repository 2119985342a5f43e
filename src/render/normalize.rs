//! Intensity normalization of scan slices for display

use image::{GrayImage, Luma};
use ndarray::ArrayView2;

/// Min-max scale an intensity slice to 8-bit grayscale
///
/// Non-finite intensities are treated as 0 before scaling. A slice with no
/// intensity range renders black. Scaled values are truncated.
pub fn normalize_for_display(slice: ArrayView2<'_, f64>) -> GrayImage {
    let finite = |value: f64| if value.is_finite() { value } else { 0.0 };

    let (min, max) = slice
        .iter()
        .map(|&value| finite(value))
        .fold(None, |range: Option<(f64, f64)>, value| match range {
            Some((lo, hi)) => Some((lo.min(value), hi.max(value))),
            None => Some((value, value)),
        })
        .unwrap_or((0.0, 0.0));

    let span = max - min;
    let (rows, cols) = slice.dim();

    GrayImage::from_fn(cols as u32, rows as u32, |x, y| {
        let level = if span > 0.0 {
            slice
                .get((y as usize, x as usize))
                .map_or(0.0, |&value| (finite(value) - min) / span * 255.0)
        } else {
            0.0
        };
        Luma([level.clamp(0.0, 255.0) as u8])
    })
}
