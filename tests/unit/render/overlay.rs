//! Tests for region color blending and overlay composition

#[cfg(test)]
mod tests {
    use image::{GrayImage, Luma, Rgb, RgbImage};
    use ndarray::Array2;
    use tumorlens::labels::{LabelMap, RegionClass, SliceAxis, SliceSelection};
    use tumorlens::render::overlay::{
        blend_channel, blend_pixel, grayscale_to_rgb, side_by_side,
    };
    use tumorlens::render::{Opacity, compose_overlay};
    use tumorlens::{AnalysisError, ErrorKind};

    fn selection() -> SliceSelection {
        SliceSelection::new(SliceAxis::Axial, 0)
    }

    // Tests opacity validation bounds
    // Verified by accepting values above one
    #[test]
    fn test_opacity_bounds() {
        assert!(Opacity::new(0.0).is_ok());
        assert!(Opacity::new(1.0).is_ok());
        for bad in [-0.1, 1.01, f64::NAN] {
            let result = Opacity::new(bad);
            assert!(
                result
                    .err()
                    .is_some_and(|e| e.kind() == ErrorKind::Configuration)
            );
        }
        assert!((Opacity::default().value() - 0.5).abs() < f64::EPSILON);
    }

    // Tests channel blend with round-half-up
    // Verified by truncating instead of rounding
    #[test]
    fn test_blend_channel() {
        let half = Opacity::new(0.5).expect("valid opacity");
        assert_eq!(blend_channel(100, 255, half), 178);
        assert_eq!(blend_channel(101, 0, half), 51);
        assert_eq!(blend_channel(0, 0, half), 0);

        let opaque = Opacity::new(1.0).expect("valid opacity");
        assert_eq!(blend_channel(37, 255, opaque), 255);

        let clear = Opacity::new(0.0).expect("valid opacity");
        assert_eq!(blend_channel(37, 255, clear), 37);
    }

    // Tests round-half-up at opacities without an exact binary form
    // Verified by rounding the unsnapped float sum
    #[test]
    fn test_blend_channel_exact_halves() {
        let opacity = Opacity::new(0.3).expect("valid opacity");
        assert_eq!(blend_channel(45, 0, opacity), 32);
        assert_eq!(blend_channel(85, 0, opacity), 60);

        // alpha = k / 20 keeps the exact blend on a grid of 1/20
        for k in 0..=20_u32 {
            let opacity = Opacity::new(f64::from(k) / 20.0).expect("valid opacity");
            for gray in 0..=255_u8 {
                for color in [0_u8, 100, 255] {
                    let scaled = (20 - k) * u32::from(gray) + k * u32::from(color);
                    let expected = (2 * scaled + 20) / 40;
                    assert_eq!(
                        u32::from(blend_channel(gray, color, opacity)),
                        expected,
                        "alpha = {k}/20, gray = {gray}, color = {color}"
                    );
                }
            }
        }
    }

    // Tests background pixels keep the gray level for any opacity
    // Verified by blending black into background
    #[test]
    fn test_background_untouched() {
        for alpha in [0.0, 0.3, 0.5, 1.0] {
            let opacity = Opacity::new(alpha).expect("valid opacity");
            for gray in [0, 1, 128, 255] {
                assert_eq!(
                    blend_pixel(gray, RegionClass::Background, opacity),
                    Rgb([gray, gray, gray])
                );
            }
        }
    }

    // Tests the blended color of each tumor region
    // Verified by swapping edema and core colors
    #[test]
    fn test_region_pixels() {
        let half = Opacity::default();
        assert_eq!(
            blend_pixel(100, RegionClass::Edema, half),
            Rgb([50, 178, 50])
        );
        assert_eq!(
            blend_pixel(100, RegionClass::NonEnhancingCore, half),
            Rgb([178, 178, 50])
        );
        assert_eq!(
            blend_pixel(100, RegionClass::EnhancingTumor, half),
            Rgb([178, 50, 50])
        );
    }

    // Tests overlay composition pixel by pixel
    // Verified by reading labels in column-major order
    #[test]
    fn test_compose_overlay() {
        let mut labels = Array2::<u8>::zeros((2, 3));
        if let Some(value) = labels.get_mut((1, 2)) {
            *value = 3;
        }
        let map = LabelMap::from_slice(labels).expect("valid labels");
        let plane = map.slice(selection()).expect("plane");
        let base = GrayImage::from_pixel(3, 2, Luma([100]));

        let overlay = compose_overlay(&base, &plane, Opacity::default()).expect("overlay");

        assert_eq!(overlay.dimensions(), (3, 2));
        assert_eq!(*overlay.get_pixel(0, 0), Rgb([100, 100, 100]));
        assert_eq!(*overlay.get_pixel(2, 1), Rgb([178, 50, 50]));
    }

    // Tests size mismatch is a data error and is never resampled
    // Verified by cropping the base image to the label size
    #[test]
    fn test_dimension_mismatch() {
        let map = LabelMap::from_slice(Array2::zeros((4, 4))).expect("valid labels");
        let plane = map.slice(selection()).expect("plane");
        let base = GrayImage::new(5, 4);

        let result = compose_overlay(&base, &plane, Opacity::default());
        assert!(matches!(
            result,
            Err(AnalysisError::DimensionMismatch {
                base: (4, 5),
                labels: (4, 4)
            })
        ));
        assert!(result.err().is_some_and(|e| e.kind() == ErrorKind::Data));
    }

    // Tests identical inputs produce identical overlays
    // Verified by adding per-call noise to the blend
    #[test]
    fn test_overlay_is_deterministic() {
        let labels = Array2::from_shape_fn((8, 8), |(row, col)| ((row + col) % 4) as u8);
        let map = LabelMap::from_slice(labels).expect("valid labels");
        let plane = map.slice(selection()).expect("plane");
        let base = GrayImage::from_fn(8, 8, |x, y| Luma([(x * 30 + y) as u8]));

        let first = compose_overlay(&base, &plane, Opacity::default()).expect("overlay");
        let second = compose_overlay(&base, &plane, Opacity::default()).expect("overlay");
        assert_eq!(first, second);
    }

    // Tests grayscale replication and side-by-side layout
    // Verified by placing the right image first
    #[test]
    fn test_side_by_side() {
        let left = grayscale_to_rgb(&GrayImage::from_pixel(2, 3, Luma([9])));
        let right = RgbImage::from_pixel(4, 3, Rgb([1, 2, 3]));

        let combined = side_by_side(&left, &right).expect("same height");
        assert_eq!(combined.dimensions(), (6, 3));
        assert_eq!(*combined.get_pixel(1, 2), Rgb([9, 9, 9]));
        assert_eq!(*combined.get_pixel(2, 0), Rgb([1, 2, 3]));

        let short = RgbImage::new(4, 2);
        assert!(side_by_side(&left, &short).is_err());
    }
}
