//! Tests for label map validation and display slicing

#[cfg(test)]
mod tests {
    use ndarray::{Array2, Array3, ArrayD, IxDyn};
    use tumorlens::labels::{LabelMap, LabelScheme, RegionClass, SliceAxis, SliceSelection};
    use tumorlens::{AnalysisError, ErrorKind};

    // Tests valid 2D and 3D arrays are accepted with their shape
    // Verified by rejecting 3D input
    #[test]
    fn test_accepts_slice_and_volume() {
        let slice = ArrayD::<u8>::zeros(IxDyn(&[4, 6]));
        let map = LabelMap::from_raw(&slice, LabelScheme::Contiguous).expect("2D map");
        assert_eq!(map.ndim(), 2);
        assert_eq!(map.shape(), &[4, 6]);
        assert_eq!(map.len(), 24);

        let volume = ArrayD::<i64>::from_elem(IxDyn(&[2, 3, 4]), 3);
        let map = LabelMap::from_raw(&volume, LabelScheme::Contiguous).expect("3D map");
        assert_eq!(map.ndim(), 3);
        assert!(
            map.regions()
                .all(|region| region == Some(RegionClass::EnhancingTumor))
        );
    }

    // Tests unsupported dimensionality is a data error
    // Verified by accepting 1D arrays
    #[test]
    fn test_rejects_other_dimensionality() {
        for shape in [vec![5], vec![1, 2, 3, 4]] {
            let raw = ArrayD::<u8>::zeros(IxDyn(&shape));
            let result = LabelMap::from_raw(&raw, LabelScheme::Contiguous);
            assert!(matches!(
                result,
                Err(AnalysisError::UnsupportedShape { .. })
            ));
        }
    }

    // Tests out-of-range label reports its position
    // Verified by skipping the range check
    #[test]
    fn test_out_of_range_label() {
        let mut raw = Array2::<u8>::zeros((3, 3));
        if let Some(value) = raw.get_mut((1, 2)) {
            *value = 4;
        }

        let result = LabelMap::from_slice(raw);
        assert!(matches!(result, Err(AnalysisError::LabelOutOfRange { .. })));
        if let Err(AnalysisError::LabelOutOfRange {
            position,
            max_label,
            ..
        }) = result
        {
            assert_eq!(position, vec![1, 2]);
            assert_eq!(max_label, 3);
        }
    }

    // Tests negative, fractional and non-finite floats are rejected
    // Verified by truncating floats to integers
    #[test]
    fn test_rejects_non_integral_values() {
        for bad in [-1.0, 1.5, f64::NAN, f64::INFINITY] {
            let raw = ArrayD::from_elem(IxDyn(&[2, 2]), bad);
            let result = LabelMap::from_raw(&raw, LabelScheme::Contiguous);
            assert!(
                result.err().is_some_and(|e| e.kind() == ErrorKind::Data),
                "{bad} should be rejected"
            );
        }

        let integral = ArrayD::from_elem(IxDyn(&[2, 2]), 2.0_f64);
        assert!(LabelMap::from_raw(&integral, LabelScheme::Contiguous).is_ok());
    }

    // Tests BraTS label 4 becomes enhancing tumor
    // Verified by storing the raw label unchanged
    #[test]
    fn test_brats_remapping() {
        let raw = ArrayD::from_shape_vec(IxDyn(&[1, 4]), vec![0_u8, 1, 2, 4])
            .expect("valid shape");
        let map = LabelMap::from_raw(&raw, LabelScheme::Brats).expect("valid BraTS labels");
        assert_eq!(map.indices().collect::<Vec<_>>(), vec![0, 1, 2, 3]);

        let unused = ArrayD::from_elem(IxDyn(&[1, 1]), 3_u8);
        assert!(LabelMap::from_raw(&unused, LabelScheme::Brats).is_err());
    }

    // Tests 2D map is its own display plane
    // Verified by applying the selection to 2D maps
    #[test]
    fn test_slice_of_2d_map_ignores_selection() {
        let map = LabelMap::from_slice(Array2::from_elem((3, 5), 1)).expect("valid slice");
        let plane = map
            .slice(SliceSelection::new(SliceAxis::Sagittal, 99))
            .expect("2D plane");
        assert_eq!(plane.dim(), (3, 5));
        assert_eq!(plane.region_at(2, 4), Some(RegionClass::Edema));
        assert_eq!(plane.region_at(3, 0), None);
    }

    // Tests 3D slice selection along a chosen axis
    // Verified by always slicing axis 0
    #[test]
    fn test_slice_of_volume() {
        let volume = Array3::from_shape_fn((4, 3, 2), |(d, _, _)| u8::from(d == 1));
        let map = LabelMap::from_volume(volume).expect("valid volume");

        let plane = map
            .slice(SliceSelection::new(SliceAxis::Axial, 1))
            .expect("axial plane");
        assert_eq!(plane.dim(), (3, 2));
        assert!(plane.view().iter().all(|&index| index == 1));

        let coronal = map
            .slice(SliceSelection::new(SliceAxis::Coronal, 0))
            .expect("coronal plane");
        assert_eq!(coronal.dim(), (4, 2));

        assert!(
            map.slice(SliceSelection::new(SliceAxis::Axial, 4))
                .is_err()
        );
    }
}
