//! Tests for the region catalog and raw label schemes

#[cfg(test)]
mod tests {
    use tumorlens::labels::region::{MAX_REGION_INDEX, TUMOR_CLASS_COUNT};
    use tumorlens::labels::{LabelScheme, RegionClass};

    // Tests reporting order of tumor regions
    // Verified by swapping core and enhancing in the catalog
    #[test]
    fn test_tumor_regions_fixed_order() {
        assert_eq!(
            RegionClass::TUMOR_REGIONS,
            [
                RegionClass::Edema,
                RegionClass::NonEnhancingCore,
                RegionClass::EnhancingTumor
            ]
        );
        assert_eq!(RegionClass::TUMOR_REGIONS.len(), TUMOR_CLASS_COUNT);
    }

    // Tests index round trip for every stored region index
    // Verified by mapping index 3 to core
    #[test]
    fn test_from_index_matches_index() {
        for index in 0..=MAX_REGION_INDEX {
            let region = RegionClass::from_index(index);
            assert_eq!(region.map(RegionClass::index), Some(index));
        }
        assert_eq!(RegionClass::from_index(MAX_REGION_INDEX + 1), None);
    }

    // Tests catalog display attributes
    // Verified by changing the enhancing color to orange
    #[test]
    fn test_region_names_and_colors() {
        assert_eq!(RegionClass::Edema.name(), "Edema");
        assert_eq!(
            RegionClass::NonEnhancingCore.name(),
            "Non-Enhancing/Necrotic Core"
        );
        assert_eq!(RegionClass::EnhancingTumor.name(), "Enhancing Tumor");

        assert_eq!(RegionClass::Edema.color(), [0, 255, 0]);
        assert_eq!(RegionClass::NonEnhancingCore.color(), [255, 255, 0]);
        assert_eq!(RegionClass::EnhancingTumor.color(), [255, 0, 0]);

        assert_eq!(RegionClass::Edema.hex_color(), "#00FF00");
        assert_eq!(RegionClass::EnhancingTumor.hex_color(), "#FF0000");
    }

    // Tests background is excluded from tumor slots
    // Verified by giving background slot 0
    #[test]
    fn test_tumor_slot_and_is_tumor() {
        assert!(!RegionClass::Background.is_tumor());
        assert_eq!(RegionClass::Background.tumor_slot(), None);

        for (slot, region) in RegionClass::TUMOR_REGIONS.iter().enumerate() {
            assert!(region.is_tumor());
            assert_eq!(region.tumor_slot(), Some(slot));
        }
    }

    // Tests contiguous scheme accepts exactly 0..=3
    // Verified by accepting raw label 4 under the contiguous scheme
    #[test]
    fn test_contiguous_scheme() {
        let scheme = LabelScheme::Contiguous;
        assert_eq!(scheme.classify(0), Some(RegionClass::Background));
        assert_eq!(scheme.classify(3), Some(RegionClass::EnhancingTumor));
        assert_eq!(scheme.classify(4), None);
        assert_eq!(scheme.max_raw_label(), 3);
    }

    // Tests BraTS remapping of label 4 and rejection of label 3
    // Verified by keeping label 3 as enhancing under BraTS
    #[test]
    fn test_brats_scheme() {
        let scheme = LabelScheme::Brats;
        assert_eq!(scheme.classify(1), Some(RegionClass::Edema));
        assert_eq!(scheme.classify(2), Some(RegionClass::NonEnhancingCore));
        assert_eq!(scheme.classify(3), None);
        assert_eq!(scheme.classify(4), Some(RegionClass::EnhancingTumor));
        assert_eq!(scheme.max_raw_label(), 4);
    }
}
