//! BraTS composite evaluation regions built from region volumes

use serde::Serialize;

use crate::analysis::aggregator::VolumeReport;
use crate::labels::RegionClass;

/// Composite region made of one or more tumor classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CompositeRegion {
    /// Edema, non-enhancing core and enhancing tumor
    WholeTumor,
    /// Non-enhancing core and enhancing tumor
    TumorCore,
    /// Enhancing tumor only
    EnhancingTumor,
}

impl CompositeRegion {
    /// Composites in reporting order
    pub const ALL: [Self; 3] = [Self::WholeTumor, Self::TumorCore, Self::EnhancingTumor];

    /// Display name
    pub const fn name(self) -> &'static str {
        match self {
            Self::WholeTumor => "Whole Tumor (WT)",
            Self::TumorCore => "Tumor Core (TC)",
            Self::EnhancingTumor => "Enhancing Tumor (ET)",
        }
    }

    /// Classes contributing to the composite
    pub const fn members(self) -> &'static [RegionClass] {
        match self {
            Self::WholeTumor => &RegionClass::TUMOR_REGIONS,
            Self::TumorCore => &[RegionClass::NonEnhancingCore, RegionClass::EnhancingTumor],
            Self::EnhancingTumor => &[RegionClass::EnhancingTumor],
        }
    }
}

/// Volume of one composite region
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompositeVolume {
    /// Composite the volume belongs to
    pub region: CompositeRegion,
    /// Display name of the composite
    pub name: &'static str,
    /// Volume in cm³
    pub volume: f64,
    /// Number of contributing cells
    pub voxel_count: usize,
}

/// Sum member region volumes into each composite
pub fn composite_volumes(report: &VolumeReport) -> Vec<CompositeVolume> {
    CompositeRegion::ALL
        .iter()
        .map(|&region| {
            let members = region.members();
            CompositeVolume {
                region,
                name: region.name(),
                volume: members.iter().map(|&member| report.volume_of(member)).sum(),
                voxel_count: members
                    .iter()
                    .filter_map(|&member| report.statistic(member))
                    .map(|statistic| statistic.voxel_count)
                    .sum(),
            }
        })
        .collect()
}
