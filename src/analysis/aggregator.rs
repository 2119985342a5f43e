//! Per-region voxel counting and physical volume aggregation

use serde::Serialize;
use tracing::debug;

use crate::labels::region::{RegionClass, TUMOR_CLASS_COUNT};
use crate::labels::{LabelMap, VoxelSpacing};

/// Physical volume of one tumor region
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionStatistic {
    /// Region the statistic describes
    pub region: RegionClass,
    /// Display name of the region
    pub name: &'static str,
    /// Volume in cm³
    pub volume: f64,
    /// Number of cells labeled with the region
    pub voxel_count: usize,
}

/// Aggregated volumes of all tumor regions in fixed catalog order
///
/// Every non-background region is present, including regions with zero
/// volume. The total is the sum of the region volumes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VolumeReport {
    regions: [RegionStatistic; TUMOR_CLASS_COUNT],
    total_volume: f64,
    cell_volume_cm3: f64,
}

impl VolumeReport {
    fn from_counts(counts: &[usize; TUMOR_CLASS_COUNT + 1], cell_volume_cm3: f64) -> Self {
        let regions = RegionClass::TUMOR_REGIONS.map(|region| {
            let voxel_count = counts
                .get(usize::from(region.index()))
                .copied()
                .unwrap_or(0);
            RegionStatistic {
                region,
                name: region.name(),
                volume: voxel_count as f64 * cell_volume_cm3,
                voxel_count,
            }
        });
        let total_volume = regions.iter().map(|statistic| statistic.volume).sum();

        Self {
            regions,
            total_volume,
            cell_volume_cm3,
        }
    }

    /// Region statistics ordered Edema, Non-Enhancing/Necrotic Core, Enhancing Tumor
    pub const fn regions(&self) -> &[RegionStatistic; TUMOR_CLASS_COUNT] {
        &self.regions
    }

    /// Sum of all region volumes in cm³
    pub const fn total_volume(&self) -> f64 {
        self.total_volume
    }

    /// Volume of one cell in cm³
    pub const fn cell_volume_cm3(&self) -> f64 {
        self.cell_volume_cm3
    }

    /// Statistic for a tumor region, `None` for background
    pub fn statistic(&self, region: RegionClass) -> Option<&RegionStatistic> {
        region.tumor_slot().and_then(|slot| self.regions.get(slot))
    }

    /// Volume of a tumor region in cm³, zero for background
    pub fn volume_of(&self, region: RegionClass) -> f64 {
        self.statistic(region).map_or(0.0, |statistic| statistic.volume)
    }

    /// Number of tumor cells across all regions
    pub fn total_voxels(&self) -> usize {
        self.regions.iter().map(|statistic| statistic.voxel_count).sum()
    }
}

/// Count cells per region index, background included
///
/// The map only holds catalog indices, so every cell lands in a slot.
pub fn count_regions(map: &LabelMap) -> [usize; TUMOR_CLASS_COUNT + 1] {
    let mut counts = [0usize; TUMOR_CLASS_COUNT + 1];

    for index in map.indices() {
        if let Some(slot) = counts.get_mut(usize::from(index)) {
            *slot += 1;
        }
    }

    counts
}

/// Compute the volume of every tumor region of a label map
///
/// Cell volume is the product of the three spacings for a volume; a single
/// slice uses its in-plane spacing and the assumed slice thickness. Volumes
/// are reported in cm³. Out-of-range labels never reach this point, they are
/// rejected when the [`LabelMap`] is built.
pub fn aggregate(map: &LabelMap, spacing: &VoxelSpacing) -> VolumeReport {
    let counts = count_regions(map);
    let report = VolumeReport::from_counts(&counts, spacing.cell_volume_cm3(map.ndim()));

    debug!(
        shape = ?map.shape(),
        counts = ?counts,
        total_volume_cm3 = report.total_volume(),
        "aggregated region volumes"
    );

    report
}
