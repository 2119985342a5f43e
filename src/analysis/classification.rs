//! Tumor composition, dominant region and severity grading

use serde::Serialize;

use crate::analysis::aggregator::{RegionStatistic, VolumeReport};
use crate::io::configuration::{
    MODERATE_TUMOR_MAX_VOXELS, PERCENT_DECIMALS, SMALL_TUMOR_MAX_VOXELS,
};
use crate::labels::RegionClass;

/// Size grade of the detected tumor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    /// No tumor cells
    None,
    /// Fewer than [`SMALL_TUMOR_MAX_VOXELS`] cells
    Small,
    /// Fewer than [`MODERATE_TUMOR_MAX_VOXELS`] cells
    Moderate,
    /// Everything larger
    Large,
}

impl Severity {
    /// Grade a tumor by its total cell count
    pub const fn from_voxels(total: usize) -> Self {
        if total == 0 {
            Self::None
        } else if total < SMALL_TUMOR_MAX_VOXELS {
            Self::Small
        } else if total < MODERATE_TUMOR_MAX_VOXELS {
            Self::Moderate
        } else {
            Self::Large
        }
    }

    /// Display label
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Small => "Small",
            Self::Moderate => "Moderate",
            Self::Large => "Large",
        }
    }
}

/// Share of one region in the total tumor
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionShare {
    /// Region the share belongs to
    pub region: RegionClass,
    /// Percentage of tumor cells, rounded to [`PERCENT_DECIMALS`] places
    pub percent: f64,
}

/// Qualitative description of the tumor composition
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TumorClassification {
    /// Region with the most cells, `None` without tumor
    pub dominant: Option<RegionClass>,
    /// Size grade
    pub severity: Severity,
    /// Per-region percentages in catalog order
    pub composition: Vec<RegionShare>,
    /// Edema cells present
    pub has_edema: bool,
    /// Non-enhancing or necrotic core cells present
    pub has_necrotic: bool,
    /// Enhancing tumor cells present
    pub has_enhancing: bool,
}

impl TumorClassification {
    /// Display name of the dominant region
    pub fn dominant_name(&self) -> &'static str {
        self.dominant.map_or("No Tumor Detected", RegionClass::name)
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

/// Classify a tumor from its aggregated region counts
pub fn classify(report: &VolumeReport) -> TumorClassification {
    let total = report.total_voxels();
    let regions = report.regions();

    // Ties resolve to the earliest region in catalog order
    let dominant = regions
        .iter()
        .filter(|statistic| statistic.voxel_count > 0)
        .fold(None, |best: Option<&RegionStatistic>, statistic| match best {
            Some(current) if current.voxel_count >= statistic.voxel_count => Some(current),
            _ => Some(statistic),
        })
        .map(|statistic| statistic.region);

    let composition = regions
        .iter()
        .map(|statistic| RegionShare {
            region: statistic.region,
            percent: if total == 0 {
                0.0
            } else {
                round_to(
                    statistic.voxel_count as f64 / total as f64 * 100.0,
                    PERCENT_DECIMALS,
                )
            },
        })
        .collect();

    let present = |region| {
        report
            .statistic(region)
            .is_some_and(|statistic| statistic.voxel_count > 0)
    };

    TumorClassification {
        dominant,
        severity: Severity::from_voxels(total),
        composition,
        has_edema: present(RegionClass::Edema),
        has_necrotic: present(RegionClass::NonEnhancingCore),
        has_enhancing: present(RegionClass::EnhancingTumor),
    }
}
