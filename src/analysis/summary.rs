//! Human-readable summary of an analysis

use std::fmt::Write;

use serde::Serialize;

use crate::analysis::aggregator::VolumeReport;
use crate::analysis::classification::{TumorClassification, classify};
use crate::analysis::composite::{CompositeVolume, composite_volumes};
use crate::labels::RegionClass;

/// Message used when no tumor cells were found
pub const NO_TUMOR_MESSAGE: &str = "No tumor detected in the scan.";

/// Summarize volumes and classification in one paragraph
///
/// Volumes are printed with two decimals.
pub fn summarize(report: &VolumeReport, classification: &TumorClassification) -> String {
    if report.total_voxels() == 0 {
        return NO_TUMOR_MESSAGE.to_string();
    }

    let mut summary = format!(
        "{} tumor detected with total volume of {:.2} cm³. Dominant region: {}.",
        classification.severity.label(),
        report.total_volume(),
        classification.dominant_name()
    );

    let details = [
        (
            classification.has_enhancing,
            "Active enhancing tumor present",
            RegionClass::EnhancingTumor,
        ),
        (
            classification.has_necrotic,
            "Necrotic core detected",
            RegionClass::NonEnhancingCore,
        ),
        (
            classification.has_edema,
            "Surrounding edema present",
            RegionClass::Edema,
        ),
    ];

    for (present, sentence, region) in details {
        if present {
            // Writing to a String cannot fail
            let _ = write!(
                summary,
                " {sentence} ({:.2} cm³).",
                report.volume_of(region)
            );
        }
    }

    summary
}

/// Everything derived from one volume report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TumorStatistics {
    /// Region volumes as aggregated
    pub report: VolumeReport,
    /// BraTS composite volumes
    pub composites: Vec<CompositeVolume>,
    /// Dominant region, composition and severity
    pub classification: TumorClassification,
    /// Summary paragraph
    pub message: String,
}

impl TumorStatistics {
    /// Derive composites, classification and summary from a report
    pub fn from_report(report: VolumeReport) -> Self {
        let composites = composite_volumes(&report);
        let classification = classify(&report);
        let message = summarize(&report, &classification);

        Self {
            report,
            composites,
            classification,
            message,
        }
    }

    /// Whether any tumor cell was found
    pub fn tumor_detected(&self) -> bool {
        self.report.total_voxels() > 0
    }
}
