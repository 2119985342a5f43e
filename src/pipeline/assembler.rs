//! Structural join of statistics and rendered images into one result

use serde::Serialize;

use crate::analysis::TumorStatistics;
use crate::analysis::classification::TumorClassification;
use crate::analysis::composite::CompositeVolume;
use crate::io::error::Result;
use crate::labels::{RegionClass, SliceSelection};
use crate::render::EncodedImage;

/// Region statistic with its display attributes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionEntry {
    /// Region class
    pub region: RegionClass,
    /// Display name
    pub name: &'static str,
    /// Volume in cm³
    pub volume: f64,
    /// Number of labeled cells
    pub voxel_count: usize,
    /// Overlay color as `#RRGGBB`
    pub color: String,
    /// Short clinical description
    pub description: &'static str,
}

/// Overlay and original display images in transport encoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendering {
    /// Base slice with region colors blended in
    pub overlay: EncodedImage,
    /// Base slice as displayed, without colors
    pub original: EncodedImage,
}

/// Complete outcome of one analysis request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    /// Region statistics in fixed catalog order
    pub regions: Vec<RegionEntry>,
    /// Sum of region volumes in cm³
    pub total_volume: f64,
    /// BraTS composite volumes
    pub composites: Vec<CompositeVolume>,
    /// Dominant region, composition and severity
    pub classification: TumorClassification,
    /// Whether any tumor cell was found
    pub tumor_detected: bool,
    /// Displayed plane, `None` for 2D inputs
    pub slice: Option<SliceSelection>,
    /// Encoded overlay image
    pub overlay_image: EncodedImage,
    /// Encoded original image
    pub original_image: EncodedImage,
    /// Summary paragraph
    pub message: String,
}

/// Join upstream outputs into an [`AnalysisResult`]
///
/// Nothing is recomputed. A failed upstream stage is returned unchanged,
/// statistics first, and no partial result is produced.
///
/// # Errors
///
/// Returns the first upstream error
pub fn assemble(
    statistics: Result<TumorStatistics>,
    rendering: Result<Rendering>,
    slice: Option<SliceSelection>,
) -> Result<AnalysisResult> {
    let statistics = statistics?;
    let rendering = rendering?;

    let regions = statistics
        .report
        .regions()
        .iter()
        .map(|statistic| RegionEntry {
            region: statistic.region,
            name: statistic.name,
            volume: statistic.volume,
            voxel_count: statistic.voxel_count,
            color: statistic.region.hex_color(),
            description: statistic.region.description(),
        })
        .collect();

    Ok(AnalysisResult {
        regions,
        total_volume: statistics.report.total_volume(),
        tumor_detected: statistics.tumor_detected(),
        composites: statistics.composites,
        classification: statistics.classification,
        slice,
        overlay_image: rendering.overlay,
        original_image: rendering.original,
        message: statistics.message,
    })
}
