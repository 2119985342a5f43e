//! Request-level orchestration of aggregation, rendering and assembly
//!
//! An [`Analyzer`] is built once at startup from [`AnalyzerSettings`] and
//! shared by reference between requests. It holds no mutable state.

use image::GrayImage;
use ndarray::{ArrayD, Ix2, Ix3, ShapeError};
use tracing::{debug, info};

use crate::analysis::{TumorStatistics, aggregate};
use crate::io::error::{AnalysisError, Result, inference_error};
use crate::labels::slice::slice_volume;
use crate::labels::{LabelMap, LabelScheme, SliceAxis, SliceSelection, VoxelSpacing};
use crate::pipeline::assembler::{AnalysisResult, Rendering, assemble};
use crate::pipeline::segmentation::{ScanCase, Segmenter};
use crate::render::encoding::to_data_url;
use crate::render::normalize::normalize_for_display;
use crate::render::Opacity;
use crate::render::overlay::{compose_overlay, grayscale_to_rgb};

/// Process-wide analysis settings
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzerSettings {
    /// Overlay opacity
    pub alpha: Opacity,
    /// Axis of the displayed plane for volumes
    pub axis: SliceAxis,
    /// Displayed plane index, the central plane when `None`
    pub slice_index: Option<usize>,
    /// Raw label convention of the segmentation model
    pub scheme: LabelScheme,
    /// Spacing used when a request carries none; `None` makes spacing mandatory
    pub fallback_spacing: Option<VoxelSpacing>,
}

impl Default for AnalyzerSettings {
    fn default() -> Self {
        Self {
            alpha: Opacity::default(),
            axis: SliceAxis::default(),
            slice_index: None,
            scheme: LabelScheme::default(),
            fallback_spacing: Some(VoxelSpacing::default()),
        }
    }
}

/// Grayscale source of the displayed plane
#[derive(Debug, Clone)]
pub enum BaseImage {
    /// 8-bit raster used as is
    Raster(GrayImage),
    /// Raw scan intensities, sliced like the labels and normalized
    Intensity(ArrayD<f64>),
}

/// Inputs of one analysis
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    /// Validated label map
    pub labels: LabelMap,
    /// Voxel spacing of the scan, if known
    pub spacing: Option<VoxelSpacing>,
    /// Grayscale base for the overlay
    pub base: BaseImage,
}

/// Read-only analysis handle
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    settings: AnalyzerSettings,
}

impl Analyzer {
    /// Create an analyzer with fixed settings
    pub const fn new(settings: AnalyzerSettings) -> Self {
        Self { settings }
    }

    /// Active settings
    pub const fn settings(&self) -> &AnalyzerSettings {
        &self.settings
    }

    /// Plane displayed for a label map, `None` for 2D maps
    pub fn selection_for(&self, labels: &LabelMap) -> Option<SliceSelection> {
        (labels.ndim() == 3).then(|| {
            self.settings.slice_index.map_or_else(
                || SliceSelection::central(self.settings.axis, labels.shape()),
                |index| SliceSelection::new(self.settings.axis, index),
            )
        })
    }

    /// Analyze one request
    ///
    /// Statistics and rendering are computed independently and joined by
    /// the assembler.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No spacing is available for the volume computation
    /// - The selected plane lies outside the volume
    /// - The base image does not match the label plane
    /// - An intensity volume is paired with a 2D label map
    /// - Image encoding fails
    pub fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult> {
        let selection = self.selection_for(&request.labels);

        let statistics = self.statistics(request);
        let rendering = self.render(request, selection);

        let result = assemble(statistics, rendering, selection)?;
        debug!(
            total_volume_cm3 = result.total_volume,
            tumor_detected = result.tumor_detected,
            "assembled analysis result"
        );
        Ok(result)
    }

    /// Segment a case and analyze the resulting label map
    ///
    /// # Errors
    ///
    /// Returns an inference error if the segmenter fails, otherwise the
    /// errors of [`LabelMap::from_raw`] and [`Analyzer::analyze`]
    pub fn analyze_case(
        &self,
        segmenter: &dyn Segmenter,
        case: &ScanCase,
        base: BaseImage,
        spacing: Option<VoxelSpacing>,
    ) -> Result<AnalysisResult> {
        let raw = segmenter
            .segment(case)
            .map_err(|e| inference_error(&case.id, &e))?;
        let labels = LabelMap::from_raw(&raw, self.settings.scheme)?;

        info!(case = %case.id, shape = ?labels.shape(), "segmentation received");

        self.analyze(&AnalysisRequest {
            labels,
            spacing,
            base,
        })
    }

    fn statistics(&self, request: &AnalysisRequest) -> Result<TumorStatistics> {
        let spacing = request
            .spacing
            .or(self.settings.fallback_spacing)
            .ok_or(AnalysisError::MissingSpacing)?;

        Ok(TumorStatistics::from_report(aggregate(&request.labels, &spacing)))
    }

    fn render(
        &self,
        request: &AnalysisRequest,
        selection: Option<SliceSelection>,
    ) -> Result<Rendering> {
        let base = display_base(&request.base, selection)?;
        // A 2D map ignores the selection
        let labels = request
            .labels
            .slice(selection.unwrap_or_else(|| SliceSelection::new(self.settings.axis, 0)))?;
        let overlay = compose_overlay(&base, &labels, self.settings.alpha)?;

        Ok(Rendering {
            overlay: to_data_url(&overlay)?,
            original: to_data_url(&grayscale_to_rgb(&base))?,
        })
    }
}

// Resolve the base source to the grayscale plane shown under the overlay.
// An intensity volume needs a selection; under a 2D label map there is none.
fn display_base(base: &BaseImage, selection: Option<SliceSelection>) -> Result<GrayImage> {
    match base {
        BaseImage::Raster(image) => Ok(image.clone()),
        BaseImage::Intensity(intensity) => {
            let shape_error = |e: ShapeError| AnalysisError::InvalidSourceData {
                reason: format!("intensity array dimensionality: {e}"),
            };
            match intensity.ndim() {
                2 => {
                    let plane = intensity
                        .view()
                        .into_dimensionality::<Ix2>()
                        .map_err(shape_error)?;
                    Ok(normalize_for_display(plane))
                }
                3 => {
                    let volume = intensity
                        .view()
                        .into_dimensionality::<Ix3>()
                        .map_err(shape_error)?;
                    let selection =
                        selection.ok_or_else(|| AnalysisError::InvalidSourceData {
                            reason: format!(
                                "intensity volume {:?} cannot be shown under a 2D label map",
                                intensity.shape()
                            ),
                        })?;
                    Ok(normalize_for_display(slice_volume(volume, selection)?))
                }
                _ => Err(AnalysisError::UnsupportedShape {
                    shape: intensity.shape().to_vec(),
                }),
            }
        }
    }
}
