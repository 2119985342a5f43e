//! Command-line interface for batch analysis of pre-computed segmentations

use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Parser;
use tracing::{info, warn};

use crate::io::configuration::{
    ANALYSIS_SUFFIX, DEFAULT_OVERLAY_ALPHA, IMAGE_SUFFIX, OVERLAY_SUFFIX, PREVIEW_SUFFIX,
};
use crate::io::error::{AnalysisError, Result, invalid_target};
use crate::io::image::{load_grayscale, save_png};
use crate::io::progress::ProgressManager;
use crate::io::volume::read_array;
use crate::labels::{LabelScheme, SliceAxis, VoxelSpacing};
use crate::pipeline::{
    AnalysisResult, Analyzer, AnalyzerSettings, BaseImage, PrecomputedSegmentation, ScanCase,
};
use crate::render::Opacity;
use crate::render::overlay::side_by_side;

#[derive(Parser)]
#[command(name = "tumorlens")]
#[command(
    author,
    version,
    about = "Render tumor overlays and region volumes from brain MRI segmentations"
)]
/// Command-line arguments for the analysis tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Segmentation file (<case>_seg.npy) or directory of segmentations
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Voxel spacing in mm, one isotropic value or depth,rows,cols
    #[arg(short, long, value_name = "MM")]
    pub spacing: Option<VoxelSpacing>,

    /// Fail instead of assuming 1 mm spacing when --spacing is absent
    #[arg(long)]
    pub strict_spacing: bool,

    /// Opacity of region colors in the overlay
    #[arg(short, long, default_value_t = DEFAULT_OVERLAY_ALPHA)]
    pub alpha: f64,

    /// Axis of the displayed plane for volumes
    #[arg(long, value_enum, default_value_t = SliceAxis::Axial)]
    pub axis: SliceAxis,

    /// Index of the displayed plane (central plane if omitted)
    #[arg(long)]
    pub slice: Option<usize>,

    /// Raw label convention of the segmentation
    #[arg(long, value_enum, default_value_t = LabelScheme::Contiguous)]
    pub scheme: LabelScheme,

    /// Process cases even if a result exists
    #[arg(short, long)]
    pub no_skip: bool,

    /// Also write a side-by-side original/overlay preview
    #[arg(short, long)]
    pub preview: bool,

    /// Suppress progress output and informational logging
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log every pipeline stage
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Check if existing results should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Build analyzer settings from the flags
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the opacity is outside [0, 1]
    pub fn settings(&self) -> Result<AnalyzerSettings> {
        Ok(AnalyzerSettings {
            alpha: Opacity::new(self.alpha)?,
            axis: self.axis,
            slice_index: self.slice,
            scheme: self.scheme,
            fallback_spacing: (!self.strict_spacing).then(VoxelSpacing::default),
        })
    }
}

/// Orchestrates batch analysis of segmentation files with progress tracking
pub struct CaseProcessor {
    cli: Cli,
    analyzer: Analyzer,
}

impl CaseProcessor {
    /// Create a processor with the analyzer configured from the CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the flags describe invalid settings
    pub fn new(cli: Cli) -> Result<Self> {
        let analyzer = Analyzer::new(cli.settings()?);
        Ok(Self { cli, analyzer })
    }

    /// Process cases according to CLI arguments
    ///
    /// Stops at the first failing case.
    ///
    /// # Errors
    ///
    /// Returns an error if target validation or case processing fails
    pub fn process(&self) -> Result<()> {
        let cases = self.collect_cases()?;

        if cases.is_empty() {
            warn!(target = %self.cli.target.display(), "no segmentations found");
            return Ok(());
        }

        let mut progress = if self.cli.should_show_progress() {
            ProgressManager::new(cases.len())
        } else {
            ProgressManager::hidden(cases.len())
        };

        for case in &cases {
            progress.start_case(&case.id);
            if self.should_process_case(case) {
                self.process_case(case)?;
            }
            progress.complete_case();
        }

        progress.finish();
        Ok(())
    }

    /// Cases named by the target, sorted by identifier
    ///
    /// # Errors
    ///
    /// Returns an error if the target is neither a segmentation file nor a
    /// readable directory
    pub fn collect_cases(&self) -> Result<Vec<ScanCase>> {
        let target = &self.cli.target;

        if target.is_file() {
            ScanCase::from_segmentation_path(target)
                .map(|case| vec![case])
                .ok_or_else(|| invalid_target(target, &"file must be named <case>_seg.npy"))
        } else if target.is_dir() {
            let entries = std::fs::read_dir(target).map_err(|e| AnalysisError::FileSystem {
                path: target.clone(),
                operation: "read directory",
                source: e,
            })?;

            let mut cases = Vec::new();
            for entry in entries {
                let path = entry
                    .map_err(|e| AnalysisError::FileSystem {
                        path: target.clone(),
                        operation: "read directory entry",
                        source: e,
                    })?
                    .path();
                if let Some(case) = ScanCase::from_segmentation_path(&path) {
                    cases.push(case);
                }
            }
            cases.sort_by(|a, b| a.id.cmp(&b.id));
            Ok(cases)
        } else {
            Err(invalid_target(target, &"not a segmentation file or directory"))
        }
    }

    fn should_process_case(&self, case: &ScanCase) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::analysis_path(case);
        if output_path.exists() {
            info!(case = %case.id, "skipping, result exists");
            false
        } else {
            true
        }
    }

    fn process_case(&self, case: &ScanCase) -> Result<()> {
        let start_time = Instant::now();

        let base = Self::load_base(case)?;
        let result =
            self.analyzer
                .analyze_case(&PrecomputedSegmentation, case, base, self.cli.spacing)?;

        let overlay = result.overlay_image.decode()?.to_rgb8();
        save_png(&overlay, &case.file(OVERLAY_SUFFIX, "png"))?;

        if self.cli.preview {
            let original = result.original_image.decode()?.to_rgb8();
            let preview = side_by_side(&original, &overlay)?;
            save_png(&preview, &case.file(PREVIEW_SUFFIX, "png"))?;
        }

        // Written last: its presence marks the case as done
        Self::write_result(&result, &Self::analysis_path(case))?;

        info!(
            case = %case.id,
            total_volume_cm3 = result.total_volume,
            elapsed_ms = start_time.elapsed().as_millis(),
            "{}",
            result.message
        );

        Ok(())
    }

    /// Locate the grayscale base of a case, preferring raw intensities
    ///
    /// # Errors
    ///
    /// Returns an error if neither `<case>_image.npy` nor `<case>_image.png`
    /// exists or the file cannot be read
    pub fn load_base(case: &ScanCase) -> Result<BaseImage> {
        let intensity_path = case.file(IMAGE_SUFFIX, "npy");
        if intensity_path.exists() {
            return read_array(&intensity_path).map(BaseImage::Intensity);
        }

        let raster_path = case.file(IMAGE_SUFFIX, "png");
        if raster_path.exists() {
            return load_grayscale(&raster_path).map(BaseImage::Raster);
        }

        Err(AnalysisError::InvalidSourceData {
            reason: format!(
                "no base image for case '{}' (expected {} or {})",
                case.id,
                intensity_path.display(),
                raster_path.display()
            ),
        })
    }

    fn write_result(result: &AnalysisResult, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path).map_err(|e| AnalysisError::FileSystem {
            path: path.to_path_buf(),
            operation: "create file",
            source: e,
        })?;
        serde_json::to_writer_pretty(std::io::BufWriter::new(file), result)?;
        Ok(())
    }

    fn analysis_path(case: &ScanCase) -> PathBuf {
        case.file(ANALYSIS_SUFFIX, "json")
    }
}
