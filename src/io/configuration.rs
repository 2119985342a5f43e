//! Pipeline constants and runtime configuration defaults

// Overlay rendering
/// Opacity of region colors blended over the grayscale base
pub const DEFAULT_OVERLAY_ALPHA: f64 = 0.5;

// Physical units
/// Thickness assumed for a single 2D slice when converting pixel counts to volume
pub const ASSUMED_SLICE_THICKNESS_MM: f64 = 1.0;
/// Spacing used on every axis when the caller supplies none
pub const DEFAULT_SPACING_MM: f64 = 1.0;
/// Cubic millimetres per cubic centimetre
pub const MM3_PER_CM3: f64 = 1000.0;

// Severity grading by total tumor voxel count
/// Upper bound (exclusive) of a small tumor
pub const SMALL_TUMOR_MAX_VOXELS: usize = 1_000;
/// Upper bound (exclusive) of a moderate tumor
pub const MODERATE_TUMOR_MAX_VOXELS: usize = 10_000;

/// Decimal places used for composition percentages
pub const PERCENT_DECIMALS: i32 = 1;

// File naming
/// Suffix identifying segmentation inputs
pub const SEGMENTATION_SUFFIX: &str = "_seg";
/// Suffix identifying base intensity inputs
pub const IMAGE_SUFFIX: &str = "_image";
/// Suffix added to the JSON result document
pub const ANALYSIS_SUFFIX: &str = "_analysis";
/// Suffix added to the exported overlay
pub const OVERLAY_SUFFIX: &str = "_overlay";
/// Suffix added to the side-by-side preview
pub const PREVIEW_SUFFIX: &str = "_preview";

/// Prefix of transport-encoded PNG payloads
pub const PNG_DATA_URL_PREFIX: &str = "data:image/png;base64,";

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
