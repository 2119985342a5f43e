//! Error types and classification for the analysis pipeline

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Coarse failure category reported to callers
///
/// Data and configuration failures originate inside the post-processing core,
/// inference failures come from the segmentation model boundary, and I/O
/// failures from the surrounding file handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input arrays or images violate the core's data contract
    Data,
    /// Settings or physical parameters are missing or invalid
    Configuration,
    /// The segmentation model failed to produce a label map
    Inference,
    /// Reading, decoding, encoding or writing failed
    Io,
}

/// Main error type for all analysis operations
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// A raw label value has no region under the active label scheme
    #[error("Label value {value} at index {position:?} is outside the class range [0, {max_label}]")]
    LabelOutOfRange {
        /// Offending raw value, rendered as text since the raw type varies
        value: String,
        /// Multi-dimensional index of the first offending element
        position: Vec<usize>,
        /// Largest raw value accepted by the scheme
        max_label: u8,
    },

    /// Base image and label slice differ in spatial size
    #[error(
        "Dimension mismatch: base image is {}x{} but label slice is {}x{}",
        .base.0, .base.1, .labels.0, .labels.1
    )]
    DimensionMismatch {
        /// Base image (rows, cols)
        base: (usize, usize),
        /// Label slice (rows, cols)
        labels: (usize, usize),
    },

    /// Label array is neither a 2D slice nor a 3D volume
    #[error("Unsupported label map shape {shape:?}: expected (H, W) or (D, H, W)")]
    UnsupportedShape {
        /// Shape of the rejected array
        shape: Vec<usize>,
    },

    /// Requested display slice lies outside the volume
    #[error("Slice index {index} is out of bounds for axis {axis} of length {len}")]
    SliceOutOfBounds {
        /// Array axis the slice was taken along
        axis: usize,
        /// Requested index
        index: usize,
        /// Length of the axis
        len: usize,
    },

    /// Source data doesn't meet pipeline requirements
    #[error("Invalid source data: {reason}")]
    InvalidSourceData {
        /// Description of what's wrong with the source data
        reason: String,
    },

    /// Parameter validation failed
    #[error("Invalid parameter '{parameter}' = '{value}': {reason}")]
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Volume computation was requested without any voxel spacing
    #[error("Voxel spacing is required to compute volumes but none was supplied")]
    MissingSpacing,

    /// Segmentation model failed or produced no output
    #[error("Inference failed for case '{case}': {reason}")]
    Inference {
        /// Case identifier passed to the model
        case: String,
        /// Description supplied by the model boundary
        reason: String,
    },

    /// Failed to load an image from the filesystem
    #[error("Failed to load image '{}': {source}", .path.display())]
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to encode an image for transport or export
    #[error("Failed to encode {format} image: {source}")]
    ImageEncode {
        /// Target encoding
        format: &'static str,
        /// Underlying encoder error
        source: image::ImageError,
    },

    /// Failed to read a `.npy` array
    #[error("Failed to read array '{}': {source}", .path.display())]
    ArrayLoad {
        /// Path to the array file
        path: PathBuf,
        /// Underlying reader error
        source: ndarray_npy::ReadNpyError,
    },

    /// General file system operation failure
    #[error("File system error during {operation} on '{}': {source}", .path.display())]
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Command-line target is neither a segmentation file nor a directory
    #[error("Invalid target '{}': {reason}", .path.display())]
    InvalidTarget {
        /// Target as given on the command line
        path: PathBuf,
        /// Why the target cannot be processed
        reason: String,
    },

    /// Result document could not be serialized
    #[error("Failed to serialize analysis result: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AnalysisError {
    /// Classify the error for callers that only care about the failure category
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::LabelOutOfRange { .. }
            | Self::DimensionMismatch { .. }
            | Self::UnsupportedShape { .. }
            | Self::SliceOutOfBounds { .. }
            | Self::InvalidSourceData { .. } => ErrorKind::Data,
            Self::InvalidParameter { .. } | Self::MissingSpacing => ErrorKind::Configuration,
            Self::Inference { .. } => ErrorKind::Inference,
            Self::ImageLoad { .. }
            | Self::ImageEncode { .. }
            | Self::ArrayLoad { .. }
            | Self::FileSystem { .. }
            | Self::InvalidTarget { .. }
            | Self::Serialization(_) => ErrorKind::Io,
        }
    }
}

/// Convenience type alias for analysis results
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> AnalysisError {
    AnalysisError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an inference-stage error for a case
pub fn inference_error(case: &impl ToString, reason: &impl ToString) -> AnalysisError {
    AnalysisError::Inference {
        case: case.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an error for an unusable command-line target
pub fn invalid_target(path: &Path, reason: &impl ToString) -> AnalysisError {
    AnalysisError::InvalidTarget {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}
