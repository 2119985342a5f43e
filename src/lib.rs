//! Tumor segmentation post-processing for brain MRI
//!
//! Turns the per-voxel class labels produced by an external segmentation model
//! into per-region volumetric statistics and a color-coded overlay on the scan,
//! packaged as a single serializable result.

#![forbid(unsafe_code)]

/// Volume aggregation, composite regions, classification and summary
pub mod analysis;
/// Input/output operations and error handling
pub mod io;
/// Label maps, region catalog, slicing and voxel spacing
pub mod labels;
/// Request pipeline from segmentation to assembled result
pub mod pipeline;
/// Display normalization, overlay compositing and image encoding
pub mod render;

pub use io::error::{AnalysisError, ErrorKind, Result};
