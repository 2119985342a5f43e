//! Label maps, the region catalog and physical spacing
//!
//! This module contains the validated input types of the pipeline:
//! - The fixed tumor region catalog and raw label conventions
//! - Label maps checked once at construction
//! - Display slice selection
//! - Voxel spacing and unit conversion

/// Validated 2D and 3D label maps
pub mod label_map;
/// Region classes, display colors and label schemes
pub mod region;
/// Slice selection for volumes
pub mod slice;
/// Voxel spacing and cell volume
pub mod spacing;

pub use label_map::LabelMap;
pub use region::{LabelScheme, RegionClass};
pub use slice::{LabelSlice, SliceAxis, SliceSelection};
pub use spacing::VoxelSpacing;
