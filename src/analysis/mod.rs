//! Volumetric statistics derived from label maps

/// Region voxel counting and volume aggregation
pub mod aggregator;
/// Dominant region, composition and severity grading
pub mod classification;
/// BraTS composite regions
pub mod composite;
/// Human-readable analysis summary
pub mod summary;

pub use aggregator::{RegionStatistic, VolumeReport, aggregate};
pub use summary::TumorStatistics;
