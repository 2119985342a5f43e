//! Analysis request pipeline from segmentation to assembled result

/// Settings, request types and the analysis handle
pub mod analyzer;
/// Structural join into the final result
pub mod assembler;
/// Segmentation model boundary
pub mod segmentation;

pub use analyzer::{AnalysisRequest, Analyzer, AnalyzerSettings, BaseImage};
pub use assembler::{AnalysisResult, assemble};
pub use segmentation::{PrecomputedSegmentation, ScanCase, Segmenter};
