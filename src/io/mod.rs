//! Input/output operations, configuration and error handling

/// Command-line interface and batch case processing
pub mod cli;
/// Pipeline constants and defaults
pub mod configuration;
/// Error types and classification
pub mod error;
/// Grayscale image loading and PNG export
pub mod image;
/// Progress display for batch processing
pub mod progress;
/// Numeric array reading from `.npy` files
pub mod volume;
