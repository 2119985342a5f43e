//! Boundary to the external segmentation model

use std::path::{Path, PathBuf};

use ndarray::ArrayD;

use crate::io::configuration::SEGMENTATION_SUFFIX;
use crate::io::error::Result;
use crate::io::volume::read_array;

/// One scan submitted for analysis
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanCase {
    /// Case identifier, the shared file stem of all case files
    pub id: String,
    /// Directory holding the case files
    pub directory: PathBuf,
}

impl ScanCase {
    /// Create a case rooted in `directory`
    pub fn new(id: impl Into<String>, directory: impl Into<PathBuf>) -> Self {
        Self {
            id: id.into(),
            directory: directory.into(),
        }
    }

    /// Path of a case file: `<directory>/<id><suffix>.<extension>`
    pub fn file(&self, suffix: &str, extension: &str) -> PathBuf {
        self.directory
            .join(format!("{}{suffix}.{extension}", self.id))
    }

    /// Recognize a segmentation file and derive its case
    ///
    /// Returns `None` unless the file is named `<id>_seg.npy`.
    pub fn from_segmentation_path(path: &Path) -> Option<Self> {
        if path.extension().and_then(|s| s.to_str()) != Some("npy") {
            return None;
        }
        let stem = path.file_stem()?.to_str()?;
        let id = stem.strip_suffix(SEGMENTATION_SUFFIX)?;
        if id.is_empty() {
            return None;
        }
        let directory = path.parent().map(Path::to_path_buf).unwrap_or_default();
        Some(Self::new(id, directory))
    }
}

/// Produces raw per-voxel labels for a case
///
/// Implementations wrap a segmentation model. Their output is untrusted and
/// is validated by the caller; any error they return is reported as an
/// inference failure.
pub trait Segmenter {
    /// Run segmentation and return the raw label array
    ///
    /// # Errors
    ///
    /// Returns an error if the model cannot produce labels for the case
    fn segment(&self, case: &ScanCase) -> Result<ArrayD<f64>>;
}

/// Serves label maps computed ahead of time and stored as `<id>_seg.npy`
#[derive(Debug, Clone, Copy, Default)]
pub struct PrecomputedSegmentation;

impl Segmenter for PrecomputedSegmentation {
    fn segment(&self, case: &ScanCase) -> Result<ArrayD<f64>> {
        read_array(&case.file(SEGMENTATION_SUFFIX, "npy"))
    }
}
