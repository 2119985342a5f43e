//! Display slice selection for label and intensity volumes

use ndarray::{ArrayView2, ArrayView3, Axis};

use crate::io::error::{AnalysisError, Result};
use crate::labels::region::RegionClass;

/// Axis of a (D, H, W) volume along which a display slice is taken
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SliceAxis {
    /// Axis 0, the primary acquisition axis
    #[default]
    Axial,
    /// Axis 1
    Coronal,
    /// Axis 2
    Sagittal,
}

impl SliceAxis {
    /// Array axis index in (D, H, W) order
    pub const fn index(self) -> usize {
        match self {
            Self::Axial => 0,
            Self::Coronal => 1,
            Self::Sagittal => 2,
        }
    }
}

/// Which 2D plane of a volume is displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct SliceSelection {
    /// Axis the plane is orthogonal to
    pub axis: SliceAxis,
    /// Position along the axis
    pub index: usize,
}

impl SliceSelection {
    /// Select plane `index` along `axis`
    pub const fn new(axis: SliceAxis, index: usize) -> Self {
        Self { axis, index }
    }

    /// Central plane along `axis` of a volume with the given shape
    ///
    /// Shapes with fewer dimensions than `axis` requires select index 0.
    pub fn central(axis: SliceAxis, shape: &[usize]) -> Self {
        let len = shape.get(axis.index()).copied().unwrap_or(0);
        Self::new(axis, len / 2)
    }
}

/// Take the selected plane out of a 3D volume
///
/// # Errors
///
/// Returns [`AnalysisError::SliceOutOfBounds`] if the index exceeds the axis length
pub fn slice_volume<'a, T>(
    volume: ArrayView3<'a, T>,
    selection: SliceSelection,
) -> Result<ArrayView2<'a, T>> {
    let axis = selection.axis.index();
    let len = volume.len_of(Axis(axis));

    if selection.index >= len {
        return Err(AnalysisError::SliceOutOfBounds {
            axis,
            index: selection.index,
            len,
        });
    }

    Ok(volume.index_axis_move(Axis(axis), selection.index))
}

/// Borrowed 2D plane of a validated label map
#[derive(Debug, Clone)]
pub struct LabelSlice<'a> {
    view: ArrayView2<'a, u8>,
}

impl<'a> LabelSlice<'a> {
    pub(crate) const fn new(view: ArrayView2<'a, u8>) -> Self {
        Self { view }
    }

    /// Slice size as (rows, cols)
    pub fn dim(&self) -> (usize, usize) {
        self.view.dim()
    }

    /// Region at a pixel, `None` outside the slice
    pub fn region_at(&self, row: usize, col: usize) -> Option<RegionClass> {
        self.view
            .get((row, col))
            .and_then(|&index| RegionClass::from_index(index))
    }

    /// Underlying region indices
    pub const fn view(&self) -> &ArrayView2<'a, u8> {
        &self.view
    }
}
