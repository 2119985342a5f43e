//! Validated label maps built from raw segmentation output
//!
//! Raw model output arrives as a dynamically shaped array of arbitrary numeric
//! type. [`LabelMap::from_raw`] is the single place where shape and class range
//! are checked; everything downstream works with region indices that are
//! known to be valid.

use ndarray::{Array2, Array3, ArrayD, Dimension, Ix2, Ix3};
use num_traits::ToPrimitive;

use crate::io::error::{AnalysisError, Result};
use crate::labels::region::{LabelScheme, RegionClass};
use crate::labels::slice::{LabelSlice, SliceSelection, slice_volume};

#[derive(Debug, Clone)]
enum LabelGrid {
    Slice(Array2<u8>),
    Volume(Array3<u8>),
}

/// Per-voxel region indices of a single 2D slice or a 3D volume
///
/// Every stored value is a valid [`RegionClass`] index.
#[derive(Debug, Clone)]
pub struct LabelMap {
    grid: LabelGrid,
}

impl LabelMap {
    /// Validate raw segmentation output and convert it to region indices
    ///
    /// Values must be non-negative integers (floating point outputs are
    /// accepted when integral) that `scheme` maps to a region class.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The array is not 2D or 3D
    /// - Any value is negative, fractional, not finite or undefined by the scheme
    pub fn from_raw<T>(raw: &ArrayD<T>, scheme: LabelScheme) -> Result<Self>
    where
        T: ToPrimitive + std::fmt::Debug,
    {
        let shape = raw.shape().to_vec();
        if !matches!(shape.len(), 2 | 3) {
            return Err(AnalysisError::UnsupportedShape { shape });
        }

        let mut indices = Vec::with_capacity(raw.len());
        for (position, value) in raw.indexed_iter() {
            let region = raw_to_u64(value)
                .and_then(|raw_label| scheme.classify(raw_label))
                .ok_or_else(|| AnalysisError::LabelOutOfRange {
                    value: format!("{value:?}"),
                    position: position.slice().to_vec(),
                    max_label: scheme.max_raw_label(),
                })?;
            indices.push(region.index());
        }

        let grid = ArrayD::from_shape_vec(raw.raw_dim(), indices).map_err(|e| {
            AnalysisError::InvalidSourceData {
                reason: format!("label array layout: {e}"),
            }
        })?;

        Self::from_region_indices(grid)
    }

    /// Wrap a 2D slice whose values are already region indices
    ///
    /// # Errors
    ///
    /// Returns an error if any value exceeds the largest region index
    pub fn from_slice(labels: Array2<u8>) -> Result<Self> {
        Self::from_raw(&labels.into_dyn(), LabelScheme::Contiguous)
    }

    /// Wrap a 3D volume whose values are already region indices
    ///
    /// # Errors
    ///
    /// Returns an error if any value exceeds the largest region index
    pub fn from_volume(labels: Array3<u8>) -> Result<Self> {
        Self::from_raw(&labels.into_dyn(), LabelScheme::Contiguous)
    }

    fn from_region_indices(grid: ArrayD<u8>) -> Result<Self> {
        let layout_error = |e: ndarray::ShapeError| AnalysisError::InvalidSourceData {
            reason: format!("label array dimensionality: {e}"),
        };

        let grid = if grid.ndim() == 2 {
            LabelGrid::Slice(grid.into_dimensionality::<Ix2>().map_err(layout_error)?)
        } else {
            LabelGrid::Volume(grid.into_dimensionality::<Ix3>().map_err(layout_error)?)
        };

        Ok(Self { grid })
    }

    /// Number of array dimensions (2 or 3)
    pub const fn ndim(&self) -> usize {
        match self.grid {
            LabelGrid::Slice(_) => 2,
            LabelGrid::Volume(_) => 3,
        }
    }

    /// Array shape, (H, W) or (D, H, W)
    pub fn shape(&self) -> &[usize] {
        match &self.grid {
            LabelGrid::Slice(grid) => grid.shape(),
            LabelGrid::Volume(grid) => grid.shape(),
        }
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        match &self.grid {
            LabelGrid::Slice(grid) => grid.len(),
            LabelGrid::Volume(grid) => grid.len(),
        }
    }

    /// Whether the map has no cells
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Region indices in logical order
    pub fn indices(&self) -> Box<dyn Iterator<Item = u8> + '_> {
        match &self.grid {
            LabelGrid::Slice(grid) => Box::new(grid.iter().copied()),
            LabelGrid::Volume(grid) => Box::new(grid.iter().copied()),
        }
    }

    /// Region classes in logical order
    pub fn regions(&self) -> impl Iterator<Item = Option<RegionClass>> + '_ {
        self.indices().map(RegionClass::from_index)
    }

    /// The 2D plane used for display
    ///
    /// A 2D map is its own display plane and ignores `selection`.
    ///
    /// # Errors
    ///
    /// Returns an error if the selected index lies outside a 3D volume
    pub fn slice(&self, selection: SliceSelection) -> Result<LabelSlice<'_>> {
        match &self.grid {
            LabelGrid::Slice(grid) => Ok(LabelSlice::new(grid.view())),
            LabelGrid::Volume(grid) => slice_volume(grid.view(), selection).map(LabelSlice::new),
        }
    }
}

// Integral, non-negative and finite, otherwise no raw label
fn raw_to_u64<T: ToPrimitive>(value: &T) -> Option<u64> {
    if let Some(integer) = value.to_u64() {
        let as_float = value.to_f64()?;
        return (as_float.fract() == 0.0).then_some(integer);
    }
    None
}
