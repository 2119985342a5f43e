//! Physical voxel spacing and voxel volume conversion

use crate::io::configuration::{ASSUMED_SLICE_THICKNESS_MM, DEFAULT_SPACING_MM, MM3_PER_CM3};
use crate::io::error::{Result, invalid_parameter};

/// Physical size of one grid cell in millimetres, ordered (depth, rows, cols)
///
/// For a 2D label map the depth component is not used; the slice is assumed
/// to be [`ASSUMED_SLICE_THICKNESS_MM`] thick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoxelSpacing {
    axes: [f64; 3],
}

impl Default for VoxelSpacing {
    /// Unit spacing, used when a scan carries no spacing metadata
    fn default() -> Self {
        Self {
            axes: [DEFAULT_SPACING_MM; 3],
        }
    }
}

impl VoxelSpacing {
    /// Create a spacing from per-axis sizes in millimetres
    ///
    /// # Errors
    ///
    /// Returns a configuration error if any component is zero, negative or not finite
    pub fn new(axes: [f64; 3]) -> Result<Self> {
        const AXIS_NAMES: [&str; 3] = ["depth", "rows", "cols"];

        for (value, axis) in axes.iter().zip(AXIS_NAMES) {
            if !value.is_finite() || *value <= 0.0 {
                return Err(invalid_parameter(
                    "spacing",
                    value,
                    &format!("{axis} spacing must be a positive finite length in mm"),
                ));
            }
        }

        Ok(Self { axes })
    }

    /// Same spacing on every axis
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `mm` is not a positive finite length
    pub fn isotropic(mm: f64) -> Result<Self> {
        Self::new([mm; 3])
    }

    /// Per-axis sizes in millimetres
    pub const fn axes(&self) -> [f64; 3] {
        self.axes
    }

    /// Volume of one cell of a 3D volume in mm³
    pub fn volume_voxel_mm3(&self) -> f64 {
        self.axes.iter().product()
    }

    /// Volume of one pixel of a single 2D slice in mm³
    pub fn slice_pixel_mm3(&self) -> f64 {
        let [_, rows, cols] = self.axes;
        rows * cols * ASSUMED_SLICE_THICKNESS_MM
    }

    /// Volume of one cell in cm³ for a label map with `ndim` dimensions
    pub fn cell_volume_cm3(&self, ndim: usize) -> f64 {
        let mm3 = if ndim == 2 {
            self.slice_pixel_mm3()
        } else {
            self.volume_voxel_mm3()
        };
        mm3 / MM3_PER_CM3
    }
}

impl std::str::FromStr for VoxelSpacing {
    type Err = crate::io::error::AnalysisError;

    /// Parse either a single isotropic value or three comma-separated values
    fn from_str(s: &str) -> Result<Self> {
        let values = s
            .split(',')
            .map(|part| {
                part.trim()
                    .parse::<f64>()
                    .map_err(|e| invalid_parameter("spacing", &s, &e))
            })
            .collect::<Result<Vec<_>>>()?;

        match values.as_slice() {
            [mm] => Self::isotropic(*mm),
            [depth, rows, cols] => Self::new([*depth, *rows, *cols]),
            _ => Err(invalid_parameter(
                "spacing",
                &s,
                &"expected one value or three comma-separated values",
            )),
        }
    }
}
