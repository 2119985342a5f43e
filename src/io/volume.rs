//! Reading numeric arrays stored in `.npy` files

use std::path::Path;

use ndarray::ArrayD;
use ndarray_npy::{ReadNpyError, ReadNpyExt, ReadableElement};
use num_traits::ToPrimitive;

use crate::io::error::{AnalysisError, Result};

type ArrayReader = fn(&[u8]) -> std::result::Result<ArrayD<f64>, ReadNpyError>;

fn read_as_f64<T>(bytes: &[u8]) -> std::result::Result<ArrayD<f64>, ReadNpyError>
where
    T: ReadableElement + ToPrimitive + Clone,
{
    let array = ArrayD::<T>::read_npy(bytes)?;
    Ok(array.mapv(|value| value.to_f64().unwrap_or(f64::NAN)))
}

/// Read an array of any common numeric dtype as `f64`
///
/// Segmentation tools write labels as unsigned bytes, signed integers or
/// floats depending on the framework. The file is read once and each
/// supported dtype is matched against its header; a descriptor mismatch
/// moves on to the next dtype, any other failure is reported as is. Integer
/// values up to 2^53 convert exactly.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - The header or data is malformed
/// - The descriptor names no supported dtype (the reported error carries it)
pub fn read_array(path: &Path) -> Result<ArrayD<f64>> {
    let bytes = std::fs::read(path).map_err(|e| AnalysisError::FileSystem {
        path: path.to_path_buf(),
        operation: "read file",
        source: e,
    })?;

    let readers: [ArrayReader; 10] = [
        read_as_f64::<u8>,
        read_as_f64::<i8>,
        read_as_f64::<u16>,
        read_as_f64::<i16>,
        read_as_f64::<u32>,
        read_as_f64::<i32>,
        read_as_f64::<u64>,
        read_as_f64::<i64>,
        read_as_f64::<f32>,
        read_as_f64::<f64>,
    ];

    let mut mismatch = None;
    for reader in readers {
        match reader(&bytes) {
            Ok(array) => return Ok(array),
            Err(e @ ReadNpyError::WrongDescriptor(_)) => mismatch = Some(e),
            Err(source) => {
                return Err(AnalysisError::ArrayLoad {
                    path: path.to_path_buf(),
                    source,
                });
            }
        }
    }

    Err(mismatch.map_or_else(
        || AnalysisError::InvalidSourceData {
            reason: "no array reader accepted the file".to_string(),
        },
        |source| AnalysisError::ArrayLoad {
            path: path.to_path_buf(),
            source,
        },
    ))
}
