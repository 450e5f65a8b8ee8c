//! Min-max scaling of surface heights into the colour field.

use log::debug;
use mango_core::{MangoError, Result};

use crate::grid::Grid2;
use crate::surface::SurfaceGrid;

/// Scale `values` elementwise to `(v - min) / (max - min)`.
///
/// The smallest value maps to exactly `0.0` and the largest to exactly `1.0`.
/// A grid whose values are all equal has no range to scale by and is
/// rejected with [`MangoError::DegenerateRange`].
pub fn normalize(values: &Grid2) -> Result<Grid2> {
    if !values.all_finite() {
        return Err(MangoError::Geometry(
            "cannot normalize non-finite values".to_string(),
        ));
    }
    let (min, max) = values
        .min_max()
        .ok_or_else(|| MangoError::InvalidGrid("cannot normalize an empty grid".to_string()))?;

    let range = max - min;
    if range == 0.0 {
        return Err(MangoError::DegenerateRange { value: min });
    }
    if !range.is_finite() {
        return Err(MangoError::Geometry(format!(
            "range [{}, {}] overflows",
            min, max
        )));
    }

    debug!("normalizing {}x{} grid over [{}, {}]", values.rows(), values.cols(), min, max);
    Ok(values.map(|v| (v - min) / range))
}

/// The surfacecolor field of `surface`: its `z` grid scaled into `[0, 1]`.
pub fn normalized_heights(surface: &SurfaceGrid) -> Result<Grid2> {
    normalize(surface.z())
}
