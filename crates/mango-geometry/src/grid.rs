//! Sampled parameter grids and row-major scalar grids.

use std::f64::consts::{PI, TAU};

use mango_core::{MangoError, Result};

/// `count` evenly spaced samples over `[start, end]`, endpoints included.
///
/// The last sample is exactly `end`. A single sample yields `[start]`.
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            let mut values: Vec<f64> = (0..count).map(|i| start + i as f64 * step).collect();
            values[count - 1] = end;
            values
        }
    }
}

/// A dense 2D grid of `f64` stored in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid2 {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Grid2 {
    /// Wrap `data` as a `rows x cols` grid.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(MangoError::ShapeMismatch(format!(
                "{} values cannot fill a {}x{} grid",
                data.len(),
                rows,
                cols
            )));
        }
        Ok(Self { rows, cols, data })
    }

    pub(crate) fn from_parts(rows: usize, cols: usize, data: Vec<f64>) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        Self { rows, cols, data }
    }

    /// Build a grid by evaluating `f(row, col)` for every cell.
    pub fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> f64,
    {
        let mut data = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                data.push(f(r, c));
            }
        }
        Self { rows, cols, data }
    }

    /// `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Iterate over rows as slices.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[f64]> {
        self.data.chunks(self.cols.max(1))
    }

    /// Copy into nested row vectors, the layout plotting front-ends expect.
    pub fn to_nested(&self) -> Vec<Vec<f64>> {
        self.iter_rows().map(<[f64]>::to_vec).collect()
    }

    /// Apply `f` to every cell, keeping the shape.
    pub fn map<F>(&self, f: F) -> Self
    where
        F: Fn(f64) -> f64,
    {
        Self {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|&v| f(v)).collect(),
        }
    }

    /// Global `(min, max)`; `None` for an empty grid.
    pub fn min_max(&self) -> Option<(f64, f64)> {
        let (&first, rest) = self.data.split_first()?;
        Some(
            rest.iter()
                .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v))),
        )
    }

    pub fn all_finite(&self) -> bool {
        self.data.iter().all(|v| v.is_finite())
    }
}

/// The sampled `(u, v)` parameter plane.
///
/// Rows follow `v`, columns follow `u`, so every grid derived from it has
/// shape `(v_count, u_count)`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamGrid {
    u: Vec<f64>,
    v: Vec<f64>,
}

impl ParamGrid {
    pub const DEFAULT_RESOLUTION: usize = 200;

    /// Sample `u_count` values over `u_range` and `v_count` over `v_range`.
    pub fn new(
        u_range: (f64, f64),
        u_count: usize,
        v_range: (f64, f64),
        v_count: usize,
    ) -> Result<Self> {
        check_axis("u", u_range, u_count)?;
        check_axis("v", v_range, v_count)?;
        Ok(Self {
            u: linspace(u_range.0, u_range.1, u_count),
            v: linspace(v_range.0, v_range.1, v_count),
        })
    }

    /// The 200x200 grid over `u in [0, 2pi]`, `v in [0, pi]`.
    pub fn mango() -> Self {
        Self {
            u: linspace(0.0, TAU, Self::DEFAULT_RESOLUTION),
            v: linspace(0.0, PI, Self::DEFAULT_RESOLUTION),
        }
    }

    pub fn u_values(&self) -> &[f64] {
        &self.u
    }

    pub fn v_values(&self) -> &[f64] {
        &self.v
    }

    /// `(rows, cols)` = `(v_count, u_count)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.v.len(), self.u.len())
    }

    /// `u` broadcast over the grid (each row repeats the u samples).
    pub fn u_grid(&self) -> Grid2 {
        Grid2::from_fn(self.v.len(), self.u.len(), |_, c| self.u[c])
    }

    /// `v` broadcast over the grid (each column repeats the v samples).
    pub fn v_grid(&self) -> Grid2 {
        Grid2::from_fn(self.v.len(), self.u.len(), |r, _| self.v[r])
    }
}

impl Default for ParamGrid {
    fn default() -> Self {
        Self::mango()
    }
}

fn check_axis(name: &str, (start, end): (f64, f64), count: usize) -> Result<()> {
    if count == 0 {
        return Err(MangoError::InvalidGrid(format!(
            "{} axis needs at least one sample",
            name
        )));
    }
    if !start.is_finite() || !end.is_finite() {
        return Err(MangoError::InvalidGrid(format!(
            "{} range [{}, {}] is not finite",
            name, start, end
        )));
    }
    if start > end {
        return Err(MangoError::InvalidGrid(format!(
            "{} range [{}, {}] is reversed",
            name, start, end
        )));
    }
    Ok(())
}
