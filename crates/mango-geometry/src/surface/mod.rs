//! Surface traits, the mango surface, and grid evaluation.

mod mango;

use mango_core::Result;
use mango_math::{Aabb3, Point3};
use rayon::prelude::*;

use crate::grid::{Grid2, ParamGrid};

pub use mango::MangoSurface;

/// Trait for parametric surfaces in 3D space.
pub trait Surface: Send + Sync {
    /// Evaluate the surface at parameters `(u, v)`.
    fn point_at(&self, u: f64, v: f64) -> Point3;

    /// Return the u-parameter domain `(u_min, u_max)`.
    fn domain_u(&self) -> (f64, f64);

    /// Return the v-parameter domain `(v_min, v_max)`.
    fn domain_v(&self) -> (f64, f64);

    /// Sample the full domain with `u_count` by `v_count` parameters.
    fn param_grid(&self, u_count: usize, v_count: usize) -> Result<ParamGrid> {
        ParamGrid::new(self.domain_u(), u_count, self.domain_v(), v_count)
    }
}

/// Cartesian coordinates of a surface sampled over a [`ParamGrid`].
///
/// `x`, `y` and `z` always share the parameter grid's shape.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceGrid {
    x: Grid2,
    y: Grid2,
    z: Grid2,
}

impl SurfaceGrid {
    /// Evaluate `surface` at every cell of `grid`, one row at a time.
    pub fn evaluate(surface: &dyn Surface, grid: &ParamGrid) -> Self {
        let (rows, cols) = grid.shape();
        let mut points = vec![Point3::ZERO; rows * cols];
        for (r, row) in points.chunks_mut(cols.max(1)).enumerate() {
            fill_row(surface, grid, r, row);
        }
        Self::from_points(rows, cols, &points)
    }

    /// Same as [`SurfaceGrid::evaluate`], with rows spread across the rayon pool.
    ///
    /// Cells are independent, so the result is bit-identical to the sequential one.
    pub fn evaluate_par(surface: &dyn Surface, grid: &ParamGrid) -> Self {
        let (rows, cols) = grid.shape();
        let mut points = vec![Point3::ZERO; rows * cols];
        points
            .par_chunks_mut(cols.max(1))
            .enumerate()
            .for_each(|(r, row)| fill_row(surface, grid, r, row));
        Self::from_points(rows, cols, &points)
    }

    fn from_points(rows: usize, cols: usize, points: &[Point3]) -> Self {
        let x = points.iter().map(|p| p.x).collect();
        let y = points.iter().map(|p| p.y).collect();
        let z = points.iter().map(|p| p.z).collect();
        Self {
            x: Grid2::from_parts(rows, cols, x),
            y: Grid2::from_parts(rows, cols, y),
            z: Grid2::from_parts(rows, cols, z),
        }
    }

    pub fn shape(&self) -> (usize, usize) {
        self.z.shape()
    }

    pub fn x(&self) -> &Grid2 {
        &self.x
    }

    pub fn y(&self) -> &Grid2 {
        &self.y
    }

    pub fn z(&self) -> &Grid2 {
        &self.z
    }

    pub fn point(&self, row: usize, col: usize) -> Option<Point3> {
        Some(Point3::new(
            self.x.get(row, col)?,
            self.y.get(row, col)?,
            self.z.get(row, col)?,
        ))
    }

    /// `true` when no coordinate is NaN or infinite.
    pub fn is_finite(&self) -> bool {
        self.x.all_finite() && self.y.all_finite() && self.z.all_finite()
    }

    /// Axis-aligned bounds of every sampled point.
    pub fn bounds(&self) -> Option<Aabb3> {
        let (rows, cols) = self.shape();
        (0..rows)
            .filter_map(|r| Aabb3::from_points((0..cols).filter_map(move |c| self.point(r, c))))
            .reduce(|a, b| a.merge(&b))
    }
}

fn fill_row(surface: &dyn Surface, grid: &ParamGrid, r: usize, row: &mut [Point3]) {
    let v = grid.v_values()[r];
    for (p, &u) in row.iter_mut().zip(grid.u_values()) {
        *p = surface.point_at(u, v);
    }
}
