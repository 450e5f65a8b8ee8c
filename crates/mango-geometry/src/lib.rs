//! Mango surface geometry: parameter grids, the mango surface, and height
//! normalization.

pub mod grid;
pub mod normalize;
pub mod surface;

pub use grid::{linspace, Grid2, ParamGrid};
pub use normalize::{normalize, normalized_heights};
pub use surface::{MangoSurface, Surface, SurfaceGrid};
