use std::fmt;

use log::{debug, info};
use mango_core::Result;
use mango_geometry::{normalized_heights, ParamGrid, Surface, SurfaceGrid};
use mango_math::Aabb3;

use crate::color::Rgb;
use crate::config::RenderConfig;
use crate::figure::SurfaceFigure;
use crate::renderer::Renderer;

/// What a plot run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotSummary {
    pub shape: (usize, usize),
    pub z_range: (f64, f64),
    pub bounds: Option<Aabb3>,
    /// Colours painted at the lowest and highest points.
    pub colors: (Rgb, Rgb),
}

impl fmt::Display for PlotSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid:    {} x {}", self.shape.0, self.shape.1)?;
        writeln!(f, "Z range: [{:.4}, {:.4}]", self.z_range.0, self.z_range.1)?;
        match &self.bounds {
            Some(b) => writeln!(f, "Bounds:  {}", b)?,
            None => writeln!(f, "Bounds:  empty")?,
        }
        write!(f, "Colours: {} (bottom) to {} (top)", self.colors.0, self.colors.1)
    }
}

/// Sample `surface` over `grid`, normalize its heights into the colour field,
/// and hand the figure to `renderer`.
pub fn plot_surface(
    surface: &dyn Surface,
    grid: &ParamGrid,
    config: &RenderConfig,
    renderer: &dyn Renderer,
) -> Result<PlotSummary> {
    let (rows, cols) = grid.shape();
    debug!("evaluating surface on {}x{} grid", rows, cols);
    let points = SurfaceGrid::evaluate_par(surface, grid);

    let heights = normalized_heights(&points)?;
    let z_range = points.z().min_max().unwrap_or((0.0, 0.0));
    let bounds = points.bounds();
    if let Some(b) = &bounds {
        debug!("surface bounds {}", b);
    }

    let (lo, hi) = heights.min_max().unwrap_or((0.0, 1.0));
    let colors = (config.colorscale.sample(lo), config.colorscale.sample(hi));

    let figure = SurfaceFigure::new(&points, &heights, config)?;
    renderer.render(&figure)?;
    info!("rendered {}x{} surface", rows, cols);

    Ok(PlotSummary {
        shape: points.shape(),
        z_range,
        bounds,
        colors,
    })
}
