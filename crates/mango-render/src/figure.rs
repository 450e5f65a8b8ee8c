//! Plotly figure description of a shaded surface.

use log::debug;
use mango_core::{MangoError, Result, Validate};
use mango_geometry::{Grid2, SurfaceGrid};

use crate::config::RenderConfig;

/// A surface trace ready to hand to Plotly: coordinates, the colour-driving
/// scalar field, and the display configuration.
#[derive(Debug, Clone, Copy)]
pub struct SurfaceFigure<'a> {
    surface: &'a SurfaceGrid,
    surfacecolor: &'a Grid2,
    config: &'a RenderConfig,
}

impl<'a> SurfaceFigure<'a> {
    /// Pair surface coordinates with a colour field of the same shape.
    pub fn new(
        surface: &'a SurfaceGrid,
        surfacecolor: &'a Grid2,
        config: &'a RenderConfig,
    ) -> Result<Self> {
        if surfacecolor.shape() != surface.shape() {
            return Err(MangoError::ShapeMismatch(format!(
                "surfacecolor is {:?} but the surface is {:?}",
                surfacecolor.shape(),
                surface.shape()
            )));
        }
        if surface.shape().0 == 0 || surface.shape().1 == 0 {
            return Err(MangoError::InvalidGrid("cannot plot an empty surface".to_string()));
        }
        config.validate()?;
        Ok(Self {
            surface,
            surfacecolor,
            config,
        })
    }

    pub fn surface(&self) -> &SurfaceGrid {
        self.surface
    }

    pub fn config(&self) -> &RenderConfig {
        self.config
    }

    /// The single `surface` trace.
    pub fn trace(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "surface",
            "x": self.surface.x().to_nested(),
            "y": self.surface.y().to_nested(),
            "z": self.surface.z().to_nested(),
            "surfacecolor": self.surfacecolor.to_nested(),
            "colorscale": self.config.colorscale.to_plotly(),
            "lighting": self.config.lighting_json(),
        })
    }

    /// `{"data": [trace], "layout": {...}}`.
    pub fn to_json(&self) -> serde_json::Value {
        let (rows, cols) = self.surface.shape();
        debug!("building surface figure from {}x{} grid", rows, cols);
        serde_json::json!({
            "data": [self.trace()],
            "layout": self.config.layout(),
        })
    }
}
