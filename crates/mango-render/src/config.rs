//! Static display configuration for the surface figure.

use std::path::Path;

use mango_core::{MangoError, Result, Validate};
use mango_math::DVec3;
use serde::{Deserialize, Serialize};

use crate::camera::{xyz, SceneCamera};
use crate::color::ColorScale;

/// One axis of the 3D scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisConfig {
    pub title: String,
    pub show_grid: bool,
    pub show_background: bool,
}

impl AxisConfig {
    /// A titled axis with grid lines and background panes hidden.
    pub fn bare(title: &str) -> Self {
        Self {
            title: title.to_string(),
            show_grid: false,
            show_background: false,
        }
    }

    fn to_plotly(&self) -> serde_json::Value {
        serde_json::json!({
            "title": { "text": self.title },
            "showgrid": self.show_grid,
            "showbackground": self.show_background,
        })
    }
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self::bare("")
    }
}

/// Surface lighting coefficients, as understood by Plotly's surface shader.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Lighting {
    /// Ambient light, `[0, 1]`.
    pub ambient: f64,
    /// Diffuse reflection, `[0, 1]`.
    pub diffuse: f64,
    /// Reflectance at grazing angles, `[0, 5]`.
    pub fresnel: f64,
    /// Specular highlight strength, `[0, 2]`.
    pub specular: f64,
    /// Surface roughness, `[0, 1]`.
    pub roughness: f64,
}

impl Lighting {
    fn to_plotly(self) -> serde_json::Value {
        serde_json::json!({
            "ambient": self.ambient,
            "diffuse": self.diffuse,
            "fresnel": self.fresnel,
            "specular": self.specular,
            "roughness": self.roughness,
        })
    }
}

impl Default for Lighting {
    fn default() -> Self {
        Self {
            ambient: 0.6,
            diffuse: 0.9,
            fresnel: 0.2,
            specular: 0.3,
            roughness: 0.7,
        }
    }
}

impl Validate for Lighting {
    fn validate(&self) -> Result<()> {
        let checks = [
            ("ambient", self.ambient, 1.0),
            ("diffuse", self.diffuse, 1.0),
            ("fresnel", self.fresnel, 5.0),
            ("specular", self.specular, 2.0),
            ("roughness", self.roughness, 1.0),
        ];
        for (name, value, max) in checks {
            if !(0.0..=max).contains(&value) {
                return Err(MangoError::Config(format!(
                    "lighting {} = {} outside [0, {}]",
                    name, value, max
                )));
            }
        }
        Ok(())
    }
}

/// Page margins in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margin {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            left: 0,
            right: 0,
            top: 50,
            bottom: 0,
        }
    }
}

/// Everything the renderer needs besides the surface data itself.
///
/// The default reproduces the mango figure: title "Mango", bare X/Y/Z axes,
/// camera at (2, 2, 1.5), a slightly tall (1, 1, 1.2) aspect ratio, soft
/// lighting and the mango colour scale. Missing fields in a JSON config fall
/// back to these values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub title: String,
    pub x_axis: AxisConfig,
    pub y_axis: AxisConfig,
    pub z_axis: AxisConfig,
    pub camera: SceneCamera,
    pub aspect_ratio: DVec3,
    pub margin: Margin,
    pub lighting: Lighting,
    pub colorscale: ColorScale,
}

impl RenderConfig {
    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: RenderConfig =
            serde_json::from_str(json).map_err(|e| MangoError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// The Plotly `layout` object.
    pub fn layout(&self) -> serde_json::Value {
        serde_json::json!({
            "title": { "text": self.title },
            "scene": {
                "xaxis": self.x_axis.to_plotly(),
                "yaxis": self.y_axis.to_plotly(),
                "zaxis": self.z_axis.to_plotly(),
                "camera": self.camera.to_plotly(),
                "aspectmode": "manual",
                "aspectratio": xyz(self.aspect_ratio),
            },
            "margin": {
                "l": self.margin.left,
                "r": self.margin.right,
                "t": self.margin.top,
                "b": self.margin.bottom,
            },
        })
    }

    /// The trace-level `lighting` object.
    pub fn lighting_json(&self) -> serde_json::Value {
        self.lighting.to_plotly()
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            title: "Mango".to_string(),
            x_axis: AxisConfig::bare("X"),
            y_axis: AxisConfig::bare("Y"),
            z_axis: AxisConfig::bare("Z"),
            camera: SceneCamera::default(),
            aspect_ratio: DVec3::new(1.0, 1.0, 1.2),
            margin: Margin::default(),
            lighting: Lighting::default(),
            colorscale: ColorScale::mango(),
        }
    }
}

impl Validate for RenderConfig {
    fn validate(&self) -> Result<()> {
        let ratio = self.aspect_ratio;
        if !ratio.is_finite() || ratio.min_element() <= 0.0 {
            return Err(MangoError::Config(format!(
                "aspect ratio {:?} must be positive",
                ratio.to_array()
            )));
        }
        self.camera.validate()?;
        self.lighting.validate()?;
        self.colorscale.validate()
    }
}
