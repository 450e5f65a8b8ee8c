use mango_core::{MangoError, Result, Validate};
use mango_math::{Point3, Vector3, DVec3};
use serde::{Deserialize, Serialize};

/// Look-at camera for the 3D scene, in the scene's normalized coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneCamera {
    pub eye: Point3,    // camera position
    pub center: Point3, // look-at target
    pub up: Vector3,    // up vector
}

impl SceneCamera {
    pub fn new(eye: Point3, center: Point3, up: Vector3) -> Self {
        Self { eye, center, up }
    }

    /// Distance from eye to center.
    pub fn distance(&self) -> f64 {
        (self.center - self.eye).length()
    }

    /// `{"up": {...}, "center": {...}, "eye": {...}}` in Plotly's layout form.
    pub fn to_plotly(&self) -> serde_json::Value {
        serde_json::json!({
            "up": xyz(self.up),
            "center": xyz(self.center),
            "eye": xyz(self.eye),
        })
    }
}

impl Default for SceneCamera {
    /// Eye at (2, 2, 1.5), looking at the origin with +Z up.
    fn default() -> Self {
        Self {
            eye: DVec3::new(2.0, 2.0, 1.5),
            center: Point3::ZERO,
            up: Vector3::Z,
        }
    }
}

impl Validate for SceneCamera {
    fn validate(&self) -> Result<()> {
        if !(self.eye.is_finite() && self.center.is_finite() && self.up.is_finite()) {
            return Err(MangoError::Config("camera vectors must be finite".to_string()));
        }
        if self.distance() < 1e-9 {
            return Err(MangoError::Config("camera eye coincides with center".to_string()));
        }
        if self.up.length() < 1e-9 {
            return Err(MangoError::Config("camera up vector is zero".to_string()));
        }
        Ok(())
    }
}

/// A vector as Plotly's `{"x": .., "y": .., "z": ..}` object.
pub(crate) fn xyz(v: DVec3) -> serde_json::Value {
    serde_json::json!({ "x": v.x, "y": v.y, "z": v.z })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_camera() {
        let cam = SceneCamera::default();
        assert_eq!(cam.eye, Point3::new(2.0, 2.0, 1.5));
        assert_eq!(cam.center, Point3::ZERO);
        assert_eq!(cam.up, Vector3::Z);
        assert!(cam.validate().is_ok());
    }

    #[test]
    fn test_distance() {
        let cam = SceneCamera::new(DVec3::new(0.0, 0.0, 5.0), Point3::ZERO, Vector3::Y);
        assert!((cam.distance() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_cameras_rejected() {
        let same = SceneCamera::new(Point3::ONE, Point3::ONE, Vector3::Z);
        assert!(matches!(same.validate(), Err(MangoError::Config(_))));

        let no_up = SceneCamera::new(Point3::ONE, Point3::ZERO, Vector3::ZERO);
        assert!(matches!(no_up.validate(), Err(MangoError::Config(_))));

        let nan = SceneCamera::new(DVec3::new(f64::NAN, 0.0, 0.0), Point3::ZERO, Vector3::Z);
        assert!(matches!(nan.validate(), Err(MangoError::Config(_))));
    }

    #[test]
    fn test_plotly_form() {
        let value = SceneCamera::default().to_plotly();
        assert_eq!(value["eye"]["x"], 2.0);
        assert_eq!(value["eye"]["z"], 1.5);
        assert_eq!(value["up"]["z"], 1.0);
        assert_eq!(value["center"]["y"], 0.0);
    }
}
