//! Mango-shaped surface.

use std::f64::consts::{FRAC_PI_6, PI, TAU};

use mango_math::{Point3, DVec3};

use super::Surface;

/// A deformed ellipsoid resembling a mango, parameterized by longitude `u`
/// in `[0, 2*PI]` and polar angle `v` in `[0, PI]`.
///
/// Points are computed as:
/// ```text
/// x = a(u) * sin(v) * cos(u) + side_curve(u, v)
/// y = b(u) * sin(v) * sin(u)
/// z = -(c * cos(v) + tip_curve(u, v))
/// ```
/// where `a` and `b` modulate the equatorial and profile radii, `tip_curve`
/// is a Gaussian bulge centred at `v = tip_latitude` and `side_curve` a
/// lateral ripple. The surface is flipped so the tip hangs downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MangoSurface {
    /// Base radius along x.
    pub equatorial_radius: f64,
    /// Relative swell of the x radius with `sin(u)`.
    pub equatorial_swell: f64,
    /// Base radius along y.
    pub profile_radius: f64,
    /// Absolute swell of the y radius with `cos(2u)`.
    pub profile_swell: f64,
    /// Half-height along z (`c`).
    pub axial_scale: f64,
    pub tip_amplitude: f64,
    /// Polar angle at which the tip bulge peaks.
    pub tip_latitude: f64,
    pub side_amplitude: f64,
    pub side_frequency: f64,
}

impl MangoSurface {
    pub const DEFAULT_EQUATORIAL_RADIUS: f64 = 1.5;
    pub const DEFAULT_EQUATORIAL_SWELL: f64 = 0.2;
    pub const DEFAULT_PROFILE_RADIUS: f64 = 0.8;
    pub const DEFAULT_PROFILE_SWELL: f64 = 0.1;
    pub const DEFAULT_AXIAL_SCALE: f64 = 1.2;
    pub const DEFAULT_TIP_AMPLITUDE: f64 = 0.3;
    pub const DEFAULT_TIP_LATITUDE: f64 = FRAC_PI_6;
    pub const DEFAULT_SIDE_AMPLITUDE: f64 = 0.2;
    pub const DEFAULT_SIDE_FREQUENCY: f64 = 3.0;

    pub fn new() -> Self {
        Self {
            equatorial_radius: Self::DEFAULT_EQUATORIAL_RADIUS,
            equatorial_swell: Self::DEFAULT_EQUATORIAL_SWELL,
            profile_radius: Self::DEFAULT_PROFILE_RADIUS,
            profile_swell: Self::DEFAULT_PROFILE_SWELL,
            axial_scale: Self::DEFAULT_AXIAL_SCALE,
            tip_amplitude: Self::DEFAULT_TIP_AMPLITUDE,
            tip_latitude: Self::DEFAULT_TIP_LATITUDE,
            side_amplitude: Self::DEFAULT_SIDE_AMPLITUDE,
            side_frequency: Self::DEFAULT_SIDE_FREQUENCY,
        }
    }

    /// `a(u)`, radius along x.
    pub fn equatorial_radius_at(&self, u: f64) -> f64 {
        self.equatorial_radius * (1.0 + self.equatorial_swell * u.sin())
    }

    /// `b(u)`, radius along y. Has period `PI`.
    pub fn profile_radius_at(&self, u: f64) -> f64 {
        self.profile_radius + self.profile_swell * (2.0 * u).cos()
    }

    /// Asymmetric bulge near `v = tip_latitude`, strongest at `u = PI/2`.
    pub fn tip_curve(&self, u: f64, v: f64) -> f64 {
        let d = v - self.tip_latitude;
        self.tip_amplitude * (-(d * d)).exp() * u.sin()
    }

    /// Lateral ripple that vanishes at the `v = 0` pole.
    pub fn side_curve(&self, u: f64, v: f64) -> f64 {
        self.side_amplitude * (self.side_frequency * u).sin() * (v / 2.0).sin()
    }
}

impl Default for MangoSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for MangoSurface {
    fn point_at(&self, u: f64, v: f64) -> Point3 {
        let (sin_u, cos_u) = u.sin_cos();
        let (sin_v, cos_v) = v.sin_cos();

        let x = self.equatorial_radius_at(u) * sin_v * cos_u + self.side_curve(u, v);
        let y = self.profile_radius_at(u) * sin_v * sin_u;
        let z = -(self.axial_scale * cos_v + self.tip_curve(u, v));
        DVec3::new(x, y, z)
    }

    fn domain_u(&self) -> (f64, f64) {
        (0.0, TAU)
    }

    fn domain_v(&self) -> (f64, f64) {
        (0.0, PI)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_default_coefficients() {
        let mango = MangoSurface::default();
        assert_eq!(mango.equatorial_radius_at(0.0), 1.5);
        assert_abs_diff_eq!(mango.equatorial_radius_at(FRAC_PI_2), 1.8, epsilon = 1e-12);
        assert_abs_diff_eq!(mango.profile_radius_at(0.0), 0.9, epsilon = 1e-12);
        assert_abs_diff_eq!(mango.profile_radius_at(FRAC_PI_2), 0.7, epsilon = 1e-12);
    }

    #[test]
    fn test_equator_at_zero_longitude() {
        let p = MangoSurface::default().point_at(0.0, FRAC_PI_2);
        assert_abs_diff_eq!(p.x, 1.5, epsilon = 1e-12);
        assert_eq!(p.y, 0.0);
        assert_abs_diff_eq!(p.z, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_top_pole_collapses() {
        let mango = MangoSurface::default();
        for i in 0..16 {
            let u = i as f64 * TAU / 16.0;
            let p = mango.point_at(u, 0.0);
            assert_eq!(p.x, 0.0, "x at u={}", u);
            assert_eq!(p.y, 0.0, "y at u={}", u);
        }
    }

    #[test]
    fn test_tip_bulge_peaks_at_tip_latitude() {
        let mango = MangoSurface::default();
        let peak = mango.tip_curve(FRAC_PI_2, FRAC_PI_6);
        assert_abs_diff_eq!(peak, 0.3, epsilon = 1e-12);
        assert!(mango.tip_curve(FRAC_PI_2, PI) < peak);
        assert!(mango.tip_curve(FRAC_PI_2, 0.0) < peak);
    }

    #[test]
    fn test_z_is_flipped_axis() {
        // At u = 0 the tip term vanishes, leaving z = -c * cos(v).
        let mango = MangoSurface::default();
        assert_abs_diff_eq!(mango.point_at(0.0, 0.0).z, -1.2, epsilon = 1e-12);
        assert_abs_diff_eq!(mango.point_at(0.0, PI).z, 1.2, epsilon = 1e-12);
    }

    #[test]
    fn test_domains() {
        let mango = MangoSurface::default();
        assert_eq!(mango.domain_u(), (0.0, TAU));
        assert_eq!(mango.domain_v(), (0.0, PI));
    }
}
