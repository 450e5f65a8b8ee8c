// Integration tests for sampling and normalizing the mango surface

use std::f64::consts::{PI, TAU};

use approx::assert_abs_diff_eq;
use mango_core::MangoError;
use mango_geometry::{normalize, normalized_heights, MangoSurface, ParamGrid, Surface, SurfaceGrid};

fn sample_grid(u_count: usize, v_count: usize) -> ParamGrid {
    MangoSurface::default().param_grid(u_count, v_count).unwrap()
}

#[test]
fn full_resolution_shapes_match() {
    let grid = ParamGrid::mango();
    let surface = SurfaceGrid::evaluate_par(&MangoSurface::default(), &grid);

    assert_eq!(surface.shape(), (200, 200));
    assert_eq!(surface.x().shape(), grid.shape());
    assert_eq!(surface.y().shape(), grid.shape());
    assert_eq!(surface.z().shape(), grid.shape());

    let heights = normalized_heights(&surface).unwrap();
    assert_eq!(heights.shape(), grid.shape());
}

#[test]
fn shapes_match_for_uneven_grids() {
    for &(u_count, v_count) in &[(1, 1), (2, 7), (13, 3), (64, 32)] {
        let grid = sample_grid(u_count, v_count);
        let surface = SurfaceGrid::evaluate(&MangoSurface::default(), &grid);
        assert_eq!(surface.shape(), (v_count, u_count));
        assert_eq!(surface.x().len(), u_count * v_count);
    }
}

#[test]
fn all_points_are_finite() {
    let surface = SurfaceGrid::evaluate(&MangoSurface::default(), &ParamGrid::mango());
    assert!(surface.is_finite());
}

#[test]
fn rows_follow_v_and_columns_follow_u() {
    let mango = MangoSurface::default();
    let grid = sample_grid(5, 4);
    let surface = SurfaceGrid::evaluate(&mango, &grid);

    let u = grid.u_values()[3];
    let v = grid.v_values()[2];
    assert_eq!(surface.point(2, 3), Some(mango.point_at(u, v)));
}

#[test]
fn evaluation_is_repeatable() {
    let mango = MangoSurface::default();
    let grid = ParamGrid::mango();
    let first = SurfaceGrid::evaluate(&mango, &grid);
    let second = SurfaceGrid::evaluate(&mango, &grid);
    let parallel = SurfaceGrid::evaluate_par(&mango, &grid);

    assert_eq!(first, second);
    assert_eq!(first, parallel);
}

#[test]
fn pole_row_collapses_to_axis() {
    let surface = SurfaceGrid::evaluate(&MangoSurface::default(), &ParamGrid::mango());
    for col in 0..surface.shape().1 {
        let p = surface.point(0, col).unwrap();
        assert_eq!(p.x, 0.0);
        assert_eq!(p.y, 0.0);
    }
}

#[test]
fn profile_radius_has_period_pi() {
    let mango = MangoSurface::default();
    for i in 0..32 {
        let u = i as f64 * TAU / 32.0;
        assert_abs_diff_eq!(
            mango.profile_radius_at(u),
            mango.profile_radius_at(u + PI),
            epsilon = 1e-12
        );
    }
}

#[test]
fn equatorial_radius_has_period_two_pi() {
    let mango = MangoSurface::default();
    for i in 0..32 {
        let u = i as f64 * TAU / 32.0;
        assert_abs_diff_eq!(
            mango.equatorial_radius_at(u),
            mango.equatorial_radius_at(u + TAU),
            epsilon = 1e-12
        );
    }
    // Not periodic in PI: sin(u) flips sign.
    assert!((mango.equatorial_radius_at(PI / 2.0) - mango.equatorial_radius_at(3.0 * PI / 2.0)).abs() > 0.5);
}

#[test]
fn normalized_heights_span_unit_interval() {
    let surface = SurfaceGrid::evaluate(&MangoSurface::default(), &ParamGrid::mango());
    let heights = normalized_heights(&surface).unwrap();

    let (lo, hi) = heights.min_max().unwrap();
    assert_eq!(lo, 0.0);
    assert_eq!(hi, 1.0);
    assert!(heights.as_slice().iter().all(|h| (0.0..=1.0).contains(h)));
}

#[test]
fn normalized_heights_track_z_ordering() {
    let surface = SurfaceGrid::evaluate(&MangoSurface::default(), &sample_grid(24, 24));
    let heights = normalized_heights(&surface).unwrap();
    let z = surface.z().as_slice();
    let h = heights.as_slice();

    for i in 1..z.len() {
        if z[i] > z[i - 1] {
            assert!(h[i] >= h[i - 1]);
        }
    }
}

#[test]
fn flat_surface_is_rejected() {
    let flat = MangoSurface {
        axial_scale: 0.0,
        tip_amplitude: 0.0,
        ..MangoSurface::default()
    };
    let surface = SurfaceGrid::evaluate(&flat, &sample_grid(8, 8));
    assert!(matches!(
        normalize(surface.z()),
        Err(MangoError::DegenerateRange { .. })
    ));
}

#[test]
fn bounds_contain_every_point() {
    let surface = SurfaceGrid::evaluate(&MangoSurface::default(), &sample_grid(40, 40));
    let bounds = surface.bounds().unwrap();
    let (rows, cols) = surface.shape();
    for r in 0..rows {
        for c in 0..cols {
            assert!(bounds.contains_point(surface.point(r, c).unwrap()));
        }
    }
    // The tip bulge pushes below the bare ellipsoid's -c.
    assert!(bounds.min.z < -1.2);
    assert!(bounds.max.z >= 1.2 - 1e-9);
}
