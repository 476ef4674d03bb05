//! End-to-end transform and animation scenarios.

use unmatrix::angle::degs;
use unmatrix::point::pt2;
use unmatrix::rect::{Quad, Rect};
use unmatrix::{Matrix4, assert_approx_eq};

/// A CSS-style transform list applied to an element with an off-center
/// transform origin, mapped, inverted, and hit-tested back.
#[test]
fn element_transform_round_trip() {
    let mut m = Matrix4::identity();
    m.translate(120.0, 40.0);
    m.rotate_about_z(degs(30.0));
    m.scale(1.5, 1.5);
    m.apply_transform_origin(50.0, 25.0, 0.0);

    // The origin stays put under its own transform.
    assert_approx_eq!(m.map_point(pt2(50.0, 25.0)), pt2(170.0, 65.0));

    let bounds = m.map_rect(Rect::new(0.0, 0.0, 100.0, 50.0));
    assert!(!bounds.is_empty());

    // Hit-testing: a screen point projects back into element space.
    let inv = m.inverse().expect("transform should be invertible");
    let screen = m.map_point(pt2(10.0, 10.0));
    assert_approx_eq!(inv.map_point(screen), pt2(10.0, 10.0), eps = 1e-4);
}

/// A perspective-composed 3D transform projected back onto the page
/// plane, as done when hit-testing a tilted element.
#[test]
fn tilted_element_hit_test() {
    let mut m = Matrix4::identity();
    m.apply_perspective_depth(500.0);
    m.rotate_about_y(degs(40.0));

    let content = Quad::from(Rect::new(-50.0, -50.0, 100.0, 100.0));
    let screen = m.map_quad(content);

    // Hit-testing goes through the inverse: lift each screen point onto
    // the tilted plane and carry it back to element space.
    let inv = m.inverse().expect("perspective transform is invertible");
    let hit = inv.project_quad(screen);
    for (h, original) in hit.corners().into_iter().zip(content.corners()) {
        assert_approx_eq!(h, original, eps = 1e-3);
    }

    // A single corner, step by step, without clamping.
    let proj = inv.project_point(screen.corners()[0]);
    assert!(!proj.clamped);
    assert_approx_eq!(proj.point, pt2(-50.0, -50.0), eps = 1e-3);
}

/// A full animation: sampling `blend` across the timeline is continuous
/// and hits both endpoints.
#[test]
fn animation_timeline() {
    let mut from = Matrix4::identity();
    from.translate(0.0, 0.0);
    from.scale(1.0, 1.0);
    let mut to = Matrix4::identity();
    to.translate(300.0, 100.0);
    to.rotate_about_z(degs(180.0));
    to.scale(2.0, 2.0);

    assert_approx_eq!(
        to.blend(&from, 0.0).col_major(),
        from.col_major(),
        eps = 1e-9
    );
    assert_approx_eq!(
        to.blend(&from, 1.0).col_major(),
        to.col_major(),
        eps = 1e-9
    );

    // No frame-to-frame jumps larger than the per-step motion allows.
    let probe = pt2(10.0, 0.0);
    let mut prev = from.map_point(probe);
    for step in 1..=20 {
        let cur = to.blend(&from, step as f64 / 20.0).map_point(probe);
        let dist =
            ((cur.x - prev.x).powi(2) + (cur.y - prev.y).powi(2)).sqrt();
        assert!(dist < 30.0, "discontinuity at step {step}: {dist}");
        prev = cur;
    }
}

/// Mixing a 2D and a 3D endpoint takes the general quaternion path.
#[test]
fn animation_across_dimensions() {
    let mut from = Matrix4::identity();
    from.translate(50.0, 0.0);
    let mut to = Matrix4::identity();
    to.rotate_about_x(degs(90.0));

    assert!(from.is_2d() && !to.is_2d());
    let mid = to.blend(&from, 0.5);

    let mut expected = Matrix4::identity();
    expected.translate3d(25.0, 0.0, 0.0);
    expected.rotate_about_x(degs(45.0));
    assert_approx_eq!(mid.col_major(), expected.col_major(), eps = 1e-9);
}

/// A degenerate keyframe falls back to a discrete midpoint swap without
/// perturbing either endpoint matrix.
#[test]
fn animation_with_degenerate_keyframe() {
    let collapsed = Matrix4::affine(0.0, 0.0, 0.0, 0.0, 10.0, 10.0);
    let mut normal = Matrix4::identity();
    normal.rotate_about_z(degs(45.0));

    for (t, expected) in
        [(0.0, &collapsed), (0.49, &collapsed), (0.5, &normal), (1.0, &normal)]
    {
        assert_eq!(normal.blend(&collapsed, t), *expected);
    }
}

/// Compositor-style invariant: whatever garbage lands in a matrix, the
/// mapping APIs hand out finite coordinates.
#[test]
fn mapping_never_leaks_non_finite_values() {
    let cases = [
        Matrix4::from_col_major([f64::NAN; 16]),
        Matrix4::from_col_major([f64::INFINITY; 16]),
        {
            let mut m = Matrix4::identity();
            m.scale3d(f64::MAX, f64::MAX, 1.0);
            m.translate(f64::MAX, f64::MIN);
            m
        },
    ];
    for m in cases {
        let p = m.map_point(pt2(1e30, -1e30));
        assert!(p.x.is_finite() && p.y.is_finite(), "{m:?}");

        let r = m.map_rect(Rect::new(0.0, 0.0, f32::MAX, f32::MAX));
        assert!(r.x.is_finite() && r.y.is_finite(), "{m:?}");
        assert!(r.width.is_finite() && r.height.is_finite(), "{m:?}");

        let q = m.map_quad(Quad::from(Rect::new(0.0, 0.0, 100.0, 100.0)));
        for c in q.corners() {
            assert!(c.x.is_finite() && c.y.is_finite(), "{m:?}");
        }
    }
}
