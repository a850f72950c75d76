use glyphsea_geom::{Rect, Vec2, ease, lerp_rgb};

fn approx_eq(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}

fn vec2_approx_eq(a: Vec2, b: Vec2, eps: f32) -> bool {
    approx_eq(a.x, b.x, eps) && approx_eq(a.y, b.y, eps)
}

#[test]
fn vec2_add_sub() {
    let a = Vec2::new(1.0, 2.0);
    let b = Vec2::new(-4.0, 5.0);
    let c = a + b;
    assert!(vec2_approx_eq(c, Vec2::new(-3.0, 7.0), 1e-6));

    let d = c - a;
    assert!(vec2_approx_eq(d, b, 1e-6));
}

#[test]
fn vec2_assign_ops() {
    let mut v = Vec2::new(1.0, 1.0);
    v += Vec2::new(2.0, 3.0);
    assert!(vec2_approx_eq(v, Vec2::new(3.0, 4.0), 1e-6));

    v -= Vec2::new(1.0, 2.0);
    assert!(vec2_approx_eq(v, Vec2::new(2.0, 2.0), 1e-6));
}

#[test]
fn vec2_length_distance_normalized() {
    let v = Vec2::new(3.0, 4.0);
    assert!(approx_eq(v.length(), 5.0, 1e-6));
    assert!(approx_eq(Vec2::ZERO.distance(v), 5.0, 1e-6));

    let n = v.normalized();
    assert!(approx_eq(n.length(), 1.0, 1e-6));
    assert!(vec2_approx_eq(n, Vec2::new(0.6, 0.8), 1e-6));

    // Zero vector normalization is a no-op, never NaN
    let zn = Vec2::ZERO.normalized();
    assert!(vec2_approx_eq(zn, Vec2::ZERO, 1e-6));
}

#[test]
fn vec2_lerp_endpoints_and_midpoint() {
    let a = Vec2::new(0.0, 10.0);
    let b = Vec2::new(10.0, -10.0);
    assert!(vec2_approx_eq(a.lerp(b, 0.0), a, 1e-6));
    assert!(vec2_approx_eq(a.lerp(b, 1.0), b, 1e-6));
    assert!(vec2_approx_eq(a.lerp(b, 0.5), Vec2::new(5.0, 0.0), 1e-6));
}

#[test]
fn rect_contains_is_closed() {
    let r = Rect::from_size(Vec2::new(10.0, 20.0), 30.0, 40.0);
    assert!(approx_eq(r.width(), 30.0, 1e-6));
    assert!(approx_eq(r.height(), 40.0, 1e-6));
    assert!(vec2_approx_eq(r.center(), Vec2::new(25.0, 40.0), 1e-6));

    // Corners and edges are inside (closed interval)
    assert!(r.contains(Vec2::new(10.0, 20.0)));
    assert!(r.contains(Vec2::new(40.0, 60.0)));
    assert!(r.contains(Vec2::new(40.0, 20.0)));
    assert!(r.contains(r.center()));

    assert!(!r.contains(Vec2::new(9.99, 20.0)));
    assert!(!r.contains(Vec2::new(10.0, 60.01)));
}

#[test]
fn ease_out_back_endpoints_and_overshoot() {
    assert!(approx_eq(ease::out_back(0.0), 0.0, 1e-5));
    assert!(approx_eq(ease::out_back(1.0), 1.0, 1e-5));
    // Overshoots past 1.0 in the back half of the curve
    assert!(ease::out_back(0.7) > 1.0);
    // Clamps outside [0, 1]
    assert!(approx_eq(ease::out_back(-2.0), 0.0, 1e-5));
    assert!(approx_eq(ease::out_back(3.0), 1.0, 1e-5));
}

#[test]
fn lerp_rgb_endpoints_and_clamp() {
    let a = [0u8, 100, 200];
    let b = [255u8, 0, 100];
    assert_eq!(lerp_rgb(a, b, 0.0), a);
    assert_eq!(lerp_rgb(a, b, 1.0), b);
    assert_eq!(lerp_rgb(a, b, -5.0), a);
    assert_eq!(lerp_rgb(a, b, 5.0), b);
    let mid = lerp_rgb(a, b, 0.5);
    assert_eq!(mid, [128, 50, 150]);
}

mod props {
    use super::*;
    use proptest::prelude::*;

    fn small_f32() -> impl Strategy<Value = f32> {
        -1.0e4f32..=1.0e4
    }

    proptest! {
        // lerp at t in [0,1] stays within the segment's bounding box
        #[test]
        fn lerp_stays_in_box(ax in small_f32(), ay in small_f32(),
                             bx in small_f32(), by in small_f32(),
                             t in 0.0f32..=1.0) {
            let a = Vec2::new(ax, ay);
            let b = Vec2::new(bx, by);
            let p = a.lerp(b, t);
            prop_assert!(p.x >= ax.min(bx) - 1e-2 && p.x <= ax.max(bx) + 1e-2);
            prop_assert!(p.y >= ay.min(by) - 1e-2 && p.y <= ay.max(by) + 1e-2);
        }

        // ease::out_back stays within a known envelope on [0,1]
        #[test]
        fn out_back_bounded(t in 0.0f32..=1.0) {
            let v = ease::out_back(t);
            prop_assert!(v >= -0.1 && v <= 1.2);
        }
    }
}
