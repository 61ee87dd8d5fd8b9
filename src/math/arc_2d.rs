/// 2D arc angle utilities.
///
/// Angles are in degrees, measured counter-clockwise from the +x axis, the
/// way the plotting collaborator expects them. An arc runs counter-clockwise
/// from `theta1` to `theta2`.
use std::f64::consts::PI;

/// Normalizes an angle in degrees into `[0, 360)`.
#[must_use]
pub fn normalize_degrees(angle: f64) -> f64 {
    let a = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative input.
    if a >= 360.0 {
        0.0
    } else {
        a
    }
}

/// Counter-clockwise sweep from `theta1` to `theta2`, in `(0, 360]`.
///
/// Equal angles are treated as a full turn.
#[must_use]
pub fn ccw_sweep(theta1: f64, theta2: f64) -> f64 {
    let sweep = normalize_degrees(theta2 - theta1);
    if sweep == 0.0 {
        360.0
    } else {
        sweep
    }
}

/// Reflects an arc about the diagonal `y = x`.
///
/// Reflection reverses orientation, so the start and end angles swap:
/// `theta1' = 90 - theta2`, `theta2' = 90 - theta1`.
#[must_use]
pub fn reflect_about_diagonal(theta1: f64, theta2: f64) -> (f64, f64) {
    (90.0 - theta2, 90.0 - theta1)
}

/// Evaluates a point on an axis-aligned ellipse at `angle` degrees.
///
/// `width` and `height` are full diameters along x and y.
#[must_use]
pub fn ellipse_point_at(cx: f64, cy: f64, width: f64, height: f64, angle: f64) -> (f64, f64) {
    let rad = angle * PI / 180.0;
    (cx + 0.5 * width * rad.cos(), cy + 0.5 * height * rad.sin())
}

/// Returns the point at parameter `t` in `[0, 1]` along the arc from
/// `theta1` counter-clockwise to `theta2`.
#[must_use]
pub fn arc_point_at(
    cx: f64, cy: f64,
    width: f64, height: f64,
    theta1: f64, theta2: f64,
    t: f64,
) -> (f64, f64) {
    let angle = theta1 + ccw_sweep(theta1, theta2) * t;
    ellipse_point_at(cx, cy, width, height, angle)
}
