use nalgebra::Point2;

/// Point on the canonical parabola y = x^2 where the tangent makes the
/// given angle (degrees) with the horizontal.
///
/// The slope at x is 2x, so x = tan(angle) / 2. The tangent is singular
/// at 90 degrees; callers keep the angle strictly inside (0, 90).
pub fn point_at_angle(angle_deg: f64) -> Point2<f64> {
    let theta = angle_deg.to_radians();
    let x = theta.tan() / 2.0;
    Point2::new(x, x * x)
}

/// Tangent angle (degrees from horizontal) of y = x^2 at the given x
pub fn angle_at_point(x: f64) -> f64 {
    let slope = 2.0 * x;
    slope.atan().to_degrees()
}

/// Arc length of y = x^2 measured from the origin to the given x.
///
/// Closed form of the arc length integral, written in terms of the
/// point's height h = x^2 and width w = 2x. The log term is singular at
/// x = 0, where the arc length is exactly zero.
pub fn arc_length_from_origin(x: f64) -> f64 {
    if x == 0.0 {
        return 0.0;
    }
    let h = x * x;
    let w = 2.0 * x;
    let i0 = (w * w + 16.0 * h * h).sqrt();
    let i1 = 0.5 * i0;
    let i2 = w * w / (8.0 * h) * ((4.0 * h + i0) / w).ln();
    (i1 + i2) / 2.0
}
