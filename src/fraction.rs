/// Render a measurement as a mixed number snapped to the nearest fraction.
///
/// A positive `frac` names the fraction denominator (16 gives nearest
/// sixteenths) and must be a power of two so the result can be reduced;
/// zero or negative `frac` switches to fixed-point with `-frac` decimal
/// places. Whole results drop the fractional part entirely.
pub fn nearest_fraction(value: f64, frac: i32) -> String {
    if frac <= 0 {
        let digits = (-frac) as usize;
        return format!("{value:.digits$}");
    }

    let whole = value.trunc() as i64;
    let fraction = value - whole as f64;
    let mut numerator = (fraction * frac as f64).round() as i64;
    let mut denominator = frac as i64;

    if numerator == 0 {
        return format!("{whole}");
    }

    // Reduce by shared powers of two.
    while numerator % 2 == 0 {
        numerator /= 2;
        denominator /= 2;
    }

    if denominator == 1 {
        return format!("{}", whole + numerator);
    }
    format!("{whole}-{numerator}/{denominator}")
}
