use crate::constants::MAX_BISECTION_ITERATIONS;
use crate::error::RampError;
use crate::parabola::arc_length_from_origin;

/// Find the x on y = x^2 whose arc length from the origin equals `target`.
///
/// The arc length has no closed-form inverse, so this bisects x over
/// [0, target]; the arc length always exceeds x, which makes the target
/// itself a safe upper bound. The loop exits early when the residual at
/// a midpoint beats the tolerance, otherwise it runs until the bracket
/// is narrower than the tolerance and returns its midpoint.
pub fn x_for_arc_length(target: f64, epsilon: f64) -> Result<f64, RampError> {
    if !target.is_finite() {
        return Err(RampError::Arithmetic(format!(
            "arc length target is not finite: {target}"
        )));
    }
    if target < 0.0 {
        return Err(RampError::InvalidInput(format!(
            "arc length must be non-negative, got {target}"
        )));
    }

    let mut x_min = 0.0;
    let mut x_max = target;
    let mut iterations = 0;

    while x_max - x_min > epsilon {
        if iterations >= MAX_BISECTION_ITERATIONS {
            return Err(RampError::Convergence(format!(
                "arc length inversion for target {target} did not converge"
            )));
        }
        iterations += 1;

        let x_mid = (x_min + x_max) / 2.0;
        let calculated = arc_length_from_origin(x_mid);

        if (calculated - target).abs() < epsilon {
            return Ok(x_mid);
        }

        if calculated < target {
            x_min = x_mid;
        } else {
            x_max = x_mid;
        }
    }

    Ok((x_min + x_max) / 2.0)
}
