use crate::constants::MAX_BISECTION_ITERATIONS;
use crate::error::RampError;

/// Bisection over a bracket [lo, hi] driven by a predicate.
///
/// The predicate reports whether a midpoint lies above the root, in which
/// case the upper bound moves down to it; otherwise the lower bound moves
/// up. Terminates once the bracket is narrower than `tolerance` and
/// returns the bracket midpoint.
pub fn bisect<P>(mut lo: f64, mut hi: f64, tolerance: f64, predicate: P) -> Result<f64, RampError>
where
    P: Fn(f64) -> Result<bool, RampError>,
{
    let mut iterations = 0;

    while (hi - lo).abs() > tolerance {
        if iterations >= MAX_BISECTION_ITERATIONS {
            return Err(RampError::Convergence(format!(
                "bisection failed to narrow [{lo}, {hi}] below {tolerance} within {MAX_BISECTION_ITERATIONS} iterations"
            )));
        }
        iterations += 1;

        let mid = (lo + hi) / 2.0;
        if predicate(mid)? {
            hi = mid;
        } else {
            lo = mid;
        }
    }

    Ok((lo + hi) / 2.0)
}
