/// Numeric policy shared by the ramp solvers

/// Default convergence tolerance for the bisection loops
pub const DEFAULT_EPSILON: f64 = 1e-7;

/// Lower bound of the scale factor search bracket
pub const SCALE_BRACKET_MIN: f64 = 1.0;

/// Upper bound of the scale factor search bracket
///
/// The bracket is fixed rather than adaptive. A ramp whose true scale
/// factor falls outside it makes the search converge onto a boundary
/// value, which the back-substitution check in the scale solvers then
/// rejects as a convergence failure.
pub const SCALE_BRACKET_MAX: f64 = 10000.0;

// Iteration caps and validation tolerances

/// Hard cap on bisection iterations before reporting a convergence failure
pub const MAX_BISECTION_ITERATIONS: usize = 200;

/// Relative residual allowed when a converged scale factor is substituted
/// back into its defining equation
pub const SCALE_RESIDUAL_TOLERANCE: f64 = 1e-4;

/// Absolute tolerance used when re-solving a ramp from every knowable pair
pub const CROSS_CHECK_TOLERANCE: f64 = 1e-3;
