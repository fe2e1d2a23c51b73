//! # Ramp Engine
//!
//! Parabolic ramp geometry engine deriving the full ramp dimensions from any two known quantities.

// Re-export the main types and functions
pub use constants::DEFAULT_EPSILON;
pub use error::RampError;
pub use fraction::nearest_fraction;
pub use ramp_solver::{cross_validate, RampDimensions, RampInputs, RampSolver};
pub use surface_sampling::{sample_surface, SurfaceSample};

// Module declarations
mod constants;
mod root_finding;
pub mod arc_length;
pub mod error;
pub mod fraction;
pub mod parabola;
pub mod ramp_solver;
pub mod scale_factor;
pub mod surface_sampling;
