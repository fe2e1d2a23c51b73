use std::error::Error;
use std::fmt;

/// Error type for ramp geometry calculations
#[derive(Debug, Clone, PartialEq)]
pub enum RampError {
    /// Wrong count of known quantities, or a known quantity outside its domain
    InvalidInput(String),
    /// A root-finding loop failed to produce a trustworthy answer
    Convergence(String),
    /// A calculation produced a non-finite value where a finite one is required
    Arithmetic(String),
}

impl fmt::Display for RampError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RampError::InvalidInput(msg) => write!(f, "invalid input: {}", msg),
            RampError::Convergence(msg) => write!(f, "convergence failure: {}", msg),
            RampError::Arithmetic(msg) => write!(f, "arithmetic error: {}", msg),
        }
    }
}

impl Error for RampError {}
