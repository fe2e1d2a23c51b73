use crate::constants::{CROSS_CHECK_TOLERANCE, DEFAULT_EPSILON};
use crate::error::RampError;
use crate::parabola::{angle_at_point, arc_length_from_origin, point_at_angle};
use crate::scale_factor::{scale_from_surface_and_height, scale_from_surface_and_horizontal};

/// The two known quantities defining a ramp; exactly two fields are set
#[derive(Debug, Clone, Default)]
pub struct RampInputs {
    /// Exit angle in degrees, strictly between 0 and 90
    pub exit_angle: Option<f64>,
    /// Length measured along the curved surface
    pub surface_length: Option<f64>,
    /// Horizontal extent from ramp start to ramp end
    pub horizontal_length: Option<f64>,
    /// Vertical rise at the ramp end
    pub height: Option<f64>,
}

/// Fully determined ramp geometry
#[derive(Debug, Clone, PartialEq)]
pub struct RampDimensions {
    pub exit_angle: f64,
    pub surface_length: f64,
    pub horizontal_length: f64,
    pub height: f64,
    /// Multiplier taking canonical y = x^2 coordinates to physical units;
    /// equals horizontal_length^2 / height for any point on the ramp
    pub scale_factor: f64,
}

/// Which pair of quantities was supplied, resolved once before solving
#[derive(Debug, Clone, Copy)]
enum KnownPair {
    AngleAndSurface { angle: f64, surface: f64 },
    AngleAndHorizontal { angle: f64, horizontal: f64 },
    AngleAndHeight { angle: f64, height: f64 },
    SurfaceAndHorizontal { surface: f64, horizontal: f64 },
    SurfaceAndHeight { surface: f64, height: f64 },
    HorizontalAndHeight { horizontal: f64, height: f64 },
}

impl KnownPair {
    fn from_inputs(inputs: &RampInputs) -> Result<Self, RampError> {
        let RampInputs {
            exit_angle,
            surface_length,
            horizontal_length,
            height,
        } = *inputs;

        match (exit_angle, surface_length, horizontal_length, height) {
            (Some(angle), Some(surface), None, None) => {
                Ok(KnownPair::AngleAndSurface { angle, surface })
            }
            (Some(angle), None, Some(horizontal), None) => {
                Ok(KnownPair::AngleAndHorizontal { angle, horizontal })
            }
            (Some(angle), None, None, Some(height)) => {
                Ok(KnownPair::AngleAndHeight { angle, height })
            }
            (None, Some(surface), Some(horizontal), None) => {
                Ok(KnownPair::SurfaceAndHorizontal { surface, horizontal })
            }
            (None, Some(surface), None, Some(height)) => {
                Ok(KnownPair::SurfaceAndHeight { surface, height })
            }
            (None, None, Some(horizontal), Some(height)) => {
                Ok(KnownPair::HorizontalAndHeight { horizontal, height })
            }
            _ => Err(RampError::InvalidInput(
                "exactly two of exit angle, surface length, horizontal length, and height \
                 must be given"
                    .to_string(),
            )),
        }
    }
}

/// Solver turning two known ramp quantities into the full geometry
pub struct RampSolver {
    inputs: RampInputs,
    epsilon: f64,
}

impl RampSolver {
    pub fn new(inputs: RampInputs) -> Self {
        Self {
            inputs,
            epsilon: DEFAULT_EPSILON,
        }
    }

    /// Override the convergence tolerance used by the iterative paths
    pub fn set_epsilon(&mut self, epsilon: f64) {
        self.epsilon = epsilon;
    }

    pub fn solve(&self) -> Result<RampDimensions, RampError> {
        let pair = KnownPair::from_inputs(&self.inputs)?;
        self.validate_known_values()?;

        let dims = match pair {
            KnownPair::AngleAndSurface { angle, surface } => {
                let p = point_at_angle(angle);
                let scale = surface / arc_length_from_origin(p.x);
                RampDimensions {
                    exit_angle: angle,
                    surface_length: surface,
                    horizontal_length: p.x * scale,
                    height: p.y * scale,
                    scale_factor: scale,
                }
            }
            KnownPair::AngleAndHorizontal { angle, horizontal } => {
                let p = point_at_angle(angle);
                let scale = horizontal / p.x;
                RampDimensions {
                    exit_angle: angle,
                    surface_length: arc_length_from_origin(p.x) * scale,
                    horizontal_length: horizontal,
                    height: p.y * scale,
                    scale_factor: scale,
                }
            }
            KnownPair::AngleAndHeight { angle, height } => {
                let p = point_at_angle(angle);
                let scale = height / p.y;
                RampDimensions {
                    exit_angle: angle,
                    surface_length: arc_length_from_origin(p.x) * scale,
                    horizontal_length: p.x * scale,
                    height,
                    scale_factor: scale,
                }
            }
            KnownPair::SurfaceAndHorizontal {
                surface,
                horizontal,
            } => {
                let scale = scale_from_surface_and_horizontal(surface, horizontal, self.epsilon)?;
                let x = horizontal / scale;
                RampDimensions {
                    exit_angle: angle_at_point(x),
                    surface_length: surface,
                    horizontal_length: horizontal,
                    height: x * x * scale,
                    scale_factor: scale,
                }
            }
            KnownPair::SurfaceAndHeight { surface, height } => {
                let scale = scale_from_surface_and_height(surface, height, self.epsilon)?;
                let horizontal = (height / scale).sqrt() * scale;
                RampDimensions {
                    exit_angle: angle_at_point(horizontal / scale),
                    surface_length: surface,
                    horizontal_length: horizontal,
                    height,
                    scale_factor: scale,
                }
            }
            KnownPair::HorizontalAndHeight { horizontal, height } => {
                let scale = horizontal * horizontal / height;
                let x = height / horizontal;
                RampDimensions {
                    exit_angle: angle_at_point(x),
                    surface_length: arc_length_from_origin(x) * scale,
                    horizontal_length: horizontal,
                    height,
                    scale_factor: scale,
                }
            }
        };

        ensure_finite(&dims)?;
        Ok(dims)
    }

    fn validate_known_values(&self) -> Result<(), RampError> {
        if let Some(angle) = self.inputs.exit_angle {
            if !angle.is_finite() || angle <= 0.0 || angle >= 90.0 {
                return Err(RampError::InvalidInput(format!(
                    "exit angle must be between 0 and 90 degrees exclusive, got {angle}"
                )));
            }
        }

        let lengths = [
            ("surface length", self.inputs.surface_length),
            ("horizontal length", self.inputs.horizontal_length),
            ("height", self.inputs.height),
        ];
        for (name, value) in lengths {
            if let Some(v) = value {
                if !v.is_finite() || v <= 0.0 {
                    return Err(RampError::InvalidInput(format!(
                        "{name} must be a positive finite value, got {v}"
                    )));
                }
            }
        }

        Ok(())
    }
}

fn ensure_finite(dims: &RampDimensions) -> Result<(), RampError> {
    let fields = [
        ("exit angle", dims.exit_angle),
        ("surface length", dims.surface_length),
        ("horizontal length", dims.horizontal_length),
        ("height", dims.height),
        ("scale factor", dims.scale_factor),
    ];
    for (name, value) in fields {
        if !value.is_finite() {
            return Err(RampError::Arithmetic(format!(
                "{name} came out non-finite ({value})"
            )));
        }
    }
    Ok(())
}

/// Re-solve the ramp from every pair of its dimensions and confirm each
/// reconstruction agrees with the record.
///
/// Any pair of the four quantities determines the whole ramp, so a record
/// that fails to reproduce itself from one of the six pairs is inconsistent
/// or sits in a regime the iterative solvers cannot handle.
pub fn cross_validate(dims: &RampDimensions) -> Result<(), RampError> {
    let angle = Some(dims.exit_angle);
    let surface = Some(dims.surface_length);
    let horizontal = Some(dims.horizontal_length);
    let height = Some(dims.height);

    let reconstructions = [
        RampInputs {
            exit_angle: angle,
            surface_length: surface,
            ..Default::default()
        },
        RampInputs {
            exit_angle: angle,
            horizontal_length: horizontal,
            ..Default::default()
        },
        RampInputs {
            exit_angle: angle,
            height,
            ..Default::default()
        },
        RampInputs {
            surface_length: surface,
            horizontal_length: horizontal,
            ..Default::default()
        },
        RampInputs {
            surface_length: surface,
            height,
            ..Default::default()
        },
        RampInputs {
            horizontal_length: horizontal,
            height,
            ..Default::default()
        },
    ];

    for inputs in reconstructions {
        let resolved = RampSolver::new(inputs).solve()?;
        let checks = [
            ("exit angle", resolved.exit_angle, dims.exit_angle),
            ("surface length", resolved.surface_length, dims.surface_length),
            (
                "horizontal length",
                resolved.horizontal_length,
                dims.horizontal_length,
            ),
            ("height", resolved.height, dims.height),
        ];
        for (name, got, want) in checks {
            if (got - want).abs() > CROSS_CHECK_TOLERANCE {
                return Err(RampError::Convergence(format!(
                    "cross check failed: {name} re-solved to {got}, expected {want}"
                )));
            }
        }
    }

    Ok(())
}
