use nalgebra::Point2;

use crate::arc_length::x_for_arc_length;
use crate::error::RampError;
use crate::parabola::angle_at_point;
use crate::ramp_solver::RampDimensions;

/// A point on the ramp surface located by distance travelled along it
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceSample {
    /// Physical position of the point, x horizontal and y vertical
    pub position: Point2<f64>,
    /// Surface inclination at the point in degrees
    pub angle: f64,
    /// Distance along the curved surface from the ramp start
    pub surface_length: f64,
}

/// Sample the ramp surface at regular intervals of surface distance.
///
/// Interior samples fall at spacing, 2 * spacing, ... strictly below the
/// total surface length; the exact ramp end is always appended last, so the
/// result is never empty.
pub fn sample_surface(
    dims: &RampDimensions,
    spacing: f64,
    epsilon: f64,
) -> Result<Vec<SurfaceSample>, RampError> {
    if !spacing.is_finite() || spacing <= 0.0 {
        return Err(RampError::InvalidInput(format!(
            "sample spacing must be a positive finite value, got {spacing}"
        )));
    }

    let scale = dims.scale_factor;
    let mut samples = Vec::new();

    let mut travelled = spacing;
    while travelled < dims.surface_length {
        let x = x_for_arc_length(travelled / scale, epsilon)?;
        samples.push(SurfaceSample {
            position: Point2::new(x * scale, x * x * scale),
            angle: angle_at_point(x),
            surface_length: travelled,
        });
        travelled += spacing;
    }

    // The end of the ramp is known exactly; no inversion needed.
    let x_end = dims.horizontal_length / scale;
    samples.push(SurfaceSample {
        position: Point2::new(dims.horizontal_length, x_end * x_end * scale),
        angle: angle_at_point(x_end),
        surface_length: dims.surface_length,
    });

    Ok(samples)
}
