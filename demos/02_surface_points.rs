/// Surface Points Example
///
/// This example lists evenly spaced points along a ramp surface, first as
/// raw coordinates and then rounded to shop fractions.

use ramp_engine::{nearest_fraction, sample_surface, RampInputs, RampSolver, DEFAULT_EPSILON};

fn main() {
    println!("=== Ramp Surface Points ===\n");

    // Ramp fixed by its footprint
    let horizontal_length = 100.0;
    let height = 25.0;
    let spacing = 10.0; // distance along the surface between points

    let inputs = RampInputs {
        horizontal_length: Some(horizontal_length),
        height: Some(height),
        ..Default::default()
    };
    let dims = RampSolver::new(inputs).solve().expect("ramp should solve");

    println!("Ramp:");
    println!("  Horizontal length: {}", dims.horizontal_length);
    println!("  Height: {}", dims.height);
    println!("  Surface length: {:.3}", dims.surface_length);
    println!("  Exit angle: {:.1}°", dims.exit_angle);
    println!();

    let samples = sample_surface(&dims, spacing, DEFAULT_EPSILON).expect("sampling should succeed");

    println!("Points Every {} Along the Surface:", spacing);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  Along |        X |        Y | Angle (°)");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    for s in &samples {
        println!(
            " {:6.1} | {:8.3} | {:8.3} | {:9.2}",
            s.surface_length, s.position.x, s.position.y, s.angle
        );
    }
    println!();

    // The same points the way they would land on a tape measure
    println!("Rounded to the Nearest Sixteenth:");
    for s in &samples {
        println!(
            "  x = {}, y = {}",
            nearest_fraction(s.position.x, 16),
            nearest_fraction(s.position.y, 16)
        );
    }
}
