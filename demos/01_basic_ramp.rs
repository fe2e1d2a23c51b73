/// Basic Ramp Example
///
/// This example solves a parabolic ramp from two known dimensions and
/// shows that any other pair of the results rebuilds the same ramp.

use ramp_engine::{cross_validate, RampInputs, RampSolver};

fn main() {
    println!("=== Basic Ramp Solving ===\n");

    // Known dimensions
    let exit_angle = 45.0;      // degrees
    let surface_length = 120.0; // same unit as the other lengths

    println!("Known Values:");
    println!("  Exit angle: {}°", exit_angle);
    println!("  Surface length: {}", surface_length);
    println!();

    let inputs = RampInputs {
        exit_angle: Some(exit_angle),
        surface_length: Some(surface_length),
        ..Default::default()
    };
    let dims = RampSolver::new(inputs).solve().expect("ramp should solve");

    println!("Solved Ramp:");
    println!("  Exit angle:        {:9.3}°", dims.exit_angle);
    println!("  Surface length:    {:9.3}", dims.surface_length);
    println!("  Horizontal length: {:9.3}", dims.horizontal_length);
    println!("  Height:            {:9.3}", dims.height);
    println!("  Scale factor:      {:9.3}", dims.scale_factor);
    println!();

    // Rebuild the same ramp from other pairs of the solved values
    let rebuilds = vec![
        (
            "horizontal length + height",
            RampInputs {
                horizontal_length: Some(dims.horizontal_length),
                height: Some(dims.height),
                ..Default::default()
            },
        ),
        (
            "surface length + height",
            RampInputs {
                surface_length: Some(dims.surface_length),
                height: Some(dims.height),
                ..Default::default()
            },
        ),
        (
            "exit angle + height",
            RampInputs {
                exit_angle: Some(dims.exit_angle),
                height: Some(dims.height),
                ..Default::default()
            },
        ),
    ];

    println!("Rebuilt From Other Pairs:");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!(" Known pair                  | Angle (°) | Surface | Horizontal | Height");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    for (name, inputs) in rebuilds {
        let d = RampSolver::new(inputs).solve().expect("ramp should solve");
        println!(
            " {:27} | {:9.3} | {:7.3} | {:10.3} | {:6.3}",
            name, d.exit_angle, d.surface_length, d.horizontal_length, d.height
        );
    }
    println!();

    cross_validate(&dims).expect("cross check should pass");
    println!("Cross check passed: every pair rebuilds the same ramp.");
}
