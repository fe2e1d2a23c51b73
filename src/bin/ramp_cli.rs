use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::process;

use ramp_engine::{
    cross_validate, nearest_fraction, sample_surface, RampDimensions, RampInputs, RampSolver,
    SurfaceSample, DEFAULT_EPSILON,
};

// Fraction denominators that reduce cleanly
const VALID_FRACTIONS: [i32; 6] = [1, 2, 4, 8, 16, 32];

#[derive(Parser)]
#[command(name = "ramp")]
#[command(author = "Ramp Engine Team")]
#[command(version = "0.1.0")]
#[command(about = "Parabolic ramp geometry calculator", long_about = None)]
struct Cli {
    /// Exit angle in degrees
    #[arg(short = 'e', long)]
    exit_angle: Option<f64>,

    /// Ramp surface length
    #[arg(short = 'r', long)]
    ramp_surface_length: Option<f64>,

    /// Horizontal length
    #[arg(short = 'l', long)]
    length: Option<f64>,

    /// Height at end of ramp
    #[arg(short = 't', long)]
    height: Option<f64>,

    /// Nearest fractional value for dimension output (e.g. 8 means nearest eighth)
    #[arg(short = 'f', long)]
    fraction: Option<i32>,

    /// Number of decimal places for dimension output (if fraction not specified)
    #[arg(short = 'd', long, conflicts_with = "fraction")]
    decimal: Option<u32>,

    /// Coordinate list spacing along ramp surface
    #[arg(short = 's', long, default_value = "4")]
    list_spacing: f64,

    /// Output format
    #[arg(short = 'o', long, default_value = "table")]
    output: OutputFormat,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Csv,
    Table,
}

#[derive(Debug, Serialize, Deserialize)]
struct RampPoint {
    x: f64,
    y: f64,
    angle: f64,
    surface_length: f64,
}

#[derive(Debug, Serialize, Deserialize)]
struct RampReport {
    exit_angle: f64,
    surface_length: f64,
    horizontal_length: f64,
    height: f64,
    scale_factor: f64,
    points: Vec<RampPoint>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if let Err(message) = validate_args(&cli) {
        eprintln!("Error: {message}");
        process::exit(1);
    }

    // No fraction and no decimal means round to the nearest whole unit.
    let frac = match (cli.fraction, cli.decimal) {
        (Some(f), _) => f,
        (None, Some(d)) => -(d as i32),
        (None, None) => 1,
    };

    let inputs = RampInputs {
        exit_angle: cli.exit_angle,
        surface_length: cli.ramp_surface_length,
        horizontal_length: cli.length,
        height: cli.height,
    };

    let dims = RampSolver::new(inputs).solve()?;
    cross_validate(&dims)?;
    let samples = sample_surface(&dims, cli.list_spacing, DEFAULT_EPSILON)?;

    match cli.output {
        OutputFormat::Table => {
            describe_ramp(&cli, &dims, frac);
            print_points(&samples, frac, cli.list_spacing);
        }
        OutputFormat::Json => {
            let report = RampReport {
                exit_angle: dims.exit_angle,
                surface_length: dims.surface_length,
                horizontal_length: dims.horizontal_length,
                height: dims.height,
                scale_factor: dims.scale_factor,
                points: samples
                    .iter()
                    .map(|s| RampPoint {
                        x: s.position.x,
                        y: s.position.y,
                        angle: s.angle,
                        surface_length: s.surface_length,
                    })
                    .collect(),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Csv => {
            println!("x,y,angle,surface_length");
            for s in &samples {
                println!(
                    "{:.4},{:.4},{:.1},{:.4}",
                    s.position.x, s.position.y, s.angle, s.surface_length
                );
            }
        }
    }

    Ok(())
}

fn validate_args(cli: &Cli) -> Result<(), String> {
    let known = [cli.exit_angle, cli.ramp_surface_length, cli.length, cli.height];
    if known.iter().flatten().count() != 2 {
        return Err(
            "You must specify exactly two of the following arguments: -e, -r, -l, -t".to_string(),
        );
    }

    let mut positives: Vec<f64> = known.iter().flatten().copied().collect();
    if let Some(f) = cli.fraction {
        positives.push(f as f64);
    }
    positives.push(cli.list_spacing);
    if positives.iter().any(|v| !(*v > 0.0)) {
        return Err("All arguments must be positive non-zero numeric values.".to_string());
    }

    if let Some(f) = cli.fraction {
        if !VALID_FRACTIONS.contains(&f) {
            return Err("-f can only have the values 1, 2, 4, 8, 16, or 32.".to_string());
        }
    }

    if let Some(angle) = cli.exit_angle {
        if angle >= 90.0 {
            return Err("Exit angle must be less than 90.".to_string());
        }
    }

    Ok(())
}

fn describe_ramp(cli: &Cli, dims: &RampDimensions, frac: i32) {
    println!();
    match (cli.exit_angle, cli.ramp_surface_length, cli.length, cli.height) {
        (Some(e), Some(r), None, None) => {
            println!(
                "For parabolic ramp with exit angle = {e} degrees and ramp surface length = {r}"
            );
            println!(
                "The total horizontal length = {} and the total height = {}",
                nearest_fraction(dims.horizontal_length, frac),
                nearest_fraction(dims.height, frac)
            );
        }
        (Some(e), None, Some(l), None) => {
            println!("For parabolic ramp with exit angle = {e} and horizontal length = {l}");
            println!(
                "The ramp surface length = {} and the total height = {}",
                nearest_fraction(dims.surface_length, frac),
                nearest_fraction(dims.height, frac)
            );
        }
        (Some(e), None, None, Some(t)) => {
            println!("For parabolic ramp with exit angle = {e} and vertical height = {t}");
            println!(
                "The ramp surface length = {} and horizontal length = {}",
                nearest_fraction(dims.surface_length, frac),
                nearest_fraction(dims.horizontal_length, frac)
            );
        }
        (None, Some(r), Some(l), None) => {
            println!(
                "For parabolic ramp with ramp surface length = {r} and horizontal length = {l}"
            );
            println!(
                "The height = {} and the exit angle = {:.1} degrees",
                nearest_fraction(dims.height, frac),
                dims.exit_angle
            );
        }
        (None, Some(r), None, Some(t)) => {
            println!(
                "For parabolic ramp with ramp surface length = {r} and vertical height = {t}"
            );
            println!(
                "The horizontal length = {} and the exit angle = {:.1} degrees",
                nearest_fraction(dims.horizontal_length, frac),
                dims.exit_angle
            );
        }
        (None, None, Some(l), Some(t)) => {
            println!(
                "For parabolic ramp with horizontal length = {l} and vertical height = {t}"
            );
            println!(
                "The ramp surface length = {} and the exit angle = {:.1} degrees",
                nearest_fraction(dims.surface_length, frac),
                dims.exit_angle
            );
        }
        _ => unreachable!("argument validation admits exactly two known values"),
    }
    println!("The scale factor = {:.4}", dims.scale_factor);
}

fn print_points(samples: &[SurfaceSample], frac: i32, spacing: f64) {
    println!();
    println!(
        "The following lists the x-y coordinates of points along the ramp surface spaced every {spacing}:"
    );
    for s in samples {
        println!(
            "x = {}, y = {}, angle = {:.1}, ramp surface length = {}",
            nearest_fraction(s.position.x, frac),
            nearest_fraction(s.position.y, frac),
            s.angle,
            nearest_fraction(s.surface_length, frac)
        );
    }
    println!();
}
