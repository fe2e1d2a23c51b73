//! Command-line interface for ramp engine

fn main() {
    println!("Ramp Engine v0.1.0");
    println!();
    println!("This is a geometry engine for parabolic ramps.");
    println!("Use the ramp-cli binary for the full command-line solver.");
    println!();
    println!("To use as a Rust library:");
    println!("  Add to Cargo.toml: ramp-engine = \"0.1\"");
    println!();
    println!("To solve a ramp from the command line:");
    println!("  ramp-cli -e 45 -r 120");
}
