//! Minimal end-to-end example: derive a force from a mass and an acceleration, then take a square root.

use physmod::si::{Kilograms, Meters, MetersPerSecondSquared, Newtons};
use physmod::{dims, sqrt, Quantity};

fn main() {
    let m = Kilograms::new(20.0);
    let a = MetersPerSecondSquared::new(9.81);
    let f: Newtons = m * a;
    assert!((f.value() - 196.2).abs() < 1e-9);
    println!("F = {} (dimension {})", f, f.dimension());

    let area: Quantity<dims::Area> = Meters::new(3.0) * Meters::new(3.0);
    let side: Meters = sqrt(area);
    assert_eq!(side.value(), 3.0);
    println!("side of a {} m^2 square = {} m", area, side);
}
