//! A linear spring-damper as a consumer of the quantity types.
//!
//! Only the parameters and a few dimensionally checked combinations are shown; no integration is performed.

use physmod::si::{
    Kilograms, KilogramsPerSecond, Meters, MetersPerSecond, MetersPerSecondSquared, NewtonSecondsPerMeter,
    Newtons, NewtonsPerMeter, Seconds,
};
use physmod::DynQuantity;

/// Parameters and state of a spring-damper, all tagged with their dimensions.
#[derive(Clone, Copy, Debug)]
struct LinearSpringDamper {
    mass: Kilograms,
    stiffness: NewtonsPerMeter,
    viscosity: NewtonSecondsPerMeter,
    displacement: Meters,
}

impl LinearSpringDamper {
    fn new(mass: Kilograms, stiffness: NewtonsPerMeter, viscosity: NewtonSecondsPerMeter) -> Self {
        Self {
            mass,
            stiffness,
            viscosity,
            displacement: Meters::default(),
        }
    }

    fn set_displacement(&mut self, displacement: Meters) {
        self.displacement = displacement;
    }

    /// Weight of the attached mass under an acceleration.
    fn weight(&self, g: MetersPerSecondSquared) -> Newtons {
        self.mass * g
    }
}

fn main() {
    // N·s/m and kg/s are the same dimension, so either name is accepted.
    let damping = KilogramsPerSecond::new(0.4);
    let mut system = LinearSpringDamper::new(Kilograms::new(2.0), NewtonsPerMeter::new(150.0), damping);

    system.set_displacement(Meters::new(0.05));
    system.displacement += Meters::new(0.01);

    let weight = system.weight(MetersPerSecondSquared::new(9.81));
    println!("mass        = {} kg", system.mass);
    println!("stiffness   = {} N/m", system.stiffness);
    println!("viscosity   = {} N·s/m", system.viscosity);
    println!("displacement= {} m", system.displacement);
    println!("weight      = {} N", weight);

    let dt = Seconds::new(0.01);
    let velocity: MetersPerSecond = system.displacement / dt;
    println!("mean speed over {} s = {} m/s", dt, velocity);

    // The same check, deferred to run time.
    let x = DynQuantity::from(system.displacement);
    match x.checked_add(DynQuantity::from(weight)) {
        Ok(sum) => println!("unexpected: {}", sum),
        Err(err) => println!("rejected at run time: {}", err),
    }
}
