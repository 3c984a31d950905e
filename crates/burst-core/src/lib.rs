pub mod constants;
pub mod effect;
pub mod escalation;
pub mod params;
pub mod particle;
pub mod press;
pub mod simulation;
pub mod viewport;

pub use constants::*;
pub use effect::*;
pub use escalation::*;
pub use params::*;
pub use particle::*;
pub use press::*;
pub use simulation::*;
pub use viewport::*;
