//! Particle swarm optimization over continuous spaces, maximizing a
//! generic objective

#[macro_use]
extern crate log;

mod error;
mod params;
mod particle;
mod result;
mod swarm;

pub use error::{Error, Result};
pub use params::Params;
pub use particle::Particle;
pub use result::OptimizationResult;
pub use swarm::Swarm;
