//! This crate provides objective functions for swarm optimization

#![deny(unused_imports, unused_crate_dependencies)]
#![warn(missing_docs)]

mod inverted_sphere;
mod sum_of_coordinates;

pub use inverted_sphere::InvertedSphere;
pub use sum_of_coordinates::SumOfCoordinates;

/// Generic way of scoring a candidate position, higher is better
pub trait Objective {
    /// Evaluates the fitness of a position
    ///
    /// # Arguments:
    /// position: candidate solution with one coordinate per search dimension
    ///
    /// # Returns:
    /// the fitness value to be maximized
    fn evaluate(&self, position: &[f64]) -> f64;
}

impl<F> Objective for F
where
    F: Fn(&[f64]) -> f64,
{
    fn evaluate(&self, position: &[f64]) -> f64 {
        self(position)
    }
}
