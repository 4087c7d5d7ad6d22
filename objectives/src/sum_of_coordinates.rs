use crate::Objective;

/// The classic demonstration objective: the fitness of a position is the
/// plain sum of its coordinates. Unbounded above, so a swarm maximizing it
/// drifts towards ever larger coordinates
#[derive(Debug, Clone, Default)]
pub struct SumOfCoordinates;

impl Objective for SumOfCoordinates {
    fn evaluate(&self, position: &[f64]) -> f64 {
        position.iter().sum()
    }
}
