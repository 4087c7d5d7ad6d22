use crate::Objective;

/// The negated sphere benchmark function with a single maximum of 0.0 at
/// the origin. A common sanity check for whether a swarm converges
#[derive(Debug, Clone, Default)]
pub struct InvertedSphere;

impl Objective for InvertedSphere {
    fn evaluate(&self, position: &[f64]) -> f64 {
        -position.iter().map(|x| x * x).sum::<f64>()
    }
}
