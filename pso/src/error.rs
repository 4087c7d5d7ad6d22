use thiserror::Error;

/// Everything that can go wrong when building or running a swarm
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// A run parameter cannot be operated on, reported at construction time
    #[error("invalid configuration: {param} must be {requirement}")]
    InvalidConfiguration {
        /// The offending parameter
        param: &'static str,
        /// What the parameter must satisfy
        requirement: &'static str,
    },

    /// The objective returned NaN or an infinity, which would corrupt
    /// best-fitness tracking
    #[error("objective returned non-finite fitness {fitness} at position {position:?}")]
    NonFiniteFitness {
        /// The position that was evaluated
        position: Vec<f64>,
        /// The fitness value the objective returned
        fitness: f64,
    },
}

/// Convenience type alias
pub type Result<T> = std::result::Result<T, Error>;
