use crate::error::{Error, Result};

/// The run configuration of a particle swarm
#[derive(Debug, Clone)]
pub struct Params {
    /// Number of particles in the swarm
    pub num_particles: usize,
    /// Number of iterations a `run()` performs, there is no early stopping
    pub max_iterations: usize,
    /// Dimensionality of the search space
    pub dimension: usize,

    /// Inertia weight `w`, scales how much of the previous velocity carries
    /// over into the next one
    pub inertia_weight: f64,
    /// Cognitive coefficient `c1`, scales the pull towards a particles own
    /// best known position
    pub cognitive_coeff: f64,
    /// Social coefficient `c2`, scales the pull towards the best position
    /// the whole swarm has found
    pub social_coeff: f64,

    /// Half open interval `[min, max)` initial positions are drawn from.
    /// Positions are free to leave this interval during the run
    pub position_range: (f64, f64),
    /// Half open interval `[min, max)` initial velocities are drawn from
    pub velocity_range: (f64, f64),
    /// Optional symmetric clamp applied to each velocity component after
    /// the update. The classic formulation does not clamp, so `None` is
    /// the default and velocities may grow without bound
    pub max_velocity: Option<f64>,
    /// Optional seed for the Rng
    pub seed: Option<u64>,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            num_particles: 30,
            max_iterations: 100,
            dimension: 2,
            inertia_weight: 0.729,
            cognitive_coeff: 1.49445,
            social_coeff: 1.49445,
            position_range: (0.0, 100.0),
            velocity_range: (-1.0, 1.0),
            max_velocity: None,
            seed: None,
        }
    }
}

impl Params {
    /// Checks that the configuration can be operated on
    pub(crate) fn validate(&self) -> Result<()> {
        if self.num_particles == 0 {
            return Err(Error::InvalidConfiguration {
                param: "num_particles",
                requirement: "positive",
            });
        }
        if self.max_iterations == 0 {
            return Err(Error::InvalidConfiguration {
                param: "max_iterations",
                requirement: "positive",
            });
        }
        if self.dimension == 0 {
            return Err(Error::InvalidConfiguration {
                param: "dimension",
                requirement: "positive",
            });
        }
        if !range_is_drawable(self.position_range) {
            return Err(Error::InvalidConfiguration {
                param: "position_range",
                requirement: "a finite interval with min <= max",
            });
        }
        if !range_is_drawable(self.velocity_range) {
            return Err(Error::InvalidConfiguration {
                param: "velocity_range",
                requirement: "a finite interval with min <= max",
            });
        }
        if let Some(v_max) = self.max_velocity {
            if !v_max.is_finite() || v_max <= 0.0 {
                return Err(Error::InvalidConfiguration {
                    param: "max_velocity",
                    requirement: "finite and positive",
                });
            }
        }

        Ok(())
    }
}

// A degenerate interval with min == max is fine, it draws the constant min
fn range_is_drawable((min, max): (f64, f64)) -> bool {
    min.is_finite() && max.is_finite() && min <= max
}
