use nanorand::{Rng, WyRand};
use objectives::Objective;

use crate::error::{Error, Result};
use crate::params::Params;

/// A single candidate solution, tracking where it is, where it is headed
/// and the best place it has ever been
#[derive(Debug, Clone)]
pub struct Particle {
    position: Vec<f64>,
    velocity: Vec<f64>,
    best_position: Vec<f64>,
    best_fitness: f64,
}

impl Particle {
    /// Create a new particle with position and velocity drawn uniformly
    /// from the given half open intervals. The freshly evaluated starting
    /// point becomes its personal best.
    ///
    /// Draw order is fixed, all position coordinates first, then all
    /// velocity coordinates
    pub(crate) fn new<O: Objective>(
        dimension: usize,
        position_range: (f64, f64),
        velocity_range: (f64, f64),
        objective: &O,
        rng: &mut WyRand,
    ) -> Result<Self> {
        let position: Vec<f64> =
            (0..dimension).map(|_| draw_uniform(position_range, rng)).collect();
        let velocity: Vec<f64> =
            (0..dimension).map(|_| draw_uniform(velocity_range, rng)).collect();
        let best_fitness = checked_fitness(objective, &position)?;

        Ok(Self {
            best_position: position.clone(),
            position,
            velocity,
            best_fitness,
        })
    }

    /// Steer the particle. Each velocity component blends its inertia with
    /// freshly drawn random pulls towards the personal best and the swarm
    /// best, `r1` before `r2` in every dimension
    pub(crate) fn update_velocity(
        &mut self,
        swarm_best: &[f64],
        params: &Params,
        rng: &mut WyRand,
    ) {
        for d in 0..self.velocity.len() {
            let r1 = rng.generate::<f64>();
            let r2 = rng.generate::<f64>();
            self.velocity[d] = params.inertia_weight * self.velocity[d]
                + params.cognitive_coeff * r1 * (self.best_position[d] - self.position[d])
                + params.social_coeff * r2 * (swarm_best[d] - self.position[d]);
            if let Some(v_max) = params.max_velocity {
                self.velocity[d] = self.velocity[d].clamp(-v_max, v_max);
            }
        }
    }

    /// Move the particle by its velocity, unconditionally and unclamped
    pub(crate) fn update_position(&mut self) {
        for d in 0..self.position.len() {
            self.position[d] += self.velocity[d];
        }
    }

    /// Evaluate the current position, adopting it as the new personal best
    /// if it strictly improves on the old one
    ///
    /// # Returns:
    /// the fitness of the current position and whether it became the new
    /// personal best
    pub(crate) fn evaluate<O: Objective>(&mut self, objective: &O) -> Result<(f64, bool)> {
        let fitness = checked_fitness(objective, &self.position)?;
        if fitness > self.best_fitness {
            self.best_position.copy_from_slice(&self.position);
            self.best_fitness = fitness;
            return Ok((fitness, true));
        }

        Ok((fitness, false))
    }

    /// The current position
    #[inline(always)]
    pub fn position(&self) -> &[f64] {
        &self.position
    }

    /// The current velocity
    #[inline(always)]
    pub fn velocity(&self) -> &[f64] {
        &self.velocity
    }

    /// The best position this particle has ever evaluated
    #[inline(always)]
    pub fn best_position(&self) -> &[f64] {
        &self.best_position
    }

    /// The fitness of `best_position`
    #[inline(always)]
    pub fn best_fitness(&self) -> f64 {
        self.best_fitness
    }
}

// Maps the generators [0, 1) output into [min, max)
fn draw_uniform((min, max): (f64, f64), rng: &mut WyRand) -> f64 {
    min + rng.generate::<f64>() * (max - min)
}

fn checked_fitness<O: Objective>(objective: &O, position: &[f64]) -> Result<f64> {
    let fitness = objective.evaluate(position);
    if !fitness.is_finite() {
        return Err(Error::NonFiniteFitness {
            position: position.to_vec(),
            fitness,
        });
    }

    Ok(fitness)
}
