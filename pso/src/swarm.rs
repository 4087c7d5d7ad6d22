use nanorand::WyRand;
use objectives::Objective;

use crate::error::Result;
use crate::params::Params;
use crate::particle::Particle;
use crate::result::OptimizationResult;

/// A particle swarm maximizing an objective over a continuous space.
///
/// Construction seeds `num_particles` randomized particles, evaluates each
/// one once and adopts the fittest starting point as the swarm best. The
/// swarm exclusively owns its particles, the swarm best and the Rng
#[derive(Debug)]
pub struct Swarm<O> {
    params: Params,
    objective: O,
    particles: Vec<Particle>,
    best_position: Vec<f64>,
    best_fitness: f64,
    rng: WyRand,
}

impl<O> Swarm<O>
where
    O: Objective,
{
    /// Create a new swarm with randomized particles
    ///
    /// # Arguments:
    /// params: the run configuration, validated here. Invalid values are
    /// reported as `Error::InvalidConfiguration` and never mid-run
    /// objective: the fitness function to maximize. It must be defined for
    /// any reachable position, not just the initial range, since positions
    /// are unbounded
    pub fn new(params: Params, objective: O) -> Result<Self> {
        params.validate()?;

        let mut rng = match params.seed {
            Some(seed) => WyRand::new_seed(seed),
            None => WyRand::new(),
        };

        let mut particles = Vec::with_capacity(params.num_particles);
        for _ in 0..params.num_particles {
            particles.push(Particle::new(
                params.dimension,
                params.position_range,
                params.velocity_range,
                &objective,
                &mut rng,
            )?);
        }

        // Strict comparison keeps the earliest of equally fit starting points
        let mut best_fitness = f64::NEG_INFINITY;
        let mut best_position = vec![0.0; params.dimension];
        for particle in particles.iter() {
            if particle.best_fitness() > best_fitness {
                best_fitness = particle.best_fitness();
                best_position.copy_from_slice(particle.best_position());
            }
        }
        debug!("seeded {} particles, starting best fitness {}", particles.len(), best_fitness);

        Ok(Self {
            params,
            objective,
            particles,
            best_position,
            best_fitness,
            rng,
        })
    }

    /// Perform a single optimization sweep over all particles in
    /// construction order.
    ///
    /// A particle whose personal best improves on the swarm best replaces
    /// it immediately, so later particles in the same sweep already steer
    /// towards it. This is the sequential variant of the update, a deferred
    /// swarm best update would change the trajectory
    pub fn step(&mut self) -> Result<f64> {
        for i in 0..self.particles.len() {
            self.particles[i].update_velocity(&self.best_position, &self.params, &mut self.rng);
            self.particles[i].update_position();

            let (fitness, improved) = self.particles[i].evaluate(&self.objective)?;
            if improved && fitness > self.best_fitness {
                self.best_fitness = fitness;
                self.best_position.copy_from_slice(self.particles[i].best_position());
                trace!("particle {} set new swarm best {}", i, fitness);
            }
        }

        Ok(self.best_fitness)
    }

    /// Run the swarm for exactly `max_iterations` sweeps, there is no
    /// convergence check or early termination.
    ///
    /// Calling `run()` again continues evolving the same particles and Rng
    /// state rather than restarting, so the new history starts from the
    /// evolved swarm. A fresh optimization requires constructing a fresh
    /// swarm
    ///
    /// # Returns:
    /// the best position and fitness found, along with the swarm best
    /// fitness at the end of each iteration
    pub fn run(&mut self) -> Result<OptimizationResult> {
        let mut best_fitness_history = Vec::with_capacity(self.params.max_iterations);
        for i in 0..self.params.max_iterations {
            let best = self.step()?;
            debug!("iteration {}: best fitness {}", i, best);
            best_fitness_history.push(best);
        }

        Ok(OptimizationResult {
            best_position: self.best_position.clone(),
            best_fitness: self.best_fitness,
            best_fitness_history,
        })
    }

    /// The run configuration
    #[inline(always)]
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// All particles of the swarm
    #[inline(always)]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// The best position the swarm has found so far
    #[inline(always)]
    pub fn best_position(&self) -> &[f64] {
        &self.best_position
    }

    /// The fitness of `best_position`, monotonically non-decreasing
    #[inline(always)]
    pub fn best_fitness(&self) -> f64 {
        self.best_fitness
    }
}
