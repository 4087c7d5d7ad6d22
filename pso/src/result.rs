/// The outcome of a full optimization run
#[derive(Debug, Clone)]
pub struct OptimizationResult {
    /// The best position any particle ever evaluated
    pub best_position: Vec<f64>,
    /// The fitness of `best_position`
    pub best_fitness: f64,
    /// The swarms best fitness as of the end of each iteration,
    /// one entry per iteration
    pub best_fitness_history: Vec<f64>,
}
