#[macro_use]
extern crate log;

mod convergence;

pub use convergence::plot_convergence;

pub type Series = Vec<(f64, f64)>;
