#[macro_use]
extern crate log;

use std::{fs, time::Instant};

use dialoguer::{theme::ColorfulTheme, Select};
use objectives::{InvertedSphere, Objective, SumOfCoordinates};
use pso::{Params, Swarm};
use pso_plot::plot_convergence;

const SEED: Option<u64> = Some(0);

pub(crate) fn main() {
    pretty_env_logger::init();

    let benchmarks = vec!["Sum of coordinates", "Inverted sphere"];
    let e = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Select objective to maximize")
        .items(&benchmarks)
        .default(0)
        .interact()
        .unwrap();
    match e {
        0 => {
            let params = Params {
                seed: SEED,
                ..Default::default()
            };
            run_swarm(params, SumOfCoordinates, "img/sum_of_coordinates.png");
        }
        1 => {
            let params = Params {
                position_range: (-5.12, 5.12),
                seed: SEED,
                ..Default::default()
            };
            run_swarm(params, InvertedSphere, "img/inverted_sphere.png");
        }
        _ => panic!("invalid selection"),
    }
}

fn run_swarm<O: Objective>(params: Params, objective: O, filename: &str) {
    let mut swarm = Swarm::new(params, objective).unwrap();

    let t0 = Instant::now();
    let result = swarm.run().unwrap();
    info!("optimization done in: {}ms", t0.elapsed().as_millis());

    for (i, best) in result.best_fitness_history.iter().enumerate() {
        println!("Iteration {}: Best fitness = {}", i, best);
    }
    println!("Best fitness: {}", result.best_fitness);
    println!("Best position: {:?}", result.best_position);

    fs::create_dir_all("img").unwrap();
    plot_convergence(&result.best_fitness_history, filename, (1080, 1080));
}
