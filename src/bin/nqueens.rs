//! N-queens demonstration driver.
//!
//! Runs hill climbing with random restarts, then one annealing pass per
//! cooling schedule, printing the terminal state and timing of each.

use quench::anneal::{AnnealConfig, AnnealRunner, Schedule};
use quench::hill::{HillClimbConfig, HillClimbRunner};
use quench::problems::NQueens;
use quench::report::SearchReport;
use std::time::Instant;

fn main() {
    let n = std::env::args()
        .nth(1)
        .map(|arg| arg.parse().expect("board size must be an integer"))
        .unwrap_or(8);
    let problem = NQueens::new(n);

    println!("hill climbing on {n}-queens, 10 restarts");
    let started = Instant::now();
    let config = HillClimbConfig::default().with_restarts(10);
    let result = HillClimbRunner::run(&problem, &config);
    println!("  state: {:?}", result.best);
    println!("  {}", SearchReport::new("hill climbing", result.best_cost, started.elapsed()));

    for (name, schedule) in [
        ("annealing, linear-inverse schedule", Schedule::LinearInverse),
        ("annealing, logarithmic schedule", Schedule::Logarithmic),
        ("annealing, exponential schedule", Schedule::Exponential { rate: 1e-3 }),
    ] {
        let started = Instant::now();
        let config = AnnealConfig::default().with_schedule(schedule);
        let result = AnnealRunner::run(&problem, &config);
        println!("{name} on {n}-queens");
        println!("  state: {:?}", result.best);
        println!("  {}", SearchReport::new(name, result.best_cost, started.elapsed()));
    }
}
