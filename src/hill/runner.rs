//! Hill-climbing execution loop.

use super::config::HillClimbConfig;
use crate::problem::{Neighborhood, Problem};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Result of a hill-climbing run.
#[derive(Debug, Clone)]
pub struct HillClimbResult<S: Clone> {
    /// Best local optimum found across restarts.
    pub best: S,
    /// Cost of the best local optimum.
    pub best_cost: f64,
    /// Total neighborhood scans executed across restarts.
    pub iterations: usize,
    /// Restarts actually performed (the iteration cap can cut the loop
    /// short).
    pub restarts: usize,
    /// Best cost after each restart.
    pub cost_history: Vec<f64>,
}

/// Greedy local-search runner.
///
/// Repeatedly replaces the current state with its best strictly-improving
/// neighbor until none exists. The terminal state is a local optimum by
/// construction; reaching a poor one is expected behavior, not a failure,
/// and the restart loop is the designed escape.
pub struct HillClimbRunner;

impl HillClimbRunner {
    /// Best-improvement climbing over the full neighbor enumeration.
    pub fn run<P>(problem: &P, config: &HillClimbConfig) -> HillClimbResult<P::State>
    where
        P: Problem + Neighborhood,
    {
        config.validate().expect("invalid HillClimbConfig");

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let mut best: Option<P::State> = None;
        let mut best_cost = f64::INFINITY;
        let mut iterations = 0usize;
        let mut restarts = 0usize;
        let mut cost_history = Vec::with_capacity(config.restarts);

        for _ in 0..config.restarts {
            if iterations >= config.max_iterations {
                break;
            }
            restarts += 1;

            let mut current = problem.random_state(&mut rng);
            let mut current_cost = problem.cost(&current);

            while iterations < config.max_iterations {
                iterations += 1;

                let mut improved: Option<P::State> = None;
                let mut improved_cost = current_cost;
                for neighbor in problem.neighbors(&current) {
                    let cost = problem.cost(&neighbor);
                    if cost < improved_cost {
                        improved_cost = cost;
                        improved = Some(neighbor);
                    }
                }

                match improved {
                    Some(neighbor) => {
                        current = neighbor;
                        current_cost = improved_cost;
                    }
                    // Local optimum: no neighbor is strictly better.
                    None => break,
                }
            }

            if current_cost < best_cost {
                best_cost = current_cost;
                best = Some(current);
            }
            cost_history.push(best_cost);
        }

        HillClimbResult {
            best: best.expect("restarts >= 1 guarantees at least one climb"),
            best_cost,
            iterations,
            restarts,
            cost_history,
        }
    }

    /// Sampled climbing for problems without full neighbor enumeration.
    ///
    /// Each step draws `sample_trials` random neighbors and moves to the
    /// best of them if it improves; `patience` consecutive non-improving
    /// steps end the climb.
    pub fn run_sampled<P: Problem>(
        problem: &P,
        config: &HillClimbConfig,
    ) -> HillClimbResult<P::State> {
        config.validate().expect("invalid HillClimbConfig");

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let mut best: Option<P::State> = None;
        let mut best_cost = f64::INFINITY;
        let mut iterations = 0usize;
        let mut restarts = 0usize;
        let mut cost_history = Vec::with_capacity(config.restarts);

        for _ in 0..config.restarts {
            if iterations >= config.max_iterations {
                break;
            }
            restarts += 1;

            let mut current = problem.random_state(&mut rng);
            let mut current_cost = problem.cost(&current);
            let mut stale = 0usize;

            while iterations < config.max_iterations && stale < config.patience {
                iterations += 1;

                let mut trial: Option<P::State> = None;
                let mut trial_cost = f64::INFINITY;
                for _ in 0..config.sample_trials {
                    let neighbor = problem.random_neighbor(&current, &mut rng);
                    let cost = problem.cost(&neighbor);
                    if cost < trial_cost {
                        trial_cost = cost;
                        trial = Some(neighbor);
                    }
                }

                match trial {
                    Some(neighbor) if trial_cost < current_cost => {
                        current = neighbor;
                        current_cost = trial_cost;
                        stale = 0;
                    }
                    _ => stale += 1,
                }
            }

            if current_cost < best_cost {
                best_cost = current_cost;
                best = Some(current);
            }
            cost_history.push(best_cost);
        }

        HillClimbResult {
            best: best.expect("restarts >= 1 guarantees at least one climb"),
            best_cost,
            iterations,
            restarts,
            cost_history,
        }
    }
}
