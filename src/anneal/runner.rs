//! Annealing execution loop.

use super::config::AnnealConfig;
use crate::problem::Problem;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Below this temperature every worsening move is rejected outright
/// instead of risking `exp(-delta / ~0)`.
const TEMPERATURE_EPSILON: f64 = 1e-12;

/// Number of random states sampled to estimate an initial temperature
/// when the configuration does not supply one.
const TEMPERATURE_SAMPLES: usize = 10;

/// Result of a simulated-annealing run.
#[derive(Debug, Clone)]
pub struct AnnealResult<S: Clone> {
    /// The best state seen, which may be better than where the trajectory
    /// ended up.
    pub best: S,

    /// Cost of the best state.
    pub best_cost: f64,

    /// Total number of iterations (neighbor evaluations).
    pub iterations: usize,

    /// Temperature when the run stopped.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of strictly improving moves.
    pub improving_moves: usize,

    /// Best cost sampled at regular intervals for history tracking.
    pub cost_history: Vec<f64>,
}

/// Executes the simulated-annealing search.
///
/// Metropolis acceptance over a cooling trajectory: improving and
/// neutral moves are always taken, worsening moves with probability
/// `exp(-delta / T)`. The best state is tracked independently of the
/// current one, so late-stage exploration can wander without losing it.
pub struct AnnealRunner;

impl AnnealRunner {
    /// Runs the annealing search.
    ///
    /// Stops when the schedule's own predicate fires, when `max_no_improve`
    /// iterations pass without a new best (if enabled), or at the
    /// `max_iterations` hard cap, whichever comes first. Returns the best
    /// state seen, not the current one.
    pub fn run<P: Problem>(problem: &P, config: &AnnealConfig) -> AnnealResult<P::State> {
        config.validate().expect("invalid AnnealConfig");

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let mut current = problem.random_state(&mut rng);
        let mut current_cost = problem.cost(&current);
        let mut best = current.clone();
        let mut best_cost = current_cost;

        let t0 = match config.initial_temperature {
            Some(t0) => t0,
            None => estimate_initial_temperature(problem, &mut rng),
        };

        let history_interval = 100;
        let mut cost_history = vec![best_cost];

        let mut temperature = t0;
        let mut iteration = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut no_improve = 0usize;

        while iteration < config.max_iterations {
            temperature = config.schedule.temperature(t0, iteration);
            if config.schedule.is_finished(t0, config.tolerance, iteration) {
                break;
            }
            if config.max_no_improve > 0 && no_improve >= config.max_no_improve {
                break;
            }

            let neighbor = problem.random_neighbor(&current, &mut rng);
            let neighbor_cost = problem.cost(&neighbor);
            let delta = neighbor_cost - current_cost;

            // Metropolis acceptance criterion
            let accept = if delta <= 0.0 {
                if delta < 0.0 {
                    improving_moves += 1;
                }
                true
            } else if temperature > TEMPERATURE_EPSILON {
                let probability = (-delta / temperature).exp();
                rng.random_range(0.0..1.0) < probability
            } else {
                false
            };

            if accept {
                current = neighbor;
                current_cost = neighbor_cost;
                accepted_moves += 1;
            }

            if current_cost < best_cost {
                best = current.clone();
                best_cost = current_cost;
                no_improve = 0;
            } else {
                no_improve += 1;
            }

            iteration += 1;
            if iteration.is_multiple_of(history_interval) {
                cost_history.push(best_cost);
            }
        }

        if cost_history
            .last()
            .is_none_or(|&last| (last - best_cost).abs() > 1e-15)
        {
            cost_history.push(best_cost);
        }

        AnnealResult {
            best,
            best_cost,
            iterations: iteration,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            cost_history,
        }
    }
}

/// Estimates an initial temperature as twice the cost spread over a few
/// random states, floored at 1.0 so a constant-cost sample still yields a
/// workable temperature.
fn estimate_initial_temperature<P: Problem>(problem: &P, rng: &mut StdRng) -> f64 {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for _ in 0..TEMPERATURE_SAMPLES {
        let cost = problem.cost(&problem.random_state(rng));
        lo = lo.min(cost);
        hi = hi.max(cost);
    }
    (2.0 * (hi - lo)).max(1.0)
}
