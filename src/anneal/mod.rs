//! Simulated annealing.
//!
//! A single-trajectory stochastic local search inspired by the physical
//! annealing process. Worsening moves are accepted with a probability
//! that falls as the temperature decays, letting the search escape local
//! optima early while converging late.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast
//!   Computing Machines"

mod config;
mod runner;
mod schedule;

pub use config::AnnealConfig;
pub use runner::{AnnealResult, AnnealRunner};
pub use schedule::Schedule;
