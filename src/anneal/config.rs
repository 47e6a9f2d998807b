//! Annealing configuration.

use super::schedule::Schedule;

/// Configuration for the simulated-annealing search.
///
/// # Examples
///
/// ```
/// use quench::anneal::{AnnealConfig, Schedule};
///
/// let config = AnnealConfig::default()
///     .with_schedule(Schedule::Logarithmic)
///     .with_initial_temperature(100.0)
///     .with_tolerance(1e-4)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealConfig {
    /// Cooling schedule.
    pub schedule: Schedule,

    /// Initial temperature. `None` estimates one from the cost spread of
    /// a handful of random states before the run starts.
    pub initial_temperature: Option<f64>,

    /// Temperature floor. The schedule's stop predicate fires once decay
    /// drives the temperature below this value.
    pub tolerance: f64,

    /// Iterations without a new best before stopping. 0 disables the
    /// stagnation check.
    pub max_no_improve: usize,

    /// Hard upper bound on iterations, independent of the schedule's own
    /// stopping point. Guarantees termination even for pathological
    /// schedule/tolerance combinations, so it cannot be disabled.
    pub max_iterations: usize,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            schedule: Schedule::default(),
            initial_temperature: None,
            tolerance: 1e-3,
            max_no_improve: 0,
            max_iterations: 1_000_000,
            seed: None,
        }
    }
}

impl AnnealConfig {
    pub fn with_schedule(mut self, schedule: Schedule) -> Self {
        self.schedule = schedule;
        self
    }

    /// Selects the schedule by name; unknown names are a configuration
    /// error.
    pub fn with_schedule_name(mut self, name: &str) -> Result<Self, String> {
        self.schedule = Schedule::from_name(name)?;
        Ok(self)
    }

    pub fn with_initial_temperature(mut self, t0: f64) -> Self {
        self.initial_temperature = Some(t0);
        self
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_max_no_improve(mut self, n: usize) -> Self {
        self.max_no_improve = n;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        self.schedule.validate()?;
        if self.tolerance <= 0.0 {
            return Err(format!("tolerance must be positive, got {}", self.tolerance));
        }
        if let Some(t0) = self.initial_temperature {
            if t0 <= 0.0 {
                return Err(format!("initial_temperature must be positive, got {t0}"));
            }
            if self.tolerance >= t0 {
                return Err("tolerance must be less than initial_temperature".into());
            }
        }
        if self.max_iterations == 0 {
            return Err("max_iterations must be positive".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AnnealConfig::default();
        assert_eq!(config.schedule, Schedule::LinearInverse);
        assert!(config.initial_temperature.is_none());
        assert!((config.tolerance - 1e-3).abs() < 1e-15);
        assert_eq!(config.max_iterations, 1_000_000);
    }

    #[test]
    fn test_validate_ok() {
        assert!(AnnealConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_bad_tolerance() {
        let config = AnnealConfig::default().with_tolerance(0.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_tolerance_above_t0() {
        let config = AnnealConfig::default()
            .with_initial_temperature(1.0)
            .with_tolerance(2.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_iteration_cap() {
        let config = AnnealConfig::default().with_max_iterations(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_schedule_by_name() {
        let config = AnnealConfig::default().with_schedule_name("log").unwrap();
        assert_eq!(config.schedule, Schedule::Logarithmic);
        assert!(AnnealConfig::default().with_schedule_name("nope").is_err());
    }
}
