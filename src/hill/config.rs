//! Hill-climbing configuration.

/// Configuration for the hill-climbing search.
///
/// # Examples
///
/// ```
/// use quench::hill::HillClimbConfig;
///
/// let config = HillClimbConfig::default()
///     .with_restarts(10)
///     .with_seed(42);
/// assert_eq!(config.restarts, 10);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HillClimbConfig {
    /// Number of independent climbs from fresh random starts. The best
    /// result across restarts is returned; a single climb has no escape
    /// from local optima.
    pub restarts: usize,

    /// Hard upper bound on neighborhood scans summed across restarts.
    pub max_iterations: usize,

    /// Random neighbors drawn per step by the sampled variant.
    pub sample_trials: usize,

    /// Consecutive non-improving steps the sampled variant tolerates
    /// before declaring the climb stuck.
    pub patience: usize,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for HillClimbConfig {
    fn default() -> Self {
        Self {
            restarts: 1,
            max_iterations: 100_000,
            sample_trials: 30,
            patience: 100,
            seed: None,
        }
    }
}

impl HillClimbConfig {
    pub fn with_restarts(mut self, n: usize) -> Self {
        self.restarts = n;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_sample_trials(mut self, n: usize) -> Self {
        self.sample_trials = n;
        self
    }

    pub fn with_patience(mut self, n: usize) -> Self {
        self.patience = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.restarts == 0 {
            return Err("restarts must be at least 1".into());
        }
        if self.max_iterations == 0 {
            return Err("max_iterations must be positive".into());
        }
        if self.sample_trials == 0 {
            return Err("sample_trials must be at least 1".into());
        }
        if self.patience == 0 {
            return Err("patience must be at least 1".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HillClimbConfig::default();
        assert_eq!(config.restarts, 1);
        assert_eq!(config.max_iterations, 100_000);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_validate_ok() {
        assert!(HillClimbConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_zero_restarts() {
        assert!(HillClimbConfig::default().with_restarts(0).validate().is_err());
    }

    #[test]
    fn test_validate_zero_trials() {
        let config = HillClimbConfig::default().with_sample_trials(0);
        assert!(config.validate().is_err());
    }
}
