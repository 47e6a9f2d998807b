//! Human-readable run reporting.

use std::fmt;
use std::time::Duration;

/// Summary of one search run for console output.
///
/// Carries no search state; the drivers print the solution themselves
/// when the domain makes that readable. Not part of core correctness.
///
/// # Examples
///
/// ```
/// use quench::report::SearchReport;
/// use std::time::Duration;
///
/// let report = SearchReport::new("annealing", 3.0, Duration::from_millis(1500));
/// assert_eq!(report.to_string(), "annealing: cost 3, 1.500s");
/// ```
#[derive(Debug, Clone)]
pub struct SearchReport {
    /// What produced the result (algorithm or schedule name).
    pub label: String,
    /// Cost of the returned state.
    pub cost: f64,
    /// Wall-clock duration of the run.
    pub elapsed: Duration,
}

impl SearchReport {
    pub fn new(label: impl Into<String>, cost: f64, elapsed: Duration) -> Self {
        Self {
            label: label.into(),
            cost,
            elapsed,
        }
    }
}

impl fmt::Display for SearchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: cost {}, {:.3}s",
            self.label,
            self.cost,
            self.elapsed.as_secs_f64()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_format() {
        let report = SearchReport::new("hill climbing", 0.0, Duration::from_millis(250));
        assert_eq!(report.to_string(), "hill climbing: cost 0, 0.250s");
    }

    #[test]
    fn test_fractional_cost_prints_as_is() {
        let report = SearchReport::new("annealing", 2.5, Duration::from_secs(2));
        assert_eq!(report.to_string(), "annealing: cost 2.5, 2.000s");
    }
}
