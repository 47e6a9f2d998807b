//! Cooling schedules for temperature decay.

/// Cooling schedule: maps an iteration index to a temperature.
///
/// All schedules are monotonically non-increasing from the first
/// iteration on and approach zero as the iteration count grows. Each
/// schedule also judges when its own decay has exhausted the run, since
/// different curves reach a given temperature floor at very different
/// iteration counts.
///
/// # References
///
/// - Linear-inverse: classic `T_0 / (1 + i)` calendar
/// - Logarithmic: `T_0 / (1 + i ln i)`
/// - Exponential: `T_0 e^{-rate * i}`, Kirkpatrick et al. (1983)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Schedule {
    /// `T(i) = T_0 / (1 + i)`. The default.
    ///
    /// Cools fast early, then with a long shallow tail.
    LinearInverse,

    /// `T(i) = T_0 / (1 + i ln i)` for `i >= 2`, `T_0` below that.
    ///
    /// Slightly faster than linear-inverse once the logarithm bites;
    /// the guard for `i <= 1` avoids the log-domain hole at zero.
    Logarithmic,

    /// `T(i) = T_0 * exp(-rate * i)`.
    ///
    /// Geometric decay per iteration. Typical `rate`: 1e-4 to 1e-2.
    Exponential {
        /// Decay constant. Higher = faster cooling.
        rate: f64,
    },
}

/// Decay constant used when an exponential schedule is selected by name.
const DEFAULT_EXPONENTIAL_RATE: f64 = 1e-3;

impl Default for Schedule {
    fn default() -> Self {
        Schedule::LinearInverse
    }
}

impl Schedule {
    /// Resolves a schedule from its name.
    ///
    /// Recognized names: `"linear"` / `"linear-inverse"`, `"log"` /
    /// `"logarithmic"`, `"exp"` / `"exponential"` (with a default decay
    /// constant). Unknown names are a configuration error, reported
    /// before any search iteration runs.
    ///
    /// # Examples
    ///
    /// ```
    /// use quench::anneal::Schedule;
    ///
    /// assert_eq!(Schedule::from_name("linear"), Ok(Schedule::LinearInverse));
    /// assert!(Schedule::from_name("quadratic").is_err());
    /// ```
    pub fn from_name(name: &str) -> Result<Self, String> {
        match name.to_ascii_lowercase().as_str() {
            "linear" | "linear-inverse" => Ok(Schedule::LinearInverse),
            "log" | "logarithmic" => Ok(Schedule::Logarithmic),
            "exp" | "exponential" => Ok(Schedule::Exponential {
                rate: DEFAULT_EXPONENTIAL_RATE,
            }),
            other => Err(format!("unknown cooling schedule {other:?}")),
        }
    }

    /// Temperature at iteration `iteration` given initial temperature `t0`.
    pub fn temperature(&self, t0: f64, iteration: usize) -> f64 {
        match *self {
            Schedule::LinearInverse => t0 / (1.0 + iteration as f64),
            Schedule::Logarithmic => {
                if iteration <= 1 {
                    t0
                } else {
                    let i = iteration as f64;
                    t0 / (1.0 + i * i.ln())
                }
            }
            Schedule::Exponential { rate } => t0 * (-rate * iteration as f64).exp(),
        }
    }

    /// Whether the schedule considers its decay exhausted at `iteration`.
    ///
    /// Exhaustion means the temperature has fallen below the `tolerance`
    /// floor; monotone decay keeps it there for every later iteration.
    /// Each variant answers from its own curve.
    pub fn is_finished(&self, t0: f64, tolerance: f64, iteration: usize) -> bool {
        match *self {
            // T_0 / (1 + i) < tol  <=>  i > T_0 / tol - 1
            Schedule::LinearInverse => iteration as f64 >= t0 / tolerance,
            // i ln i has no useful inverse in closed form
            Schedule::Logarithmic => self.temperature(t0, iteration) < tolerance,
            // T_0 e^{-rate i} <= tol  <=>  rate i >= ln(T_0 / tol)
            Schedule::Exponential { rate } => rate * iteration as f64 >= (t0 / tolerance).ln(),
        }
    }

    /// Validates schedule parameters.
    pub fn validate(&self) -> Result<(), String> {
        if let Schedule::Exponential { rate } = *self {
            if rate <= 0.0 {
                return Err(format!("exponential rate must be positive, got {rate}"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const ALL: [Schedule; 3] = [
        Schedule::LinearInverse,
        Schedule::Logarithmic,
        Schedule::Exponential { rate: 1e-3 },
    ];

    #[test]
    fn test_from_name() {
        assert_eq!(Schedule::from_name("linear"), Ok(Schedule::LinearInverse));
        assert_eq!(
            Schedule::from_name("Logarithmic"),
            Ok(Schedule::Logarithmic)
        );
        assert!(matches!(
            Schedule::from_name("exp"),
            Ok(Schedule::Exponential { .. })
        ));
    }

    #[test]
    fn test_from_name_unknown_is_fatal() {
        let err = Schedule::from_name("quadratic").unwrap_err();
        assert!(err.contains("quadratic"), "error should name the culprit: {err}");
    }

    #[test]
    fn test_temperature_starts_at_t0() {
        for schedule in ALL {
            assert!(
                (schedule.temperature(100.0, 0) - 100.0).abs() < 1e-10,
                "{schedule:?} should start at T0"
            );
        }
    }

    #[test]
    fn test_logarithmic_guard_below_two() {
        // No log-domain hole: i = 0 and i = 1 both report T0.
        assert!((Schedule::Logarithmic.temperature(50.0, 0) - 50.0).abs() < 1e-10);
        assert!((Schedule::Logarithmic.temperature(50.0, 1) - 50.0).abs() < 1e-10);
        assert!(Schedule::Logarithmic.temperature(50.0, 2) < 50.0);
    }

    #[test]
    fn test_validate_bad_rate() {
        assert!(Schedule::Exponential { rate: 0.0 }.validate().is_err());
        assert!(Schedule::Exponential { rate: -1.0 }.validate().is_err());
        assert!(Schedule::Exponential { rate: 1e-3 }.validate().is_ok());
    }

    #[test]
    fn test_finished_consistent_with_curve() {
        // The predicate may fire a hair conservatively but never while the
        // temperature is still clearly above the floor.
        for schedule in ALL {
            let t0 = 80.0;
            let tol = 1e-2;
            let mut fired = None;
            for i in 0..2_000_000usize {
                if schedule.is_finished(t0, tol, i) {
                    fired = Some(i);
                    break;
                }
            }
            let i = fired.unwrap_or_else(|| panic!("{schedule:?} never finished"));
            assert!(
                schedule.temperature(t0, i) <= tol * 1.01,
                "{schedule:?} fired at i={i} with T={}",
                schedule.temperature(t0, i)
            );
            if i > 1 {
                assert!(
                    schedule.temperature(t0, i - 1) >= tol * 0.99,
                    "{schedule:?} fired late at i={i}"
                );
            }
        }
    }

    proptest! {
        #[test]
        fn prop_monotone_non_increasing(
            t0 in 1.0f64..1e4,
            i in 1usize..100_000,
        ) {
            for schedule in ALL {
                prop_assert!(
                    schedule.temperature(t0, i + 1) <= schedule.temperature(t0, i) + 1e-12,
                    "{:?} increased between {} and {}", schedule, i, i + 1
                );
            }
        }

        #[test]
        fn prop_decays_toward_zero(t0 in 1.0f64..1e4) {
            for schedule in ALL {
                prop_assert!(schedule.temperature(t0, 10_000_000) < t0 * 1e-2);
            }
        }
    }
}
