//! Core trait for local-search problems.

use rand::Rng;

/// Defines a local-search problem.
///
/// The user implements state generation, neighbor generation and cost
/// evaluation. The search algorithms handle everything else: move
/// acceptance, temperature management, restarts.
///
/// The search treats [`Problem::State`] as opaque; it only clones and
/// compares states and hands them back to the problem's own operations.
///
/// # Minimization
///
/// All searches minimize the cost function. For maximization, negate the
/// cost.
///
/// # Examples
///
/// ```
/// use quench::problem::Problem;
/// use rand::Rng;
///
/// /// Minimize f(x) = x^2 over a jittered real line.
/// struct Quadratic;
///
/// impl Problem for Quadratic {
///     type State = f64;
///
///     fn random_state<R: Rng>(&self, rng: &mut R) -> f64 {
///         rng.random_range(-10.0..10.0)
///     }
///
///     fn random_neighbor<R: Rng>(&self, x: &f64, rng: &mut R) -> f64 {
///         x + rng.random_range(-1.0..1.0)
///     }
///
///     fn cost(&self, x: &f64) -> f64 {
///         x * x
///     }
/// }
/// ```
pub trait Problem: Send + Sync {
    /// The state representation type.
    type State: Clone + PartialEq + Send;

    /// Draws a state uniformly (or near-uniformly) at random from the
    /// legal state space. Must always succeed.
    fn random_state<R: Rng>(&self, rng: &mut R) -> Self::State;

    /// Generates a state reachable by one local perturbation.
    ///
    /// The returned state must differ from its argument and must satisfy
    /// the same validity constraints (bounds, permutation structure). The
    /// neighborhood must be connected: any state reachable from any other
    /// via a sequence of moves.
    fn random_neighbor<R: Rng>(&self, state: &Self::State, rng: &mut R) -> Self::State;

    /// Computes the cost of a state. Non-negative; lower is better; 0 is
    /// a perfect solution where the domain has one.
    ///
    /// Must be a total, pure function over all reachable states. An
    /// implementation that panics here is a contract violation and the
    /// panic propagates to the caller of the search.
    fn cost(&self, state: &Self::State) -> f64;
}

/// Optional capability: full enumeration of a state's neighborhood.
///
/// Required by best-improvement hill climbing ([`crate::hill`]). The
/// sequence is lazy and finite, and each call yields a fresh, equal
/// sequence (restartable). Problems with effectively continuous
/// neighborhoods (e.g. coordinate jitter) should not implement this;
/// the sampled hill-climbing variant covers them.
pub trait Neighborhood: Problem {
    /// Enumerates all neighbors of `state`, lazily.
    fn neighbors(&self, state: &Self::State) -> Box<dyn Iterator<Item = Self::State> + '_>;
}
