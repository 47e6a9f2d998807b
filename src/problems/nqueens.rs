//! N-queens as a local-search problem.

use crate::problem::{Neighborhood, Problem};
use rand::seq::SliceRandom;
use rand::Rng;

/// Place `n` queens on an `n`-by-`n` board so that no two attack each
/// other.
///
/// A state is a permutation of column indices by row, which rules out
/// row and column conflicts structurally; the cost counts the remaining
/// diagonal conflicts, so cost 0 is a solution.
///
/// # Examples
///
/// ```
/// use quench::problem::Problem;
/// use quench::problems::NQueens;
///
/// let problem = NQueens::new(8);
/// // A known 8-queens solution.
/// assert_eq!(problem.cost(&vec![2, 4, 1, 7, 0, 6, 3, 5]), 0.0);
/// // The identity permutation puts every pair on a shared diagonal.
/// assert_eq!(problem.cost(&vec![0, 1, 2, 3, 4, 5, 6, 7]), 28.0);
/// ```
#[derive(Debug, Clone)]
pub struct NQueens {
    n: usize,
}

impl NQueens {
    /// Creates an `n`-queens problem. `n` must be at least 2 so that a
    /// swap neighborhood exists.
    pub fn new(n: usize) -> Self {
        assert!(n >= 2, "n-queens needs at least 2 queens, got {n}");
        Self { n }
    }

    /// Board size.
    pub fn n(&self) -> usize {
        self.n
    }
}

impl Problem for NQueens {
    type State = Vec<usize>;

    fn random_state<R: Rng>(&self, rng: &mut R) -> Vec<usize> {
        let mut state: Vec<usize> = (0..self.n).collect();
        state.shuffle(rng);
        state
    }

    fn random_neighbor<R: Rng>(&self, state: &Vec<usize>, rng: &mut R) -> Vec<usize> {
        // Two distinct rows, so the swap always changes the state.
        let picked = rand::seq::index::sample(rng, self.n, 2);
        let mut neighbor = state.clone();
        neighbor.swap(picked.index(0), picked.index(1));
        neighbor
    }

    fn cost(&self, state: &Vec<usize>) -> f64 {
        let mut conflicts = 0usize;
        for i in 0..self.n {
            for j in (i + 1)..self.n {
                if state[i].abs_diff(state[j]) == j - i {
                    conflicts += 1;
                }
            }
        }
        conflicts as f64
    }
}

impl Neighborhood for NQueens {
    /// All pairwise swaps, yielded lazily. Each call starts a fresh
    /// sequence over the same C(n, 2) moves.
    fn neighbors(&self, state: &Vec<usize>) -> Box<dyn Iterator<Item = Vec<usize>> + '_> {
        let n = self.n;
        let base = state.clone();
        Box::new((0..n.saturating_sub(1)).flat_map(move |i| {
            let base = base.clone();
            ((i + 1)..n).map(move |j| {
                let mut neighbor = base.clone();
                neighbor.swap(i, j);
                neighbor
            })
        }))
    }
}
