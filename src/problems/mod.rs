//! Concrete problem definitions.
//!
//! Two toy combinatorial domains exercising the [`crate::problem`]
//! contract: N-queens placement and graph-drawing layout.

mod layout;
mod nqueens;

pub use layout::{AestheticTerm, GraphLayout};
pub use nqueens::NQueens;
