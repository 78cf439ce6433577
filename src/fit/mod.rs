//! Fit evaluation and search.
//!
//! Responsibilities:
//!
//! - derive the radii of a (shell, ring, piston) triple and classify it
//! - enumerate every triple (optionally in parallel) and keep the best fit

pub mod evaluate;
pub mod search;

pub use evaluate::*;
pub use search::*;
