//! Domain types used throughout the search.
//!
//! This module defines:
//!
//! - catalog rows (`StockItem`, `RingItem`)
//! - run configuration (`FitLimits`, `SearchConfig`, `OutputFormat`)
//! - per-triple results (`Geometry`, `Rejection`, `Outcome`, `Solution`)
//! - per-run results (`RejectionTally`, `SearchOutcome`)

pub mod types;

pub use types::*;
