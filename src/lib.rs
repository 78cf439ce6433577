//! `piston-fit` library crate.
//!
//! The binary (`piston`) is a thin wrapper around this library so that:
//!
//! - the search is testable without spawning processes
//! - the catalogs, evaluator and report formats are reusable on their own

pub mod app;
pub mod catalog;
pub mod cli;
pub mod domain;
pub mod error;
pub mod fit;
pub mod report;
