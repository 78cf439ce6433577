//! Reporting: terminal text plus JSON / CSV renderings of a search run.

pub mod format;
pub mod serialize;

pub use format::*;
pub use serialize::*;
