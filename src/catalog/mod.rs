//! Embedded stock catalogs and load-time validation.
//!
//! - `pipe`: standard pipe/tube sizes (shell and piston roles)
//! - `ring`: standard O-ring sizes
//!
//! Both tables are compiled in and read-only. A malformed row is reported as a
//! configuration error before any search starts.

pub mod pipe;
pub mod ring;

pub use pipe::PIPE;
pub use ring::RING;

use tracing::debug;

use crate::domain::{RingItem, StockItem};
use crate::error::AppError;

/// The stock catalog used for shells and pistons.
pub fn stock() -> &'static [StockItem] {
    PIPE
}

/// The O-ring catalog.
pub fn rings() -> &'static [RingItem] {
    RING
}

/// Validate both embedded catalogs and return them.
pub fn load() -> Result<(&'static [StockItem], &'static [RingItem]), AppError> {
    let stock = stock();
    let rings = rings();
    validate_stock(stock)?;
    validate_rings(rings)?;
    debug!(stock = stock.len(), rings = rings.len(), "catalogs validated");
    Ok((stock, rings))
}

pub fn validate_stock(items: &[StockItem]) -> Result<(), AppError> {
    for (idx, item) in items.iter().enumerate() {
        check_row(
            "stock",
            idx,
            item.inside_diameter,
            item.outside_diameter,
            item.wall_thickness,
        )?;
    }
    Ok(())
}

pub fn validate_rings(items: &[RingItem]) -> Result<(), AppError> {
    for (idx, item) in items.iter().enumerate() {
        check_row(
            "ring",
            idx,
            item.inside_diameter,
            item.outside_diameter,
            item.thickness,
        )?;
    }
    Ok(())
}

fn check_row(table: &str, idx: usize, inside: f64, outside: f64, thickness: f64) -> Result<(), AppError> {
    let dims = [("inside diameter", inside), ("outside diameter", outside), ("thickness", thickness)];
    for (name, value) in dims {
        if !(value.is_finite() && value > 0.0) {
            return Err(AppError::config(format!(
                "Invalid {table} catalog entry {idx}: {name} must be finite and > 0 (got {value})."
            )));
        }
    }
    if outside <= inside {
        return Err(AppError::config(format!(
            "Invalid {table} catalog entry {idx}: outside diameter {outside} does not exceed inside diameter {inside}."
        )));
    }
    Ok(())
}
