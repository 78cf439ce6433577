//! Shared domain types.
//!
//! All lengths are inches, matching the embedded stock tables. The only unit
//! conversion in the tool is `MM_PER_INCH`, applied when displaying the best gap.

use std::ops::AddAssign;

use clap::ValueEnum;
use serde::Serialize;

use crate::error::AppError;

/// 0.01 mm expressed in inches.
pub const INCH_PER_HUNDREDTH_MM: f64 = 0.000_393_700_8;

/// Default maximum shell-to-ring radial clearance (0.5 mm).
pub const DEFAULT_GAP_MAX: f64 = INCH_PER_HUNDREDTH_MM * 50.0;

/// Default maximum share of the ring's thickness allowed outside the piston.
pub const DEFAULT_RING_EXPOSURE_MAX: f64 = 0.55;

pub const MM_PER_INCH: f64 = 25.4;

/// A row of the pipe/tube catalog. Used for both the shell and the piston.
///
/// `wall_thickness` is tabulated independently of the diameters and is not
/// always exactly `(outside - inside) / 2`; it must be used as stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StockItem {
    pub inside_diameter: f64,
    pub outside_diameter: f64,
    pub wall_thickness: f64,
}

impl StockItem {
    pub const fn new(inside_diameter: f64, outside_diameter: f64, wall_thickness: f64) -> Self {
        Self {
            inside_diameter,
            outside_diameter,
            wall_thickness,
        }
    }
}

/// A row of the O-ring catalog.
///
/// `thickness` is the radial cross-section, stored as tabulated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingItem {
    pub inside_diameter: f64,
    pub outside_diameter: f64,
    pub thickness: f64,
}

impl RingItem {
    pub const fn new(inside_diameter: f64, outside_diameter: f64, thickness: f64) -> Self {
        Self {
            inside_diameter,
            outside_diameter,
            thickness,
        }
    }
}

/// Numeric acceptance limits for a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FitLimits {
    /// Largest accepted radial gap between shell bore and ring (inches).
    pub gap_max: f64,
    /// Largest accepted exposed fraction of the ring's radial thickness.
    pub ring_exposure_max: f64,
}

impl Default for FitLimits {
    fn default() -> Self {
        Self {
            gap_max: DEFAULT_GAP_MAX,
            ring_exposure_max: DEFAULT_RING_EXPOSURE_MAX,
        }
    }
}

impl FitLimits {
    /// `gap_max` may be any finite number (a negative limit simply admits
    /// nothing); `ring_exposure_max` is a fraction.
    pub fn validate(&self) -> Result<(), AppError> {
        if !self.gap_max.is_finite() {
            return Err(AppError::config(format!(
                "Invalid gap limit: {} (must be finite).",
                self.gap_max
            )));
        }
        if !(self.ring_exposure_max.is_finite() && (0.0..=1.0).contains(&self.ring_exposure_max)) {
            return Err(AppError::config(format!(
                "Invalid ring exposure limit: {} (must be within 0..=1).",
                self.ring_exposure_max
            )));
        }
        Ok(())
    }
}

/// Output rendering for `piston search`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Csv,
}

/// A full run's configuration as understood by the search.
///
/// This is derived from CLI flags (plus defaults).
#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub limits: FitLimits,
    /// Split the shell loop across the rayon pool.
    pub parallel: bool,
    /// Skip triples where the shell and the piston are the same stock entry.
    pub distinct_stock: bool,
    pub format: OutputFormat,
    /// Omit per-solution lines in text output.
    pub best_only: bool,
}

impl SearchConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.limits.validate()
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            limits: FitLimits::default(),
            parallel: false,
            distinct_stock: false,
            format: OutputFormat::Text,
            best_only: false,
        }
    }
}

/// Radii derived from one (shell, ring, piston) triple.
///
/// ```text
///  h       g   f e d   cb      a
///  |       |     | .    .      |
///  |       |   (---.---).-----------|
///  |       |     | .    .      |
///          <-->
///          gap
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    /// Piston bore radius.
    pub a: f64,
    /// Piston floor: bore radius plus half the wall.
    pub b: f64,
    /// Ring inner radius (bottom of the groove).
    pub c: f64,
    /// Ring cross-section centreline radius.
    pub d: f64,
    /// Piston outer radius.
    pub e: f64,
    /// Ring outer radius.
    pub f: f64,
    /// Shell bore radius.
    pub g: f64,
    /// Shell outer radius.
    pub h: f64,
    pub gap: f64,
    pub exposed_ring_fraction: f64,
}

/// Why a triple was rejected, in the order the checks are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rejection {
    RingTooBigForPiston,
    RingTooDeep,
    RingNotBuried,
    GapTooWide,
    RingTooBigForShell,
}

impl Rejection {
    pub const COUNT: usize = 5;

    pub const ALL: [Rejection; Rejection::COUNT] = [
        Rejection::RingTooBigForPiston,
        Rejection::RingTooDeep,
        Rejection::RingNotBuried,
        Rejection::GapTooWide,
        Rejection::RingTooBigForShell,
    ];

    /// Human-readable label for terminal output.
    pub fn label(self) -> &'static str {
        match self {
            Rejection::RingTooBigForPiston => "ring too big for piston",
            Rejection::RingTooDeep => "ring too deep in piston",
            Rejection::RingNotBuried => "ring not buried enough",
            Rejection::GapTooWide => "gap too wide",
            Rejection::RingTooBigForShell => "ring too big for shell",
        }
    }

    fn slot(self) -> usize {
        self as usize
    }
}

/// Classification of a single triple.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    Rejected(Rejection),
    Accepted { gap: f64, exposed_ring_fraction: f64 },
}

/// A triple that passed every check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Solution {
    pub shell: usize,
    pub ring: usize,
    pub piston: usize,
    pub gap: f64,
    pub exposed_ring_fraction: f64,
}

impl Solution {
    pub fn gap_mm(&self) -> f64 {
        self.gap * MM_PER_INCH
    }
}

/// Rejection counters, one per `Rejection`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RejectionTally {
    counts: [u64; Rejection::COUNT],
}

impl RejectionTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, reason: Rejection) {
        self.counts[reason.slot()] += 1;
    }

    pub fn get(&self, reason: Rejection) -> u64 {
        self.counts[reason.slot()]
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// `(reason, count)` pairs in check order.
    pub fn iter(&self) -> impl Iterator<Item = (Rejection, u64)> + '_ {
        Rejection::ALL.into_iter().map(move |r| (r, self.get(r)))
    }
}

impl AddAssign for RejectionTally {
    fn add_assign(&mut self, rhs: Self) {
        for (lhs, rhs) in self.counts.iter_mut().zip(rhs.counts) {
            *lhs += rhs;
        }
    }
}

/// Everything a search run produces.
#[derive(Debug, Clone, Default)]
pub struct SearchOutcome {
    pub tally: RejectionTally,
    /// Accepted triples in enumeration order (shell, then ring, then piston).
    pub solutions: Vec<Solution>,
    /// Smallest-gap solution; the earliest one wins ties. `None` if nothing fit.
    pub best: Option<Solution>,
    /// Triples classified by the predicate chain.
    pub candidates_evaluated: u64,
    /// Triples skipped because shell and piston were the same stock entry.
    pub skipped_same_stock: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_gap_max_is_half_a_millimetre() {
        assert!((DEFAULT_GAP_MAX * MM_PER_INCH - 0.5).abs() < 1e-6);
    }

    #[test]
    fn limit_validation() {
        assert!(FitLimits::default().validate().is_ok());

        let nan_gap = FitLimits {
            gap_max: f64::NAN,
            ..FitLimits::default()
        };
        assert!(nan_gap.validate().is_err());

        let over = FitLimits {
            ring_exposure_max: 1.5,
            ..FitLimits::default()
        };
        assert_eq!(over.validate().unwrap_err().exit_code(), crate::error::EXIT_CONFIG);

        let impossible = FitLimits {
            gap_max: -1.0,
            ..FitLimits::default()
        };
        assert!(impossible.validate().is_ok());
    }

    #[test]
    fn tally_records_and_sums() {
        let mut a = RejectionTally::new();
        a.record(Rejection::RingTooDeep);
        a.record(Rejection::RingTooDeep);
        a.record(Rejection::GapTooWide);

        let mut b = RejectionTally::new();
        b.record(Rejection::RingTooDeep);
        b.record(Rejection::RingTooBigForShell);

        let mut sum = a;
        sum += b;
        assert_eq!(sum.get(Rejection::RingTooDeep), 3);
        assert_eq!(sum.get(Rejection::GapTooWide), 1);
        assert_eq!(sum.get(Rejection::RingTooBigForShell), 1);
        assert_eq!(sum.get(Rejection::RingTooBigForPiston), 0);
        assert_eq!(sum.total(), 5);
    }

    #[test]
    fn tally_iterates_in_check_order() {
        let tally = RejectionTally::new();
        let order: Vec<Rejection> = tally.iter().map(|(r, _)| r).collect();
        assert_eq!(order, Rejection::ALL.to_vec());
    }
}
