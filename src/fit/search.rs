//! Exhaustive enumeration over (shell, ring, piston) triples.
//!
//! Enumeration order is shell outermost, ring, then piston innermost. The order
//! only matters for the tie-break: when two solutions share the smallest gap,
//! the one enumerated first is reported as best.
//!
//! The best solution starts out as "none" with a gap of `gap_max`, and is only
//! replaced by a strictly smaller gap. A solution whose gap equals `gap_max`
//! exactly is still listed, but never becomes best.
//!
//! The parallel variant splits the shell loop across the rayon pool. Each shell
//! produces a `Partition`; partitions are merged in shell order, so the result
//! is identical to the sequential scan.

use rayon::prelude::*;
use tracing::debug;

use crate::domain::{FitLimits, Outcome, RingItem, SearchConfig, SearchOutcome, Solution, StockItem};
use crate::fit::evaluate::evaluate;

/// Scan every triple sequentially.
pub fn search(stock: &[StockItem], rings: &[RingItem], limits: &FitLimits) -> SearchOutcome {
    scan(stock, rings, limits, false, false)
}

/// Scan every triple with the shell loop on the rayon pool.
pub fn search_parallel(stock: &[StockItem], rings: &[RingItem], limits: &FitLimits) -> SearchOutcome {
    scan(stock, rings, limits, false, true)
}

/// Scan according to a run configuration.
pub fn search_with(stock: &[StockItem], rings: &[RingItem], config: &SearchConfig) -> SearchOutcome {
    scan(stock, rings, &config.limits, config.distinct_stock, config.parallel)
}

fn scan(
    stock: &[StockItem],
    rings: &[RingItem],
    limits: &FitLimits,
    distinct_stock: bool,
    parallel: bool,
) -> SearchOutcome {
    debug!(
        stock = stock.len(),
        rings = rings.len(),
        parallel,
        distinct_stock,
        "starting search"
    );

    let merged = if parallel {
        let partitions: Vec<Partition> = (0..stock.len())
            .into_par_iter()
            .map(|s| scan_shell(s, stock, rings, limits, distinct_stock))
            .collect();

        partitions.into_iter().fold(Partition::new(limits.gap_max), |mut acc, part| {
            acc.merge(part);
            acc
        })
    } else {
        let mut acc = Partition::new(limits.gap_max);
        for s in 0..stock.len() {
            acc.merge(scan_shell(s, stock, rings, limits, distinct_stock));
        }
        acc
    };

    merged.into_outcome()
}

fn scan_shell(
    s: usize,
    stock: &[StockItem],
    rings: &[RingItem],
    limits: &FitLimits,
    distinct_stock: bool,
) -> Partition {
    let shell = &stock[s];
    let mut part = Partition::new(limits.gap_max);

    for (r, ring) in rings.iter().enumerate() {
        for (p, piston) in stock.iter().enumerate() {
            if distinct_stock && s == p {
                part.skipped_same_stock += 1;
                continue;
            }
            part.evaluated += 1;
            match evaluate(shell, ring, piston, limits) {
                Outcome::Rejected(reason) => part.outcome.tally.record(reason),
                Outcome::Accepted {
                    gap,
                    exposed_ring_fraction,
                } => part.accept(Solution {
                    shell: s,
                    ring: r,
                    piston: p,
                    gap,
                    exposed_ring_fraction,
                }),
            }
        }
    }

    part
}

/// Results for a contiguous run of the enumeration.
#[derive(Debug)]
struct Partition {
    outcome: SearchOutcome,
    gap_max: f64,
    evaluated: u64,
    skipped_same_stock: u64,
}

impl Partition {
    fn new(gap_max: f64) -> Self {
        Self {
            outcome: SearchOutcome::default(),
            gap_max,
            evaluated: 0,
            skipped_same_stock: 0,
        }
    }

    fn accept(&mut self, solution: Solution) {
        offer_best(&mut self.outcome.best, solution, self.gap_max);
        self.outcome.solutions.push(solution);
    }

    /// Append a partition that comes later in enumeration order.
    fn merge(&mut self, later: Partition) {
        self.outcome.tally += later.outcome.tally;
        self.outcome.solutions.extend(later.outcome.solutions);
        if let Some(best) = later.outcome.best {
            offer_best(&mut self.outcome.best, best, self.gap_max);
        }
        self.evaluated += later.evaluated;
        self.skipped_same_stock += later.skipped_same_stock;
    }

    fn into_outcome(self) -> SearchOutcome {
        SearchOutcome {
            candidates_evaluated: self.evaluated,
            skipped_same_stock: self.skipped_same_stock,
            ..self.outcome
        }
    }
}

/// Replace `best` only on a strictly smaller gap, so earlier solutions win ties.
/// With no best yet, the candidate must beat `gap_max` itself.
fn offer_best(best: &mut Option<Solution>, candidate: Solution, gap_max: f64) {
    let current_gap = best.map_or(gap_max, |current| current.gap);
    if candidate.gap < current_gap {
        *best = Some(candidate);
    }
}
