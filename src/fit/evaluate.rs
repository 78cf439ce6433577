//! Geometry and feasibility checks for a single (shell, ring, piston) triple.
//!
//! The ring sits in a groove cut into the piston's outer surface and rides
//! against the shell bore. For the assembly to work:
//!
//! - the groove must exist: piston outer radius `e` above ring inner radius `c`
//! - the groove may not cut past the piston floor `b`
//! - no more than `ring_exposure_max` of the ring may stand proud of the piston
//! - the ring must fit the shell bore with a clearance in `[0, gap_max]`
//!
//! Checks run in that order and the first failure decides the rejection.

use crate::domain::{FitLimits, Geometry, Outcome, Rejection, RingItem, StockItem};

/// Compute every radius for a triple.
pub fn geometry(shell: &StockItem, ring: &RingItem, piston: &StockItem) -> Geometry {
    let a = piston.inside_diameter / 2.0;
    let b = a + piston.wall_thickness / 2.0;
    let c = ring.inside_diameter / 2.0;
    let d = c + ring.thickness / 2.0;
    let e = piston.outside_diameter / 2.0;
    let f = ring.outside_diameter / 2.0;
    let g = shell.inside_diameter / 2.0;
    let h = shell.outside_diameter / 2.0;

    Geometry {
        a,
        b,
        c,
        d,
        e,
        f,
        g,
        h,
        gap: g - f,
        exposed_ring_fraction: (f - e) / ring.thickness,
    }
}

/// Apply the checks to precomputed geometry.
pub fn classify(geo: &Geometry, limits: &FitLimits) -> Outcome {
    if geo.e <= geo.c {
        return Outcome::Rejected(Rejection::RingTooBigForPiston);
    }
    if geo.c < geo.b {
        return Outcome::Rejected(Rejection::RingTooDeep);
    }
    if geo.exposed_ring_fraction > limits.ring_exposure_max {
        return Outcome::Rejected(Rejection::RingNotBuried);
    }
    if geo.gap > limits.gap_max {
        return Outcome::Rejected(Rejection::GapTooWide);
    }
    if geo.gap < 0.0 {
        return Outcome::Rejected(Rejection::RingTooBigForShell);
    }

    Outcome::Accepted {
        gap: geo.gap,
        exposed_ring_fraction: geo.exposed_ring_fraction,
    }
}

/// Classify a triple. Total over well-formed catalog rows.
pub fn evaluate(shell: &StockItem, ring: &RingItem, piston: &StockItem, limits: &FitLimits) -> Outcome {
    classify(&geometry(shell, ring, piston), limits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{rings, stock};

    // Piston: a = 0.25, b = 0.375, e = 0.5.
    const PISTON: StockItem = StockItem::new(0.5, 1.0, 0.25);
    // Ring: c = 0.4, f = 0.55, exposed = 0.05 / 0.15.
    const RING: RingItem = RingItem::new(0.8, 1.1, 0.15);
    // Shell: g = 0.56, gap = 0.01.
    const SHELL: StockItem = StockItem::new(1.12, 1.3, 0.09);

    #[test]
    fn accepts_a_good_fit() {
        let outcome = evaluate(&SHELL, &RING, &PISTON, &FitLimits::default());
        let Outcome::Accepted { gap, exposed_ring_fraction } = outcome else {
            panic!("expected acceptance, got {outcome:?}");
        };
        assert!((gap - 0.01).abs() < 1e-12);
        assert!((exposed_ring_fraction - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn reference_triple_is_too_deep() {
        let shell = stock()[0];
        let ring = rings()[17];
        let geo = geometry(&shell, &ring, &shell);

        assert!((geo.a - 0.2445).abs() < 1e-12);
        assert!((geo.b - 0.2785).abs() < 1e-12);
        assert!((geo.c - 0.09375).abs() < 1e-12);
        assert!((geo.e - 0.3125).abs() < 1e-12);
        assert_eq!(
            classify(&geo, &FitLimits::default()),
            Outcome::Rejected(Rejection::RingTooDeep)
        );
    }

    #[test]
    fn first_failing_check_wins() {
        // No groove (e <= c) and a far too wide gap.
        let ring = RingItem::new(1.2, 1.4, 0.1);
        let shell = StockItem::new(4.0, 4.5, 0.25);
        assert_eq!(
            evaluate(&shell, &ring, &PISTON, &FitLimits::default()),
            Outcome::Rejected(Rejection::RingTooBigForPiston)
        );

        // Too deep and also too proud of the piston.
        let ring = RingItem::new(0.6, 1.6, 0.1);
        assert_eq!(
            evaluate(&shell, &ring, &PISTON, &FitLimits::default()),
            Outcome::Rejected(Rejection::RingTooDeep)
        );
    }

    #[test]
    fn each_rejection_is_reachable() {
        let limits = FitLimits::default();

        let exposed = RingItem::new(0.8, 1.4, 0.3);
        assert_eq!(
            evaluate(&SHELL, &exposed, &PISTON, &limits),
            Outcome::Rejected(Rejection::RingNotBuried)
        );

        let wide = StockItem::new(1.5, 1.7, 0.1);
        assert_eq!(
            evaluate(&wide, &RING, &PISTON, &limits),
            Outcome::Rejected(Rejection::GapTooWide)
        );

        let tight = StockItem::new(1.05, 1.3, 0.125);
        assert_eq!(
            evaluate(&tight, &RING, &PISTON, &limits),
            Outcome::Rejected(Rejection::RingTooBigForShell)
        );
    }

    #[test]
    fn limits_are_inclusive() {
        let geo = geometry(&SHELL, &RING, &PISTON);
        let limits = FitLimits {
            gap_max: geo.gap,
            ring_exposure_max: geo.exposed_ring_fraction,
        };
        assert!(matches!(classify(&geo, &limits), Outcome::Accepted { .. }));
    }

    #[test]
    fn zero_gap_is_accepted() {
        let snug = StockItem::new(RING.outside_diameter, 1.3, 0.1);
        let outcome = evaluate(&snug, &RING, &PISTON, &FitLimits::default());
        assert_eq!(
            outcome,
            Outcome::Accepted {
                gap: 0.0,
                exposed_ring_fraction: geometry(&snug, &RING, &PISTON).exposed_ring_fraction,
            }
        );
    }

    #[test]
    fn ring_seated_on_the_floor_is_not_too_deep() {
        // c == b exactly.
        let ring = RingItem::new(0.75, 1.1, 0.175);
        let geo = geometry(&SHELL, &ring, &PISTON);
        assert_eq!(geo.c, geo.b);
        assert_ne!(classify(&geo, &FitLimits::default()), Outcome::Rejected(Rejection::RingTooDeep));
    }
}
