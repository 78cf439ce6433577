//! Formatted terminal output.
//!
//! We keep formatting code in one place so the search code stays free of
//! presentation and output changes are localized.

use crate::domain::{
    Geometry, MM_PER_INCH, Outcome, RejectionTally, RingItem, SearchConfig, SearchOutcome, Solution, StockItem,
};

/// Full text report: solution lines, rejection counts, total and best.
pub fn format_search_report(outcome: &SearchOutcome, config: &SearchConfig) -> String {
    let mut out = String::new();

    if !config.best_only {
        for s in &outcome.solutions {
            out.push_str(&format_solution_line(s));
            out.push('\n');
        }
    }

    out.push_str(&format_tally(&outcome.tally));
    if outcome.skipped_same_stock > 0 {
        out.push_str(&format!(
            "skipped (shell is piston): {}\n",
            outcome.skipped_same_stock
        ));
    }
    out.push_str(&format!("solutions found: {}\n", outcome.solutions.len()));
    out.push_str(&format_best(outcome.best.as_ref()));

    out
}

pub fn format_solution_line(s: &Solution) -> String {
    format!(
        "shell:{} ring:{} piston:{} gap:{:.5} ringexp:{:.3}",
        s.shell, s.ring, s.piston, s.gap, s.exposed_ring_fraction
    )
}

pub fn format_tally(tally: &RejectionTally) -> String {
    let mut out = String::new();
    for (reason, count) in tally.iter() {
        out.push_str(&format!("{}: {count}\n", reason.label()));
    }
    out
}

pub fn format_best(best: Option<&Solution>) -> String {
    let Some(best) = best else {
        return "best solution: none\n".to_string();
    };
    format!(
        "best solution:\n\ts:{}\n\tr:{}\n\tp:{}\n\tgap:{:.5} in. ({:.5} mm)\n\tring_exp:{:.5}\n",
        best.shell,
        best.ring,
        best.piston,
        best.gap,
        best.gap_mm(),
        best.exposed_ring_fraction
    )
}

/// Explain how one triple was classified.
pub fn format_explanation(
    indices: (usize, usize, usize),
    parts: (&StockItem, &RingItem, &StockItem),
    geo: &Geometry,
    outcome: &Outcome,
) -> String {
    let (s, r, p) = indices;
    let (shell, ring, piston) = parts;
    let mut out = String::new();

    out.push_str(&format!(
        "shell  #{s:<3} id={:.4} od={:.4} wall={:.4}\n",
        shell.inside_diameter, shell.outside_diameter, shell.wall_thickness
    ));
    out.push_str(&format!(
        "ring   #{r:<3} id={:.4} od={:.4} thickness={:.4}\n",
        ring.inside_diameter, ring.outside_diameter, ring.thickness
    ));
    out.push_str(&format!(
        "piston #{p:<3} id={:.4} od={:.4} wall={:.4}\n",
        piston.inside_diameter, piston.outside_diameter, piston.wall_thickness
    ));

    out.push_str("\nRadii (in.):\n");
    let radii = [
        ("a", "piston bore", geo.a),
        ("b", "piston floor", geo.b),
        ("c", "ring inner", geo.c),
        ("d", "ring centreline", geo.d),
        ("e", "piston outer", geo.e),
        ("f", "ring outer", geo.f),
        ("g", "shell bore", geo.g),
        ("h", "shell outer", geo.h),
    ];
    for (sym, name, value) in radii {
        out.push_str(&format!("  {sym} {name:<16} {value:>9.5}\n"));
    }

    out.push_str(&format!(
        "\ngap: {:.5} in. ({:.5} mm)\n",
        geo.gap,
        geo.gap * MM_PER_INCH
    ));
    out.push_str(&format!("ring exposed: {:.3}\n", geo.exposed_ring_fraction));
    match outcome {
        Outcome::Accepted { .. } => out.push_str("outcome: accepted\n"),
        Outcome::Rejected(reason) => out.push_str(&format!("outcome: rejected ({})\n", reason.label())),
    }

    out
}

/// List both catalogs with the indices used by `search` and `explain`.
pub fn format_catalogs(stock: &[StockItem], rings: &[RingItem]) -> String {
    let mut out = String::new();

    out.push_str("Stock (shell / piston), inches:\n");
    out.push_str(&table_header("wall"));
    for (idx, item) in stock.iter().enumerate() {
        out.push_str(&table_row(idx, item.inside_diameter, item.outside_diameter, item.wall_thickness));
    }

    out.push_str("\nO-rings, inches:\n");
    out.push_str(&table_header("thickness"));
    for (idx, item) in rings.iter().enumerate() {
        out.push_str(&table_row(idx, item.inside_diameter, item.outside_diameter, item.thickness));
    }

    out
}

fn table_header(third: &str) -> String {
    let mut out = String::new();
    out.push_str(format!("{:>5} {:>10} {:>10} {:>10}", "#", "id", "od", third).trim_end());
    out.push('\n');
    out.push_str(format!("{:->5} {:->10} {:->10} {:->10}", "", "", "", "").trim_end());
    out.push('\n');
    out
}

fn table_row(idx: usize, inside: f64, outside: f64, third: f64) -> String {
    format!("{idx:>5} {inside:>10.4} {outside:>10.4} {third:>10.4}\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FitLimits, Rejection};
    use crate::fit::{classify, geometry};

    fn sample_solution() -> Solution {
        Solution {
            shell: 14,
            ring: 14,
            piston: 4,
            gap: 0.00075,
            exposed_ring_fraction: 0.55,
        }
    }

    #[test]
    fn solution_line_layout() {
        assert_eq!(
            format_solution_line(&sample_solution()),
            "shell:14 ring:14 piston:4 gap:0.00075 ringexp:0.550"
        );
    }

    #[test]
    fn best_reports_inches_and_millimetres() {
        let text = format_best(Some(&sample_solution()));
        assert!(text.starts_with("best solution:\n\ts:14\n\tr:14\n\tp:4\n"));
        assert!(text.contains("gap:0.00075 in. (0.01905 mm)"));
        assert!(text.contains("ring_exp:0.55000"));
    }

    #[test]
    fn missing_best_is_reported() {
        assert_eq!(format_best(None), "best solution: none\n");
    }

    #[test]
    fn report_lists_every_reason_in_order() {
        let mut outcome = SearchOutcome::default();
        outcome.tally.record(Rejection::GapTooWide);
        outcome.solutions.push(sample_solution());
        outcome.best = Some(sample_solution());

        let text = format_search_report(&outcome, &SearchConfig::default());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "shell:14 ring:14 piston:4 gap:0.00075 ringexp:0.550");
        assert_eq!(lines[1], "ring too big for piston: 0");
        assert_eq!(lines[4], "gap too wide: 1");
        assert_eq!(lines[5], "ring too big for shell: 0");
        assert_eq!(lines[6], "solutions found: 1");
        assert_eq!(lines[7], "best solution:");
    }

    #[test]
    fn best_only_omits_solution_lines() {
        let mut outcome = SearchOutcome::default();
        outcome.solutions.push(sample_solution());
        let config = SearchConfig {
            best_only: true,
            ..SearchConfig::default()
        };
        let text = format_search_report(&outcome, &config);
        assert!(!text.contains("shell:14"));
        assert!(text.contains("solutions found: 1"));
    }

    #[test]
    fn explanation_names_the_rejection() {
        let shell = StockItem::new(0.489, 0.625, 0.068);
        let ring = RingItem::new(0.1875, 0.3125, 0.0625);
        let geo = geometry(&shell, &ring, &shell);
        let outcome = classify(&geo, &FitLimits::default());

        let text = format_explanation((0, 17, 0), (&shell, &ring, &shell), &geo, &outcome);
        assert!(text.contains("  b piston floor       0.27850"));
        assert!(text.ends_with("outcome: rejected (ring too deep in piston)\n"));
    }

    #[test]
    fn catalog_table_has_one_row_per_item() {
        let stock = [StockItem::new(0.489, 0.625, 0.068)];
        let rings = [RingItem::new(0.1875, 0.3125, 0.0625), RingItem::new(0.25, 0.375, 0.0625)];
        let text = format_catalogs(&stock, &rings);
        assert!(text.contains("    0     0.4890     0.6250     0.0680"));
        assert!(text.contains("    1     0.2500     0.3750     0.0625"));
    }
}
