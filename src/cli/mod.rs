//! Command-line parsing for the piston fit search.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the geometry/search code.

use clap::{Parser, Subcommand};

use crate::domain::{DEFAULT_GAP_MAX, DEFAULT_RING_EXPOSURE_MAX, OutputFormat};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "piston",
    version,
    about = "Find pipe and O-ring combinations that make a piston and cylinder"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Try every (shell, ring, piston) combination and report the ones that fit.
    Search(SearchArgs),
    /// Show the radii and the verdict for one combination.
    Explain(ExplainArgs),
    /// List the built-in pipe and O-ring catalogs with their indices.
    Catalog,
}

/// Options for `piston search`.
#[derive(Debug, Parser, Clone)]
pub struct SearchArgs {
    /// Largest accepted radial clearance between shell bore and ring (inches).
    #[arg(long, value_name = "IN", default_value_t = DEFAULT_GAP_MAX, allow_negative_numbers = true)]
    pub gap_max: f64,

    /// Largest accepted fraction of the ring thickness outside the piston (0..=1).
    #[arg(long, value_name = "FRAC", default_value_t = DEFAULT_RING_EXPOSURE_MAX)]
    pub ring_exposure_max: f64,

    /// Run the enumeration on all cores.
    #[arg(long)]
    pub parallel: bool,

    /// Never use the same stock entry as both shell and piston.
    #[arg(long)]
    pub distinct_stock: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Only print the counts and the best solution.
    #[arg(long)]
    pub best_only: bool,
}

/// Options for `piston explain`.
#[derive(Debug, Parser, Clone)]
pub struct ExplainArgs {
    /// Shell index in the stock catalog.
    pub shell: usize,
    /// Ring index in the O-ring catalog.
    pub ring: usize,
    /// Piston index in the stock catalog.
    pub piston: usize,

    /// Largest accepted radial clearance (inches).
    #[arg(long, value_name = "IN", default_value_t = DEFAULT_GAP_MAX, allow_negative_numbers = true)]
    pub gap_max: f64,

    /// Largest accepted exposed ring fraction (0..=1).
    #[arg(long, value_name = "FRAC", default_value_t = DEFAULT_RING_EXPOSURE_MAX)]
    pub ring_exposure_max: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_defaults() {
        let cli = Cli::parse_from(["piston", "search"]);
        let Command::Search(args) = cli.command else {
            panic!("expected search");
        };
        assert_eq!(args.gap_max, DEFAULT_GAP_MAX);
        assert_eq!(args.ring_exposure_max, DEFAULT_RING_EXPOSURE_MAX);
        assert_eq!(args.format, OutputFormat::Text);
        assert!(!args.parallel && !args.distinct_stock && !args.best_only);
    }

    #[test]
    fn negative_gap_limit_parses() {
        let cli = Cli::parse_from(["piston", "search", "--gap-max", "-1", "--format", "json"]);
        let Command::Search(args) = cli.command else {
            panic!("expected search");
        };
        assert_eq!(args.gap_max, -1.0);
        assert_eq!(args.format, OutputFormat::Json);
    }

    #[test]
    fn explain_takes_three_indices() {
        let cli = Cli::parse_from(["piston", "explain", "0", "17", "0"]);
        let Command::Explain(args) = cli.command else {
            panic!("expected explain");
        };
        assert_eq!((args.shell, args.ring, args.piston), (0, 17, 0));
    }
}
