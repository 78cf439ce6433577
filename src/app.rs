//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - initializes logging
//! - parses CLI arguments
//! - validates the catalogs and limits
//! - runs the search (or a single-triple explanation)
//! - prints the report

use std::io::{self, Write};

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::cli::{Command, ExplainArgs, SearchArgs};
use crate::domain::{FitLimits, OutputFormat, SearchConfig};
use crate::error::AppError;

/// Entry point for the `piston` binary.
pub fn run() -> Result<(), AppError> {
    init_tracing();

    // `piston` and `piston --gap-max 0.01` behave like `piston search ...`.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Search(args) => handle_search(args),
        Command::Explain(args) => handle_explain(args),
        Command::Catalog => handle_catalog(),
    }
}

/// Install a stderr fmt subscriber filtered by `RUST_LOG` (from the
/// environment or a `.env` file), defaulting to `warn`.
fn init_tracing() {
    dotenvy::dotenv().ok();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // A second install (e.g. from tests) is harmless.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn handle_search(args: SearchArgs) -> Result<(), AppError> {
    let config = search_config_from_args(&args);
    config.validate()?;

    let (stock, rings) = crate::catalog::load()?;
    let outcome = crate::fit::search_with(stock, rings, &config);

    info!(
        candidates = outcome.candidates_evaluated,
        rejected = outcome.tally.total(),
        solutions = outcome.solutions.len(),
        "search finished"
    );
    match &outcome.best {
        Some(best) => info!(
            shell = best.shell,
            ring = best.ring,
            piston = best.piston,
            gap = best.gap,
            "best fit"
        ),
        None => warn!(
            gap_max = config.limits.gap_max,
            ring_exposure_max = config.limits.ring_exposure_max,
            "no combination satisfies the limits"
        ),
    }

    let stdout = io::stdout().lock();
    match config.format {
        OutputFormat::Text => print_text(stdout, &crate::report::format_search_report(&outcome, &config)),
        OutputFormat::Json => {
            let mut stdout = stdout;
            crate::report::write_json(&mut stdout, &outcome, &config)?;
            writeln!(stdout).map_err(|e| AppError::output(format!("Failed to write report: {e}")))
        }
        OutputFormat::Csv => crate::report::write_csv(stdout, &outcome),
    }
}

fn handle_explain(args: ExplainArgs) -> Result<(), AppError> {
    let limits = FitLimits {
        gap_max: args.gap_max,
        ring_exposure_max: args.ring_exposure_max,
    };
    limits.validate()?;

    let (stock, rings) = crate::catalog::load()?;
    let shell = lookup(stock, args.shell, "shell")?;
    let ring = lookup(rings, args.ring, "ring")?;
    let piston = lookup(stock, args.piston, "piston")?;

    let geo = crate::fit::geometry(shell, ring, piston);
    let outcome = crate::fit::classify(&geo, &limits);

    let text = crate::report::format_explanation(
        (args.shell, args.ring, args.piston),
        (shell, ring, piston),
        &geo,
        &outcome,
    );
    print_text(io::stdout().lock(), &text)
}

fn handle_catalog() -> Result<(), AppError> {
    let (stock, rings) = crate::catalog::load()?;
    print_text(io::stdout().lock(), &crate::report::format_catalogs(stock, rings))
}

pub fn search_config_from_args(args: &SearchArgs) -> SearchConfig {
    SearchConfig {
        limits: FitLimits {
            gap_max: args.gap_max,
            ring_exposure_max: args.ring_exposure_max,
        },
        parallel: args.parallel,
        distinct_stock: args.distinct_stock,
        format: args.format,
        best_only: args.best_only,
    }
}

fn lookup<'a, T>(items: &'a [T], idx: usize, role: &str) -> Result<&'a T, AppError> {
    items.get(idx).ok_or_else(|| {
        AppError::config(format!(
            "No {role} at index {idx}: the catalog has {} entries (0..={}).",
            items.len(),
            items.len().saturating_sub(1)
        ))
    })
}

fn print_text<W: Write>(mut out: W, text: &str) -> Result<(), AppError> {
    out.write_all(text.as_bytes())
        .map_err(|e| AppError::output(format!("Failed to write report: {e}")))
}

/// Rewrite argv so `piston` defaults to `piston search`.
///
/// Rules:
/// - `piston`                       -> `piston search`
/// - `piston --gap-max 0.01 ...`    -> `piston search --gap-max 0.01 ...`
/// - `piston --help/--version/-h`   -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("search".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "search" | "explain" | "catalog");
    if is_subcommand {
        return argv;
    }

    if arg1.starts_with('-') {
        argv.insert(1, "search".to_string());
        return argv;
    }

    argv
}
