//! # bares-cli
//!
//! Command-line interface for the bares expression evaluator.
//!
//! Reads one expression per line from a file, stdin, or `-e` arguments,
//! evaluates each one independently and prints its value or a diagnostic.
//! Exits with `0` when every expression succeeded, `1` when any failed, and
//! `2` when the expressions could not be read at all.

mod config;
mod report;
mod source;

use anyhow::{Context, Result};
use bares::{Evaluation, Solver, evaluate_all};
use clap::Parser;
use colored::*;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use config::Config;
use report::Summary;
use source::ExpressionSource;

const EXIT_SOURCE_ERROR: i32 = 2;

#[derive(Parser)]
#[command(name = "bares")]
#[command(about = "Basic arithmetic expression solver", long_about = None)]
#[command(version)]
struct Cli {
    /// File with one expression per line (`-` or omitted for stdin)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Evaluate this expression instead of reading a file (repeatable)
    #[arg(short = 'e', long = "expr", value_name = "EXPR")]
    expressions: Vec<String>,

    /// Print the token list of every expression
    #[arg(long)]
    tokens: bool,

    /// Print the postfix form of every valid expression
    #[arg(long)]
    postfix: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Stop at the first expression that fails
    #[arg(long)]
    stop_on_error: bool,

    /// Worker threads for evaluating large inputs (0 = all cores)
    #[arg(short, long, value_name = "N")]
    jobs: Option<usize>,

    /// Print a summary line after all expressions
    #[arg(long)]
    summary: bool,

    /// Use this config file instead of looking up `.baresrc`
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            std::process::exit(EXIT_SOURCE_ERROR);
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<i32> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::load(".").unwrap_or_else(|e| {
            eprintln!("{} Failed to load config: {:#}", "⚠".yellow().bold(), e);
            Config::default()
        }),
    };
    config.merge_cli_args(
        cli.no_color,
        cli.tokens,
        cli.postfix,
        cli.stop_on_error,
        cli.jobs,
    );
    if !config.colored {
        colored::control::set_override(false);
    }
    debug!(?config, "configuration loaded");

    let source = ExpressionSource::from_args(cli.file, cli.expressions);
    let expressions = source.read()?;
    info!(source = %source.describe(), count = expressions.len(), "expressions loaded");

    let summary = if config.stop_on_error {
        run_sequential(&expressions, &config)
    } else {
        run_parallel(&expressions, &config)?
    };

    if cli.summary {
        println!("{}", summary.render());
    }
    Ok(summary.exit_code())
}

/// Evaluates in order on the current thread and stops at the first failure.
fn run_sequential(expressions: &[String], config: &Config) -> Summary {
    let mut solver = Solver::new();
    let mut summary = Summary::default();

    for expression in expressions {
        let evaluation = solver.run(expression);
        print_evaluation(&evaluation, config, &mut summary);
        if !evaluation.is_ok() {
            break;
        }
    }
    summary
}

/// Evaluates every expression on a rayon pool, then prints in input order.
fn run_parallel(expressions: &[String], config: &Config) -> Result<Summary> {
    let evaluations: Vec<Evaluation> = if config.threads > 0 {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.threads)
            .build()
            .context("Failed to create thread pool")?;
        pool.install(|| evaluate_all(expressions))
    } else {
        evaluate_all(expressions)
    };

    let mut summary = Summary::default();
    for evaluation in &evaluations {
        print_evaluation(evaluation, config, &mut summary);
    }
    Ok(summary)
}

fn print_evaluation(evaluation: &Evaluation, config: &Config, summary: &mut Summary) {
    summary.record(evaluation);
    print!("{}", report::render(evaluation, config));
}
