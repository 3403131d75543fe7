//! # outreg
//!
//! A CLI tool for turning regression results into LaTeX table bodies.
//!
//! ## Overview
//!
//! outreg is built on top of outreglib. It reads one JSON file per model
//! (one table column each), lays out estimates with significance stars and
//! standard errors underneath, and writes the rows that go inside a
//! `tabular` environment.
//!
//! ## Usage
//!
//! ```bash
//! # Print a table body for two models
//! outreg ols.json iv.json
//!
//! # Pick variables, relabel them, and use 3 digits
//! outreg ols.json iv.json --var educ --var exper --label Education --label Experience -d 3
//!
//! # Add N and R-squared rows, write to a file with notes next to it
//! outreg ols.json --nobs --r2 -o table_1.tex --notes "Robust standard errors."
//!
//! # Write notes for an existing table
//! outreg notes table_1.tex "Sample size is 277."
//! ```
//!
//! Each results file looks like:
//!
//! ```json
//! {
//!   "name": "OLS",
//!   "coefficients": [
//!     {"name": "educ", "estimate": 0.08, "std_error": 0.02, "p_value": 0.001}
//!   ],
//!   "nobs": 428,
//!   "r_squared": 0.12
//! }
//! ```

use std::process::ExitCode;

use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use log::{debug, info};
use outreglib::{
    outreg_with_options, table_fitrow, write_notes, FitStatistic, OutregOptions,
    RegressionResults, SeStyle,
};

/// Arguments shared by the root command and `render`
fn render_args() -> Vec<Arg> {
    vec![
        Arg::new("results")
            .help("Regression results as JSON, one file per table column")
            .num_args(1..),
        Arg::new("var")
            .short('v')
            .long("var")
            .action(ArgAction::Append)
            .help("Variable to include, in order (can be specified multiple times)"),
        Arg::new("label")
            .short('l')
            .long("label")
            .action(ArgAction::Append)
            .help("Row label for each variable (defaults to the variable names)"),
        Arg::new("digits")
            .short('d')
            .long("digits")
            .value_parser(value_parser!(usize))
            .default_value("4")
            .help("Digits after the decimal point"),
        Arg::new("no-stars")
            .long("no-stars")
            .action(ArgAction::SetTrue)
            .help("Do not mark significance with stars"),
        Arg::new("se")
            .long("se")
            .default_value("(")
            .help("Standard error markers: '(', '[' or 'false'"),
        Arg::new("nobs")
            .long("nobs")
            .action(ArgAction::SetTrue)
            .help("Add a row with the number of observations"),
        Arg::new("r2")
            .long("r2")
            .action(ArgAction::SetTrue)
            .help("Add a row with R-squared"),
        Arg::new("output")
            .short('o')
            .long("output")
            .help("Write the table body to this file instead of stdout"),
        Arg::new("notes")
            .short('n')
            .long("notes")
            .requires("output")
            .help("Notes to write next to the output table"),
        Arg::new("show-options")
            .long("show-options")
            .action(ArgAction::SetTrue)
            .help("Print the derived table options as JSON on stderr"),
    ]
}

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("outreg")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render regression results as LaTeX table rows")
        .args_conflicts_with_subcommands(true)
        .args(render_args())
        .subcommand(
            Command::new("render")
                .about("Render a table body (default command)")
                .args(render_args()),
        )
        .subcommand(
            Command::new("notes")
                .about("Write notes next to a table file")
                .arg(
                    Arg::new("table")
                        .required(true)
                        .help("Path of the table the notes belong to"),
                )
                .arg(Arg::new("text").required(true).help("Notes text")),
        )
}

/// Build outreg options from matches
fn build_options(matches: &ArgMatches) -> Result<OutregOptions, anyhow::Error> {
    let se: SeStyle = matches
        .get_one::<String>("se")
        .map(|s| s.as_str())
        .unwrap_or("(")
        .parse()?;
    let digits = matches.get_one::<usize>("digits").copied().unwrap_or(4);

    let mut options = OutregOptions::new()
        .digits(digits)
        .stars(!matches.get_flag("no-stars"))
        .se(se);

    if let Some(vars) = matches.get_many::<String>("var") {
        options = options.var_names(vars.cloned());
    }
    if let Some(labels) = matches.get_many::<String>("label") {
        options = options.var_labels(labels.cloned());
    }

    Ok(options)
}

/// Load every results file named on the command line
fn load_results(matches: &ArgMatches) -> Result<Vec<RegressionResults>, anyhow::Error> {
    let paths: Vec<&String> = matches
        .get_many::<String>("results")
        .map(|v| v.collect())
        .unwrap_or_default();

    if paths.is_empty() {
        return Err(anyhow::anyhow!("no results files given"));
    }

    paths
        .into_iter()
        .map(|path| {
            debug!("loading results from {}", path);
            RegressionResults::load(path).map_err(anyhow::Error::from)
        })
        .collect()
}

/// Handler for render command
fn render_handler(matches: &ArgMatches) -> Result<(), anyhow::Error> {
    let results = load_results(matches)?;
    let options = build_options(matches)?;
    let regs: Vec<Option<&RegressionResults>> = results.iter().map(Some).collect();

    let (mut body, opts) = outreg_with_options(&regs, &options)?;

    if matches.get_flag("nobs") {
        let stat = FitStatistic::Nobs;
        body.push_str(&table_fitrow(stat.default_label(), stat, &regs, &opts)?);
    }
    if matches.get_flag("r2") {
        let stat = FitStatistic::RSquared;
        body.push_str(&table_fitrow(stat.default_label(), stat, &regs, &opts)?);
    }

    if matches.get_flag("show-options") {
        eprintln!("{}", serde_json::to_string_pretty(&opts)?);
    }

    match matches.get_one::<String>("output") {
        Some(path) => {
            std::fs::write(path, &body)
                .with_context(|| format!("failed to write table to '{}'", path))?;
            info!("wrote table for {} models to {}", regs.len(), path);

            if let Some(notes) = matches.get_one::<String>("notes") {
                write_notes(notes, path)?;
            }
        }
        None => print!("{}", body),
    }

    Ok(())
}

/// Handler for notes command
fn notes_handler(matches: &ArgMatches) -> Result<(), anyhow::Error> {
    let table = matches
        .get_one::<String>("table")
        .ok_or_else(|| anyhow::anyhow!("missing table path"))?;
    let text = matches
        .get_one::<String>("text")
        .ok_or_else(|| anyhow::anyhow!("missing notes text"))?;

    write_notes(text, table)?;
    info!("wrote notes for {}", table);
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let matches = build_command().get_matches();

    let result = match matches.subcommand() {
        Some(("render", sub)) => render_handler(sub),
        Some(("notes", sub)) => notes_handler(sub),
        // No subcommand - treat as render
        _ => render_handler(&matches),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
