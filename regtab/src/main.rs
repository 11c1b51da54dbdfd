//! # regtab
//!
//! A CLI tool that turns fitted regression results into a LaTeX table.
//!
//! ## Overview
//!
//! regtab is built on top of regtablib. It reads model results exported as
//! JSON (one model per file, or an array of models), aligns their variables
//! and writes a `table` environment ready to `\input` into a document.
//!
//! ## Usage
//!
//! ```bash
//! # Two models, table on stdout
//! regtab short.json long.json --caption "OLS results" --label tab:ols
//!
//! # Write to a file, p-values in parentheses, summary statistics
//! regtab models.json -o table.tex --parens pval --stats n,r2,aic
//!
//! # Rename variables
//! regtab models.json --rename const=Intercept --rename educ=Education
//!
//! # Load defaults from an options file, override one flag
//! regtab models.json --config table.json --digits 3
//!
//! # Inspect the formatted cells as JSON
//! regtab models.json --format json
//! ```
//!
//! Model JSON uses the attribute names of common statistics packages:
//!
//! ```json
//! {"name": "OLS", "params": {"const": 1.2, "x": 0.5},
//!  "bse": {"const": 0.3, "x": 0.1}, "pvalues": {"const": 0.001, "x": 0.02},
//!  "nobs": 100, "rsquared": 0.31}
//! ```

use std::path::Path;
use std::process::ExitCode;

use anyhow::{anyhow, Context};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use console::style;
use regtablib::{
    build_table, load_models, write_table, ModelResults, Parens, SummaryStat, TableOptions,
};
use tracing_subscriber::EnvFilter;

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("regtab")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Render fitted regression results as a LaTeX comparison table")
        .arg(
            Arg::new("models")
                .required(true)
                .num_args(1..)
                .help("JSON files with model results (a model object or an array of models)"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Write the table to this file instead of stdout"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Load table options from a JSON file; flags override it"),
        )
        .arg(Arg::new("caption").long("caption").help("Table caption"))
        .arg(Arg::new("label").long("label").help("LaTeX label, e.g. tab:ols"))
        .arg(
            Arg::new("model-name")
                .short('n')
                .long("model-name")
                .action(ArgAction::Append)
                .help("Column title (once per model, in order)"),
        )
        .arg(
            Arg::new("no-center")
                .long("no-center")
                .action(ArgAction::SetTrue)
                .help("Do not wrap the tabular in a center environment"),
        )
        .arg(
            Arg::new("parens")
                .short('p')
                .long("parens")
                .value_parser(["se", "pval", "pval_one"])
                .help("Value in parentheses: standard errors, p values or one-tailed p values"),
        )
        .arg(
            Arg::new("no-stars")
                .long("no-stars")
                .action(ArgAction::SetTrue)
                .help("Do not mark significant estimates"),
        )
        .arg(
            Arg::new("significance")
                .short('s')
                .long("significance")
                .value_parser(value_parser!(f64))
                .help("Significance threshold for the marker (default 0.05)"),
        )
        .arg(
            Arg::new("digits")
                .short('d')
                .long("digits")
                .value_parser(value_parser!(usize))
                .help("Decimal digits (default 2)"),
        )
        .arg(
            Arg::new("var-names")
                .long("var-names")
                .conflicts_with("rename")
                .help("Comma-separated replacement names, in sorted variable order"),
        )
        .arg(
            Arg::new("rename")
                .short('r')
                .long("rename")
                .action(ArgAction::Append)
                .help("Rename one variable: OLD=NEW (can be specified multiple times)"),
        )
        .arg(
            Arg::new("stats")
                .long("stats")
                .help(format!(
                    "Summary statistics, comma-separated ({})",
                    SummaryStat::names()
                )),
        )
        .arg(
            Arg::new("no-escape")
                .long("no-escape")
                .action(ArgAction::SetTrue)
                .help("Do not escape LaTeX special characters in names"),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .value_parser(["latex", "json"])
                .default_value("latex")
                .help("Output format: the LaTeX table or its formatted cells as JSON"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Log debug information to stderr"),
        )
}

/// Install the stderr subscriber. RUST_LOG wins over --verbose.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Parse an OLD=NEW rename pair
fn parse_rename(pair: &str) -> Result<(String, String), anyhow::Error> {
    match pair.split_once('=') {
        Some((from, to)) if !from.trim().is_empty() => {
            Ok((from.trim().to_string(), to.trim().to_string()))
        }
        _ => Err(anyhow!("Invalid rename '{}'. Use OLD=NEW", pair)),
    }
}

/// Build table options: config file first, then flags on top
fn build_options(matches: &ArgMatches) -> Result<TableOptions, anyhow::Error> {
    let mut options = match matches.get_one::<String>("config") {
        Some(path) => TableOptions::from_file(path)?,
        None => TableOptions::new(),
    };

    if let Some(caption) = matches.get_one::<String>("caption") {
        options = options.caption(caption);
    }
    if let Some(label) = matches.get_one::<String>("label") {
        options = options.label(label);
    }
    if let Some(names) = matches.get_many::<String>("model-name") {
        options = options.model_names(names.cloned());
    }
    if matches.get_flag("no-center") {
        options = options.center(false);
    }
    if let Some(parens) = matches.get_one::<String>("parens") {
        options = options.parens(parens.parse::<Parens>()?);
    }
    if matches.get_flag("no-stars") {
        options = options.stars(false);
    }
    if let Some(threshold) = matches.get_one::<f64>("significance") {
        options = options.significance(*threshold);
    }
    if let Some(digits) = matches.get_one::<usize>("digits") {
        options = options.digits(*digits);
    }
    if let Some(list) = matches.get_one::<String>("var-names") {
        options = options.var_names(list.split(',').map(str::trim));
    }
    if let Some(pairs) = matches.get_many::<String>("rename") {
        for pair in pairs {
            let (from, to) = parse_rename(pair)?;
            options = options.rename(from, to);
        }
    }
    if let Some(list) = matches.get_one::<String>("stats") {
        options = options.summary_stats(SummaryStat::parse_list(list)?);
    }
    if matches.get_flag("no-escape") {
        options = options.escape(false);
    }

    Ok(options)
}

/// Load every model file, preserving command-line order
fn load_all(matches: &ArgMatches) -> Result<Vec<ModelResults>, anyhow::Error> {
    let mut models = Vec::new();
    if let Some(paths) = matches.get_many::<String>("models") {
        for path in paths {
            let loaded =
                load_models(path).with_context(|| format!("loading models from {}", path))?;
            models.extend(loaded);
        }
    }
    Ok(models)
}

fn run(matches: &ArgMatches) -> Result<(), anyhow::Error> {
    let options = build_options(matches)?;
    let models = load_all(matches)?;
    tracing::debug!(models = models.len(), "building table");

    let output = matches.get_one::<String>("output");
    let format = matches
        .get_one::<String>("format")
        .map(|s| s.as_str())
        .unwrap_or("latex");

    if format == "json" {
        let table = build_table(&models, &options)?;
        let json = serde_json::to_string_pretty(&table)?;
        match output {
            Some(path) => std::fs::write(path, json + "\n")
                .with_context(|| format!("writing {}", path))?,
            None => println!("{}", json),
        }
        return Ok(());
    }

    match output {
        Some(path) => {
            write_table(Path::new(path), &models, &options)?;
            eprintln!(
                "{} {} model(s) to {}",
                style("Wrote").green().bold(),
                models.len(),
                path
            );
        }
        None => {
            let table = build_table(&models, &options)?;
            print!("{}", table.to_latex());
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();
    init_logging(matches.get_flag("verbose"));

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
