//! # CLI Module
//!
//! Argument parsing and command implementations.
//!
//! Each `cmd_*` function returns the rendered output instead of printing it,
//! so commands can be tested without capturing stdout.

use awssize_core::{Size, SizeError, breakdown};
use clap::{Parser, Subcommand};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

// =============================================================================
// ARGUMENTS
// =============================================================================

/// Compare cloud instance sizes within a family.
#[derive(Debug, Parser)]
#[command(name = "awssize", version)]
pub struct Cli {
    /// Emit JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the size of one or more instance classes.
    Parse {
        /// Instance classes (`db.r6g.large`) or bare sizes (`large`).
        #[arg(required = true)]
        classes: Vec<String>,
    },

    /// How many DST make one SRC.
    Ratio {
        /// The larger class or size.
        src: String,
        /// The class or size to express SRC in.
        dst: String,
    },

    /// List every known size and its weight.
    Table,

    /// Express a set of classes as a count of one reference size.
    Units {
        /// Reference size; use the smallest size of the family.
        #[arg(long, short)]
        unit: String,
        /// Instance classes to convert.
        #[arg(required = true)]
        classes: Vec<String>,
    },
}

// =============================================================================
// ERRORS
// =============================================================================

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Size(#[from] SizeError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type CliResult<T> = Result<T, CliError>;

// =============================================================================
// JSON SHAPES
// =============================================================================

#[derive(Debug, Serialize)]
struct ParsedClass<'a> {
    input: &'a str,
    size: Size,
    weight: u32,
}

#[derive(Debug, Serialize)]
struct RatioReport {
    src: Size,
    dst: Size,
    ratio: u32,
}

#[derive(Debug, Serialize)]
struct TableRow {
    name: Size,
    weight: u32,
}

fn to_json<T: Serialize>(value: &T) -> CliResult<String> {
    let mut out = serde_json::to_string_pretty(value)?;
    out.push('\n');
    Ok(out)
}

// =============================================================================
// COMMANDS
// =============================================================================

/// Dispatch a parsed command line.
pub fn run(cli: &Cli) -> CliResult<String> {
    match &cli.command {
        Command::Parse { classes } => cmd_parse(classes, cli.json),
        Command::Ratio { src, dst } => cmd_ratio(src, dst, cli.json),
        Command::Table => cmd_table(cli.json),
        Command::Units { unit, classes } => cmd_units(unit, classes, cli.json),
    }
}

pub fn cmd_parse(classes: &[String], json: bool) -> CliResult<String> {
    let mut parsed = Vec::with_capacity(classes.len());
    for class in classes {
        let size = Size::parse(class)?;
        debug!(input = %class, size = %size, "parsed size class");
        parsed.push(ParsedClass {
            input: class,
            size,
            weight: size.weight(),
        });
    }

    if json {
        return to_json(&parsed);
    }

    let mut output = String::new();
    for p in &parsed {
        output.push_str(&format!("{}: {} (weight {})\n", p.input, p.size, p.weight));
    }
    Ok(output)
}

pub fn cmd_ratio(src: &str, dst: &str, json: bool) -> CliResult<String> {
    let src = Size::parse(src)?;
    let dst = Size::parse(dst)?;
    let ratio = src.ratio(dst)?;
    debug!(%src, %dst, ratio, "computed ratio");

    if json {
        return to_json(&RatioReport { src, dst, ratio });
    }
    Ok(format!("one {src} equals {ratio} {dst}\n"))
}

pub fn cmd_table(json: bool) -> CliResult<String> {
    let rows: Vec<TableRow> = Size::iter()
        .map(|size| TableRow {
            name: size,
            weight: size.weight(),
        })
        .collect();

    if json {
        return to_json(&rows);
    }

    let mut output = String::new();
    for row in &rows {
        output.push_str(&format!("{:<10} {:>5}\n", row.name, row.weight));
    }
    Ok(output)
}

pub fn cmd_units(unit: &str, classes: &[String], json: bool) -> CliResult<String> {
    let unit = Size::parse(unit)?;
    let report = breakdown(classes, unit)?;
    debug!(unit = %unit, classes = classes.len(), total = report.total, "normalized units");

    if json {
        return to_json(&report);
    }

    let mut output = String::new();
    for entry in &report.entries {
        output.push_str(&format!("{:<24} {:>6} {}\n", entry.class, entry.units, unit));
    }
    output.push_str(&format!("total: {} {}\n", report.total, unit));
    Ok(output)
}

// =============================================================================
// TESTS
// =============================================================================
