//! sheetref CLI - inspect and derive cell references

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser, Subcommand};
use sheetref_core::{Area, Coordinate, SheetLimits, MAX_COL, MAX_ROW};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sheetref")]
#[command(
    author,
    version,
    about = "Parse, format and derive spreadsheet cell and range references"
)]
struct Cli {
    /// Last legal row of the sheet (default: 1048576)
    #[arg(long, global = true, value_name = "N")]
    max_row: Option<u32>,

    /// Last legal column number of the sheet (default: 16384, XFD)
    #[arg(long, global = true, value_name = "N")]
    max_col: Option<u16>,

    /// Log more (-v debug, -vv trace); SHEETREF_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the corners and size of a reference
    Parse {
        /// Cell or range, e.g. B2 or B2:D4
        reference: String,
    },

    /// Check whether a cell lies inside an area
    Contains {
        /// Area, e.g. A1:C3
        area: String,
        /// Cell, e.g. B2
        cell: String,
    },

    /// Print the area directly below another one
    Below {
        area: String,

        /// Number of rows (default: down to the last sheet row)
        #[arg(short, long)]
        rows: Option<u32>,
    },

    /// Print the area directly to the right of another one
    Right {
        area: String,

        /// Number of columns (default: up to the last sheet column)
        #[arg(short, long)]
        cols: Option<u16>,
    },

    /// Take the bottom rows or rightmost columns of an area
    #[command(group(ArgGroup::new("edge").required(true).args(["bottom", "right"])))]
    Slice {
        area: String,

        /// Number of rows to keep from the bottom
        #[arg(long)]
        bottom: Option<u32>,

        /// Number of columns to keep from the right
        #[arg(long)]
        right: Option<u16>,
    },

    /// Build an area from two cells given in either order
    Span {
        a: String,
        b: String,

        /// Order rows and columns independently (bounding box)
        #[arg(long)]
        bounding: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let limits = sheet_limits(cli.max_row, cli.max_col)?;
    let output = run(&cli.command, &limits)?;
    println!("{}", output);

    Ok(())
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_env("SHEETREF_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn sheet_limits(max_row: Option<u32>, max_col: Option<u16>) -> Result<SheetLimits> {
    SheetLimits::with_max(max_row.unwrap_or(MAX_ROW), max_col.unwrap_or(MAX_COL))
        .context("Invalid --max-row/--max-col")
}

fn run(command: &Commands, limits: &SheetLimits) -> Result<String> {
    match command {
        Commands::Parse { reference } => describe(&parse_area(reference, limits)?),
        Commands::Contains { area, cell } => {
            let area = parse_area(area, limits)?;
            let cell = parse_cell(cell, limits)?;
            Ok(area.contains(cell).to_string())
        }
        Commands::Below { area, rows } => {
            let area = parse_area(area, limits)?;
            let below = match rows {
                Some(n) => area.below_range_rows_in(*n, limits),
                None => area.below_range_in(limits),
            };
            Ok(below
                .with_context(|| format!("No area below '{}'", area))?
                .to_string())
        }
        Commands::Right { area, cols } => {
            let area = parse_area(area, limits)?;
            let right = match cols {
                Some(n) => area.right_range_cols_in(*n, limits),
                None => area.right_range_in(limits),
            };
            Ok(right
                .with_context(|| format!("No area right of '{}'", area))?
                .to_string())
        }
        Commands::Slice {
            area,
            bottom,
            right,
        } => {
            let area = parse_area(area, limits)?;
            let slice = match (bottom, right) {
                (Some(rows), _) => area.slice_from_bottom(*rows),
                (None, Some(cols)) => area.slice_from_right(*cols),
                (None, None) => anyhow::bail!("One of --bottom or --right is required"),
            };
            Ok(slice
                .with_context(|| format!("Cannot slice '{}'", area))?
                .to_string())
        }
        Commands::Span { a, b, bounding } => {
            let a = parse_cell(a, limits)?;
            let b = parse_cell(b, limits)?;
            let area = if *bounding {
                Area::bounding(&a, &b)
            } else {
                Area::from_addresses(&a, &b)
            };
            if !area.is_normalized() {
                tracing::warn!(
                    "{} and {} are crossed corners; use --bounding for the enclosing area",
                    a,
                    b
                );
            }
            Ok(area.to_string())
        }
    }
}

fn parse_area(text: &str, limits: &SheetLimits) -> Result<Area> {
    Area::parse_in(text, limits).with_context(|| format!("Failed to parse area '{}'", text))
}

fn parse_cell(text: &str, limits: &SheetLimits) -> Result<Coordinate> {
    Coordinate::parse_in(text, limits).with_context(|| format!("Failed to parse cell '{}'", text))
}

/// Multi-line summary printed by `sheetref parse`
fn describe(area: &Area) -> Result<String> {
    use std::fmt::Write;

    let mut out = String::new();
    writeln!(out, "reference: {}", area)?;
    for (label, corner) in [("first", area.first()), ("last", area.last())] {
        writeln!(
            out,
            "{:<10} {} (row {}, column {})",
            format!("{}:", label),
            corner,
            corner.row,
            corner.column
        )?;
    }
    write!(
        out,
        "size:      {} rows x {} columns ({} cells)",
        area.height(),
        area.width(),
        area.cell_count()
    )?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    fn exec(args: &[&str]) -> Result<String> {
        let cli = Cli::try_parse_from(std::iter::once("sheetref").chain(args.iter().copied()))?;
        let limits = sheet_limits(cli.max_row, cli.max_col)?;
        run(&cli.command, &limits)
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_command() {
        assert_eq!(
            exec(&["parse", "B2:D4"]).unwrap(),
            "reference: B2:D4\n\
             first:     B2 (row 2, column 2)\n\
             last:      D4 (row 4, column 4)\n\
             size:      3 rows x 3 columns (9 cells)"
        );
        assert!(exec(&["parse", "D4:B2"]).is_err());
    }

    #[test]
    fn test_contains_command() {
        assert_eq!(exec(&["contains", "A1:C3", "B2"]).unwrap(), "true");
        assert_eq!(exec(&["contains", "A1:C3", "D1"]).unwrap(), "false");
    }

    #[test]
    fn test_below_and_right_commands() {
        assert_eq!(exec(&["below", "A1:C3"]).unwrap(), "A4:C1048576");
        assert_eq!(exec(&["below", "A1:C3", "--rows", "2"]).unwrap(), "A4:C5");
        assert_eq!(exec(&["right", "A1:C3", "-c", "1"]).unwrap(), "D1:D3");
        assert!(exec(&["below", "A1048576"]).is_err());
    }

    #[test]
    fn test_slice_command() {
        assert_eq!(exec(&["slice", "A1:C5", "--bottom", "2"]).unwrap(), "A4:C5");
        assert_eq!(exec(&["slice", "A1:C5", "--right", "1"]).unwrap(), "C1:C5");
        assert!(exec(&["slice", "A1:C5"]).is_err());
        assert!(exec(&["slice", "A1:C5", "--bottom", "1", "--right", "1"]).is_err());
        assert!(exec(&["slice", "A1:C5", "--bottom", "0"]).is_err());
    }

    #[test]
    fn test_span_command() {
        assert_eq!(exec(&["span", "C3", "A1"]).unwrap(), "A1:C3");
        assert_eq!(exec(&["span", "E1", "A3"]).unwrap(), "A3:E1");
        assert_eq!(exec(&["span", "E1", "A3", "--bounding"]).unwrap(), "A1:E3");
    }

    #[test]
    fn test_custom_limits() {
        assert_eq!(
            exec(&["--max-row", "100", "--max-col", "10", "below", "A1:B2"]).unwrap(),
            "A3:B100"
        );
        assert_eq!(exec(&["right", "A1", "--max-col", "3"]).unwrap(), "B1:C1");
        assert!(exec(&["parse", "K1", "--max-col", "10"]).is_err());
        assert!(exec(&["--max-row", "0", "parse", "A1"]).is_err());
    }
}
