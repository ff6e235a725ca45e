//! sheetwrap CLI - range, column and date serial conversion tool

mod logging;

use anyhow::{bail, Context, Result};
use chrono::{NaiveDate, NaiveDateTime};
use clap::{Parser, Subcommand};
use sheetwrap::prelude::*;
use sheetwrap::serial::{datetime_to_serial, serial_to_datetime};

#[derive(Parser)]
#[command(name = "sheetwrap")]
#[command(author, version, about = "Sheet range and value conversion tool")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the coordinates and both notations of a range
    Range {
        /// Range in letter (Sheet1!B2:D10) or numeric (Sheet1!R2C2:R10C4) notation
        range: String,
    },

    /// Convert a column number to letters or letters to a number
    #[command(alias = "col")]
    Column {
        /// Column number (e.g., 28) or letters (e.g., AB)
        column: String,
    },

    /// Convert a date serial to a date-time
    Serial {
        /// Date serial (days since 1899-12-30)
        #[arg(allow_negative_numbers = true)]
        serial: f64,
    },

    /// Convert a date-time to a date serial
    Date {
        /// Date-time as "YYYY-MM-DD HH:MM:SS" or "YYYY-MM-DD"
        datetime: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    match cli.command {
        Commands::Range { range } => show_range(&range),
        Commands::Column { column } => {
            println!("{}", convert_column(&column)?);
            Ok(())
        }
        Commands::Serial { serial } => {
            let datetime = serial_to_datetime(serial)
                .with_context(|| format!("Serial {} is outside the supported date range", serial))?;
            println!("{}", datetime.format("%Y-%m-%d %H:%M:%S%.3f"));
            Ok(())
        }
        Commands::Date { datetime } => {
            let datetime = parse_datetime(&datetime)?;
            println!("{}", datetime_to_serial(&datetime));
            Ok(())
        }
    }
}

fn show_range(input: &str) -> Result<()> {
    let range: RangeAddress = input
        .parse()
        .with_context(|| format!("Failed to parse range '{}'", input))?;
    tracing::debug!(numeric = range.numeric_notation(), "parsed range");

    if range.tab_name().is_empty() {
        println!("Tab:      (none)");
    } else {
        println!("Tab:      {}", range.tab_name());
    }
    println!(
        "Start:    row {}, column {} ({})",
        range.start_row(),
        range.start_column(),
        column_to_letters(range.start_column())
    );
    match (range.end_row(), range.end_column()) {
        (Some(row), Some(column)) => println!(
            "End:      row {}, column {} ({})",
            row,
            column,
            column_to_letters(column)
        ),
        (None, Some(column)) => println!(
            "End:      column {} ({})",
            column,
            column_to_letters(column)
        ),
        (Some(row), None) => println!("End:      row {}", row),
        (None, None) => println!("End:      (single cell)"),
    }
    println!("Letter:   {}", range.letter_notation().unwrap_or("(unavailable)"));
    println!("Numeric:  {}", range.numeric_notation());

    Ok(())
}

/// Numbers convert to letters, anything else is read as letters
fn convert_column(input: &str) -> Result<String> {
    let input = input.trim();
    if let Ok(number) = input.parse::<u32>() {
        if number == 0 {
            bail!("Column numbers start at 1");
        }
        return Ok(column_to_letters(number));
    }

    let number = letters_to_column(input)
        .with_context(|| format!("'{}' is neither a column number nor column letters", input))?;
    Ok(number.to_string())
}

fn parse_datetime(input: &str) -> Result<NaiveDateTime> {
    let input = input.trim();
    if let Ok(datetime) = NaiveDateTime::parse_from_str(input, "%Y-%m-%d %H:%M:%S") {
        return Ok(datetime);
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .with_context(|| format!("Failed to parse date '{}'", input))
}
