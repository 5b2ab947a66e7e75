pub mod asset;
pub mod income;
pub mod presets;
pub mod schema;

use anyhow::Context;
use clap::Args;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

/// Output flags shared by the calculation commands
#[derive(Args, Debug)]
pub struct OutputArgs {
    /// Output as CSV instead of formatted table
    #[arg(long, conflicts_with = "json")]
    csv: bool,

    /// Output as JSON instead of formatted table
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Csv,
    Json,
}

impl OutputArgs {
    pub fn format(&self) -> OutputFormat {
        if self.csv {
            OutputFormat::Csv
        } else if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Table
        }
    }
}

/// Read CSV records from a file (or stdin with "-")
pub fn read_records<T: DeserializeOwned>(path: &Path) -> anyhow::Result<Vec<T>> {
    let mut buffer = Vec::new();
    if path.as_os_str() == "-" {
        io::stdin().lock().read_to_end(&mut buffer)?;
    } else {
        File::open(path)
            .with_context(|| format!("failed to open {}", path.display()))?
            .read_to_end(&mut buffer)?;
    }

    if buffer.is_empty() {
        anyhow::bail!("No input received. Provide a non-empty CSV file or pipe data to stdin.");
    }

    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(buffer.as_slice());
    let records = rdr
        .deserialize()
        .collect::<Result<Vec<T>, _>>()
        .with_context(|| format!("invalid CSV in {}", path.display()))?;

    log::info!("Read {} csv records", records.len());
    Ok(records)
}

/// Read a JSON parameter file
pub fn read_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let file =
        File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let value = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("invalid parameters in {}", path.display()))?;
    Ok(value)
}

/// `None` for NaN and infinities
pub fn round_cents(amount: f64) -> Option<Decimal> {
    Decimal::from_f64_retain(amount).map(|d| d.round_dp(2))
}

/// Amount rounded to cents, e.g. "344.84"
pub fn format_amount(amount: f64) -> String {
    match round_cents(amount) {
        Some(d) => format!("{:.2}", d),
        None => amount.to_string(),
    }
}

/// Fraction as a percentage, e.g. 0.3697 -> "36.97%"
pub fn format_rate(rate: f64) -> String {
    match Decimal::from_f64_retain(rate * 100.0) {
        Some(d) => format!("{}%", d.round_dp(2).normalize()),
        None => rate.to_string(),
    }
}

pub fn print_table<R: Tabled>(rows: &[R]) {
    let table = Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Rows::new(1..)).with(Alignment::right()))
        .to_string();
    println!("{}", table);
}

pub fn write_csv<R: Serialize>(rows: &[R]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(io::stdout());
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
