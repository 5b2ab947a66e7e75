//! Income command - box 1 progressive income tax

use super::{format_amount, format_rate, print_json, print_table, read_json, read_records, write_csv};
use super::{OutputArgs, OutputFormat};
use clap::{Args, ValueEnum};
use fisk::tax::{IncomePreset, IncomeTaxParameters, TAX_YEAR};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tabled::Tabled;

#[derive(Args, Debug)]
pub struct IncomeCommand {
    /// Taxable incomes to assess (comma-separated or repeated)
    #[arg(short, long = "income", value_delimiter = ',', allow_negative_numbers = true)]
    incomes: Vec<f64>,

    /// CSV file with an `income` column and optional `id` column ("-" for stdin)
    #[arg(short, long, conflicts_with = "incomes")]
    file: Option<PathBuf>,

    /// Built-in 2024 parameter set
    #[arg(short, long, value_enum, default_value_t = IncomePresetArg::Standard)]
    preset: IncomePresetArg,

    /// JSON file with bands and rates
    #[arg(long, conflicts_with_all = ["bands", "rates", "preset"])]
    params: Option<PathBuf>,

    /// Band thresholds in ascending order, "inf" for an open top band
    #[arg(
        long,
        value_delimiter = ',',
        allow_negative_numbers = true,
        requires = "rates",
        conflicts_with = "preset"
    )]
    bands: Vec<f64>,

    /// Rate per band (fractions), one fewer than the bands
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true, requires = "bands")]
    rates: Vec<f64>,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum IncomePresetArg {
    /// Below state pension (AOW) age
    #[default]
    Standard,
    /// At state pension (AOW) age, born 1946 or later
    StatePension,
}

impl From<IncomePresetArg> for IncomePreset {
    fn from(arg: IncomePresetArg) -> Self {
        match arg {
            IncomePresetArg::Standard => IncomePreset::Standard,
            IncomePresetArg::StatePension => IncomePreset::StatePension,
        }
    }
}

/// Row of an income CSV input file
#[derive(Debug, Deserialize)]
struct IncomeRecord {
    #[serde(default)]
    id: Option<String>,
    income: f64,
}

/// Row for the income tax table output
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct IncomeRow {
    #[tabled(rename = "#")]
    pub row_num: usize,

    #[tabled(rename = "Id")]
    pub id: String,

    #[tabled(rename = "Taxable Income")]
    pub income: String,

    #[tabled(rename = "Tax")]
    pub tax: String,

    #[tabled(rename = "Effective Rate")]
    pub effective_rate: String,
}

#[derive(Debug, Serialize)]
struct IncomeReport {
    tax_year: i32,
    parameters: IncomeTaxParameters,
    rows: Vec<IncomeRow>,
    total_tax: String,
}

impl IncomeCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let parameters = self.parameters()?;
        let records = self.records()?;

        let incomes: Vec<f64> = records.iter().map(|r| r.income).collect();
        let taxes = parameters.calculate(&incomes)?;
        let total: f64 = taxes.iter().sum();

        let rows: Vec<IncomeRow> = records
            .into_iter()
            .zip(&taxes)
            .enumerate()
            .map(|(i, (record, tax))| IncomeRow {
                row_num: i + 1,
                id: record.id.unwrap_or_default(),
                income: format_amount(record.income),
                tax: format_amount(*tax),
                effective_rate: effective_rate(record.income, *tax),
            })
            .collect();

        match self.output.format() {
            OutputFormat::Table => {
                print_table(&rows);
                println!("Total tax: {}", format_amount(total));
                Ok(())
            }
            OutputFormat::Csv => write_csv(&rows),
            OutputFormat::Json => print_json(&IncomeReport {
                tax_year: TAX_YEAR,
                parameters,
                rows,
                total_tax: format_amount(total),
            }),
        }
    }

    fn parameters(&self) -> anyhow::Result<IncomeTaxParameters> {
        let parameters = if let Some(path) = &self.params {
            read_json(path)?
        } else if !self.bands.is_empty() {
            IncomeTaxParameters {
                bands: self.bands.clone(),
                rates: self.rates.clone(),
            }
        } else {
            let preset = IncomePreset::from(self.preset);
            log::info!("Using {} {} parameters", TAX_YEAR, preset.name());
            preset.parameters()
        };

        log::debug!("Income tax parameters: {:?}", parameters);
        Ok(parameters)
    }

    fn records(&self) -> anyhow::Result<Vec<IncomeRecord>> {
        if let Some(path) = &self.file {
            return read_records(path);
        }
        if self.incomes.is_empty() {
            anyhow::bail!("No incomes given. Use --income or --file.");
        }
        Ok(self
            .incomes
            .iter()
            .map(|&income| IncomeRecord { id: None, income })
            .collect())
    }
}

fn effective_rate(income: f64, tax: f64) -> String {
    if income > 0.0 {
        format_rate(tax / income)
    } else {
        "-".to_string()
    }
}
