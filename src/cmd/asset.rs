//! Asset command - box 3 tax on the deemed return of asset values

use super::{format_amount, print_json, print_table, read_json, read_records, write_csv};
use super::{OutputArgs, OutputFormat};
use clap::{Args, ValueEnum};
use fisk::tax::{AssetPreset, AssetTaxParameters, TAX_YEAR};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tabled::Tabled;

#[derive(Args, Debug)]
pub struct AssetCommand {
    /// Asset values to assess (comma-separated or repeated)
    #[arg(short = 'v', long = "value", value_delimiter = ',', allow_negative_numbers = true)]
    values: Vec<f64>,

    /// CSV file with a `value` column and optional `id` column ("-" for stdin)
    #[arg(short, long, conflicts_with = "values")]
    file: Option<PathBuf>,

    /// Built-in 2024 parameter set
    #[arg(short, long, value_enum, default_value_t = AssetPresetArg::Savings)]
    preset: AssetPresetArg,

    /// JSON file with expected_return_rate, tax_rate and tax_free_amount
    #[arg(long, conflicts_with = "preset")]
    params: Option<PathBuf>,

    /// Override the deemed return rate (fraction, e.g. 0.0103)
    #[arg(long)]
    return_rate: Option<f64>,

    /// Override the tax rate (fraction, e.g. 0.36)
    #[arg(long)]
    tax_rate: Option<f64>,

    /// Override the tax-free amount
    #[arg(long)]
    tax_free: Option<f64>,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum AssetPresetArg {
    /// Bank savings
    #[default]
    Savings,
    /// Investments and other assets
    OtherAssets,
}

impl From<AssetPresetArg> for AssetPreset {
    fn from(arg: AssetPresetArg) -> Self {
        match arg {
            AssetPresetArg::Savings => AssetPreset::Savings,
            AssetPresetArg::OtherAssets => AssetPreset::OtherAssets,
        }
    }
}

/// Row of an asset CSV input file
#[derive(Debug, Deserialize)]
struct AssetRecord {
    #[serde(default)]
    id: Option<String>,
    value: f64,
}

/// Row for the asset tax table output
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct AssetRow {
    #[tabled(rename = "#")]
    pub row_num: usize,

    #[tabled(rename = "Id")]
    pub id: String,

    #[tabled(rename = "Asset Value")]
    pub value: String,

    #[tabled(rename = "Tax")]
    pub tax: String,
}

#[derive(Debug, Serialize)]
struct AssetReport {
    tax_year: i32,
    parameters: AssetTaxParameters,
    rows: Vec<AssetRow>,
    total_tax: String,
}

impl AssetCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let parameters = self.parameters()?;
        let records = self.records()?;

        let values: Vec<f64> = records.iter().map(|r| r.value).collect();
        let taxes = parameters.calculate(&values)?;
        let total: f64 = taxes.iter().sum();

        let rows: Vec<AssetRow> = records
            .into_iter()
            .zip(&taxes)
            .enumerate()
            .map(|(i, (record, tax))| AssetRow {
                row_num: i + 1,
                id: record.id.unwrap_or_default(),
                value: format_amount(record.value),
                tax: format_amount(*tax),
            })
            .collect();

        match self.output.format() {
            OutputFormat::Table => {
                print_table(&rows);
                println!("Total tax: {}", format_amount(total));
                Ok(())
            }
            OutputFormat::Csv => write_csv(&rows),
            OutputFormat::Json => print_json(&AssetReport {
                tax_year: TAX_YEAR,
                parameters,
                rows,
                total_tax: format_amount(total),
            }),
        }
    }

    /// Preset or parameter file, with any individual overrides applied on top
    fn parameters(&self) -> anyhow::Result<AssetTaxParameters> {
        let mut parameters = match &self.params {
            Some(path) => read_json(path)?,
            None => {
                let preset = AssetPreset::from(self.preset);
                log::info!("Using {} {} parameters", TAX_YEAR, preset.name());
                preset.parameters()
            }
        };

        if let Some(rate) = self.return_rate {
            parameters.expected_return_rate = rate;
        }
        if let Some(rate) = self.tax_rate {
            parameters.tax_rate = rate;
        }
        if let Some(amount) = self.tax_free {
            parameters.tax_free_amount = amount;
        }

        log::debug!("Asset tax parameters: {:?}", parameters);
        Ok(parameters)
    }

    fn records(&self) -> anyhow::Result<Vec<AssetRecord>> {
        if let Some(path) = &self.file {
            return read_records(path);
        }
        if self.values.is_empty() {
            anyhow::bail!("No asset values given. Use --value or --file.");
        }
        Ok(self
            .values
            .iter()
            .map(|&value| AssetRecord { id: None, value })
            .collect())
    }
}
