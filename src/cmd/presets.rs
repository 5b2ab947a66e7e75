//! Presets command - list the built-in parameter sets

use super::{format_amount, format_rate, print_json, print_table};
use clap::Args;
use fisk::tax::{AssetPreset, AssetTaxParameters, IncomePreset, IncomeTaxParameters, TAX_YEAR};
use serde::Serialize;
use tabled::Tabled;

#[derive(Args, Debug)]
pub struct PresetsCommand {
    /// Output as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Tabled)]
struct AssetPresetRow {
    #[tabled(rename = "Preset")]
    name: &'static str,
    #[tabled(rename = "Deemed Return")]
    expected_return_rate: String,
    #[tabled(rename = "Tax Rate")]
    tax_rate: String,
    #[tabled(rename = "Tax-Free Amount")]
    tax_free_amount: String,
}

#[derive(Debug, Tabled)]
struct IncomeBandRow {
    #[tabled(rename = "Preset")]
    name: &'static str,
    #[tabled(rename = "From")]
    from: String,
    #[tabled(rename = "To")]
    to: String,
    #[tabled(rename = "Rate")]
    rate: String,
}

#[derive(Debug, Serialize)]
struct PresetsOutput {
    tax_year: i32,
    asset: Vec<NamedPreset<AssetTaxParameters>>,
    income: Vec<NamedPreset<IncomeTaxParameters>>,
}

#[derive(Debug, Serialize)]
struct NamedPreset<P> {
    name: &'static str,
    #[serde(flatten)]
    parameters: P,
}

impl PresetsCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        if self.json {
            return print_json(&PresetsOutput {
                tax_year: TAX_YEAR,
                asset: AssetPreset::ALL
                    .iter()
                    .map(|p| NamedPreset {
                        name: p.name(),
                        parameters: p.parameters(),
                    })
                    .collect(),
                income: IncomePreset::ALL
                    .iter()
                    .map(|p| NamedPreset {
                        name: p.name(),
                        parameters: p.parameters(),
                    })
                    .collect(),
            });
        }

        println!();
        println!("ASSET TAX (BOX 3) {}", TAX_YEAR);
        let asset_rows: Vec<AssetPresetRow> = AssetPreset::ALL
            .iter()
            .map(|preset| {
                let p = preset.parameters();
                AssetPresetRow {
                    name: preset.name(),
                    expected_return_rate: format_rate(p.expected_return_rate),
                    tax_rate: format_rate(p.tax_rate),
                    tax_free_amount: format_amount(p.tax_free_amount),
                }
            })
            .collect();
        print_table(&asset_rows);

        println!();
        println!("INCOME TAX (BOX 1) {}", TAX_YEAR);
        let income_rows: Vec<IncomeBandRow> = IncomePreset::ALL
            .iter()
            .flat_map(|preset| band_rows(preset.name(), &preset.parameters()))
            .collect();
        print_table(&income_rows);

        Ok(())
    }
}

fn band_rows(name: &'static str, parameters: &IncomeTaxParameters) -> Vec<IncomeBandRow> {
    parameters
        .bands
        .windows(2)
        .zip(&parameters.rates)
        .map(|(band, rate)| IncomeBandRow {
            name,
            from: format_amount(band[0]),
            to: if band[1].is_infinite() {
                "-".to_string()
            } else {
                format_amount(band[1])
            },
            rate: format_rate(*rate),
        })
        .collect()
}
