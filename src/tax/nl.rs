use super::asset::calculate_asset_tax;
use super::error::TaxError;
use super::income::calculate_income_tax;
use schemars::JsonSchema;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Tax year the built-in presets were published for (the Dutch tax year is
/// the calendar year)
pub const TAX_YEAR: i32 = 2024;

/// Box 3 parameters: deemed return on assets above a tax-free amount
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AssetTaxParameters {
    /// Deemed (forfaitair) return rate as a fraction, e.g. 0.0103
    pub expected_return_rate: f64,
    /// Tax rate applied to the deemed return as a fraction, e.g. 0.36
    pub tax_rate: f64,
    /// Asset value exempt from tax (heffingsvrij vermogen)
    pub tax_free_amount: f64,
}

impl AssetTaxParameters {
    /// Bank savings, 2024
    pub fn savings_2024() -> Self {
        AssetTaxParameters {
            expected_return_rate: 0.0103,
            tax_rate: 0.36,
            tax_free_amount: 57_000.0,
        }
    }

    /// Other assets (investments, property other than the main home), 2024
    pub fn other_assets_2024() -> Self {
        AssetTaxParameters {
            expected_return_rate: 0.0604,
            tax_rate: 0.36,
            tax_free_amount: 57_000.0,
        }
    }

    pub fn calculate(&self, asset_value: &[f64]) -> Result<Vec<f64>, TaxError> {
        calculate_asset_tax(
            asset_value,
            self.expected_return_rate,
            self.tax_rate,
            self.tax_free_amount,
        )
    }
}

/// Box 1 parameters: progressive bands with one rate per band
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct IncomeTaxParameters {
    /// Band thresholds in ascending order; "inf" leaves the top band open
    #[serde(serialize_with = "serialize_bands", deserialize_with = "deserialize_bands")]
    #[schemars(with = "Vec<Threshold>")]
    pub bands: Vec<f64>,
    /// Rate per band as a fraction, one fewer than there are bands
    pub rates: Vec<f64>,
}

impl IncomeTaxParameters {
    /// Below state pension (AOW) age, 2024
    pub fn standard_2024() -> Self {
        IncomeTaxParameters {
            bands: vec![0.0, 75_518.0, f64::INFINITY],
            rates: vec![0.3697, 0.495],
        }
    }

    /// At state pension (AOW) age and born in 1946 or later, 2024
    pub fn state_pension_2024() -> Self {
        IncomeTaxParameters {
            bands: vec![0.0, 38_098.0, 75_518.0, f64::INFINITY],
            rates: vec![0.1907, 0.3697, 0.495],
        }
    }

    pub fn calculate(&self, taxable_income: &[f64]) -> Result<Vec<f64>, TaxError> {
        calculate_income_tax(taxable_income, &self.bands, &self.rates)
    }
}

/// Built-in box 3 parameter sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AssetPreset {
    #[default]
    Savings,
    OtherAssets,
}

impl AssetPreset {
    pub const ALL: [AssetPreset; 2] = [AssetPreset::Savings, AssetPreset::OtherAssets];

    pub fn name(&self) -> &'static str {
        match self {
            AssetPreset::Savings => "savings",
            AssetPreset::OtherAssets => "other-assets",
        }
    }

    pub fn parameters(&self) -> AssetTaxParameters {
        match self {
            AssetPreset::Savings => AssetTaxParameters::savings_2024(),
            AssetPreset::OtherAssets => AssetTaxParameters::other_assets_2024(),
        }
    }
}

/// Built-in box 1 parameter sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IncomePreset {
    #[default]
    Standard,
    StatePension,
}

impl IncomePreset {
    pub const ALL: [IncomePreset; 2] = [IncomePreset::Standard, IncomePreset::StatePension];

    pub fn name(&self) -> &'static str {
        match self {
            IncomePreset::Standard => "standard",
            IncomePreset::StatePension => "state-pension",
        }
    }

    pub fn parameters(&self) -> IncomeTaxParameters {
        match self {
            IncomePreset::Standard => IncomeTaxParameters::standard_2024(),
            IncomePreset::StatePension => IncomeTaxParameters::state_pension_2024(),
        }
    }
}

/// A band threshold as written in JSON, which has no literal for infinity
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
enum Threshold {
    Amount(f64),
    /// "inf" or "infinity"
    Unbounded(String),
}

impl Threshold {
    fn into_f64(self) -> Result<f64, String> {
        match self {
            Threshold::Amount(amount) => Ok(amount),
            Threshold::Unbounded(s) => match s.to_lowercase().as_str() {
                "inf" | "infinity" => Ok(f64::INFINITY),
                _ => Err(format!("invalid tax band threshold '{s}'")),
            },
        }
    }
}

impl From<f64> for Threshold {
    fn from(amount: f64) -> Self {
        if amount == f64::INFINITY {
            Threshold::Unbounded("inf".to_string())
        } else {
            Threshold::Amount(amount)
        }
    }
}

fn serialize_bands<S>(bands: &[f64], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_seq(bands.iter().map(|b| Threshold::from(*b)))
}

fn deserialize_bands<'de, D>(deserializer: D) -> Result<Vec<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Vec::<Threshold>::deserialize(deserializer)?
        .into_iter()
        .map(|t| t.into_f64().map_err(de::Error::custom))
        .collect()
}
