pub mod asset;
pub mod error;
pub mod income;
pub mod nl;

pub use asset::calculate_asset_tax;
pub use error::TaxError;
pub use income::calculate_income_tax;
pub use nl::{AssetPreset, AssetTaxParameters, IncomePreset, IncomeTaxParameters, TAX_YEAR};
