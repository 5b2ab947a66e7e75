//! Dutch 2024 tax calculations: box 3 tax on the deemed return of assets and
//! box 1 progressive income tax.
//!
//! Both calculations are pure functions over slices, returning one tax amount
//! per input entry or a [`TaxError`] when the input is rejected.

pub mod tax;

pub use tax::{
    calculate_asset_tax, calculate_income_tax, AssetPreset, AssetTaxParameters, IncomePreset,
    IncomeTaxParameters, TaxError,
};
