use super::error::TaxError;

/// Calculate the tax on the deemed return of each asset value (box 3).
///
/// Only the share of an asset above `tax_free_amount` is taxed: the deemed
/// return `value * expected_return_rate` is scaled by
/// `(value - tax_free_amount) / value` before `tax_rate` is applied. Values at
/// or below the tax-free amount, and zero values, owe nothing.
///
/// Fails with [`TaxError::NegativeValue`] if any value is negative.
pub fn calculate_asset_tax(
    asset_value: &[f64],
    expected_return_rate: f64,
    tax_rate: f64,
    tax_free_amount: f64,
) -> Result<Vec<f64>, TaxError> {
    if asset_value.iter().any(|v| *v < 0.0) {
        return Err(TaxError::NegativeValue("asset_value"));
    }

    let taxes = asset_value
        .iter()
        .map(|&value| {
            let tax = asset_tax(value, expected_return_rate, tax_rate, tax_free_amount);
            log::debug!("asset value {} -> tax {}", value, tax);
            tax
        })
        .collect();

    Ok(taxes)
}

fn asset_tax(value: f64, expected_return_rate: f64, tax_rate: f64, tax_free_amount: f64) -> f64 {
    // Nothing above the threshold to apportion
    if value == 0.0 {
        return 0.0;
    }
    if value.is_nan() {
        return value;
    }

    let taxable_return = value * expected_return_rate;
    let basis_rate = (value - tax_free_amount) / value;

    if basis_rate > 0.0 {
        taxable_return * basis_rate * tax_rate
    } else {
        0.0
    }
}
