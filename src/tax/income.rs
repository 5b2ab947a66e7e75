use super::error::TaxError;

/// Calculate progressive income tax for each taxable income (box 1).
///
/// `tax_bands` holds the band thresholds in ascending order and `tax_rates[i]`
/// applies to the part of an income between `tax_bands[i]` and
/// `tax_bands[i + 1]`. The top band may be left open by ending `tax_bands`
/// with `f64::INFINITY`.
///
/// Inputs are checked in a fixed order and the first failure is returned:
/// - [`TaxError::UnsortedTaxBands`] if the bands ever decrease
/// - [`TaxError::InvalidTaxRates`] unless there is exactly one rate per band interval
/// - [`TaxError::NegativeValue`] if an income or a band is negative
///
/// ```
/// let tax = fisk::calculate_income_tax(
///     &[10000.0, 30000.0, 50000.0],
///     &[0.0, 20000.0, 40000.0, 60000.0],
///     &[0.1, 0.2, 0.3],
/// )
/// .unwrap();
/// assert_eq!(tax.len(), 3);
/// assert!((tax[2] - 9000.0).abs() < 1e-6);
/// ```
pub fn calculate_income_tax(
    taxable_income: &[f64],
    tax_bands: &[f64],
    tax_rates: &[f64],
) -> Result<Vec<f64>, TaxError> {
    validate(taxable_income, tax_bands, tax_rates)?;

    let taxes = taxable_income
        .iter()
        .map(|&income| {
            let tax = income_tax(income, tax_bands, tax_rates);
            log::debug!("income {} -> tax {}", income, tax);
            tax
        })
        .collect();

    Ok(taxes)
}

fn validate(taxable_income: &[f64], tax_bands: &[f64], tax_rates: &[f64]) -> Result<(), TaxError> {
    if !tax_bands.windows(2).all(|pair| pair[0] <= pair[1]) {
        return Err(TaxError::UnsortedTaxBands);
    }

    if tax_bands.len().checked_sub(1) != Some(tax_rates.len()) {
        return Err(TaxError::InvalidTaxRates {
            bands: tax_bands.len(),
            rates: tax_rates.len(),
        });
    }

    if taxable_income.iter().any(|i| *i < 0.0) {
        return Err(TaxError::NegativeValue("taxable_income"));
    }
    if tax_bands.iter().any(|b| *b < 0.0) {
        return Err(TaxError::NegativeValue("tax_bands"));
    }

    Ok(())
}

fn income_tax(income: f64, tax_bands: &[f64], tax_rates: &[f64]) -> f64 {
    // f64::max would clamp NaN to the lower bound
    if income.is_nan() {
        return income;
    }

    tax_bands
        .windows(2)
        .zip(tax_rates)
        .map(|(band, rate)| {
            let (lower, upper) = (band[0], band[1]);
            let amount_in_band = income.max(lower).min(upper) - lower;
            rate * amount_in_band
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_almost_eq(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len(), "{actual:?} vs {expected:?}");
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-6, "{actual:?} vs {expected:?}");
        }
    }

    #[test]
    fn single_tax_band() {
        let tax = calculate_income_tax(&[5000.0, 15000.0, 25000.0], &[0.0, 30000.0], &[0.1]).unwrap();
        assert_almost_eq(&tax, &[500.0, 1500.0, 2500.0]);
    }

    #[test]
    fn multiple_tax_bands() {
        let tax = calculate_income_tax(
            &[10000.0, 30000.0, 50000.0],
            &[0.0, 20000.0, 40000.0, 60000.0],
            &[0.1, 0.2, 0.3],
        )
        .unwrap();
        assert_almost_eq(&tax, &[1000.0, 4000.0, 9000.0]);
    }

    #[test]
    fn unbounded_tax_band() {
        let tax = calculate_income_tax(
            &[70000.0, 90000.0, 110000.0],
            &[0.0, 50000.0, 100000.0, f64::INFINITY],
            &[0.1, 0.2, 0.3],
        )
        .unwrap();
        assert_almost_eq(&tax, &[9000.0, 13000.0, 18000.0]);
    }

    #[test]
    fn non_zero_tax_free_threshold() {
        let tax = calculate_income_tax(
            &[70000.0, 90000.0, 110000.0],
            &[10000.0, 50000.0, 100000.0, f64::INFINITY],
            &[0.1, 0.2, 0.3],
        )
        .unwrap();
        assert_almost_eq(&tax, &[8000.0, 12000.0, 17000.0]);
    }

    #[test]
    fn exact_band_thresholds() {
        let tax = calculate_income_tax(
            &[20000.0, 40000.0, 60000.0],
            &[0.0, 20000.0, 40000.0, 60000.0],
            &[0.1, 0.2, 0.3],
        )
        .unwrap();
        assert_almost_eq(&tax, &[2000.0, 6000.0, 12000.0]);
    }

    #[test]
    fn zero_income() {
        let tax = calculate_income_tax(&[0.0], &[0.0, 10000.0, 20000.0, 30000.0], &[0.1, 0.2, 0.3])
            .unwrap();
        assert_eq!(tax, vec![0.0]);
    }

    #[test]
    fn income_above_bounded_top_band_is_capped() {
        let tax = calculate_income_tax(&[100000.0], &[0.0, 20000.0, 40000.0, 60000.0], &[0.1, 0.2, 0.3])
            .unwrap();
        assert_almost_eq(&tax, &[12000.0]);
    }

    #[test]
    fn zero_width_band_contributes_nothing() {
        let with_empty_band = calculate_income_tax(
            &[10000.0, 20000.0, 30000.0],
            &[0.0, 20000.0, 20000.0, f64::INFINITY],
            &[0.1, 0.9, 0.3],
        )
        .unwrap();
        let without = calculate_income_tax(
            &[10000.0, 20000.0, 30000.0],
            &[0.0, 20000.0, f64::INFINITY],
            &[0.1, 0.3],
        )
        .unwrap();
        assert_almost_eq(&with_empty_band, &without);
    }

    #[test]
    fn splitting_a_band_at_the_same_rate_keeps_the_total() {
        let incomes = [5000.0, 25000.0, 45000.0, 80000.0];
        let whole = calculate_income_tax(&incomes, &[0.0, 40000.0, f64::INFINITY], &[0.2, 0.4]).unwrap();
        let split = calculate_income_tax(
            &incomes,
            &[0.0, 10000.0, 40000.0, f64::INFINITY],
            &[0.2, 0.2, 0.4],
        )
        .unwrap();
        assert_almost_eq(&whole, &split);
    }

    #[test]
    fn tax_never_decreases_with_income() {
        let bands = [0.0, 38098.0, 75518.0, f64::INFINITY];
        let rates = [0.1907, 0.3697, 0.495];
        let incomes: Vec<f64> = (0..200).map(|i| i as f64 * 750.0).collect();
        let tax = calculate_income_tax(&incomes, &bands, &rates).unwrap();
        assert!(tax.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn nan_income_propagates_to_its_own_entry() {
        let tax = calculate_income_tax(&[f64::NAN, 10000.0], &[0.0, 20000.0, f64::INFINITY], &[0.1, 0.2])
            .unwrap();
        assert!(tax[0].is_nan());
        assert!((tax[1] - 1000.0).abs() < 1e-6);
    }

    #[test]
    fn negative_taxable_income_is_rejected() {
        let result = calculate_income_tax(&[-1.0, 0.0, 10000.0], &[0.0, 10000.0, 20000.0], &[0.1, 0.2]);
        assert_eq!(result, Err(TaxError::NegativeValue("taxable_income")));
    }

    #[test]
    fn negative_tax_band_is_rejected() {
        let result = calculate_income_tax(&[0.0, 10000.0], &[-10000.0, 0.0, 20000.0], &[0.1, 0.2]);
        assert_eq!(result, Err(TaxError::NegativeValue("tax_bands")));
    }

    #[test]
    fn unsorted_tax_bands_are_rejected() {
        let result = calculate_income_tax(&[0.0, 10000.0, 20000.0], &[0.0, 20000.0, 10000.0], &[0.1, 0.2]);
        assert_eq!(result, Err(TaxError::UnsortedTaxBands));
    }

    #[test]
    fn invalid_tax_rates_are_rejected() {
        let result = calculate_income_tax(
            &[0.0, 10000.0, 20000.0],
            &[0.0, 10000.0, 20000.0],
            &[0.1, 0.2, 0.3],
        );
        assert_eq!(result, Err(TaxError::InvalidTaxRates { bands: 3, rates: 3 }));
    }

    #[test]
    fn empty_bands_are_rejected_as_invalid_rates() {
        let result = calculate_income_tax(&[1000.0], &[], &[]);
        assert_eq!(result, Err(TaxError::InvalidTaxRates { bands: 0, rates: 0 }));
    }

    #[test]
    fn unsorted_bands_reported_before_rate_mismatch() {
        let result = calculate_income_tax(&[1000.0], &[0.0, 20000.0, 10000.0], &[0.1]);
        assert_eq!(result, Err(TaxError::UnsortedTaxBands));
    }

    #[test]
    fn rate_mismatch_reported_before_negative_values() {
        let result = calculate_income_tax(&[-1000.0], &[0.0, 10000.0], &[0.1, 0.2]);
        assert_eq!(result, Err(TaxError::InvalidTaxRates { bands: 2, rates: 2 }));
    }
}
