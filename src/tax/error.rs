/// Rejected calculation input. Every check runs before any arithmetic, so a
/// failed call never yields a partial result.
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum TaxError {
    /// A vector that must be non-negative contains a negative entry.
    #[error("negative values in {0} are not allowed")]
    NegativeValue(&'static str),
    #[error("tax_bands must be sorted in ascending order")]
    UnsortedTaxBands,
    #[error(
        "the length of tax_rates ({rates}) must be one less than the length of tax_bands ({bands})"
    )]
    InvalidTaxRates { bands: usize, rates: usize },
}
