//! Goodness-of-fit helpers for randomness tests.

/// Chi-square critical values at p = 0.001, indexed by degrees of freedom
/// (index 0 unused).
pub const CHI_SQUARE_999: [f64; 11] = [
    f64::NAN,
    10.828,
    13.816,
    16.266,
    18.467,
    20.515,
    22.458,
    24.322,
    26.124,
    27.877,
    29.588,
];

/// Pearson's chi-square statistic of `observed` counts against a uniform
/// expectation. Compare with `CHI_SQUARE_999[observed.len() - 1]`.
pub fn chi_square_uniform(observed: &[u64]) -> f64 {
    let total: u64 = observed.iter().sum();
    if observed.is_empty() || total == 0 {
        return 0.0;
    }
    let expected = total as f64 / observed.len() as f64;
    observed
        .iter()
        .map(|&o| {
            let d = o as f64 - expected;
            d * d / expected
        })
        .sum()
}
