use crate::models::RatioEntry;

/// Restate every item's latest price at `index_value`
pub fn time_adjusted_values(ratios: &[RatioEntry], index_value: f64) -> Vec<f64> {
    ratios
        .iter()
        .map(|entry| entry.time_adjusted_value(index_value))
        .collect()
}

/// Sum of the time-adjusted values, the TAMI itself
pub fn time_adjusted_market_index(ratios: &[RatioEntry], index_value: f64) -> f64 {
    time_adjusted_values(ratios, index_value).iter().sum()
}
