use crate::models::ItemId;

/// Error types for the TAMI pipeline
#[derive(Debug, Clone, PartialEq)]
pub enum TamiError {
    /// Nothing survived the eligibility filter, so there is no index value to read
    NoEligibleTransactions,
    /// The index became infinite or NaN at `position` in the index history
    NonFiniteIndexValue {
        item_id: ItemId,
        position: usize,
        value: f64,
    },
    /// The aggregated market index itself is infinite or NaN
    NonFiniteMarketIndex { value: f64 },
    Config(String),
}

impl std::fmt::Display for TamiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TamiError::NoEligibleTransactions => {
                write!(f, "No eligible transactions: no item has enough recent repeat sales")
            }
            TamiError::NonFiniteIndexValue {
                item_id,
                position,
                value,
            } => write!(
                f,
                "Non-finite index value {} after transaction {} (item {})",
                value, position, item_id
            ),
            TamiError::NonFiniteMarketIndex { value } => {
                write!(f, "Non-finite time-adjusted market index: {}", value)
            }
            TamiError::Config(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl std::error::Error for TamiError {}
