//! TAMI calculator
//!
//! Runs the full pipeline: sort, filter for eligibility, build the index
//! history, extract per-item ratios, aggregate.

use crate::config::TamiConfig;
use crate::error::TamiError;
use crate::models::{TamiReport, Transaction};
use crate::services::aggregator::{time_adjusted_market_index, time_adjusted_values};
use crate::services::clock::{Clock, SystemClock};
use crate::services::eligibility::filter_valid_transactions;
use crate::services::index_builder::{create_index_value_history, first_non_finite, get_index_value};
use crate::services::index_ratios::get_index_ratios;
use crate::services::sorter::sort_transactions;

/// Time-adjusted market index calculator
#[derive(Debug, Clone)]
pub struct TamiCalculator<C = SystemClock> {
    config: TamiConfig,
    clock: C,
}

impl TamiCalculator<SystemClock> {
    pub fn new(config: TamiConfig) -> Self {
        Self {
            config,
            clock: SystemClock,
        }
    }
}

impl Default for TamiCalculator<SystemClock> {
    fn default() -> Self {
        Self::new(TamiConfig::default())
    }
}

impl<C: Clock> TamiCalculator<C> {
    pub fn with_clock(config: TamiConfig, clock: C) -> Self {
        Self { config, clock }
    }

    pub fn config(&self) -> &TamiConfig {
        &self.config
    }

    /// Compute the time-adjusted market index for `transactions`.
    ///
    /// Input order does not matter; transactions are sorted first.
    pub fn tami(&self, transactions: &[Transaction]) -> Result<f64, TamiError> {
        self.report(transactions)
            .map(|report| report.time_adjusted_market_index)
    }

    /// Run the pipeline and keep every intermediate stage
    pub fn report(&self, transactions: &[Transaction]) -> Result<TamiReport, TamiError> {
        let as_of = self.clock.now();

        let sorted_transactions = sort_transactions(transactions);
        let valid_transactions = filter_valid_transactions(&sorted_transactions, as_of, &self.config);

        let index_value_history = create_index_value_history(&valid_transactions);
        let index_value = get_index_value(&index_value_history)?;
        if let Some(err) = first_non_finite(&index_value_history) {
            return Err(err);
        }

        let index_ratios = get_index_ratios(&index_value_history);
        let time_adjusted_values = time_adjusted_values(&index_ratios, index_value);
        let time_adjusted_market_index = time_adjusted_market_index(&index_ratios, index_value);

        if !time_adjusted_market_index.is_finite() {
            tracing::warn!(
                index_value = index_value,
                "Time-adjusted market index is not finite"
            );
            return Err(TamiError::NonFiniteMarketIndex {
                value: time_adjusted_market_index,
            });
        }

        tracing::info!(
            as_of = %as_of,
            transactions = transactions.len(),
            eligible = valid_transactions.len(),
            items = index_ratios.len(),
            index_value = index_value,
            tami = time_adjusted_market_index,
            "Computed time-adjusted market index"
        );

        Ok(TamiReport {
            as_of,
            sorted_transactions,
            valid_transactions,
            index_value_history,
            index_value,
            index_ratios,
            time_adjusted_values,
            time_adjusted_market_index,
        })
    }
}

/// Compute the TAMI with default rules against the wall clock
pub fn tami(transactions: &[Transaction]) -> Result<f64, TamiError> {
    TamiCalculator::new(TamiConfig::default()).tami(transactions)
}
