// src/lib.rs

//! Time-adjusted market index (TAMI) over item sale transactions.
//!
//! A repeat-sales index is built from the sales of items with enough recent
//! history, and each item's latest price is restated at the current index
//! level. The sum of those restated prices is the TAMI.

pub mod config;
pub mod error;
pub mod models;

pub mod services {
    pub mod aggregator;
    pub mod clock;
    pub mod eligibility;
    pub mod index_builder;
    pub mod index_ratios;
    pub mod sorter;
    pub mod tami;
}

pub use config::TamiConfig;
pub use error::TamiError;
pub use models::{IndexSnapshot, ItemId, RatioEntry, TamiReport, Transaction};
pub use services::clock::{Clock, FixedClock, SystemClock};
pub use services::tami::{tami, TamiCalculator};
