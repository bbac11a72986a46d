//! Eligibility window configuration
//!
//! Defaults reproduce the reference TAMI rules: an item needs two sales in the
//! trailing 12 months, measured against a 6 month "recent" window.

use std::env;

use crate::error::TamiError;

pub const DEFAULT_LOOKBACK_MONTHS: u32 = 12;
pub const DEFAULT_RECENT_MONTHS: u32 = 6;
pub const DEFAULT_MIN_SALES: usize = 2;

pub const LOOKBACK_MONTHS_VAR: &str = "TAMI_LOOKBACK_MONTHS";
pub const RECENT_MONTHS_VAR: &str = "TAMI_RECENT_MONTHS";
pub const MIN_SALES_VAR: &str = "TAMI_MIN_SALES";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TamiConfig {
    /// Sales older than this many calendar months never count toward eligibility
    pub lookback_months: u32,
    /// An item can only become eligible on a sale inside this window
    pub recent_months: u32,
    /// Sales inside the lookback window needed before an item is eligible
    pub min_sales: usize,
}

impl Default for TamiConfig {
    fn default() -> Self {
        Self {
            lookback_months: DEFAULT_LOOKBACK_MONTHS,
            recent_months: DEFAULT_RECENT_MONTHS,
            min_sales: DEFAULT_MIN_SALES,
        }
    }
}

impl TamiConfig {
    /// Load config from the process environment (and a `.env` file if present).
    ///
    /// Unset variables fall back to the defaults.
    pub fn from_env() -> Result<Self, TamiError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key/value source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, TamiError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let config = Self {
            lookback_months: parse_var(&lookup, LOOKBACK_MONTHS_VAR, defaults.lookback_months)?,
            recent_months: parse_var(&lookup, RECENT_MONTHS_VAR, defaults.recent_months)?,
            min_sales: parse_var(&lookup, MIN_SALES_VAR, defaults.min_sales)?,
        };
        config.validate()?;

        tracing::debug!(
            lookback_months = config.lookback_months,
            recent_months = config.recent_months,
            min_sales = config.min_sales,
            "Loaded TAMI config"
        );

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), TamiError> {
        if self.lookback_months == 0 {
            return Err(TamiError::Config(format!(
                "{} must be positive",
                LOOKBACK_MONTHS_VAR
            )));
        }
        if self.recent_months > self.lookback_months {
            return Err(TamiError::Config(format!(
                "{} ({}) cannot exceed {} ({})",
                RECENT_MONTHS_VAR, self.recent_months, LOOKBACK_MONTHS_VAR, self.lookback_months
            )));
        }
        if self.min_sales == 0 {
            return Err(TamiError::Config(format!("{} must be positive", MIN_SALES_VAR)));
        }
        Ok(())
    }
}

fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> Result<T, TamiError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| TamiError::Config(format!("{}='{}': {}", key, raw, e))),
        None => Ok(default),
    }
}
