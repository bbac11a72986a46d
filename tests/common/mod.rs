use chrono::{DateTime, Duration, Months, TimeZone, Utc};
use std::sync::Once;
use tami::Transaction;

static TRACING: Once = Once::new();

/// Install a fmt subscriber once per test binary.
/// Uses RUST_LOG when set, falling back to debug output for this crate.
pub fn init_tracing() {
    TRACING.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "info,tami=debug".into()),
            )
            .with_test_writer()
            .init();
    });
}

/// Fixed reference instant for reproducible eligibility windows
pub fn reference_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
}

pub struct Moments {
    pub yesterday: DateTime<Utc>,
    pub two_days_ago: DateTime<Utc>,
    pub three_days_ago: DateTime<Utc>,
    pub one_month_ago: DateTime<Utc>,
    pub six_weeks_ago: DateTime<Utc>,
    pub two_years_ago: DateTime<Utc>,
}

pub fn moments(now: DateTime<Utc>) -> Moments {
    Moments {
        yesterday: now - Duration::days(1),
        two_days_ago: now - Duration::days(2),
        three_days_ago: now - Duration::days(3),
        one_month_ago: now.checked_sub_months(Months::new(1)).unwrap(),
        six_weeks_ago: now - Duration::weeks(6),
        two_years_ago: now.checked_sub_months(Months::new(24)).unwrap(),
    }
}

/// Mixed history: Mars and Hyacinth qualify, Lavender (single sale) and Nyx
/// (previous sale two years back) do not.
pub fn mock_transaction_history(now: DateTime<Utc>) -> Vec<Transaction> {
    let m = moments(now);
    vec![
        Transaction::new(500.0, "Lavender", m.three_days_ago),
        Transaction::new(700.0, "Hyacinth", m.one_month_ago),
        Transaction::new(1200.0, "Mars", m.two_days_ago),
        Transaction::new(612.0, "Nyx", m.two_years_ago),
        Transaction::new(400.0, "Hyacinth", m.three_days_ago),
        Transaction::new(1200.0, "Nyx", m.yesterday),
        Transaction::new(612.0, "Mars", m.six_weeks_ago),
    ]
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {} but got {}",
        expected,
        actual
    );
}
