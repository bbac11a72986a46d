pub mod index_history;
pub mod report;
pub mod transaction;

pub use index_history::{IndexSnapshot, RatioEntry};
pub use report::TamiReport;
pub use transaction::{ItemId, Transaction};
