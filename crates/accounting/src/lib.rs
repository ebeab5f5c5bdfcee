//! Accounting module (monthly finance series).
//!
//! Pure domain logic only: no IO, no HTTP, no persistence concerns.

pub mod metric;

pub use metric::{FinanceMetric, FinanceSummary, summarize_finance};
