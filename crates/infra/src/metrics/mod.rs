//! Derived metrics over the business collections.
//!
//! Every function here is pure: it borrows its input, never mutates it, and
//! is recomputed on demand after each mutation. Empty input yields the
//! arithmetic identity (0, empty list).

pub mod alerts;
pub mod dashboard;
pub mod filter;
pub mod pipeline;
pub mod ranking;
pub mod valuation;

pub use alerts::{StockAlert, StockAlertKind, lowest_margin_deals, margin_alert, stock_alerts};
pub use dashboard::DashboardKpis;
pub use filter::{ProductFilter, filter_products};
pub use pipeline::{SalesPipeline, StageSummary, pipeline_aggregate};
pub use ranking::{top_clients_by_sales, top_n, top_vendors_by_rating};
pub use valuation::{CategoryValuation, inventory_valuation, valuation_by_category};
