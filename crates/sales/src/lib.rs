//! Sales domain module (sale orders moving through the pipeline).
//!
//! Pure domain logic only: no IO, no HTTP, no storage.

pub mod margin;
pub mod order;

pub use margin::margin_percent;
pub use order::{SALES_CURRENCY, SaleOrder, SaleOrderId, SaleOrderStatus};
