//! Purchasing domain module (purchase orders raised against vendors).
//!
//! Pure domain logic only: no IO, no HTTP, no storage.

pub mod order;

pub use order::{PurchaseOrder, PurchaseOrderId, PurchaseOrderStatus};
