//! Products domain module (catalog + stock).
//!
//! Pure domain logic only: classification of stock and expiry, search matching
//! and the line items orders are made of. No IO, no storage.

pub mod item;
pub mod product;

pub use item::OrderItem;
pub use product::{
    Category, DemandTrend, EXPIRY_WARNING_DAYS, ExpiryStatus, PharmaBatch, Product, ProductClass,
    ProductDraft, ProductId, ProductRecord, StockStatus, clamp_stock_input,
};
