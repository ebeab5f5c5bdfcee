//! `tradeflow-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod entity;
pub mod error;
pub mod id;

pub use entity::{Entity, find_by_id, find_by_id_mut};
pub use error::{DomainError, DomainResult};
pub use id::EntityId;

/// Round to one decimal place (percentages are reported as `20.0`, `13.4`, ...).
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Round to two decimal places (indices and ratings).
pub fn round_two_decimals(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
