//! Infrastructure layer: dataset generation, the live in-memory store and the
//! derived metrics computed over it.

pub mod dataset;
pub mod generator;
pub mod metrics;
pub mod store;

pub use dataset::Dataset;
pub use generator::{DatasetGenerator, DatasetSize};
pub use store::{ErpStore, NewOrder};
