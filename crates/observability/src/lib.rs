//! Process-wide tracing setup.

pub use crate::tracing::{LogFormat, UnknownLogFormat};

/// Initialize tracing with the default (JSON) format.
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(LogFormat::default());
}

/// Initialize tracing with an explicit output format.
pub fn init_with(format: LogFormat) {
    tracing::init(format);
}

/// Tracing configuration (filters, output format).
pub mod tracing;
