//! Margin formula.

use tradeflow_core::round_one_decimal;

/// `(total - cost) / total * 100`, rounded to one decimal place.
///
/// A zero total yields `0.0`. Selling below cost yields a negative margin.
pub fn margin_percent(total: u64, cost: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let total = total as f64;
    let cost = cost as f64;
    round_one_decimal((total - cost) / total * 100.0)
}
