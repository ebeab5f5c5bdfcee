//! Top-N rankings.

use std::cmp::Ordering;

use tradeflow_parties::{Client, Vendor};

/// The `n` items with the highest `key`, highest first.
///
/// The sort is stable, so equal keys keep their input order. Incomparable
/// keys (NaN) are treated as equal.
pub fn top_n<'a, T, K, I, F>(items: I, key: F, n: usize) -> Vec<&'a T>
where
    I: IntoIterator<Item = &'a T>,
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    let mut ranked: Vec<&'a T> = items.into_iter().collect();
    ranked.sort_by(|a, b| key(b).partial_cmp(&key(a)).unwrap_or(Ordering::Equal));
    ranked.truncate(n);
    ranked
}

pub fn top_clients_by_sales<'a>(
    clients: impl IntoIterator<Item = &'a Client>,
    n: usize,
) -> Vec<&'a Client> {
    top_n(clients, |c| c.total_sales, n)
}

pub fn top_vendors_by_rating<'a>(
    vendors: impl IntoIterator<Item = &'a Vendor>,
    n: usize,
) -> Vec<&'a Vendor> {
    top_n(vendors, |v| v.rating, n)
}
