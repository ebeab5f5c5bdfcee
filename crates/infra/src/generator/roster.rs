//! Fixed name rosters for generated records.

use tradeflow_parties::Country;

pub const VENDOR_NAMES: [&str; 15] = [
    "Global Tech Supplies",
    "MediSafe China Ltd",
    "EuroLab Partners",
    "IndoChem Traders",
    "Dubai Logistics Group",
    "Sinopharm Exports",
    "Berlin Medical Devices",
    "Singapore Trade Hub",
    "Mumbai Surgical Works",
    "Shanghai Plastics Co",
    "Apex Business Sol",
    "Emirates Bulk Buy",
    "Hanover Office Systems",
    "Pearl River Trading",
    "Ganga Pharma Exports",
];

/// Vendors are assigned these countries cyclically.
pub const VENDOR_COUNTRIES: [Country; 5] = [
    Country::India,
    Country::China,
    Country::Germany,
    Country::Uae,
    Country::Singapore,
];

/// Clients are drawn uniformly from these countries.
pub const CLIENT_COUNTRIES: [Country; 4] =
    [Country::India, Country::Uae, Country::Usa, Country::Uk];

pub const PRODUCTS_SUPPLIED: [&str; 3] = ["Medical Kits", "Office Paper", "Lab Equipment"];

pub const FLAGSHIP_PRODUCT_NAME: &str = "Medical Disposable Kit A";

/// Labels of the finance series, in order.
pub const FINANCE_MONTHS: [&str; 6] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun"];

pub const FLAGSHIP_CLIENT_NAME: &str = "Medico Pharma Pvt Ltd";

/// `A`..`Z` by index, wrapping.
pub fn letter(i: usize) -> char {
    char::from(b'A' + (i % 26) as u8)
}
