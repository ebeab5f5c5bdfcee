//! Parties domain module (vendors and clients).
//!
//! Vendors supply the catalog, clients buy from it. Both are generated once at
//! start-up and are read-only afterwards.

pub mod client;
pub mod country;
pub mod vendor;

pub use client::{Client, ClientId, ClientType};
pub use country::Country;
pub use vendor::{PaymentTerms, Vendor, VendorId};
