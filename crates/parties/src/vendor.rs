use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use tradeflow_core::{Entity, entity_id};

use crate::country::Country;

entity_id!(
    /// Vendor identifier (`V-100`, `V-101`, ...).
    VendorId,
    "V"
);

/// Ratings above this mark a vendor as preferred.
pub const PREFERRED_RATING: f64 = 4.5;

/// Payment terms negotiated in a vendor contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentTerms {
    #[serde(rename = "Net 30")]
    Net30,
    #[serde(rename = "Net 60")]
    Net60,
    Advance,
}

impl PaymentTerms {
    pub const ALL: [PaymentTerms; 3] =
        [PaymentTerms::Net30, PaymentTerms::Net60, PaymentTerms::Advance];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentTerms::Net30 => "Net 30",
            PaymentTerms::Net60 => "Net 60",
            PaymentTerms::Advance => "Advance",
        }
    }
}

impl core::fmt::Display for PaymentTerms {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A supplier under contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    pub id: VendorId,
    pub name: String,
    pub country: Country,
    pub products_supplied: Vec<String>,
    /// Price level relative to the vendor average (1.0 is average).
    pub contract_price_index: f64,
    pub contract_end: NaiveDate,
    pub payment_terms: PaymentTerms,
    /// Rating in `[0, 5]`.
    pub rating: f64,
}

impl Vendor {
    /// Whether the contract ends before `today + days` (already-lapsed contracts included).
    pub fn contract_expires_within(&self, today: NaiveDate, days: u64) -> bool {
        match today.checked_add_days(Days::new(days)) {
            Some(horizon) => self.contract_end < horizon,
            None => true,
        }
    }

    pub fn is_preferred(&self) -> bool {
        self.rating > PREFERRED_RATING
    }

    /// Currency used on purchase orders raised against this vendor.
    pub fn currency(&self) -> &'static str {
        self.country.currency()
    }
}

impl Entity for Vendor {
    type Id = VendorId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vendor(rating: f64, contract_end: NaiveDate) -> Vendor {
        Vendor {
            id: VendorId::numbered(100),
            name: "Global Tech Supplies".to_string(),
            country: Country::Germany,
            products_supplied: vec!["Lab Equipment".to_string()],
            contract_price_index: 1.0,
            contract_end,
            payment_terms: PaymentTerms::Net30,
            rating,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn contract_alert_uses_strict_horizon() {
        let today = date(2024, 3, 1);
        assert!(vendor(4.0, date(2024, 3, 30)).contract_expires_within(today, 30));
        assert!(!vendor(4.0, date(2024, 3, 31)).contract_expires_within(today, 30));
        assert!(vendor(4.0, date(2024, 2, 1)).contract_expires_within(today, 30));
    }

    #[test]
    fn preferred_requires_rating_above_threshold() {
        let end = date(2025, 1, 1);
        assert!(vendor(4.51, end).is_preferred());
        assert!(!vendor(4.5, end).is_preferred());
    }

    #[test]
    fn vendor_currency_follows_country() {
        assert_eq!(vendor(4.0, date(2025, 1, 1)).currency(), "EUR");
    }

    #[test]
    fn serializes_in_camel_case() {
        let json = serde_json::to_value(vendor(4.2, date(2025, 1, 1))).unwrap();
        assert_eq!(json["id"], "V-100");
        assert_eq!(json["paymentTerms"], "Net 30");
        assert_eq!(json["contractEnd"], "2025-01-01");
    }
}
