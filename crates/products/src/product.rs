use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use tradeflow_core::{DomainError, Entity, entity_id};

entity_id!(
    /// Product identifier (`P-1000`, `P-1001`, ...).
    ProductId,
    "P"
);

/// Days before expiry at which a pharma batch starts being flagged.
pub const EXPIRY_WARNING_DAYS: i64 = 90;

/// Catalog category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Office Supplies")]
    OfficeSupplies,
    Equipment,
    #[serde(rename = "Pharma Supplies")]
    PharmaSupplies,
}

impl Category {
    /// Generation cycles through the categories in this order.
    pub const ALL: [Category; 3] = [
        Category::OfficeSupplies,
        Category::Equipment,
        Category::PharmaSupplies,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::OfficeSupplies => "Office Supplies",
            Category::Equipment => "Equipment",
            Category::PharmaSupplies => "Pharma Supplies",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DemandTrend {
    Up,
    Down,
    Stable,
}

impl DemandTrend {
    pub const ALL: [DemandTrend; 3] = [DemandTrend::Up, DemandTrend::Down, DemandTrend::Stable];
}

/// Batch tracking carried by pharma products only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PharmaBatch {
    pub batch_number: String,
    pub expiry_date: NaiveDate,
}

/// Category plus the data that only exists for that category.
///
/// Pharma products always carry a batch; other categories never do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductClass {
    OfficeSupplies,
    Equipment,
    Pharma(PharmaBatch),
}

impl ProductClass {
    pub fn category(&self) -> Category {
        match self {
            ProductClass::OfficeSupplies => Category::OfficeSupplies,
            ProductClass::Equipment => Category::Equipment,
            ProductClass::Pharma(_) => Category::PharmaSupplies,
        }
    }

    pub fn batch(&self) -> Option<&PharmaBatch> {
        match self {
            ProductClass::Pharma(batch) => Some(batch),
            _ => None,
        }
    }
}

/// Stock classification against the product's minimum level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StockStatus {
    OutOfStock,
    LowStock,
    InStock,
}

/// Expiry classification of a pharma batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpiryStatus {
    Expired,
    ExpiringSoon,
    Fresh,
}

impl ExpiryStatus {
    /// Classify a (calendar-day) distance to expiry.
    pub fn from_days_remaining(days_remaining: i64) -> Self {
        if days_remaining < 0 {
            ExpiryStatus::Expired
        } else if days_remaining < EXPIRY_WARNING_DAYS {
            ExpiryStatus::ExpiringSoon
        } else {
            ExpiryStatus::Fresh
        }
    }
}

/// Input for creating a product. The selling price is derived, never supplied.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub id: ProductId,
    pub name: String,
    pub class: ProductClass,
    pub stock: u32,
    pub unit: String,
    pub cost_price: u64,
    pub sku: String,
    pub min_stock_level: u32,
    pub demand_trend: DemandTrend,
}

/// Clamp a user-entered stock figure to the valid range.
///
/// Stock adjustments from the presentation layer go through this before
/// reaching the store, which never sees negative input.
pub fn clamp_stock_input(value: i64) -> u32 {
    value.clamp(0, i64::from(u32::MAX)) as u32
}

/// A catalog product with its live stock level.
///
/// Everything except `stock` is fixed at creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "ProductRecord", try_from = "ProductRecord")]
pub struct Product {
    id: ProductId,
    name: String,
    class: ProductClass,
    stock: u32,
    unit: String,
    cost_price: u64,
    selling_price: u64,
    sku: String,
    min_stock_level: u32,
    demand_trend: DemandTrend,
}

impl Product {
    /// Create a product, deriving `selling_price = floor(cost_price * margin_factor)`.
    ///
    /// Factors below 1.0 (or non-finite) are treated as 1.0 so a product never
    /// sells below cost.
    pub fn new(draft: ProductDraft, margin_factor: f64) -> Self {
        let factor = if margin_factor.is_finite() && margin_factor >= 1.0 {
            margin_factor
        } else {
            1.0
        };
        let selling_price = ((draft.cost_price as f64) * factor).floor() as u64;

        Self {
            id: draft.id,
            name: draft.name,
            class: draft.class,
            stock: draft.stock,
            unit: draft.unit,
            cost_price: draft.cost_price,
            selling_price: selling_price.max(draft.cost_price),
            sku: draft.sku,
            min_stock_level: draft.min_stock_level,
            demand_trend: draft.demand_trend,
        }
    }

    pub fn id_typed(&self) -> &ProductId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn class(&self) -> &ProductClass {
        &self.class
    }

    pub fn category(&self) -> Category {
        self.class.category()
    }

    pub fn is_pharma(&self) -> bool {
        matches!(self.class, ProductClass::Pharma(_))
    }

    pub fn batch_number(&self) -> Option<&str> {
        self.class.batch().map(|b| b.batch_number.as_str())
    }

    pub fn expiry_date(&self) -> Option<NaiveDate> {
        self.class.batch().map(|b| b.expiry_date)
    }

    pub fn stock(&self) -> u32 {
        self.stock
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub fn cost_price(&self) -> u64 {
        self.cost_price
    }

    pub fn selling_price(&self) -> u64 {
        self.selling_price
    }

    pub fn sku(&self) -> &str {
        &self.sku
    }

    pub fn min_stock_level(&self) -> u32 {
        self.min_stock_level
    }

    pub fn demand_trend(&self) -> DemandTrend {
        self.demand_trend
    }

    /// Value of the stock on hand at cost.
    pub fn stock_value(&self) -> u64 {
        u64::from(self.stock).saturating_mul(self.cost_price)
    }

    /// `stock == 0` is out of stock; `0 < stock < min_stock_level` is low.
    /// Exactly at the minimum counts as in stock.
    pub fn stock_status(&self) -> StockStatus {
        if self.stock == 0 {
            StockStatus::OutOfStock
        } else if self.stock < self.min_stock_level {
            StockStatus::LowStock
        } else {
            StockStatus::InStock
        }
    }

    /// Below the minimum level, out-of-stock included.
    pub fn is_below_minimum(&self) -> bool {
        self.stock < self.min_stock_level
    }

    /// Whole calendar days from `today` until the batch expires (negative once expired).
    pub fn days_until_expiry(&self, today: NaiveDate) -> Option<i64> {
        self.expiry_date()
            .map(|expiry| expiry.signed_duration_since(today).num_days())
    }

    /// `None` for products without an expiry date (not applicable, not fresh).
    pub fn expiry_status(&self, today: NaiveDate) -> Option<ExpiryStatus> {
        self.days_until_expiry(today)
            .map(ExpiryStatus::from_days_remaining)
    }

    /// Case-insensitive substring match against name or SKU. An empty query matches.
    pub fn matches_query(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&needle) || self.sku.to_lowercase().contains(&needle)
    }

    /// Replace the stock level. Only the mutation layer calls this.
    pub fn set_stock(&mut self, stock: u32) {
        self.stock = stock;
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Flat wire form of a [`Product`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub id: ProductId,
    pub name: String,
    pub category: Category,
    pub stock: u32,
    pub unit: String,
    pub cost_price: u64,
    pub selling_price: u64,
    pub sku: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<NaiveDate>,
    pub min_stock_level: u32,
    pub demand_trend: DemandTrend,
}

impl From<Product> for ProductRecord {
    fn from(p: Product) -> Self {
        let category = p.category();
        let (batch_number, expiry_date) = match p.class {
            ProductClass::Pharma(batch) => (Some(batch.batch_number), Some(batch.expiry_date)),
            _ => (None, None),
        };

        Self {
            id: p.id,
            name: p.name,
            category,
            stock: p.stock,
            unit: p.unit,
            cost_price: p.cost_price,
            selling_price: p.selling_price,
            sku: p.sku,
            batch_number,
            expiry_date,
            min_stock_level: p.min_stock_level,
            demand_trend: p.demand_trend,
        }
    }
}

impl TryFrom<ProductRecord> for Product {
    type Error = DomainError;

    fn try_from(r: ProductRecord) -> Result<Self, Self::Error> {
        let class = match (r.category, r.batch_number, r.expiry_date) {
            (Category::PharmaSupplies, Some(batch_number), Some(expiry_date)) => {
                ProductClass::Pharma(PharmaBatch {
                    batch_number,
                    expiry_date,
                })
            }
            (Category::PharmaSupplies, _, _) => {
                return Err(DomainError::validation(format!(
                    "pharma product {} requires batch number and expiry date",
                    r.id
                )));
            }
            (_, None, None) => match r.category {
                Category::OfficeSupplies => ProductClass::OfficeSupplies,
                _ => ProductClass::Equipment,
            },
            (category, _, _) => {
                return Err(DomainError::validation(format!(
                    "{category} product {} cannot carry batch tracking",
                    r.id
                )));
            }
        };

        Ok(Self {
            id: r.id,
            name: r.name,
            class,
            stock: r.stock,
            unit: r.unit,
            cost_price: r.cost_price,
            selling_price: r.selling_price,
            sku: r.sku,
            min_stock_level: r.min_stock_level,
            demand_trend: r.demand_trend,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn draft(stock: u32, min_stock_level: u32, class: ProductClass) -> ProductDraft {
        ProductDraft {
            id: ProductId::numbered(1000),
            name: "Medical Disposable Kit A".to_string(),
            class,
            stock,
            unit: "Box".to_string(),
            cost_price: 100,
            sku: "SKU-8000".to_string(),
            min_stock_level,
            demand_trend: DemandTrend::Up,
        }
    }

    fn pharma(expiry_date: NaiveDate) -> ProductClass {
        ProductClass::Pharma(PharmaBatch {
            batch_number: "BATCH-123".to_string(),
            expiry_date,
        })
    }

    #[test]
    fn stock_status_boundaries() {
        let status =
            |stock| Product::new(draft(stock, 10, ProductClass::Equipment), 1.2).stock_status();
        assert_eq!(status(0), StockStatus::OutOfStock);
        assert_eq!(status(5), StockStatus::LowStock);
        assert_eq!(status(10), StockStatus::InStock);
        assert_eq!(status(11), StockStatus::InStock);
    }

    #[test]
    fn zero_minimum_never_reports_low_stock() {
        let product = Product::new(draft(1, 0, ProductClass::Equipment), 1.2);
        assert_eq!(product.stock_status(), StockStatus::InStock);
    }

    #[test]
    fn selling_price_is_floor_of_cost_times_factor() {
        let product = Product::new(draft(1, 1, ProductClass::Equipment), 1.255);
        assert_eq!(product.cost_price(), 100);
        assert_eq!(product.selling_price(), 125);
    }

    #[test]
    fn degenerate_factor_sells_at_cost() {
        let price =
            |factor| Product::new(draft(1, 1, ProductClass::Equipment), factor).selling_price();
        assert_eq!(price(0.5), 100);
        assert_eq!(price(f64::NAN), 100);
    }

    #[test]
    fn expiry_status_uses_calendar_days() {
        let today = date(2024, 6, 1);
        let status = |expiry| Product::new(draft(1, 1, pharma(expiry)), 1.2).expiry_status(today);

        assert_eq!(status(date(2024, 5, 31)), Some(ExpiryStatus::Expired));
        assert_eq!(status(date(2024, 6, 1)), Some(ExpiryStatus::ExpiringSoon));
        assert_eq!(status(date(2024, 8, 29)), Some(ExpiryStatus::ExpiringSoon));
        assert_eq!(status(date(2024, 8, 30)), Some(ExpiryStatus::Fresh));
    }

    #[test]
    fn expiry_is_absent_for_non_pharma() {
        let product = Product::new(draft(1, 1, ProductClass::OfficeSupplies), 1.2);
        assert_eq!(product.expiry_status(date(2024, 6, 1)), None);
        assert_eq!(product.batch_number(), None);
    }

    #[test]
    fn query_matches_name_or_sku_case_insensitively() {
        let product = Product::new(draft(1, 1, ProductClass::Equipment), 1.2);
        assert!(product.matches_query("disposable"));
        assert!(product.matches_query("sku-8000"));
        assert!(product.matches_query(""));
        assert!(!product.matches_query("laptop"));
    }

    #[test]
    fn clamp_stock_input_floors_negatives_at_zero() {
        assert_eq!(clamp_stock_input(-5), 0);
        assert_eq!(clamp_stock_input(42), 42);
        assert_eq!(clamp_stock_input(i64::MAX), u32::MAX);
    }

    #[test]
    fn wire_form_carries_batch_only_for_pharma() {
        let product = Product::new(draft(3, 1, pharma(date(2025, 1, 1))), 1.2);
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["category"], "Pharma Supplies");
        assert_eq!(json["batchNumber"], "BATCH-123");
        assert_eq!(json["expiryDate"], "2025-01-01");

        let back: Product = serde_json::from_value(json).unwrap();
        assert_eq!(back, product);

        let office = Product::new(draft(3, 1, ProductClass::OfficeSupplies), 1.2);
        let json = serde_json::to_value(&office).unwrap();
        assert!(json.get("batchNumber").is_none());
        assert!(json.get("expiryDate").is_none());
    }

    #[test]
    fn pharma_record_without_batch_is_rejected() {
        let product = Product::new(draft(3, 1, pharma(date(2025, 1, 1))), 1.2);
        let mut record = ProductRecord::from(product);
        record.batch_number = None;
        let err = Product::try_from(record).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 512,
            ..ProptestConfig::default()
        })]

        /// Property: selling price never drops below cost for any generated factor.
        #[test]
        fn selling_price_covers_cost(cost in 10u64..=500, factor in 1.15f64..=1.6) {
            let mut d = draft(1, 1, ProductClass::Equipment);
            d.cost_price = cost;
            let product = Product::new(d, factor);
            prop_assert!(product.selling_price() >= product.cost_price());
        }

        /// Property: stock status agrees with the minimum-level comparison.
        #[test]
        fn stock_status_is_consistent(stock in 0u32..1_000, min in 0u32..1_000) {
            let product = Product::new(draft(stock, min, ProductClass::Equipment), 1.2);
            let status = product.stock_status();
            prop_assert_eq!(status == StockStatus::OutOfStock, stock == 0);
            prop_assert_eq!(status == StockStatus::LowStock, stock > 0 && stock < min);
        }
    }
}
