//! Synthetic dataset generation.
//!
//! Produces a cross-referenced dataset: every purchase order references a
//! generated vendor and product, every sale order a generated client and
//! product. All randomness flows through one injected RNG so a fixed seed
//! reproduces the same dataset for the same `today`.

pub mod roster;

use chrono::{NaiveDate, TimeDelta};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use tradeflow_accounting::FinanceMetric;
use tradeflow_core::round_two_decimals;
use tradeflow_parties::{Client, ClientId, ClientType, PaymentTerms, Vendor, VendorId};
use tradeflow_products::{
    Category, DemandTrend, OrderItem, PharmaBatch, Product, ProductClass, ProductDraft, ProductId,
};
use tradeflow_purchasing::{PurchaseOrder, PurchaseOrderId, PurchaseOrderStatus};
use tradeflow_sales::{SaleOrder, SaleOrderId, SaleOrderStatus};

use crate::dataset::Dataset;
use roster::{
    CLIENT_COUNTRIES, FINANCE_MONTHS, FLAGSHIP_CLIENT_NAME, FLAGSHIP_PRODUCT_NAME,
    PRODUCTS_SUPPLIED, VENDOR_COUNTRIES, VENDOR_NAMES, letter,
};

pub const VENDOR_ID_BASE: u64 = 100;
pub const PRODUCT_ID_BASE: u64 = 1000;
pub const SKU_BASE: u64 = 8000;
pub const PURCHASE_ORDER_ID_BASE: u64 = 2045;
pub const CLIENT_ID_BASE: u64 = 500;
pub const SALE_ORDER_ID_BASE: u64 = 9000;

/// Minimum stock level assigned to every generated product.
pub const MIN_STOCK_LEVEL: u32 = 50;

/// Index of the flagship product in the generated catalog.
pub const FLAGSHIP_INDEX: usize = 0;

/// How many records of each kind to generate. Vendors always use the full roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetSize {
    pub products: usize,
    pub purchase_orders: usize,
    pub clients: usize,
    pub sale_orders: usize,
    /// Capped at the length of [`roster::FINANCE_MONTHS`].
    pub finance_months: usize,
}

impl Default for DatasetSize {
    fn default() -> Self {
        Self {
            products: 55,
            purchase_orders: 25,
            clients: 30,
            sale_orders: 45,
            finance_months: 6,
        }
    }
}

/// Dataset generator over an injected random source.
#[derive(Debug)]
pub struct DatasetGenerator<R = StdRng> {
    rng: R,
    today: NaiveDate,
    size: DatasetSize,
    seed: Option<u64>,
}

impl DatasetGenerator<StdRng> {
    /// Deterministic generator: same seed + same `today` = same dataset.
    pub fn seeded(seed: u64, today: NaiveDate) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            today,
            size: DatasetSize::default(),
            seed: Some(seed),
        }
    }

    /// Non-deterministic generator seeded from OS entropy.
    pub fn from_entropy(today: NaiveDate) -> Self {
        Self {
            rng: StdRng::from_entropy(),
            today,
            size: DatasetSize::default(),
            seed: None,
        }
    }
}

impl<R: Rng> DatasetGenerator<R> {
    pub fn with_rng(rng: R, today: NaiveDate) -> Self {
        Self {
            rng,
            today,
            size: DatasetSize::default(),
            seed: None,
        }
    }

    pub fn with_size(mut self, size: DatasetSize) -> Self {
        self.size = size;
        self
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Generate all six collections in dependency order.
    pub fn generate(mut self) -> Dataset {
        let vendors = self.generate_vendors();
        let products = self.generate_products();
        let purchase_orders = self.generate_purchase_orders(&vendors, &products);
        let clients = self.generate_clients();
        let sale_orders = self.generate_sale_orders(&clients, &products);
        let finance = self.generate_finance();

        tracing::info!(
            seed = ?self.seed,
            today = %self.today,
            vendors = vendors.len(),
            products = products.len(),
            purchase_orders = purchase_orders.len(),
            clients = clients.len(),
            sale_orders = sale_orders.len(),
            finance_months = finance.len(),
            "generated dataset"
        );

        Dataset {
            vendors,
            products,
            purchase_orders,
            clients,
            sale_orders,
            finance,
        }
    }

    pub fn generate_vendors(&mut self) -> Vec<Vendor> {
        VENDOR_NAMES
            .iter()
            .enumerate()
            .map(|(i, name)| Vendor {
                id: VendorId::numbered(VENDOR_ID_BASE + i as u64),
                name: (*name).to_string(),
                country: VENDOR_COUNTRIES[i % VENDOR_COUNTRIES.len()],
                products_supplied: PRODUCTS_SUPPLIED.iter().map(|p| (*p).to_string()).collect(),
                contract_price_index: round_two_decimals(self.rng.gen_range(0.9..=1.1)),
                contract_end: offset_days(self.today, self.rng.gen_range(10..=365)),
                payment_terms: PaymentTerms::ALL[i % PaymentTerms::ALL.len()],
                rating: round_two_decimals(self.rng.gen_range(3.5..=5.0)),
            })
            .collect()
    }

    /// Categories cycle Office Supplies / Equipment / Pharma Supplies, except
    /// the flagship product which is always a pharma item trending up and
    /// stocked below its minimum.
    pub fn generate_products(&mut self) -> Vec<Product> {
        (0..self.size.products)
            .map(|i| self.generate_product(i))
            .collect()
    }

    fn generate_product(&mut self, i: usize) -> Product {
        let flagship = i == FLAGSHIP_INDEX;
        let category = if flagship {
            Category::PharmaSupplies
        } else {
            Category::ALL[i % Category::ALL.len()]
        };

        let class = match category {
            Category::OfficeSupplies => ProductClass::OfficeSupplies,
            Category::Equipment => ProductClass::Equipment,
            Category::PharmaSupplies => ProductClass::Pharma(PharmaBatch {
                batch_number: format!("BATCH-{}", self.rng.gen_range(100..=999)),
                // Some batches are already expired at generation time.
                expiry_date: offset_days(self.today, self.rng.gen_range(-30..=700)),
            }),
        };

        let name = if flagship {
            FLAGSHIP_PRODUCT_NAME.to_string()
        } else if category == Category::PharmaSupplies {
            format!("Pharma Grade Compound {}", letter(i))
        } else {
            format!("Business Item {i}")
        };

        let stock = if flagship {
            self.rng.gen_range(1..MIN_STOCK_LEVEL)
        } else {
            self.rng.gen_range(0..=500)
        };

        let demand_trend = if flagship {
            DemandTrend::Up
        } else {
            *DemandTrend::ALL.choose(&mut self.rng).unwrap_or(&DemandTrend::Stable)
        };

        let draft = ProductDraft {
            id: ProductId::numbered(PRODUCT_ID_BASE + i as u64),
            name,
            unit: if category == Category::PharmaSupplies { "Box" } else { "Unit" }.to_string(),
            class,
            stock,
            cost_price: self.rng.gen_range(10..=500),
            sku: format!("SKU-{}", SKU_BASE + i as u64),
            min_stock_level: MIN_STOCK_LEVEL,
            demand_trend,
        };

        let margin_factor = round_two_decimals(self.rng.gen_range(1.15..=1.6));
        Product::new(draft, margin_factor)
    }

    /// Every PO restocks the flagship product.
    pub fn generate_purchase_orders(
        &mut self,
        vendors: &[Vendor],
        products: &[Product],
    ) -> Vec<PurchaseOrder> {
        let flagship = products.get(FLAGSHIP_INDEX);
        let mut orders = Vec::with_capacity(self.size.purchase_orders);

        for i in 0..self.size.purchase_orders {
            let Some(vendor) = vendors.choose(&mut self.rng) else {
                break;
            };
            let date = offset_days(self.today, -self.rng.gen_range(0..=60));
            let status = *PurchaseOrderStatus::ALL
                .choose(&mut self.rng)
                .unwrap_or(&PurchaseOrderStatus::Pending);
            let total_amount = self.rng.gen_range(5_000..=50_000);
            let items = flagship
                .map(|p| vec![OrderItem::for_product(p, self.rng.gen_range(100..=1000))])
                .unwrap_or_default();

            orders.push(PurchaseOrder::for_vendor(
                PurchaseOrderId::numbered(PURCHASE_ORDER_ID_BASE + i as u64),
                vendor,
                date,
                status,
                total_amount,
                items,
            ));
        }

        orders
    }

    pub fn generate_clients(&mut self) -> Vec<Client> {
        (0..self.size.clients)
            .map(|i| Client {
                id: ClientId::numbered(CLIENT_ID_BASE + i as u64),
                name: if i == 0 {
                    FLAGSHIP_CLIENT_NAME.to_string()
                } else {
                    format!("Client Enterprise {}{i}", letter(i))
                },
                client_type: *ClientType::ALL
                    .choose(&mut self.rng)
                    .unwrap_or(&ClientType::Corporate),
                country: *CLIENT_COUNTRIES
                    .choose(&mut self.rng)
                    .unwrap_or(&CLIENT_COUNTRIES[0]),
                total_sales: self.rng.gen_range(10_000..=500_000),
                last_order_date: offset_days(self.today, -self.rng.gen_range(0..=45)),
                reorder_probability: self.rng.gen_range(40..=95),
            })
            .collect()
    }

    pub fn generate_sale_orders(
        &mut self,
        clients: &[Client],
        products: &[Product],
    ) -> Vec<SaleOrder> {
        let mut orders = Vec::with_capacity(self.size.sale_orders);

        for i in 0..self.size.sale_orders {
            let (Some(client), Some(product)) =
                (clients.choose(&mut self.rng), products.choose(&mut self.rng))
            else {
                break;
            };
            let quantity = self.rng.gen_range(10..=500);
            let date = offset_days(self.today, -self.rng.gen_range(0..=90));
            let status = *SaleOrderStatus::PIPELINE
                .choose(&mut self.rng)
                .unwrap_or(&SaleOrderStatus::Lead);

            orders.push(SaleOrder::priced(
                SaleOrderId::numbered(SALE_ORDER_ID_BASE + i as u64),
                client,
                product,
                quantity,
                date,
                status,
            ));
        }

        orders
    }

    /// One entry per label of the fixed [`FINANCE_MONTHS`] window, whatever
    /// `today` is. `finance_months` beyond the roster length is capped.
    pub fn generate_finance(&mut self) -> Vec<FinanceMetric> {
        FINANCE_MONTHS
            .iter()
            .take(self.size.finance_months)
            .map(|month| {
                let revenue = self.rng.gen_range(120_000..=180_000);
                let expenses = self.rng.gen_range(80_000..=110_000);
                FinanceMetric::new(*month, revenue, expenses)
            })
            .collect()
    }
}

fn offset_days(today: NaiveDate, days: i64) -> NaiveDate {
    today
        .checked_add_signed(TimeDelta::days(days))
        .unwrap_or(today)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use tradeflow_core::find_by_id;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn dataset(seed: u64) -> Dataset {
        DatasetGenerator::seeded(seed, today()).generate()
    }

    #[test]
    fn default_counts() {
        let d = dataset(7);
        assert_eq!(d.vendors.len(), 15);
        assert_eq!(d.products.len(), 55);
        assert_eq!(d.purchase_orders.len(), 25);
        assert_eq!(d.clients.len(), 30);
        assert_eq!(d.sale_orders.len(), 45);
        assert_eq!(d.finance.len(), 6);
    }

    #[test]
    fn same_seed_reproduces_dataset() {
        assert_eq!(dataset(42), dataset(42));
        assert_ne!(dataset(42), dataset(43));
    }

    #[test]
    fn ids_are_unique_per_collection() {
        let d = dataset(3);
        let mut ids: Vec<_> = d.products.iter().map(|p| p.id_typed().clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), d.products.len());

        let mut so: Vec<_> = d.sale_orders.iter().map(|s| s.id.clone()).collect();
        so.sort();
        so.dedup();
        assert_eq!(so.len(), d.sale_orders.len());
    }

    #[test]
    fn vendors_cycle_countries_and_terms() {
        let d = dataset(1);
        assert_eq!(d.vendors[0].id.as_str(), "V-100");
        assert_eq!(d.vendors[0].country, VENDOR_COUNTRIES[0]);
        assert_eq!(d.vendors[5].country, VENDOR_COUNTRIES[0]);
        assert_eq!(d.vendors[2].payment_terms, PaymentTerms::Advance);
        for v in &d.vendors {
            assert!((0.9..=1.1).contains(&v.contract_price_index));
            assert!((3.5..=5.0).contains(&v.rating));
            let days = v.contract_end.signed_duration_since(today()).num_days();
            assert!((10..=365).contains(&days));
        }
    }

    #[test]
    fn flagship_is_low_stock_pharma_trending_up() {
        let d = dataset(11);
        let flagship = &d.products[FLAGSHIP_INDEX];
        assert_eq!(flagship.name(), FLAGSHIP_PRODUCT_NAME);
        assert_eq!(flagship.category(), Category::PharmaSupplies);
        assert_eq!(flagship.demand_trend(), DemandTrend::Up);
        assert!(flagship.batch_number().is_some());
        assert!(flagship.expiry_date().is_some());
        assert_eq!(flagship.stock_status(), tradeflow_products::StockStatus::LowStock);
        assert_eq!(flagship.sku(), "SKU-8000");
    }

    #[test]
    fn orders_reference_generated_parties_and_products() {
        let d = dataset(5);
        for po in &d.purchase_orders {
            let vendor = find_by_id(&d.vendors, &po.vendor_id).expect("vendor exists");
            assert_eq!(vendor.name, po.vendor_name);
            assert_eq!(po.currency, vendor.currency());
            assert!((5_000..=50_000).contains(&po.total_amount));
            assert_eq!(po.items[0].product_id, *d.products[FLAGSHIP_INDEX].id_typed());
        }
        for so in &d.sale_orders {
            let client = find_by_id(&d.clients, &so.client_id).expect("client exists");
            assert_eq!(client.name, so.client_name);
            let product = find_by_id(&d.products, &so.items[0].product_id).expect("product exists");
            let qty = u64::from(so.items[0].quantity);
            assert!((10..=500).contains(&qty));
            assert_eq!(so.total_amount, qty * product.selling_price());
        }
    }

    #[test]
    fn finance_series_uses_fixed_month_labels() {
        let d = dataset(9);
        let months: Vec<_> = d.finance.iter().map(|m| m.month().to_string()).collect();
        assert_eq!(months, ["Jan", "Feb", "Mar", "Apr", "May", "Jun"]);
        for m in &d.finance {
            assert_eq!(m.profit(), m.revenue() as i64 - m.expenses() as i64);
        }
    }

    #[test]
    fn finance_labels_do_not_depend_on_today() {
        let october = NaiveDate::from_ymd_opt(2024, 10, 16).unwrap();
        let d = DatasetGenerator::seeded(1, october).generate();
        let months: Vec<_> = d.finance.iter().map(|m| m.month()).collect();
        assert_eq!(months, FINANCE_MONTHS);
    }

    #[test]
    fn finance_months_is_capped_at_roster_length() {
        let size = DatasetSize {
            finance_months: 12,
            ..DatasetSize::default()
        };
        let d = DatasetGenerator::seeded(1, today()).with_size(size).generate();
        assert_eq!(d.finance.len(), FINANCE_MONTHS.len());

        let size = DatasetSize {
            finance_months: 3,
            ..DatasetSize::default()
        };
        let d = DatasetGenerator::seeded(1, today()).with_size(size).generate();
        let months: Vec<_> = d.finance.iter().map(|m| m.month()).collect();
        assert_eq!(months, ["Jan", "Feb", "Mar"]);
    }

    #[test]
    fn injected_rng_reproduces_dataset() {
        let first = DatasetGenerator::with_rng(StdRng::seed_from_u64(77), today()).generate();
        let second = DatasetGenerator::with_rng(StdRng::seed_from_u64(77), today()).generate();
        assert_eq!(first, second);
        assert_eq!(first, dataset(77));
    }

    #[test]
    fn generator_keeps_its_reference_date() {
        let generator = DatasetGenerator::seeded(1, today());
        assert_eq!(generator.today(), today());
    }

    #[test]
    fn empty_parties_yield_no_orders() {
        let mut generator = DatasetGenerator::seeded(1, today());
        let products = generator.generate_products();
        assert!(generator.generate_sale_orders(&[], &products).is_empty());
        assert!(generator.generate_purchase_orders(&[], &products).is_empty());
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 64,
            ..ProptestConfig::default()
        })]

        /// Property: for any seed, selling price covers cost and batch tracking
        /// exists exactly on pharma products.
        #[test]
        fn product_invariants_hold_for_any_seed(seed in any::<u64>()) {
            let d = dataset(seed);
            for p in &d.products {
                prop_assert!(p.selling_price() >= p.cost_price());
                prop_assert!((10..=500).contains(&p.cost_price()));
                let pharma = p.category() == Category::PharmaSupplies;
                prop_assert_eq!(p.batch_number().is_some(), pharma);
                prop_assert_eq!(p.expiry_date().is_some(), pharma);
                if let Some(days) = p.days_until_expiry(today()) {
                    prop_assert!((-30..=700).contains(&days));
                }
            }
        }

        /// Property: generated margins are finite and match the stored totals.
        #[test]
        fn sale_margins_are_finite(seed in any::<u64>()) {
            let d = dataset(seed);
            for so in &d.sale_orders {
                prop_assert!(so.margin.is_finite());
                prop_assert!(so.margin >= 0.0);
            }
            for c in &d.clients {
                prop_assert!((40..=95).contains(&c.reorder_probability));
            }
        }
    }
}
