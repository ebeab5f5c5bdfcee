use chrono::{NaiveDate, TimeDelta};
use serde::Serialize;

use tradeflow_accounting::{FinanceSummary, summarize_finance};
use tradeflow_products::ExpiryStatus;

use crate::dataset::Dataset;
use crate::metrics::{inventory_valuation, pipeline_aggregate};

/// A client counts as active when it ordered within this many days.
pub const ACTIVE_CLIENT_WINDOW_DAYS: i64 = 30;

/// Headline numbers for the dashboard, recomputed from a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardKpis {
    pub inventory_value: u64,
    pub active_clients: usize,
    pub low_stock_products: usize,
    pub expired_products: usize,
    /// Value of sale orders not yet invoiced.
    pub open_pipeline_value: u64,
    pub finance: FinanceSummary,
}

impl DashboardKpis {
    pub fn compute(dataset: &Dataset, today: NaiveDate) -> Self {
        let active_since = today
            .checked_sub_signed(TimeDelta::days(ACTIVE_CLIENT_WINDOW_DAYS))
            .unwrap_or(NaiveDate::MIN);

        Self {
            inventory_value: inventory_valuation(&dataset.products),
            active_clients: dataset
                .clients
                .iter()
                .filter(|c| c.last_order_date >= active_since)
                .count(),
            low_stock_products: dataset.products.iter().filter(|p| p.is_below_minimum()).count(),
            expired_products: dataset
                .products
                .iter()
                .filter(|p| p.expiry_status(today) == Some(ExpiryStatus::Expired))
                .count(),
            open_pipeline_value: pipeline_aggregate(&dataset.sale_orders).open_value(),
            finance: summarize_finance(&dataset.finance),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::test_support::{date, pharma_expiring, product, sale};
    use tradeflow_accounting::FinanceMetric;
    use tradeflow_parties::{Client, ClientId, ClientType, Country};
    use tradeflow_products::Category;
    use tradeflow_sales::SaleOrderStatus;

    fn client(n: u64, last_order_date: NaiveDate) -> Client {
        Client {
            id: ClientId::numbered(500 + n),
            name: format!("Client Enterprise {n}"),
            client_type: ClientType::Distributor,
            country: Country::India,
            total_sales: 10_000,
            last_order_date,
            reorder_probability: 50,
        }
    }

    #[test]
    fn empty_dataset_is_all_zeros() {
        let kpis = DashboardKpis::compute(&Dataset::default(), date(2024, 6, 1));
        assert_eq!(kpis.inventory_value, 0);
        assert_eq!(kpis.active_clients, 0);
        assert_eq!(kpis.low_stock_products, 0);
        assert_eq!(kpis.expired_products, 0);
        assert_eq!(kpis.open_pipeline_value, 0);
        assert_eq!(kpis.finance.best_month, None);
    }

    #[test]
    fn combines_every_view() {
        let today = date(2024, 6, 1);
        let dataset = Dataset {
            products: vec![
                product(1, Category::Equipment, 10, 100, 50),
                product(2, Category::OfficeSupplies, 60, 5, 50),
                pharma_expiring(3, date(2024, 5, 1)),
            ],
            clients: vec![
                client(0, date(2024, 5, 20)),
                client(1, date(2024, 5, 2)),
                client(2, date(2024, 1, 1)),
            ],
            sale_orders: vec![
                sale(0, SaleOrderStatus::Lead, 1_000, 20.0),
                sale(1, SaleOrderStatus::Invoiced, 4_000, 25.0),
                sale(2, SaleOrderStatus::Order, 500, 10.0),
            ],
            finance: vec![FinanceMetric::new("May", 80_000, 60_000)],
            ..Dataset::default()
        };

        let kpis = DashboardKpis::compute(&dataset, today);

        assert_eq!(kpis.inventory_value, 1_000 + 300 + 5_000);
        assert_eq!(kpis.active_clients, 2);
        assert_eq!(kpis.low_stock_products, 1);
        assert_eq!(kpis.expired_products, 1);
        assert_eq!(kpis.open_pipeline_value, 1_500);
        assert_eq!(kpis.finance.total_profit, 20_000);
    }
}
