//! Operational alerts: thin margins, low stock, expiring batches.

use chrono::NaiveDate;
use serde::Serialize;

use tradeflow_products::{ExpiryStatus, Product, ProductId, StockStatus};
use tradeflow_sales::SaleOrder;

/// Sale orders with `margin < threshold_percent`, worst margin first.
///
/// Orders with equal margins keep their input order.
pub fn margin_alert<'a>(
    sales: impl IntoIterator<Item = &'a SaleOrder>,
    threshold_percent: f64,
) -> Vec<&'a SaleOrder> {
    let mut flagged: Vec<&SaleOrder> = sales
        .into_iter()
        .filter(|s| s.margin < threshold_percent)
        .collect();
    flagged.sort_by(|a, b| a.margin.total_cmp(&b.margin));
    flagged
}

/// The `n` orders with the lowest margin, ascending.
pub fn lowest_margin_deals<'a>(
    sales: impl IntoIterator<Item = &'a SaleOrder>,
    n: usize,
) -> Vec<&'a SaleOrder> {
    let mut ranked: Vec<&SaleOrder> = sales.into_iter().collect();
    ranked.sort_by(|a, b| a.margin.total_cmp(&b.margin));
    ranked.truncate(n);
    ranked
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum StockAlertKind {
    OutOfStock,
    LowStock,
    ExpiringSoon,
    Expired,
}

impl StockAlertKind {
    fn from_stock(status: StockStatus) -> Option<Self> {
        match status {
            StockStatus::OutOfStock => Some(StockAlertKind::OutOfStock),
            StockStatus::LowStock => Some(StockAlertKind::LowStock),
            StockStatus::InStock => None,
        }
    }

    fn from_expiry(status: ExpiryStatus) -> Option<Self> {
        match status {
            ExpiryStatus::Expired => Some(StockAlertKind::Expired),
            ExpiryStatus::ExpiringSoon => Some(StockAlertKind::ExpiringSoon),
            ExpiryStatus::Fresh => None,
        }
    }

    pub fn is_expiry(&self) -> bool {
        matches!(self, StockAlertKind::ExpiringSoon | StockAlertKind::Expired)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StockAlert {
    pub product_id: ProductId,
    pub product_name: String,
    pub kind: StockAlertKind,
    pub stock: u32,
    pub min_stock_level: u32,
    /// Set for expiry alerts only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_remaining: Option<i64>,
}

impl StockAlert {
    fn for_product(product: &Product, kind: StockAlertKind, days_remaining: Option<i64>) -> Self {
        Self {
            product_id: product.id_typed().clone(),
            product_name: product.name().to_string(),
            kind,
            stock: product.stock(),
            min_stock_level: product.min_stock_level(),
            days_remaining,
        }
    }
}

/// Stock and expiry alerts in catalog order. A product can raise one of each.
pub fn stock_alerts<'a>(
    products: impl IntoIterator<Item = &'a Product>,
    today: NaiveDate,
) -> Vec<StockAlert> {
    let mut alerts = Vec::new();

    for product in products {
        if let Some(kind) = StockAlertKind::from_stock(product.stock_status()) {
            alerts.push(StockAlert::for_product(product, kind, None));
        }

        let Some(days) = product.days_until_expiry(today) else {
            continue;
        };
        if let Some(kind) = StockAlertKind::from_expiry(ExpiryStatus::from_days_remaining(days)) {
            alerts.push(StockAlert::for_product(product, kind, Some(days)));
        }
    }

    alerts
}
