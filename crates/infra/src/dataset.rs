use serde::Serialize;

use tradeflow_accounting::FinanceMetric;
use tradeflow_parties::{Client, Vendor};
use tradeflow_products::Product;
use tradeflow_purchasing::PurchaseOrder;
use tradeflow_sales::SaleOrder;

/// All six business collections at one point in time.
///
/// Orders recorded after generation sit at the front of their collection.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub vendors: Vec<Vendor>,
    pub products: Vec<Product>,
    pub purchase_orders: Vec<PurchaseOrder>,
    pub clients: Vec<Client>,
    pub sale_orders: Vec<SaleOrder>,
    pub finance: Vec<FinanceMetric>,
}
