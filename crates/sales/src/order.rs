use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use tradeflow_core::{DomainError, DomainResult, Entity, entity_id};
use tradeflow_parties::{Client, ClientId};
use tradeflow_products::{OrderItem, Product};

use crate::margin::margin_percent;

entity_id!(
    /// Sale order identifier (`SO-9000`, `SO-9001`, ...).
    SaleOrderId,
    "SO"
);

/// Currency all sales are booked in.
pub const SALES_CURRENCY: &str = "USD";

/// Pipeline stage of a sale order: Lead -> Quotation -> Order -> Invoiced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SaleOrderStatus {
    Lead,
    Quotation,
    Order,
    Invoiced,
}

impl SaleOrderStatus {
    /// Stages in pipeline order.
    pub const PIPELINE: [SaleOrderStatus; 4] = [
        SaleOrderStatus::Lead,
        SaleOrderStatus::Quotation,
        SaleOrderStatus::Order,
        SaleOrderStatus::Invoiced,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SaleOrderStatus::Lead => "Lead",
            SaleOrderStatus::Quotation => "Quotation",
            SaleOrderStatus::Order => "Order",
            SaleOrderStatus::Invoiced => "Invoiced",
        }
    }

    /// Anything not yet invoiced is still open pipeline.
    pub fn is_open(&self) -> bool {
        *self != SaleOrderStatus::Invoiced
    }
}

impl core::fmt::Display for SaleOrderStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A sale order placed by a client.
///
/// `margin` is computed once when the order is priced and stored; later price
/// changes on the product do not touch it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleOrder {
    pub id: SaleOrderId,
    pub client_id: ClientId,
    pub client_name: String,
    pub date: NaiveDate,
    pub status: SaleOrderStatus,
    pub total_amount: u64,
    pub currency: String,
    /// Margin in percent, one decimal place.
    pub margin: f64,
    pub items: Vec<OrderItem>,
}

impl SaleOrder {
    /// Price a single-line order for `client` at the product's current prices.
    pub fn priced(
        id: SaleOrderId,
        client: &Client,
        product: &Product,
        quantity: u32,
        date: NaiveDate,
        status: SaleOrderStatus,
    ) -> Self {
        let qty = u64::from(quantity);
        let total = qty.saturating_mul(product.selling_price());
        let cost = qty.saturating_mul(product.cost_price());

        Self {
            id,
            client_id: client.id.clone(),
            client_name: client.name.clone(),
            date,
            status,
            total_amount: total,
            currency: SALES_CURRENCY.to_string(),
            margin: margin_percent(total, cost),
            items: vec![OrderItem::for_product(product, quantity)],
        }
    }

    /// Quote a new order. New orders always enter the pipeline as `Lead`.
    pub fn quote(
        id: SaleOrderId,
        client: &Client,
        product: &Product,
        quantity: u32,
        date: NaiveDate,
    ) -> DomainResult<Self> {
        if quantity == 0 {
            return Err(DomainError::validation("quantity must be positive"));
        }
        Ok(Self::priced(id, client, product, quantity, date, SaleOrderStatus::Lead))
    }
}

impl Entity for SaleOrder {
    type Id = SaleOrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
