use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use tradeflow_core::{DomainError, DomainResult, Entity, entity_id};
use tradeflow_parties::{Vendor, VendorId};
use tradeflow_products::{OrderItem, Product};

entity_id!(
    /// Purchase order identifier (`PO-2045`, `PO-2046`, ...).
    PurchaseOrderId,
    "PO"
);

/// Purchase order status.
///
/// Transitions are set externally; nothing in the data model drives them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PurchaseOrderStatus {
    Approved,
    Pending,
    Delivered,
}

impl PurchaseOrderStatus {
    pub const ALL: [PurchaseOrderStatus; 3] = [
        PurchaseOrderStatus::Approved,
        PurchaseOrderStatus::Pending,
        PurchaseOrderStatus::Delivered,
    ];
}

/// A purchase order raised against a vendor.
///
/// `vendor_name` is a copy taken at creation; it does not follow later renames.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOrder {
    pub id: PurchaseOrderId,
    pub vendor_id: VendorId,
    pub vendor_name: String,
    pub date: NaiveDate,
    pub status: PurchaseOrderStatus,
    pub total_amount: u64,
    pub items: Vec<OrderItem>,
    pub currency: String,
}

impl PurchaseOrder {
    /// Build a purchase order for `vendor`, priced in the vendor's currency.
    pub fn for_vendor(
        id: PurchaseOrderId,
        vendor: &Vendor,
        date: NaiveDate,
        status: PurchaseOrderStatus,
        total_amount: u64,
        items: Vec<OrderItem>,
    ) -> Self {
        Self {
            id,
            vendor_id: vendor.id.clone(),
            vendor_name: vendor.name.clone(),
            date,
            status,
            total_amount,
            items,
            currency: vendor.currency().to_string(),
        }
    }

    /// Draft a new single-line order. New orders always start `Pending`.
    pub fn draft(
        id: PurchaseOrderId,
        vendor: &Vendor,
        product: &Product,
        quantity: u32,
        total_amount: u64,
        date: NaiveDate,
    ) -> DomainResult<Self> {
        if quantity == 0 {
            return Err(DomainError::validation("quantity must be positive"));
        }

        Ok(Self::for_vendor(
            id,
            vendor,
            date,
            PurchaseOrderStatus::Pending,
            total_amount,
            vec![OrderItem::for_product(product, quantity)],
        ))
    }

    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }
}

impl Entity for PurchaseOrder {
    type Id = PurchaseOrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
