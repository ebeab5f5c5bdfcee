//! Live in-memory store: the single owner of the business collections.
//!
//! Vendors, clients and the finance series are fixed after initialization.
//! Products, purchase orders and sale orders sit behind their own `RwLock`
//! so concurrent writers are serialized per collection.

use std::collections::VecDeque;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::NaiveDate;

use tradeflow_accounting::FinanceMetric;
use tradeflow_ai::{ContextDigest, DigestBuilder};
use tradeflow_core::{DomainError, DomainResult, find_by_id, find_by_id_mut};
use tradeflow_parties::{Client, ClientId, Vendor, VendorId};
use tradeflow_products::{Product, ProductId};
use tradeflow_purchasing::{PurchaseOrder, PurchaseOrderId};
use tradeflow_sales::{SaleOrder, SaleOrderId};

use crate::dataset::Dataset;
use crate::generator::{PURCHASE_ORDER_ID_BASE, SALE_ORDER_ID_BASE};
use crate::metrics::DashboardKpis;

/// An order to record: either side of the business.
#[derive(Debug, Clone, PartialEq)]
pub enum NewOrder {
    Sale(SaleOrder),
    Purchase(PurchaseOrder),
}

impl From<SaleOrder> for NewOrder {
    fn from(order: SaleOrder) -> Self {
        Self::Sale(order)
    }
}

impl From<PurchaseOrder> for NewOrder {
    fn from(order: PurchaseOrder) -> Self {
        Self::Purchase(order)
    }
}

/// Owner of the live collections.
///
/// Created once from a generated [`Dataset`]; share it by reference or `Arc`.
#[derive(Debug)]
pub struct ErpStore {
    vendors: Vec<Vendor>,
    clients: Vec<Client>,
    finance: Vec<FinanceMetric>,
    products: RwLock<Vec<Product>>,
    purchase_orders: RwLock<VecDeque<PurchaseOrder>>,
    sale_orders: RwLock<VecDeque<SaleOrder>>,
}

fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

impl ErpStore {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            vendors: dataset.vendors,
            clients: dataset.clients,
            finance: dataset.finance,
            products: RwLock::new(dataset.products),
            purchase_orders: RwLock::new(dataset.purchase_orders.into()),
            sale_orders: RwLock::new(dataset.sale_orders.into()),
        }
    }

    pub fn vendors(&self) -> &[Vendor] {
        &self.vendors
    }

    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    pub fn finance(&self) -> &[FinanceMetric] {
        &self.finance
    }

    pub fn vendor(&self, id: &VendorId) -> Option<&Vendor> {
        find_by_id(&self.vendors, id)
    }

    pub fn client(&self, id: &ClientId) -> Option<&Client> {
        find_by_id(&self.clients, id)
    }

    pub fn product(&self, id: &ProductId) -> Option<Product> {
        find_by_id(read(&self.products).as_slice(), id).cloned()
    }

    /// Copy of the current product list.
    pub fn products(&self) -> Vec<Product> {
        read(&self.products).clone()
    }

    /// Copy of the purchase orders, most recently recorded first.
    pub fn purchase_orders(&self) -> Vec<PurchaseOrder> {
        read(&self.purchase_orders).iter().cloned().collect()
    }

    /// Copy of the sale orders, most recently recorded first.
    pub fn sale_orders(&self) -> Vec<SaleOrder> {
        read(&self.sale_orders).iter().cloned().collect()
    }

    /// Run `f` over the products without copying them.
    pub fn with_products<T>(&self, f: impl FnOnce(&[Product]) -> T) -> T {
        f(&read(&self.products))
    }

    /// Run `f` over the sale orders without copying them.
    pub fn with_sale_orders<T>(&self, f: impl FnOnce(&VecDeque<SaleOrder>) -> T) -> T {
        f(&read(&self.sale_orders))
    }

    /// Copy of all six collections.
    pub fn snapshot(&self) -> Dataset {
        Dataset {
            vendors: self.vendors.clone(),
            products: self.products(),
            purchase_orders: self.purchase_orders(),
            clients: self.clients.clone(),
            sale_orders: self.sale_orders(),
            finance: self.finance.clone(),
        }
    }

    /// Replace a product's stock level.
    ///
    /// Unknown ids are a no-op: nothing is created and nothing else changes.
    /// Returns whether a product matched.
    pub fn adjust_stock(&self, product_id: &ProductId, new_stock: u32) -> bool {
        let mut products = write(&self.products);
        match find_by_id_mut(products.as_mut_slice(), product_id) {
            Some(product) => {
                let previous = product.stock();
                product.set_stock(new_stock);
                tracing::debug!(%product_id, previous, new_stock, "stock adjusted");
                true
            }
            None => {
                tracing::warn!(%product_id, "stock adjustment for unknown product ignored");
                false
            }
        }
    }

    /// Prepend an order to its collection. Ids are taken as given.
    pub fn record_order(&self, order: impl Into<NewOrder>) {
        match order.into() {
            NewOrder::Sale(order) => self.record_sale_order(order),
            NewOrder::Purchase(order) => self.record_purchase_order(order),
        }
    }

    pub fn record_sale_order(&self, order: SaleOrder) {
        tracing::debug!(order_id = %order.id, client_id = %order.client_id, "sale order recorded");
        write(&self.sale_orders).push_front(order);
    }

    pub fn record_purchase_order(&self, order: PurchaseOrder) {
        tracing::debug!(
            order_id = %order.id,
            vendor_id = %order.vendor_id,
            "purchase order recorded"
        );
        write(&self.purchase_orders).push_front(order);
    }

    /// Next sale order id: `SO-{9001 + count}`.
    pub fn next_sale_order_id(&self) -> SaleOrderId {
        next_sale_id(read(&self.sale_orders).len())
    }

    /// Next purchase order id: `PO-{2045 + count}`.
    pub fn next_purchase_order_id(&self) -> PurchaseOrderId {
        next_purchase_id(read(&self.purchase_orders).len())
    }

    /// Quote a new `Lead` sale order and record it.
    pub fn create_sale_order(
        &self,
        client_id: &ClientId,
        product_id: &ProductId,
        quantity: u32,
        date: NaiveDate,
    ) -> DomainResult<SaleOrder> {
        let client = self
            .client(client_id)
            .ok_or_else(|| DomainError::not_found(format!("client {client_id}")))?;
        let product = self
            .product(product_id)
            .ok_or_else(|| DomainError::not_found(format!("product {product_id}")))?;

        // Hold the write lock across id allocation and insert.
        let mut orders = write(&self.sale_orders);
        let order = SaleOrder::quote(next_sale_id(orders.len()), client, &product, quantity, date)?;
        tracing::debug!(
            order_id = %order.id,
            %client_id,
            %product_id,
            quantity,
            "sale order created"
        );
        orders.push_front(order.clone());
        Ok(order)
    }

    /// Draft a new `Pending` purchase order and record it.
    pub fn create_purchase_order(
        &self,
        vendor_id: &VendorId,
        product_id: &ProductId,
        quantity: u32,
        total_amount: u64,
        date: NaiveDate,
    ) -> DomainResult<PurchaseOrder> {
        let vendor = self
            .vendor(vendor_id)
            .ok_or_else(|| DomainError::not_found(format!("vendor {vendor_id}")))?;
        let product = self
            .product(product_id)
            .ok_or_else(|| DomainError::not_found(format!("product {product_id}")))?;

        let mut orders = write(&self.purchase_orders);
        let order = PurchaseOrder::draft(
            next_purchase_id(orders.len()),
            vendor,
            &product,
            quantity,
            total_amount,
            date,
        )?;
        tracing::debug!(
            order_id = %order.id,
            %vendor_id,
            %product_id,
            quantity,
            "purchase order created"
        );
        orders.push_front(order.clone());
        Ok(order)
    }

    /// Bounded digest of the current collections for the assistant.
    pub fn context_digest(&self) -> ContextDigest {
        let mut builder = DigestBuilder::new();
        for vendor in &self.vendors {
            builder.vendor(&vendor.name, vendor.country.as_str());
        }
        self.with_products(|products| {
            for product in products {
                builder.product(product.name(), product.stock());
            }
        });
        self.with_sale_orders(|orders| {
            for order in orders {
                builder.sale(order.margin);
            }
        });
        builder.build()
    }

    /// Headline figures over the current collections.
    pub fn dashboard_kpis(&self, today: NaiveDate) -> DashboardKpis {
        DashboardKpis::compute(&self.snapshot(), today)
    }
}

fn next_sale_id(count: usize) -> SaleOrderId {
    SaleOrderId::numbered(SALE_ORDER_ID_BASE + count as u64 + 1)
}

fn next_purchase_id(count: usize) -> PurchaseOrderId {
    PurchaseOrderId::numbered(PURCHASE_ORDER_ID_BASE + count as u64)
}
