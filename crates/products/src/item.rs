use serde::{Deserialize, Serialize};

use crate::product::{Product, ProductId};

/// Order line: a product reference with a denormalized name and a quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: ProductId,
    pub product_name: String,
    pub quantity: u32,
}

impl OrderItem {
    pub fn for_product(product: &Product, quantity: u32) -> Self {
        Self {
            product_id: product.id_typed().clone(),
            product_name: product.name().to_string(),
            quantity,
        }
    }
}
