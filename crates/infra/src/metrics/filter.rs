//! Product search.

use tradeflow_products::{Category, Product};

/// Inventory search criteria. All set criteria must match (AND).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    /// Case-insensitive substring of name or SKU; empty matches everything.
    pub query: String,
    pub category: Option<Category>,
    /// Only products below their minimum level (out-of-stock included).
    pub only_low_stock: bool,
}

impl ProductFilter {
    pub fn query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn only_low_stock(mut self) -> Self {
        self.only_low_stock = true;
        self
    }

    pub fn matches(&self, product: &Product) -> bool {
        product.matches_query(&self.query)
            && self.category.is_none_or(|c| product.category() == c)
            && (!self.only_low_stock || product.is_below_minimum())
    }
}

/// Products matching `filter`, in catalog order.
pub fn filter_products<'a>(
    products: impl IntoIterator<Item = &'a Product>,
    filter: &ProductFilter,
) -> Vec<&'a Product> {
    products.into_iter().filter(|p| filter.matches(p)).collect()
}
