//! Inventory valuation at cost.

use serde::Serialize;

use tradeflow_products::{Category, Product};

/// Sum of `stock * cost_price` over all products (0 for an empty catalog).
pub fn inventory_valuation<'a>(products: impl IntoIterator<Item = &'a Product>) -> u64 {
    products
        .into_iter()
        .map(Product::stock_value)
        .fold(0u64, u64::saturating_add)
}

/// Valuation of one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryValuation {
    pub category: Category,
    pub products: usize,
    pub units: u64,
    pub value: u64,
}

/// Valuation split per category, in [`Category::ALL`] order. Every category
/// is present, empty ones with zeros.
pub fn valuation_by_category<'a>(
    products: impl IntoIterator<Item = &'a Product>,
) -> [CategoryValuation; 3] {
    let mut rows = Category::ALL.map(|category| CategoryValuation {
        category,
        products: 0,
        units: 0,
        value: 0,
    });

    for product in products {
        if let Some(row) = rows.iter_mut().find(|r| r.category == product.category()) {
            row.products += 1;
            row.units = row.units.saturating_add(u64::from(product.stock()));
            row.value = row.value.saturating_add(product.stock_value());
        }
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::test_support::product;

    #[test]
    fn empty_catalog_is_worth_nothing() {
        assert_eq!(inventory_valuation(&Vec::<Product>::new()), 0);
    }

    #[test]
    fn single_product_value_is_stock_times_cost() {
        let products = vec![product(1, Category::Equipment, 10, 5, 10)];
        assert_eq!(inventory_valuation(&products), 50);
    }

    #[test]
    fn out_of_stock_products_contribute_nothing() {
        let products = vec![
            product(1, Category::Equipment, 10, 5, 10),
            product(2, Category::OfficeSupplies, 0, 400, 10),
            product(3, Category::PharmaSupplies, 3, 100, 10),
        ];
        assert_eq!(inventory_valuation(&products), 350);
    }

    #[test]
    fn by_category_keeps_every_category() {
        let products = vec![
            product(1, Category::Equipment, 10, 5, 10),
            product(2, Category::Equipment, 2, 50, 10),
        ];
        let rows = valuation_by_category(&products);

        assert_eq!(rows[0].category, Category::OfficeSupplies);
        assert_eq!(rows[0].value, 0);
        assert_eq!(rows[1].products, 2);
        assert_eq!(rows[1].units, 12);
        assert_eq!(rows[1].value, 150);
        assert_eq!(rows[2].products, 0);
    }
}
