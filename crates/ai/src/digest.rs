//! Bounded text digest of the business data handed to the assistant.

use serde::Serialize;

/// Most vendors (and most products) a digest ever lists.
pub const MAX_DIGEST_ENTITIES: usize = 5;

/// Accumulates the digest one entity at a time.
///
/// Only the first [`MAX_DIGEST_ENTITIES`] vendors and products are kept;
/// later ones are dropped on arrival, so the digest stays the same size
/// however large the collections grow. Every sale order is counted.
#[derive(Debug, Default)]
pub struct DigestBuilder {
    vendors: Vec<String>,
    products: Vec<String>,
    sale_count: usize,
    margin_sum: f64,
    margin_samples: usize,
}

impl DigestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vendor(&mut self, name: &str, country: &str) -> &mut Self {
        if self.vendors.len() < MAX_DIGEST_ENTITIES {
            self.vendors.push(format!("{name} ({country})"));
        }
        self
    }

    pub fn product(&mut self, name: &str, stock: u32) -> &mut Self {
        if self.products.len() < MAX_DIGEST_ENTITIES {
            self.products.push(format!("{name} (Stock: {stock})"));
        }
        self
    }

    /// Count one sale order. Non-finite margins are counted but left out of the average.
    pub fn sale(&mut self, margin: f64) -> &mut Self {
        self.sale_count += 1;
        if margin.is_finite() {
            self.margin_sum += margin;
            self.margin_samples += 1;
        }
        self
    }

    pub fn build(&self) -> ContextDigest {
        let sales = if self.sale_count == 0 {
            String::new()
        } else {
            let average = if self.margin_samples == 0 {
                0.0
            } else {
                self.margin_sum / self.margin_samples as f64
            };
            format!("Total Sales Orders: {}, Avg Margin: {average:.1}%", self.sale_count)
        };

        ContextDigest {
            vendor_count: self.vendors.len(),
            product_count: self.products.len(),
            vendors: self.vendors.join(", "),
            products: self.products.join(", "),
            sales,
        }
    }
}

/// The finished digest. Each section is an empty string when its
/// collection was empty.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextDigest {
    vendors: String,
    products: String,
    sales: String,
    vendor_count: usize,
    product_count: usize,
}

impl ContextDigest {
    /// Vendors listed (at most [`MAX_DIGEST_ENTITIES`]).
    pub fn vendor_count(&self) -> usize {
        self.vendor_count
    }

    /// Products listed (at most [`MAX_DIGEST_ENTITIES`]).
    pub fn product_count(&self) -> usize {
        self.product_count
    }

    /// `"Name (Country), ..."`
    pub fn vendor_summary(&self) -> &str {
        &self.vendors
    }

    /// `"Name (Stock: N), ..."`
    pub fn product_summary(&self) -> &str {
        &self.products
    }

    /// `"Total Sales Orders: N, Avg Margin: X.X%"`
    pub fn sales_summary(&self) -> &str {
        &self.sales
    }

    pub fn is_empty(&self) -> bool {
        self.vendors.is_empty() && self.products.is_empty() && self.sales.is_empty()
    }

    /// The snapshot block embedded in the assistant prompt.
    pub fn render(&self) -> String {
        format!(
            "- Top Vendors: {}\n- Key Products: {}\n- Sales Overview: {}",
            self.vendors, self.products, self.sales
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_builder_gives_empty_sections() {
        let digest = DigestBuilder::new().build();
        assert!(digest.is_empty());
        assert_eq!(digest.vendor_summary(), "");
        assert_eq!(digest.product_summary(), "");
        assert_eq!(digest.sales_summary(), "");
        assert_eq!(digest.vendor_count(), 0);
    }

    #[test]
    fn caps_vendors_and_products_at_five() {
        let mut builder = DigestBuilder::new();
        for i in 0..12 {
            builder.vendor(&format!("Vendor {i}"), "India");
            builder.product(&format!("Product {i}"), i);
        }
        let digest = builder.build();

        assert_eq!(digest.vendor_count(), MAX_DIGEST_ENTITIES);
        assert_eq!(digest.product_count(), MAX_DIGEST_ENTITIES);
        assert!(digest.vendor_summary().starts_with("Vendor 0 (India), Vendor 1 (India)"));
        assert!(digest.vendor_summary().ends_with("Vendor 4 (India)"));
        assert!(!digest.product_summary().contains("Product 5"));
        assert!(digest.product_summary().contains("Product 4 (Stock: 4)"));
    }

    #[test]
    fn sales_line_uses_the_real_average_margin() {
        let mut builder = DigestBuilder::new();
        builder.sale(10.0).sale(20.0).sale(33.0);
        assert_eq!(builder.build().sales_summary(), "Total Sales Orders: 3, Avg Margin: 21.0%");
    }

    #[test]
    fn non_finite_margins_are_counted_not_averaged() {
        let mut builder = DigestBuilder::new();
        builder.sale(f64::NAN).sale(12.0);
        assert_eq!(builder.build().sales_summary(), "Total Sales Orders: 2, Avg Margin: 12.0%");
    }

    #[test]
    fn render_lists_every_section() {
        let mut builder = DigestBuilder::new();
        builder
            .vendor("EuroLab Partners", "Germany")
            .product("Medical Disposable Kit A", 12)
            .sale(18.0);
        let rendered = builder.build().render();

        assert_eq!(
            rendered,
            "- Top Vendors: EuroLab Partners (Germany)\n\
             - Key Products: Medical Disposable Kit A (Stock: 12)\n\
             - Sales Overview: Total Sales Orders: 1, Avg Margin: 18.0%"
        );
    }
}
