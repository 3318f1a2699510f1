//! Product Domain Models
//!
//! Data structures for the read-only product catalog.

use serde::{Deserialize, Serialize};

/// A single product record.
///
/// Products are owned by the catalog and treated as immutable; the cart
/// keeps its own copies of the ones it references.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier
    pub id: u32,

    /// Display name
    pub name: String,

    /// Long-form description
    pub description: String,

    /// Unit price in a currency-agnostic unit
    pub price: f64,

    /// Image URL for display layers
    pub image: String,

    /// Category name (e.g. "Electronics")
    pub category: String,

    /// Average review rating
    pub rating: f32,

    /// Number of reviews behind the rating
    pub reviews: u32,

    /// Whether the product can currently be purchased
    pub in_stock: bool,

    /// Optional discount percentage in `[0, 100)`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<u8>,

    /// Whether the product is highlighted on the home page
    #[serde(default)]
    pub featured: bool,
}

impl Product {
    /// Returns the price after applying the discount percentage, if any.
    pub fn effective_price(&self) -> f64 {
        match self.discount {
            Some(pct) => self.price * (1.0 - f64::from(pct) / 100.0),
            None => self.price,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::data::demo_products;

    #[test]
    fn effective_price_applies_discount() {
        let products = demo_products();

        // id 3 is priced 179.99 with a 15% discount
        let discounted = products.iter().find(|p| p.id == 3).unwrap();
        assert!((discounted.effective_price() - 179.99 * 0.85).abs() < 1e-9);

        // id 1 has no discount
        let full_price = products.iter().find(|p| p.id == 1).unwrap();
        assert!((full_price.effective_price() - 249.99).abs() < 1e-9);
    }
}
