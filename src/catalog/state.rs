//! Catalog Lookup State
//!
//! This module holds the in-memory product set and the read-only
//! lookup operations consumed by the rest of the application.

use super::data::demo_products;
use super::models::Product;
use super::query::ProductQuery;

/// Read-only source of product records.
///
/// The catalog is constructed once at application start and shared by
/// reference; none of its operations mutate the product set.
pub struct Catalog {
    products: Vec<Product>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::with_demo_products()
    }
}

impl Catalog {
    /// Creates a catalog over an arbitrary product set.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Creates a catalog seeded with the built-in demo inventory.
    pub fn with_demo_products() -> Self {
        Self::new(demo_products())
    }

    /// Returns all products in display order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Looks up a single product by id.
    pub fn product_by_id(&self, id: u32) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Returns the products highlighted on the home page.
    pub fn featured_products(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.featured).collect()
    }

    /// Returns the products belonging to the given category.
    pub fn products_by_category(&self, category: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    /// Returns the distinct category names, in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for product in &self.products {
            if !seen.contains(&product.category.as_str()) {
                seen.push(product.category.as_str());
            }
        }
        seen
    }

    /// Applies a search/filter/sort query and returns the matching
    /// products as owned copies.
    pub fn search(&self, query: &ProductQuery) -> Vec<Product> {
        query.apply(&self.products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_by_id_finds_existing_and_misses_unknown() {
        let catalog = Catalog::with_demo_products();

        let laptop = catalog.product_by_id(2).unwrap();
        assert_eq!(laptop.name, "Ultra-Slim Laptop");

        assert!(catalog.product_by_id(999).is_none());
    }

    #[test]
    fn featured_products_are_the_flagged_subset() {
        let catalog = Catalog::with_demo_products();
        let featured = catalog.featured_products();

        assert_eq!(featured.len(), 3);
        assert!(featured.iter().all(|p| p.featured));
    }

    #[test]
    fn products_by_category_matches_exact_name() {
        let catalog = Catalog::with_demo_products();

        let electronics = catalog.products_by_category("Electronics");
        assert_eq!(electronics.len(), 2);

        assert!(catalog.products_by_category("Groceries").is_empty());
    }

    #[test]
    fn categories_are_distinct_in_first_seen_order() {
        let catalog = Catalog::with_demo_products();

        assert_eq!(
            catalog.categories(),
            vec![
                "Electronics",
                "Wearables",
                "Photography",
                "Audio",
                "Home",
                "Kitchen",
                "Furniture"
            ]
        );
    }
}
