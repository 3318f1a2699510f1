//! Product Query Logic
//!
//! Search, filter, and sort operations over the catalog, mirroring the
//! controls of the product listing screen: free-text search, category
//! selection, price range, and a sort order.

use super::models::Product;

/// Sort order for query results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    /// Catalog display order (the default)
    #[default]
    Featured,
    /// Cheapest first
    PriceAsc,
    /// Most expensive first
    PriceDesc,
    /// Highest rating first
    Rating,
}

/// A combination of filters and a sort order applied to the catalog.
///
/// All filters are optional; an empty query returns every product in
/// catalog order.
#[derive(Debug, Clone, Default)]
pub struct ProductQuery {
    search: Option<String>,
    categories: Vec<String>,
    price_range: Option<(f64, f64)>,
    sort: SortBy,
}

impl ProductQuery {
    /// Creates an empty query matching every product.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts results to products whose name or description contains
    /// `term`, case-insensitively.
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Restricts results to the given categories. Calling this multiple
    /// times widens the selection.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.categories.push(category.into());
        self
    }

    /// Restricts results to prices within `[min, max]`, inclusive.
    pub fn price_range(mut self, min: f64, max: f64) -> Self {
        self.price_range = Some((min, max));
        self
    }

    /// Sets the sort order for the results.
    pub fn sort(mut self, sort: SortBy) -> Self {
        self.sort = sort;
        self
    }

    /// Runs the query against a product slice, returning owned matches.
    pub(crate) fn apply(&self, products: &[Product]) -> Vec<Product> {
        let mut result: Vec<Product> = products
            .iter()
            .filter(|p| self.matches(p))
            .cloned()
            .collect();

        match self.sort {
            // Catalog order already has featured products first.
            SortBy::Featured => {}
            SortBy::PriceAsc => result.sort_by(|a, b| a.price.total_cmp(&b.price)),
            SortBy::PriceDesc => result.sort_by(|a, b| b.price.total_cmp(&a.price)),
            SortBy::Rating => result.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        }

        result
    }

    fn matches(&self, product: &Product) -> bool {
        if let Some(term) = &self.search {
            let term = term.to_lowercase();
            let hit = product.name.to_lowercase().contains(&term)
                || product.description.to_lowercase().contains(&term);
            if !hit {
                return false;
            }
        }

        if !self.categories.is_empty()
            && !self.categories.iter().any(|c| *c == product.category)
        {
            return false;
        }

        if let Some((min, max)) = self.price_range {
            if product.price < min || product.price > max {
                return false;
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn empty_query_returns_everything_in_catalog_order() {
        let catalog = Catalog::with_demo_products();
        let result = catalog.search(&ProductQuery::new());

        assert_eq!(result.len(), catalog.products().len());
        assert_eq!(result[0].id, 1);
    }

    #[test]
    fn search_is_case_insensitive_over_name_and_description() {
        let catalog = Catalog::with_demo_products();

        let by_name = catalog.search(&ProductQuery::new().search("LAPTOP"));
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].id, 2);

        // "waterproof" only appears in the speaker's description
        let by_description = catalog.search(&ProductQuery::new().search("waterproof"));
        assert_eq!(by_description.len(), 1);
        assert_eq!(by_description[0].id, 5);
    }

    #[test]
    fn category_filter_widens_with_each_selection() {
        let catalog = Catalog::with_demo_products();

        let query = ProductQuery::new().category("Audio").category("Wearables");
        let result = catalog.search(&query);

        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|p| p.category == "Audio" || p.category == "Wearables"));
    }

    #[test]
    fn price_range_is_inclusive() {
        let catalog = Catalog::with_demo_products();

        let result = catalog.search(&ProductQuery::new().price_range(59.99, 89.99));
        let ids: Vec<u32> = result.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![5, 6]);
    }

    #[test]
    fn sort_orders_are_applied() {
        let catalog = Catalog::with_demo_products();

        let cheapest_first = catalog.search(&ProductQuery::new().sort(SortBy::PriceAsc));
        assert_eq!(cheapest_first.first().unwrap().id, 6);
        assert_eq!(cheapest_first.last().unwrap().id, 2);

        let best_rated_first = catalog.search(&ProductQuery::new().sort(SortBy::Rating));
        assert_eq!(best_rated_first.first().unwrap().id, 4);
    }
}
