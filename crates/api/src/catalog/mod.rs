//! Catalog repository.
//!
//! The API reads the catalog through the [`CatalogRepository`] trait. The
//! only production implementation is [`MemoryCatalog`], built once at startup
//! from the fixture in [`seed`] and shared read-only for the lifetime of the
//! process.

pub mod seed;

use std::collections::HashMap;

use ongo_core::{Campaign, Category, CategoryId, Product, Slug, Store};
use thiserror::Error;

pub use seed::{Fixture, SeedError};

/// Errors that can occur when reading from a catalog backend.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The backend could not serve the read.
    #[error("catalog unavailable: {0}")]
    Unavailable(String),
}

/// Result alias for repository reads.
pub type RepoResult<T> = Result<T, RepositoryError>;

/// Read-only access to categories, products, campaigns and stores.
///
/// Lookups that miss return `Ok(None)` or an empty vec; `Err` is reserved for
/// backend faults and maps to a 500 response.
pub trait CatalogRepository: Send + Sync {
    /// All categories, in fixture order.
    fn list_categories(&self) -> RepoResult<Vec<Category>>;

    /// The category whose slug equals `slug` exactly (case-sensitive).
    fn get_category_by_slug(&self, slug: &str) -> RepoResult<Option<Category>>;

    /// Products whose category is `category_id`. Unknown ids yield an empty vec.
    fn list_products_by_category(&self, category_id: CategoryId) -> RepoResult<Vec<Product>>;

    /// The product whose slug equals `slug` exactly (case-sensitive).
    fn get_product_by_slug(&self, slug: &str) -> RepoResult<Option<Product>>;

    /// Campaigns with the active flag set.
    fn list_active_campaigns(&self) -> RepoResult<Vec<Campaign>>;

    /// All stores, in fixture order.
    fn list_stores(&self) -> RepoResult<Vec<Store>>;

    /// Stores whose city contains `city_query`, ignoring case.
    ///
    /// The empty query matches every store.
    fn list_stores_by_city(&self, city_query: &str) -> RepoResult<Vec<Store>>;
}

/// In-memory catalog.
///
/// Records are kept in fixture order; slug lookups go through an index.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    categories: Vec<Category>,
    products: Vec<Product>,
    campaigns: Vec<Campaign>,
    stores: Vec<Store>,
    category_slugs: HashMap<Slug, usize>,
    product_slugs: HashMap<Slug, usize>,
}

impl MemoryCatalog {
    /// Build the catalog from the reference fixture.
    ///
    /// # Errors
    ///
    /// Returns `SeedError` if the fixture breaks a catalog invariant.
    pub fn seeded() -> Result<Self, SeedError> {
        Self::from_fixture(&Fixture::reference())
    }

    /// Build the catalog from a fixture, generating a fresh id per record.
    ///
    /// # Errors
    ///
    /// Returns `SeedError` on a malformed or duplicate slug, or when a product
    /// names a category slug that is not part of the fixture.
    pub fn from_fixture(fixture: &Fixture) -> Result<Self, SeedError> {
        let (categories, products, campaigns, stores) = seed::build(fixture)?;

        let category_slugs = categories
            .iter()
            .enumerate()
            .map(|(i, c)| (c.slug.clone(), i))
            .collect();
        let product_slugs = products
            .iter()
            .enumerate()
            .map(|(i, p)| (p.slug.clone(), i))
            .collect();

        tracing::debug!(
            categories = categories.len(),
            products = products.len(),
            campaigns = campaigns.len(),
            stores = stores.len(),
            "Catalog seeded"
        );

        Ok(Self {
            categories,
            products,
            campaigns,
            stores,
            category_slugs,
            product_slugs,
        })
    }

    fn category(&self, slug: &str) -> Option<&Category> {
        let slug = Slug::parse(slug).ok()?;
        self.category_slugs
            .get(&slug)
            .and_then(|&i| self.categories.get(i))
    }

    fn product(&self, slug: &str) -> Option<&Product> {
        let slug = Slug::parse(slug).ok()?;
        self.product_slugs
            .get(&slug)
            .and_then(|&i| self.products.get(i))
    }
}

impl CatalogRepository for MemoryCatalog {
    fn list_categories(&self) -> RepoResult<Vec<Category>> {
        Ok(self.categories.clone())
    }

    fn get_category_by_slug(&self, slug: &str) -> RepoResult<Option<Category>> {
        Ok(self.category(slug).cloned())
    }

    fn list_products_by_category(&self, category_id: CategoryId) -> RepoResult<Vec<Product>> {
        Ok(self
            .products
            .iter()
            .filter(|p| p.category_id == Some(category_id))
            .cloned()
            .collect())
    }

    fn get_product_by_slug(&self, slug: &str) -> RepoResult<Option<Product>> {
        Ok(self.product(slug).cloned())
    }

    fn list_active_campaigns(&self) -> RepoResult<Vec<Campaign>> {
        Ok(self.campaigns.iter().filter(|c| c.active).cloned().collect())
    }

    fn list_stores(&self) -> RepoResult<Vec<Store>> {
        Ok(self.stores.clone())
    }

    fn list_stores_by_city(&self, city_query: &str) -> RepoResult<Vec<Store>> {
        Ok(self
            .stores
            .iter()
            .filter(|s| s.city_matches(city_query))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn catalog() -> MemoryCatalog {
        MemoryCatalog::seeded().expect("reference fixture is valid")
    }

    #[test]
    fn test_seeded_counts_match_fixture() {
        let catalog = catalog();
        assert_eq!(catalog.list_categories().unwrap().len(), 6);
        assert_eq!(catalog.products.len(), 3);
        assert_eq!(catalog.list_active_campaigns().unwrap().len(), 3);
        assert_eq!(catalog.list_stores().unwrap().len(), 6);
    }

    #[test]
    fn test_categories_keep_fixture_order() {
        let names: Vec<String> = catalog()
            .list_categories()
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(
            names,
            ["Trädgård", "Städ", "Kök", "Fritid", "Badrum", "Förvaring"]
        );
    }

    #[test]
    fn test_every_category_found_by_own_slug() {
        let catalog = catalog();
        for category in catalog.list_categories().unwrap() {
            let found = catalog
                .get_category_by_slug(category.slug.as_str())
                .unwrap();
            assert_eq!(found.as_ref(), Some(&category));
        }
    }

    #[test]
    fn test_category_slug_lookup_is_case_sensitive() {
        let catalog = catalog();
        assert!(catalog.get_category_by_slug("tradgard").unwrap().is_some());
        assert!(catalog.get_category_by_slug("Tradgard").unwrap().is_none());
        assert!(catalog.get_category_by_slug("TRADGARD").unwrap().is_none());
    }

    #[test]
    fn test_unknown_slugs_miss() {
        let catalog = catalog();
        assert!(catalog.get_category_by_slug("does-not-exist").unwrap().is_none());
        assert!(catalog.get_category_by_slug("").unwrap().is_none());
        assert!(catalog.get_product_by_slug("does-not-exist-slug").unwrap().is_none());
    }

    #[test]
    fn test_every_product_found_by_slug_and_in_its_category() {
        let catalog = catalog();
        for product in &catalog.products {
            let found = catalog.get_product_by_slug(product.slug.as_str()).unwrap();
            assert_eq!(found.as_ref(), Some(product));

            if let Some(category_id) = product.category_id {
                let listed = catalog.list_products_by_category(category_id).unwrap();
                assert!(listed.contains(product));
            }
        }
    }

    #[test]
    fn test_product_categories_resolve() {
        let catalog = catalog();
        let category_ids: Vec<CategoryId> = catalog
            .list_categories()
            .unwrap()
            .iter()
            .map(|c| c.id)
            .collect();
        for product in &catalog.products {
            let id = product.category_id.expect("fixture products are categorised");
            assert!(category_ids.contains(&id));
        }
    }

    #[test]
    fn test_products_by_unknown_category_is_empty() {
        let products = catalog()
            .list_products_by_category(CategoryId::generate())
            .unwrap();
        assert!(products.is_empty());
    }

    #[test]
    fn test_products_by_category_without_products_is_empty() {
        let catalog = catalog();
        let stad = catalog.get_category_by_slug("stad").unwrap().unwrap();
        assert!(catalog.list_products_by_category(stad.id).unwrap().is_empty());
    }

    #[test]
    fn test_inactive_campaigns_are_hidden() {
        let mut catalog = catalog();
        let hidden = catalog.campaigns.first().unwrap().id;
        if let Some(first) = catalog.campaigns.first_mut() {
            first.active = false;
        }

        let active = catalog.list_active_campaigns().unwrap();
        assert_eq!(active.len(), 2);
        assert!(active.iter().all(|c| c.active && c.id != hidden));
    }

    #[test]
    fn test_city_filter_ignores_case() {
        let catalog = catalog();
        let lower = catalog.list_stores_by_city("göteborg").unwrap();
        let upper = catalog.list_stores_by_city("GÖTEBORG").unwrap();
        assert_eq!(lower, upper);
        assert_eq!(lower.len(), 1);
        assert_eq!(lower.first().unwrap().name, "ONGO Göteborg");
    }

    #[test]
    fn test_city_filter_matches_substrings() {
        let stores = catalog().list_stores_by_city("s").unwrap();
        let cities: Vec<&str> = stores.iter().map(|s| s.city.as_str()).collect();
        assert_eq!(cities, ["Stockholm", "Uppsala", "Västerås", "Sundsvall"]);
    }

    #[test]
    fn test_empty_city_filter_returns_all_stores() {
        let catalog = catalog();
        assert_eq!(
            catalog.list_stores_by_city("").unwrap(),
            catalog.list_stores().unwrap()
        );
    }

    #[test]
    fn test_city_filter_does_not_match_store_name() {
        assert!(catalog().list_stores_by_city("ONGO").unwrap().is_empty());
    }
}
