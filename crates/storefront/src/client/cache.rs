//! Cache types for catalog API responses.

use std::sync::Arc;

use ongo_core::{Campaign, Category, CategoryId, Product, Store};

/// Cache key: the endpoint plus its parameters.
///
/// Two requests share a cache entry exactly when their keys are equal, so a
/// different slug or city always triggers a fresh fetch.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub enum QueryKey {
    Categories,
    Category(String),
    CategoryProducts(CategoryId),
    Product(String),
    Campaigns,
    Stores { city: Option<String> },
}

impl QueryKey {
    /// Path segments below the API base URL.
    pub fn segments(&self) -> Vec<String> {
        match self {
            Self::Categories => vec!["api".into(), "categories".into()],
            Self::Category(slug) => vec!["api".into(), "categories".into(), slug.clone()],
            Self::CategoryProducts(id) => vec![
                "api".into(),
                "categories".into(),
                id.to_string(),
                "products".into(),
            ],
            Self::Product(slug) => vec!["api".into(), "products".into(), slug.clone()],
            Self::Campaigns => vec!["api".into(), "campaigns".into()],
            Self::Stores { .. } => vec!["api".into(), "stores".into()],
        }
    }

    /// Query string parameters.
    pub fn query(&self) -> Option<(&'static str, &str)> {
        match self {
            Self::Stores { city: Some(city) } => Some(("city", city.as_str())),
            _ => None,
        }
    }
}

/// Cached value types.
#[derive(Debug, Clone)]
pub enum CacheValue {
    Categories(Arc<Vec<Category>>),
    Category(Arc<Category>),
    Products(Arc<Vec<Product>>),
    Product(Arc<Product>),
    Campaigns(Arc<Vec<Campaign>>),
    Stores(Arc<Vec<Store>>),
}

impl CacheValue {
    /// Variant name, for diagnostics.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Categories(_) => "categories",
            Self::Category(_) => "category",
            Self::Products(_) => "products",
            Self::Product(_) => "product",
            Self::Campaigns(_) => "campaigns",
            Self::Stores(_) => "stores",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_distinguish_parameters() {
        assert_ne!(
            QueryKey::Category("kok".to_string()),
            QueryKey::Category("stad".to_string())
        );
        assert_ne!(
            QueryKey::Stores { city: None },
            QueryKey::Stores {
                city: Some("Malmö".to_string())
            }
        );
    }

    #[test]
    fn test_product_listing_segments() {
        let id = CategoryId::generate();
        assert_eq!(
            QueryKey::CategoryProducts(id).segments(),
            ["api", "categories", id.to_string().as_str(), "products"]
        );
    }

    #[test]
    fn test_only_store_search_has_query() {
        assert_eq!(QueryKey::Campaigns.query(), None);
        assert_eq!(QueryKey::Stores { city: None }.query(), None);
        assert_eq!(
            QueryKey::Stores {
                city: Some("Uppsala".to_string())
            }
            .query(),
            Some(("city", "Uppsala"))
        );
    }
}
