//! Catalog product.

use serde::{Deserialize, Serialize};

use crate::types::{CategoryId, Price, ProductId, Slug};

const fn default_available() -> bool {
    true
}

/// A product shown in the catalog.
///
/// `price` is optional: a product without a price is shown without one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub slug: Slug,
    pub description: Option<String>,
    pub price: Option<Price>,
    pub category_id: Option<CategoryId>,
    pub image_url: Option<String>,
    #[serde(default = "default_available")]
    pub available: bool,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_available_defaults_to_true() {
        let id = ProductId::generate();
        let json = format!(
            r#"{{"id":"{id}","name":"Köksredskap","slug":"koksredskap","description":null,"price":149,"categoryId":null,"imageUrl":null}}"#
        );
        let product: Product = serde_json::from_str(&json).unwrap();
        assert!(product.available);
        assert_eq!(product.price, Some(Price::from_kronor(149)));
    }

    #[test]
    fn test_serializes_camel_case_with_nulls() {
        let product = Product {
            id: ProductId::generate(),
            name: "Trädgårdsset".to_string(),
            slug: Slug::parse("tradgardsset").unwrap(),
            description: None,
            price: None,
            category_id: None,
            image_url: None,
            available: true,
        };
        let value = serde_json::to_value(&product).unwrap();
        assert!(value.get("categoryId").unwrap().is_null());
        assert!(value.get("imageUrl").unwrap().is_null());
        assert!(value.get("price").unwrap().is_null());
        assert_eq!(value.get("available"), Some(&serde_json::Value::Bool(true)));
    }
}
