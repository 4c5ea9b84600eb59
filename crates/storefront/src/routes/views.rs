//! Display data for templates.
//!
//! Catalog records are flattened into strings the templates can print
//! directly: prices already formatted, links already built.

use ongo_core::{Campaign, Category, Product, Store};

/// Slug of the category that gets the deals badge.
const DEALS_CATEGORY_SLUG: &str = "veckans-erbjudanden";

/// Category card data.
#[derive(Debug, Clone)]
pub struct CategoryView {
    pub name: String,
    pub href: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub is_deals: bool,
}

impl From<&Category> for CategoryView {
    fn from(category: &Category) -> Self {
        Self {
            name: category.name.clone(),
            href: format!("/kategori/{}", category.slug),
            description: category.description.clone(),
            image_url: category.image_url.clone(),
            is_deals: category.slug == *DEALS_CATEGORY_SLUG,
        }
    }
}

/// Product card and detail data.
#[derive(Debug, Clone)]
pub struct ProductView {
    pub name: String,
    pub href: String,
    pub description: Option<String>,
    pub price: Option<String>,
    pub image_url: Option<String>,
    pub available: bool,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            href: format!("/produkt/{}", product.slug),
            description: product.description.clone(),
            price: product.price.map(|p| p.display()),
            image_url: product.image_url.clone(),
            available: product.available,
        }
    }
}

/// Campaign card data.
#[derive(Debug, Clone)]
pub struct CampaignView {
    pub title: String,
    pub description: Option<String>,
    pub badge: Option<String>,
    pub price: Option<String>,
    pub original_price: Option<String>,
    pub saving: Option<String>,
    pub image_url: Option<String>,
}

impl From<&Campaign> for CampaignView {
    fn from(campaign: &Campaign) -> Self {
        Self {
            title: campaign.title.clone(),
            description: campaign.description.clone(),
            badge: campaign.campaign_type.clone(),
            price: campaign.price.map(|p| p.display()),
            // Only struck through when it is actually higher
            original_price: campaign
                .discount()
                .and(campaign.original_price)
                .map(|p| p.display()),
            saving: campaign.discount().map(|p| p.display()),
            image_url: campaign.image_url.clone(),
        }
    }
}

/// Store card data.
#[derive(Debug, Clone)]
pub struct StoreView {
    pub name: String,
    pub city: String,
    pub address: String,
    pub postal_code: String,
    pub phone: Option<String>,
    pub opening_hours: Option<String>,
    pub map_url: Option<String>,
}

impl From<&Store> for StoreView {
    fn from(store: &Store) -> Self {
        Self {
            name: store.name.clone(),
            city: store.city.clone(),
            address: store.address.clone(),
            postal_code: store.postal_code.clone(),
            phone: store.phone.clone(),
            opening_hours: store.opening_hours.clone(),
            map_url: store.map_url(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use ongo_core::{CampaignId, CategoryId, Price, ProductId, Slug, StoreId};

    use super::*;

    #[test]
    fn test_category_view_links_by_slug() {
        let category = Category {
            id: CategoryId::generate(),
            name: "Trädgård".to_string(),
            slug: Slug::parse("tradgard").unwrap(),
            description: None,
            image_url: None,
        };

        let view = CategoryView::from(&category);
        assert_eq!(view.href, "/kategori/tradgard");
        assert!(!view.is_deals);
    }

    #[test]
    fn test_product_view_formats_price() {
        let product = Product {
            id: ProductId::generate(),
            name: "Kökskniv".to_string(),
            slug: Slug::parse("kokskniv").unwrap(),
            description: None,
            price: Some(Price::from_kronor(249)),
            category_id: None,
            image_url: None,
            available: true,
        };

        let view = ProductView::from(&product);
        assert_eq!(view.href, "/produkt/kokskniv");
        assert_eq!(view.price.as_deref(), Some("249:-"));
    }

    #[test]
    fn test_campaign_view_hides_original_price_without_discount() {
        let mut campaign = Campaign {
            id: CampaignId::generate(),
            title: "Köksredskap".to_string(),
            description: None,
            price: Some(Price::from_kronor(149)),
            original_price: Some(Price::from_kronor(199)),
            image_url: None,
            campaign_type: Some("KUNDFAVORIT".to_string()),
            active: true,
        };

        let view = CampaignView::from(&campaign);
        assert_eq!(view.original_price.as_deref(), Some("199:-"));
        assert_eq!(view.saving.as_deref(), Some("50:-"));

        campaign.original_price = Some(Price::from_kronor(149));
        let view = CampaignView::from(&campaign);
        assert_eq!(view.original_price, None);
        assert_eq!(view.saving, None);
    }

    #[test]
    fn test_store_view_map_link() {
        let store = Store {
            id: StoreId::generate(),
            name: "ONGO Malmö".to_string(),
            address: "Södergatan 32".to_string(),
            city: "Malmö".to_string(),
            postal_code: "211 34".to_string(),
            phone: None,
            latitude: Some(55.6059),
            longitude: Some(13.0007),
            opening_hours: None,
        };

        let view = StoreView::from(&store);
        assert_eq!(
            view.map_url.as_deref(),
            Some("https://maps.google.com/?q=55.6059,13.0007")
        );
    }
}
