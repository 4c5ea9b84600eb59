//! Reference fixture for the in-memory catalog.
//!
//! The fixture describes records without ids. [`build`] assigns a random
//! UUID to every record and resolves product → category references by slug,
//! so ids differ between runs while relations stay intact.

use std::collections::{HashMap, HashSet};

use ongo_core::{
    Campaign, CampaignId, Category, CategoryId, Price, Product, ProductId, Slug, SlugError,
    Store, StoreId,
};
use thiserror::Error;

/// Errors raised while turning a fixture into catalog records.
#[derive(Debug, Error)]
pub enum SeedError {
    /// A slug in the fixture is not URL-safe.
    #[error("invalid slug {slug:?}: {source}")]
    InvalidSlug {
        slug: String,
        #[source]
        source: SlugError,
    },
    /// Two categories share a slug.
    #[error("duplicate category slug: {0}")]
    DuplicateCategorySlug(String),
    /// Two products share a slug.
    #[error("duplicate product slug: {0}")]
    DuplicateProductSlug(String),
    /// A product names a category slug that is not in the fixture.
    #[error("product {product} references unknown category {category}")]
    UnknownCategory { product: String, category: String },
}

/// Category record without an id.
#[derive(Debug, Clone)]
pub struct CategorySeed {
    pub name: &'static str,
    pub slug: &'static str,
    pub description: Option<&'static str>,
    pub image_url: Option<&'static str>,
}

/// Product record without an id; the category is referenced by slug.
#[derive(Debug, Clone)]
pub struct ProductSeed {
    pub name: &'static str,
    pub slug: &'static str,
    pub description: Option<&'static str>,
    pub price: Option<i64>,
    pub category_slug: Option<&'static str>,
    pub image_url: Option<&'static str>,
    pub available: bool,
}

/// Campaign record without an id.
#[derive(Debug, Clone)]
pub struct CampaignSeed {
    pub title: &'static str,
    pub description: Option<&'static str>,
    pub price: Option<i64>,
    pub original_price: Option<i64>,
    pub image_url: Option<&'static str>,
    pub campaign_type: Option<&'static str>,
    pub active: bool,
}

/// Store record without an id.
#[derive(Debug, Clone)]
pub struct StoreSeed {
    pub name: &'static str,
    pub address: &'static str,
    pub city: &'static str,
    pub postal_code: &'static str,
    pub phone: Option<&'static str>,
    pub coordinates: Option<(f64, f64)>,
    pub opening_hours: Option<&'static str>,
}

/// A complete seed dataset.
#[derive(Debug, Clone, Default)]
pub struct Fixture {
    pub categories: Vec<CategorySeed>,
    pub products: Vec<ProductSeed>,
    pub campaigns: Vec<CampaignSeed>,
    pub stores: Vec<StoreSeed>,
}

const IMG_GARDEN: &str = "https://images.unsplash.com/photo-1416879595882-3373a0480b5b?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&h=300";
const IMG_CLEANING: &str = "https://images.unsplash.com/photo-1563453392212-326f5d854daa?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&h=300";
const IMG_KITCHEN: &str = "https://images.unsplash.com/photo-1556909114-f6e7ad7d3136?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&h=300";
const IMG_OUTDOORS: &str = "https://images.unsplash.com/photo-1504280390367-361c6d9f38f4?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&h=300";
const IMG_BATHROOM: &str = "https://images.unsplash.com/photo-1620626011761-996317b8d101?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&h=300";
const IMG_STORAGE: &str = "https://images.unsplash.com/photo-1449824913935-59a10b8d2000?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&h=300";
const IMG_STORAGE_DEAL: &str = "https://images.unsplash.com/photo-1586023492125-27b2c045efd7?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&h=300";

const STANDARD_HOURS: &str = "Mån-Fre 10-19, Lör 10-17, Sön 11-16";

impl Fixture {
    /// The dataset the storefront ships with: 6 categories, 3 products,
    /// 3 campaigns and 6 stores.
    #[must_use]
    pub fn reference() -> Self {
        Self {
            categories: reference_categories(),
            products: reference_products(),
            campaigns: reference_campaigns(),
            stores: reference_stores(),
        }
    }
}

fn category(
    name: &'static str,
    slug: &'static str,
    description: &'static str,
    image_url: &'static str,
) -> CategorySeed {
    CategorySeed {
        name,
        slug,
        description: Some(description),
        image_url: Some(image_url),
    }
}

fn reference_categories() -> Vec<CategorySeed> {
    vec![
        category("Trädgård", "tradgard", "Allt för utomhus", IMG_GARDEN),
        category("Städ", "stad", "Rengöring & skötsel", IMG_CLEANING),
        category("Kök", "kok", "Matlagning & förvaring", IMG_KITCHEN),
        category("Fritid", "fritid", "Camping & utflykt", IMG_OUTDOORS),
        category("Badrum", "badrum", "Sanitärt & tillbehör", IMG_BATHROOM),
        category("Förvaring", "forvaring", "Organisation & ordning", IMG_STORAGE),
    ]
}

fn reference_products() -> Vec<ProductSeed> {
    vec![
        ProductSeed {
            name: "Trädgårdsset",
            slug: "tradgardsset",
            description: Some("Komplett set med de viktigaste verktygen för trädgården"),
            price: Some(299),
            category_slug: Some("tradgard"),
            image_url: Some(IMG_GARDEN),
            available: true,
        },
        ProductSeed {
            name: "Köksredskap",
            slug: "koksredskap",
            description: Some("Kvalitetsverktyg som gör matlagningen enklare och roligare"),
            price: Some(149),
            category_slug: Some("kok"),
            image_url: Some(IMG_KITCHEN),
            available: true,
        },
        ProductSeed {
            name: "Förvaringslådor",
            slug: "forvaringslador",
            description: Some("Smarta förvaringslösningar för hemmet"),
            price: Some(49),
            category_slug: Some("forvaring"),
            image_url: Some(IMG_STORAGE),
            available: true,
        },
    ]
}

fn reference_campaigns() -> Vec<CampaignSeed> {
    vec![
        CampaignSeed {
            title: "Förvaringslösningar",
            description: Some("Skapa ordning hemma med våra smarta förvaringslösningar"),
            price: Some(49),
            original_price: Some(89),
            image_url: Some(IMG_STORAGE_DEAL),
            campaign_type: Some("KAMPANJ"),
            active: true,
        },
        CampaignSeed {
            title: "Trädgårdsset",
            description: Some("Komplett set med de viktigaste verktygen för trädgården"),
            price: Some(299),
            original_price: Some(449),
            image_url: Some(IMG_GARDEN),
            campaign_type: Some("SPECIALPRIS"),
            active: true,
        },
        CampaignSeed {
            title: "Köksredskap",
            description: Some("Kvalitetsverktyg som gör matlagningen enklare och roligare"),
            price: Some(149),
            original_price: Some(199),
            image_url: Some(IMG_KITCHEN),
            campaign_type: Some("KUNDFAVORIT"),
            active: true,
        },
    ]
}

fn store(
    city: &'static str,
    name: &'static str,
    address: &'static str,
    postal_code: &'static str,
    phone: &'static str,
    coordinates: (f64, f64),
) -> StoreSeed {
    StoreSeed {
        name,
        address,
        city,
        postal_code,
        phone: Some(phone),
        coordinates: Some(coordinates),
        opening_hours: Some(STANDARD_HOURS),
    }
}

fn reference_stores() -> Vec<StoreSeed> {
    vec![
        store("Stockholm", "ONGO Stockholm", "Kungsgatan 12", "111 43", "08-123 456 78", (59.3293, 18.0686)),
        store("Göteborg", "ONGO Göteborg", "Avenyn 45", "411 36", "031-123 456 78", (57.7089, 11.9746)),
        store("Malmö", "ONGO Malmö", "Södergatan 32", "211 34", "040-123 456 78", (55.6059, 13.0007)),
        store("Uppsala", "ONGO Uppsala", "Stora Torget 8", "753 10", "018-123 456 78", (59.8586, 17.6389)),
        store("Västerås", "ONGO Västerås", "Kopparbergsvägen 15", "722 15", "021-123 456 78", (59.6099, 16.5448)),
        store("Sundsvall", "ONGO Sundsvall", "Stora Gatan 22", "852 30", "060-123 456 78", (62.3908, 17.3069)),
    ]
}

fn parse_slug(raw: &str) -> Result<Slug, SeedError> {
    Slug::parse(raw).map_err(|source| SeedError::InvalidSlug {
        slug: raw.to_string(),
        source,
    })
}

/// Records produced from a fixture, in fixture order.
pub type Seeded = (Vec<Category>, Vec<Product>, Vec<Campaign>, Vec<Store>);

/// Turn a fixture into catalog records with freshly generated ids.
///
/// # Errors
///
/// Returns `SeedError` if a slug is malformed or duplicated, or if a product
/// references a category slug the fixture does not define.
pub fn build(fixture: &Fixture) -> Result<Seeded, SeedError> {
    let mut category_ids: HashMap<&str, CategoryId> = HashMap::new();
    let mut categories = Vec::with_capacity(fixture.categories.len());
    for seed in &fixture.categories {
        let slug = parse_slug(seed.slug)?;
        let id = CategoryId::generate();
        if category_ids.insert(seed.slug, id).is_some() {
            return Err(SeedError::DuplicateCategorySlug(seed.slug.to_string()));
        }
        categories.push(Category {
            id,
            name: seed.name.to_string(),
            slug,
            description: seed.description.map(str::to_string),
            image_url: seed.image_url.map(str::to_string),
        });
    }

    let mut product_slugs: HashSet<&str> = HashSet::new();
    let mut products = Vec::with_capacity(fixture.products.len());
    for seed in &fixture.products {
        let slug = parse_slug(seed.slug)?;
        if !product_slugs.insert(seed.slug) {
            return Err(SeedError::DuplicateProductSlug(seed.slug.to_string()));
        }
        let category_id = seed
            .category_slug
            .map(|category| {
                category_ids
                    .get(category)
                    .copied()
                    .ok_or_else(|| SeedError::UnknownCategory {
                        product: seed.slug.to_string(),
                        category: category.to_string(),
                    })
            })
            .transpose()?;
        products.push(Product {
            id: ProductId::generate(),
            name: seed.name.to_string(),
            slug,
            description: seed.description.map(str::to_string),
            price: seed.price.map(Price::from_kronor),
            category_id,
            image_url: seed.image_url.map(str::to_string),
            available: seed.available,
        });
    }

    let campaigns = fixture
        .campaigns
        .iter()
        .map(|seed| Campaign {
            id: CampaignId::generate(),
            title: seed.title.to_string(),
            description: seed.description.map(str::to_string),
            price: seed.price.map(Price::from_kronor),
            original_price: seed.original_price.map(Price::from_kronor),
            image_url: seed.image_url.map(str::to_string),
            campaign_type: seed.campaign_type.map(str::to_string),
            active: seed.active,
        })
        .collect();

    let stores = fixture
        .stores
        .iter()
        .map(|seed| Store {
            id: StoreId::generate(),
            name: seed.name.to_string(),
            address: seed.address.to_string(),
            city: seed.city.to_string(),
            postal_code: seed.postal_code.to_string(),
            phone: seed.phone.map(str::to_string),
            latitude: seed.coordinates.map(|(lat, _)| lat),
            longitude: seed.coordinates.map(|(_, lng)| lng),
            opening_hours: seed.opening_hours.map(str::to_string),
        })
        .collect();

    Ok((categories, products, campaigns, stores))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_fixture_counts() {
        let (categories, products, campaigns, stores) = build(&Fixture::reference()).unwrap();
        assert_eq!(categories.len(), 6);
        assert_eq!(products.len(), 3);
        assert_eq!(campaigns.len(), 3);
        assert_eq!(stores.len(), 6);
    }

    #[test]
    fn test_ids_differ_between_builds() {
        let (first, ..) = build(&Fixture::reference()).unwrap();
        let (second, ..) = build(&Fixture::reference()).unwrap();
        assert_ne!(
            first.first().map(|c| c.id),
            second.first().map(|c| c.id)
        );
    }

    #[test]
    fn test_product_category_resolved_by_slug() {
        let (categories, products, ..) = build(&Fixture::reference()).unwrap();
        let kok = categories.iter().find(|c| c.slug == *"kok").unwrap();
        let redskap = products.iter().find(|p| p.slug == *"koksredskap").unwrap();
        assert_eq!(redskap.category_id, Some(kok.id));
    }

    #[test]
    fn test_duplicate_category_slug_rejected() {
        let mut fixture = Fixture::reference();
        fixture.categories.push(category("Trädgård 2", "tradgard", "", ""));
        assert!(matches!(
            build(&fixture),
            Err(SeedError::DuplicateCategorySlug(slug)) if slug == "tradgard"
        ));
    }

    #[test]
    fn test_duplicate_product_slug_rejected() {
        let mut fixture = Fixture::reference();
        let again = fixture.products.first().cloned().unwrap();
        fixture.products.push(again);
        assert!(matches!(
            build(&fixture),
            Err(SeedError::DuplicateProductSlug(_))
        ));
    }

    #[test]
    fn test_unknown_category_rejected() {
        let mut fixture = Fixture::reference();
        if let Some(product) = fixture.products.first_mut() {
            product.category_slug = Some("verktyg");
        }
        assert!(matches!(
            build(&fixture),
            Err(SeedError::UnknownCategory { category, .. }) if category == "verktyg"
        ));
    }

    #[test]
    fn test_invalid_slug_rejected() {
        let mut fixture = Fixture::default();
        fixture.categories.push(category("Kök", "Kök", "", ""));
        assert!(matches!(build(&fixture), Err(SeedError::InvalidSlug { .. })));
    }

    #[test]
    fn test_uncategorised_product_allowed() {
        let mut fixture = Fixture::reference();
        if let Some(product) = fixture.products.first_mut() {
            product.category_slug = None;
            product.price = None;
        }
        let (_, products, ..) = build(&fixture).unwrap();
        let first = products.first().unwrap();
        assert_eq!(first.category_id, None);
        assert_eq!(first.price, None);
    }
}
