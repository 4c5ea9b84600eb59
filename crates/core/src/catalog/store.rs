//! Physical store location.

use serde::{Deserialize, Serialize};

use super::contains_ignore_case;
use crate::types::StoreId;

/// An ONGO store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    pub id: StoreId,
    pub name: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub phone: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub opening_hours: Option<String>,
}

impl Store {
    /// Latitude/longitude pair, only when both halves are known.
    #[must_use]
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) => Some((lat, lng)),
            _ => None,
        }
    }

    /// Google Maps link for the store's coordinates.
    #[must_use]
    pub fn map_url(&self) -> Option<String> {
        self.coordinates()
            .map(|(lat, lng)| format!("https://maps.google.com/?q={lat},{lng}"))
    }

    /// True when `query` is a case-insensitive substring of the city.
    #[must_use]
    pub fn city_matches(&self, query: &str) -> bool {
        contains_ignore_case(&self.city, query)
    }

    /// True when `query` is a case-insensitive substring of the city or the
    /// store name. Used by the store search box.
    #[must_use]
    pub fn matches_search(&self, query: &str) -> bool {
        self.city_matches(query) || contains_ignore_case(&self.name, query)
    }
}
