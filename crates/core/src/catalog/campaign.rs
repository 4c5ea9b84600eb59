//! Promotional campaign.

use serde::{Deserialize, Serialize};

use crate::types::{CampaignId, Price};

const fn default_active() -> bool {
    true
}

/// A standalone promotional record.
///
/// Campaigns do not reference products or categories. `campaign_type` is a
/// free-form badge; the values in use are `KAMPANJ`, `SPECIALPRIS` and
/// `KUNDFAVORIT`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub id: CampaignId,
    pub title: String,
    pub description: Option<String>,
    pub price: Option<Price>,
    pub original_price: Option<Price>,
    pub image_url: Option<String>,
    pub campaign_type: Option<String>,
    #[serde(default = "default_active")]
    pub active: bool,
}

impl Campaign {
    /// How much the campaign price saves over the original price.
    ///
    /// `None` unless both prices are set and the original is higher.
    #[must_use]
    pub fn discount(&self) -> Option<Price> {
        match (self.price, self.original_price) {
            (Some(price), Some(original)) if original > price => Some(original - price),
            _ => None,
        }
    }
}
