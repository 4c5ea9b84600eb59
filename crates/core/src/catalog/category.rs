//! Product category.

use serde::{Deserialize, Serialize};

use crate::types::{CategoryId, Slug};

/// A browsable product category, e.g. "Trädgård".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub slug: Slug,
    pub description: Option<String>,
    pub image_url: Option<String>,
}
