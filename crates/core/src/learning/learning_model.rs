use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Categories offered by the learning catalogue.
pub const LEARNING_CATEGORIES: [&str; 5] = [
    "Basics",
    "Technical Analysis",
    "Fundamental Analysis",
    "Risk Management",
    "Psychology",
];

/// Pseudo-category selecting every resource.
pub const ALL_CATEGORIES: &str = "All";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LearningResource {
    pub id: String,
    pub title: String,
    pub description: String,
    pub url: String,
    pub image_url: Option<String>,
    pub category: String,
    pub created_at: DateTime<Utc>,
}

/// Input model for adding a resource to the catalogue.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewLearningResource {
    pub title: String,
    pub description: String,
    pub url: String,
    pub image_url: Option<String>,
    pub category: String,
}

/// Category and free-text filter over the catalogue.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResourceFilter {
    pub category: Option<String>,
    pub query: Option<String>,
}

impl ResourceFilter {
    pub fn matches(&self, resource: &LearningResource) -> bool {
        let category_matches = match self.category.as_deref() {
            None | Some(ALL_CATEGORIES) => true,
            Some(category) => resource.category == category,
        };

        let query_matches = match self.query.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(query) => {
                let needle = query.to_lowercase();
                resource.title.to_lowercase().contains(&needle)
                    || resource.description.to_lowercase().contains(&needle)
            }
        };

        category_matches && query_matches
    }
}
