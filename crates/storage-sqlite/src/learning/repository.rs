use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::warn;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::backend::{LocalBackend, LEARNING_RESOURCES_TABLE};
use crate::errors::{IntoCore, StorageError};
use tradejournal_core::errors::Result;
use tradejournal_core::learning::{
    LearningResource, LearningResourceRepositoryTrait, NewLearningResource,
};

/// Learning resource row as stored in the `learning_resources` table.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LearningResourceDB {
    #[serde(default)]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub url: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub category: String,
    #[serde(default)]
    pub created_at: String,
}

impl From<NewLearningResource> for LearningResourceDB {
    fn from(resource: NewLearningResource) -> Self {
        Self {
            id: String::new(),
            title: resource.title,
            description: resource.description,
            url: resource.url,
            image_url: resource.image_url,
            category: resource.category,
            created_at: String::new(),
        }
    }
}

impl TryFrom<LearningResourceDB> for LearningResource {
    type Error = StorageError;

    fn try_from(db: LearningResourceDB) -> std::result::Result<Self, Self::Error> {
        let created_at = DateTime::parse_from_rfc3339(&db.created_at)
            .map_err(|e| {
                StorageError::InvalidRow(format!("resource {}: bad created_at: {}", db.id, e))
            })?
            .with_timezone(&Utc);
        Ok(Self {
            id: db.id,
            title: db.title,
            description: db.description,
            url: db.url,
            image_url: db.image_url,
            category: db.category,
            created_at,
        })
    }
}

pub struct LearningResourceRepository {
    backend: Arc<LocalBackend>,
}

impl LearningResourceRepository {
    pub fn new(backend: Arc<LocalBackend>) -> Self {
        Self { backend }
    }
}

#[async_trait]
impl LearningResourceRepositoryTrait for LearningResourceRepository {
    fn list_resources(&self) -> Result<Vec<LearningResource>> {
        let rows = self.backend.select_all(LEARNING_RESOURCES_TABLE)?;
        Ok(rows
            .into_iter()
            .filter_map(|row| {
                serde_json::from_value::<LearningResourceDB>(row)
                    .map_err(StorageError::from)
                    .and_then(LearningResource::try_from)
                    .map_err(|e| warn!("Skipping unreadable learning resource: {}", e))
                    .ok()
            })
            .collect())
    }

    async fn insert(&self, new_resource: NewLearningResource) -> Result<LearningResource> {
        let mut row = serde_json::to_value(LearningResourceDB::from(new_resource)).into_core()?;
        if let Some(fields) = row.as_object_mut() {
            // Assigned by the backend.
            fields.remove("id");
            fields.remove("created_at");
        }
        let stored = self.backend.insert(LEARNING_RESOURCES_TABLE, row).await?;
        let db: LearningResourceDB = serde_json::from_value(stored).into_core()?;
        Ok(LearningResource::try_from(db)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{open, spawn_writer};
    use tradejournal_core::learning::{LearningService, LearningServiceTrait, ResourceFilter};

    #[tokio::test]
    async fn test_resources_are_listed_through_the_service() {
        let dir = tempfile::tempdir().unwrap();
        let db = open(dir.path().join("learn.db").to_str().unwrap()).unwrap();
        let backend = Arc::new(LocalBackend::new(db.clone(), spawn_writer(db)));
        let service = LearningService::new(Arc::new(LearningResourceRepository::new(backend)));

        let added = service
            .add_resource(NewLearningResource {
                title: "Risk per Trade".to_string(),
                description: "Keep losses small".to_string(),
                url: "https://example.com/risk".to_string(),
                image_url: None,
                category: "Risk Management".to_string(),
            })
            .await
            .unwrap();
        assert!(!added.id.is_empty());

        let filter = ResourceFilter {
            category: Some("Risk Management".to_string()),
            query: Some("losses".to_string()),
        };
        assert_eq!(service.get_resources(&filter).unwrap(), vec![added]);
    }
}
