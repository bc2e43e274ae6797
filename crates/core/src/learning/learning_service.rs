use super::learning_model::{
    LearningResource, NewLearningResource, ResourceFilter, LEARNING_CATEGORIES,
};
use super::learning_traits::{LearningResourceRepositoryTrait, LearningServiceTrait};
use crate::errors::{Result, ValidationError};
use async_trait::async_trait;
use std::sync::Arc;

pub struct LearningService {
    repository: Arc<dyn LearningResourceRepositoryTrait>,
}

impl LearningService {
    pub fn new(repository: Arc<dyn LearningResourceRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl LearningServiceTrait for LearningService {
    fn get_categories(&self) -> Vec<String> {
        LEARNING_CATEGORIES.iter().map(|c| c.to_string()).collect()
    }

    fn get_resources(&self, filter: &ResourceFilter) -> Result<Vec<LearningResource>> {
        Ok(self
            .repository
            .list_resources()?
            .into_iter()
            .filter(|resource| filter.matches(resource))
            .collect())
    }

    async fn add_resource(&self, new_resource: NewLearningResource) -> Result<LearningResource> {
        if new_resource.title.trim().is_empty() {
            return Err(ValidationError::MissingField("title".to_string()).into());
        }
        if new_resource.url.trim().is_empty() {
            return Err(ValidationError::MissingField("url".to_string()).into());
        }
        if !LEARNING_CATEGORIES.contains(&new_resource.category.as_str()) {
            return Err(ValidationError::InvalidInput(format!(
                "Unknown category '{}'",
                new_resource.category
            ))
            .into());
        }
        self.repository.insert(new_resource).await
    }
}
