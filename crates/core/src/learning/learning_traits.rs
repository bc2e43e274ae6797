use crate::errors::Result;
use crate::learning::learning_model::{LearningResource, NewLearningResource, ResourceFilter};
use async_trait::async_trait;

/// Trait for learning resource repository operations
#[async_trait]
pub trait LearningResourceRepositoryTrait: Send + Sync {
    fn list_resources(&self) -> Result<Vec<LearningResource>>;
    async fn insert(&self, new_resource: NewLearningResource) -> Result<LearningResource>;
}

/// Trait for learning resource service operations
#[async_trait]
pub trait LearningServiceTrait: Send + Sync {
    fn get_categories(&self) -> Vec<String>;
    fn get_resources(&self, filter: &ResourceFilter) -> Result<Vec<LearningResource>>;
    async fn add_resource(&self, new_resource: NewLearningResource) -> Result<LearningResource>;
}
