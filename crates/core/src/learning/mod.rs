//! Learning resources catalogue.

mod learning_model;
mod learning_service;
mod learning_traits;

pub use learning_model::{
    LearningResource, NewLearningResource, ResourceFilter, ALL_CATEGORIES, LEARNING_CATEGORIES,
};
pub use learning_service::LearningService;
pub use learning_traits::{LearningResourceRepositoryTrait, LearningServiceTrait};
