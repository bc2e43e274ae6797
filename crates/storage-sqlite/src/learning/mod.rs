//! Local backend storage for learning resources.

mod repository;

pub use repository::{LearningResourceDB, LearningResourceRepository};
