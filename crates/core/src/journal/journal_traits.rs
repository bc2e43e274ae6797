use crate::errors::Result;
use crate::journal::journal_model::JournalState;
use async_trait::async_trait;

/// Persists the last computed journal state per owner.
#[async_trait]
pub trait JournalStateRepositoryTrait: Send + Sync {
    fn load_state(&self, owner_id: &str) -> Result<Option<JournalState>>;
    async fn save_state(&self, state: &JournalState) -> Result<()>;
}
