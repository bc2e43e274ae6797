use async_trait::async_trait;
use std::sync::Arc;

use crate::kv::KeyValueStore;
use tradejournal_core::errors::Result;
use tradejournal_core::journal::{JournalState, JournalStateRepositoryTrait};

const STATE_KEY_PREFIX: &str = "journal-state:";

pub fn state_key(owner_id: &str) -> String {
    format!("{}{}", STATE_KEY_PREFIX, owner_id)
}

pub struct JournalStateRepository {
    kv: Arc<KeyValueStore>,
}

impl JournalStateRepository {
    pub fn new(kv: Arc<KeyValueStore>) -> Self {
        Self { kv }
    }
}

#[async_trait]
impl JournalStateRepositoryTrait for JournalStateRepository {
    fn load_state(&self, owner_id: &str) -> Result<Option<JournalState>> {
        self.kv.get(&state_key(owner_id))
    }

    async fn save_state(&self, state: &JournalState) -> Result<()> {
        self.kv.set(&state_key(&state.owner_id), state).await
    }
}
