//! Key-value storage for computed journal state.

mod repository;

pub use repository::{state_key, JournalStateRepository};
