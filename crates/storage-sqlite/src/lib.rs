//! SQLite storage implementation for the trade journal.
//!
//! This crate provides all persistence for the journal using rusqlite. It
//! implements the repository traits defined in `tradejournal-core` and
//! contains:
//! - Connection management and the single writer actor
//! - A JSON key-value store (`kv_store` table)
//! - The local backend standing in for the remote service (tables as JSON arrays)
//! - Repository implementations for all domain entities
//!
//! # Architecture
//!
//! ```text
//!        core (domain)
//!              │
//!              ▼
//!   storage-sqlite (this crate)
//!     repositories ─► LocalBackend ─┐
//!     repositories ─► KeyValueStore ┤
//!                                   ▼
//!                         SQLite (kv_store)
//! ```

pub mod backend;
pub mod db;
pub mod errors;
pub mod kv;

// Repository implementations
pub mod journal;
pub mod learning;
pub mod reminders;
pub mod trades;
pub mod transactions;

// Re-export database utilities
pub use db::{
    get_connection, get_db_path, init, open, open_in_memory, run_migrations, spawn_writer,
    DbConnection, WriteHandle,
};

pub use backend::LocalBackend;
pub use kv::KeyValueStore;

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

// Re-export from tradejournal-core for convenience
pub use tradejournal_core::errors::{DatabaseError, Error, Result};
