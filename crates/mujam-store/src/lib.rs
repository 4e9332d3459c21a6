//! [`KeywordStore`] implementations: SQLite for production, an in-memory
//! store for tests and ephemeral runs.
//!
//! [`KeywordStore`]: mujam_core::KeywordStore

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
