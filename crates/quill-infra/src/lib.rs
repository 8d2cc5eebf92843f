//! # Quill Infrastructure
//!
//! Concrete record stores implementing the ports defined in `quill-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `postgres` - PostgreSQL record store via SeaORM

pub mod database;
pub mod memory;

// Re-exports - In-Memory
pub use memory::{MemoryCommentRepository, MemoryPostRepository, MemoryStore};

pub use database::DatabaseConfig;

#[cfg(feature = "postgres")]
pub use database::{DatabaseConnections, PostgresCommentRepository, PostgresPostRepository};
