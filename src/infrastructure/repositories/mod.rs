//! Repository Implementations
//!
//! Implementations of the domain repository traits.
//!
//! ## Available Repositories
//!
//! - **PgDictionaryRepository** - PostgreSQL-backed, `dictionaries` table
//! - **InMemoryDictionaryRepository** - process-local store for the `memory`
//!   storage backend and for tests
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use sqlx::PgPool;
//! use crate::infrastructure::repositories::PgDictionaryRepository;
//!
//! async fn setup_repositories(pool: PgPool) {
//!     let dictionary_repo = PgDictionaryRepository::new(pool.clone());
//! }
//! ```

pub mod dictionary_repository;
pub mod memory_repository;

pub use dictionary_repository::{DictionaryEntity, PgDictionaryRepository};
pub use memory_repository::InMemoryDictionaryRepository;
