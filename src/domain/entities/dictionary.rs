//! Dictionary entity and repository trait.
//!
//! Maps to the `dictionaries` table in the database schema.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::AppError;

/// A dictionary record: a caller-supplied code and description under a
/// system-assigned identifier.
///
/// Maps to the `dictionaries` table:
/// - id: UUID PRIMARY KEY (v7, time ordered)
/// - code: TEXT NOT NULL
/// - description: TEXT NOT NULL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dictionary {
    /// Assigned once at creation and never changed
    pub id: Uuid,

    /// Short identifier supplied by the caller
    pub code: String,

    /// Free-text description supplied by the caller
    pub description: String,
}

impl Dictionary {
    /// Create a new record with a freshly generated identifier.
    ///
    /// Version 7 ids sort by creation time, which gives listings a stable
    /// order without a separate timestamp column.
    pub fn new(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            code: code.into(),
            description: description.into(),
        }
    }
}

/// Repository trait for Dictionary data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DictionaryRepository: Send + Sync {
    /// Persist a new record and return it as stored.
    async fn create(&self, dictionary: &Dictionary) -> Result<Dictionary, AppError>;

    /// All records, oldest first.
    async fn find_all(&self) -> Result<Vec<Dictionary>, AppError>;

    /// Find a record by id. Absence is `Ok(None)`, not an error.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Dictionary>, AppError>;

    /// Delete a record by id.
    ///
    /// Returns `false` when no record with that id existed.
    async fn delete(&self, id: Uuid) -> Result<bool, AppError>;
}
