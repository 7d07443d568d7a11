//! Dictionary Service
//!
//! Create, list, look up, and delete dictionary records. Absence of a record
//! is reported as [`DictionaryError::NotFound`] rather than an empty value.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Dictionary, DictionaryRepository};
use crate::infrastructure::metrics::record_dictionary_operation;
use crate::infrastructure::repositories::{InMemoryDictionaryRepository, PgDictionaryRepository};

/// Dictionary service trait
#[async_trait]
pub trait DictionaryService: Send + Sync {
    /// Create a record with a freshly generated id.
    async fn create_dictionary(
        &self,
        request: CreateDictionaryDto,
    ) -> Result<DictionaryDto, DictionaryError>;

    /// All records, in creation order.
    async fn get_all_dictionaries(&self) -> Result<Vec<DictionaryDto>, DictionaryError>;

    /// Get a record by id.
    async fn get_dictionary(&self, id: Uuid) -> Result<DictionaryDto, DictionaryError>;

    /// Delete a record by id. Deleting an absent id is `NotFound`.
    async fn delete_dictionary(&self, id: Uuid) -> Result<(), DictionaryError>;
}

/// Input for creating a record
#[derive(Debug, Clone)]
pub struct CreateDictionaryDto {
    pub code: String,
    pub description: String,
}

/// Dictionary data transfer object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryDto {
    pub id: Uuid,
    pub code: String,
    pub description: String,
}

impl From<Dictionary> for DictionaryDto {
    fn from(dictionary: Dictionary) -> Self {
        Self {
            id: dictionary.id,
            code: dictionary.code,
            description: dictionary.description,
        }
    }
}

/// Dictionary service errors
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("Dictionary record not found with id: {0}")]
    NotFound(Uuid),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DictionaryError {
    fn outcome(&self) -> &'static str {
        match self {
            DictionaryError::NotFound(_) => "not_found",
            DictionaryError::Internal(_) => "error",
        }
    }
}

/// DictionaryService implementation
pub struct DictionaryServiceImpl<R>
where
    R: DictionaryRepository,
{
    dictionary_repo: Arc<R>,
}

impl<R> DictionaryServiceImpl<R>
where
    R: DictionaryRepository,
{
    pub fn new(dictionary_repo: Arc<R>) -> Self {
        Self { dictionary_repo }
    }
}

/// Records the outcome of `result` under `operation` and passes it through.
fn observe<T>(operation: &str, result: Result<T, DictionaryError>) -> Result<T, DictionaryError> {
    match &result {
        Ok(_) => record_dictionary_operation(operation, "success"),
        Err(e) => record_dictionary_operation(operation, e.outcome()),
    }
    result
}

#[async_trait]
impl<R> DictionaryService for DictionaryServiceImpl<R>
where
    R: DictionaryRepository + 'static,
{
    async fn create_dictionary(
        &self,
        request: CreateDictionaryDto,
    ) -> Result<DictionaryDto, DictionaryError> {
        let dictionary = Dictionary::new(request.code, request.description);

        let result = self
            .dictionary_repo
            .create(&dictionary)
            .await
            .map(DictionaryDto::from)
            .map_err(|e| DictionaryError::Internal(e.to_string()));

        observe("create", result)
    }

    async fn get_all_dictionaries(&self) -> Result<Vec<DictionaryDto>, DictionaryError> {
        let result = self
            .dictionary_repo
            .find_all()
            .await
            .map(|all| all.into_iter().map(DictionaryDto::from).collect())
            .map_err(|e| DictionaryError::Internal(e.to_string()));

        observe("list", result)
    }

    async fn get_dictionary(&self, id: Uuid) -> Result<DictionaryDto, DictionaryError> {
        let result = self
            .dictionary_repo
            .find_by_id(id)
            .await
            .map_err(|e| DictionaryError::Internal(e.to_string()))
            .and_then(|found| found.ok_or(DictionaryError::NotFound(id)))
            .map(DictionaryDto::from);

        observe("get", result)
    }

    async fn delete_dictionary(&self, id: Uuid) -> Result<(), DictionaryError> {
        let result = async {
            // Presence is checked here rather than relying on the store's
            // delete semantics.
            self.dictionary_repo
                .find_by_id(id)
                .await
                .map_err(|e| DictionaryError::Internal(e.to_string()))?
                .ok_or(DictionaryError::NotFound(id))?;

            let removed = self
                .dictionary_repo
                .delete(id)
                .await
                .map_err(|e| DictionaryError::Internal(e.to_string()))?;

            // A concurrent delete can win between the lookup and the delete.
            if !removed {
                return Err(DictionaryError::NotFound(id));
            }
            Ok::<(), DictionaryError>(())
        }
        .await;

        observe("delete", result)
    }
}

/// Service backed by PostgreSQL.
pub type PgDictionaryService = DictionaryServiceImpl<PgDictionaryRepository>;

/// Service backed by the in-memory store.
pub type InMemoryDictionaryService = DictionaryServiceImpl<InMemoryDictionaryRepository>;
