//! In-Memory Dictionary Repository
//!
//! Process-local storage used by the `memory` backend and by tests.
//! Records live in an ordered map keyed by id, so iteration follows
//! creation order for v7 ids.

use std::collections::BTreeMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use uuid::Uuid;

use crate::domain::{Dictionary, DictionaryRepository};
use crate::shared::error::AppError;

/// In-memory implementation of the DictionaryRepository.
#[derive(Default)]
pub struct InMemoryDictionaryRepository {
    records: RwLock<BTreeMap<Uuid, Dictionary>>,
}

impl InMemoryDictionaryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

#[async_trait]
impl DictionaryRepository for InMemoryDictionaryRepository {
    async fn create(&self, dictionary: &Dictionary) -> Result<Dictionary, AppError> {
        let mut records = self.records.write();
        if records.contains_key(&dictionary.id) {
            return Err(AppError::Internal(format!(
                "Duplicate dictionary id {}",
                dictionary.id
            )));
        }
        records.insert(dictionary.id, dictionary.clone());
        Ok(dictionary.clone())
    }

    async fn find_all(&self) -> Result<Vec<Dictionary>, AppError> {
        Ok(self.records.read().values().cloned().collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Dictionary>, AppError> {
        Ok(self.records.read().get(&id).cloned())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        Ok(self.records.write().remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_create_then_find() {
        let repo = InMemoryDictionaryRepository::new();
        let dictionary = Dictionary::new("EN", "English");

        let created = repo.create(&dictionary).await.unwrap();
        assert_eq!(created, dictionary);

        let found = repo.find_by_id(dictionary.id).await.unwrap();
        assert_eq!(found, Some(dictionary));
    }

    #[tokio::test]
    async fn test_find_missing_is_none() {
        let repo = InMemoryDictionaryRepository::new();
        let found = repo.find_by_id(Uuid::now_v7()).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_find_all_in_creation_order() {
        let repo = InMemoryDictionaryRepository::new();
        let first = Dictionary::new("EN", "English");
        let second = Dictionary::new("FR", "French");
        let third = Dictionary::new("EN", "English (duplicate code)");

        for d in [&first, &second, &third] {
            repo.create(d).await.unwrap();
        }

        let all = repo.find_all().await.unwrap();
        assert_eq!(all, vec![first, second, third]);
    }

    #[tokio::test]
    async fn test_delete_reports_presence() {
        let repo = InMemoryDictionaryRepository::new();
        let dictionary = Dictionary::new("EN", "English");
        repo.create(&dictionary).await.unwrap();

        assert!(repo.delete(dictionary.id).await.unwrap());
        assert!(!repo.delete(dictionary.id).await.unwrap());
        assert!(repo.is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_id_rejected() {
        let repo = InMemoryDictionaryRepository::new();
        let dictionary = Dictionary::new("EN", "English");
        repo.create(&dictionary).await.unwrap();

        assert!(repo.create(&dictionary).await.is_err());
        assert_eq!(repo.len(), 1);
    }
}
