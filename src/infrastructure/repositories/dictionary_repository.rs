//! Dictionary Repository Implementation
//!
//! PostgreSQL implementation of dictionary record storage.

use std::time::Instant;

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::{Dictionary, DictionaryRepository};
use crate::infrastructure::metrics;
use crate::shared::error::AppError;

const TABLE: &str = "dictionaries";

/// Row type for the `dictionaries` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct DictionaryEntity {
    pub id: Uuid,
    pub code: String,
    pub description: String,
}

impl From<DictionaryEntity> for Dictionary {
    fn from(entity: DictionaryEntity) -> Self {
        Self {
            id: entity.id,
            code: entity.code,
            description: entity.description,
        }
    }
}

/// PostgreSQL implementation of the DictionaryRepository.
pub struct PgDictionaryRepository {
    pool: PgPool,
}

impl PgDictionaryRepository {
    /// Creates a new PgDictionaryRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DictionaryRepository for PgDictionaryRepository {
    async fn create(&self, dictionary: &Dictionary) -> Result<Dictionary, AppError> {
        let start = Instant::now();
        let created = sqlx::query_as::<_, DictionaryEntity>(
            r#"
            INSERT INTO dictionaries (id, code, description)
            VALUES ($1, $2, $3)
            RETURNING id, code, description
            "#,
        )
        .bind(dictionary.id)
        .bind(&dictionary.code)
        .bind(&dictionary.description)
        .fetch_one(&self.pool)
        .await?;
        metrics::record_db_query("insert", TABLE, start.elapsed().as_secs_f64());

        Ok(created.into())
    }

    /// Returns records ordered by id; v7 ids make this creation order.
    async fn find_all(&self) -> Result<Vec<Dictionary>, AppError> {
        let start = Instant::now();
        let rows = sqlx::query_as::<_, DictionaryEntity>(
            r#"
            SELECT id, code, description
            FROM dictionaries
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        metrics::record_db_query("select_all", TABLE, start.elapsed().as_secs_f64());

        Ok(rows.into_iter().map(Dictionary::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Dictionary>, AppError> {
        let start = Instant::now();
        let row = sqlx::query_as::<_, DictionaryEntity>(
            r#"
            SELECT id, code, description
            FROM dictionaries
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        metrics::record_db_query("select", TABLE, start.elapsed().as_secs_f64());

        Ok(row.map(Dictionary::from))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let start = Instant::now();
        let result = sqlx::query("DELETE FROM dictionaries WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        metrics::record_db_query("delete", TABLE, start.elapsed().as_secs_f64());

        Ok(result.rows_affected() > 0)
    }
}
