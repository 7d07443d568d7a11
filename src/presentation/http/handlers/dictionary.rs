//! Dictionary Handlers
//!
//! HTTP handlers for the `/dictionaries` endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::application::dto::{CreateDictionaryRequest, DictionaryResponse};
use crate::application::services::DictionaryError;
use crate::shared::error::AppError;
use crate::startup::AppState;

impl From<DictionaryError> for AppError {
    fn from(err: DictionaryError) -> Self {
        match err {
            DictionaryError::NotFound(_) => AppError::NotFound(err.to_string()),
            DictionaryError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

/// Parse a path segment into a dictionary id.
fn parse_dictionary_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::BadRequest(format!("Invalid dictionary ID: {}", raw)))
}

/// Create a new dictionary record
pub async fn create_dictionary(
    State(state): State<AppState>,
    Json(body): Json<CreateDictionaryRequest>,
) -> Result<Json<DictionaryResponse>, AppError> {
    let dictionary = state
        .dictionary_service
        .create_dictionary(body.into())
        .await?;

    tracing::info!(id = %dictionary.id, code = %dictionary.code, "Dictionary record created");

    Ok(Json(DictionaryResponse::from(dictionary)))
}

/// List all dictionary records
pub async fn get_all_dictionaries(
    State(state): State<AppState>,
) -> Result<Json<Vec<DictionaryResponse>>, AppError> {
    let dictionaries = state.dictionary_service.get_all_dictionaries().await?;

    Ok(Json(
        dictionaries
            .into_iter()
            .map(DictionaryResponse::from)
            .collect(),
    ))
}

/// Get dictionary record by ID
pub async fn get_dictionary(
    State(state): State<AppState>,
    Path(dictionary_id): Path<String>,
) -> Result<Json<DictionaryResponse>, AppError> {
    let id = parse_dictionary_id(&dictionary_id)?;

    let dictionary = state.dictionary_service.get_dictionary(id).await?;

    Ok(Json(DictionaryResponse::from(dictionary)))
}

/// Delete dictionary record by ID
pub async fn delete_dictionary(
    State(state): State<AppState>,
    Path(dictionary_id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = parse_dictionary_id(&dictionary_id)?;

    state.dictionary_service.delete_dictionary(id).await?;

    tracing::info!(%id, "Dictionary record deleted");

    Ok(StatusCode::NO_CONTENT)
}
