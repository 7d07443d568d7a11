//! Request DTOs
//!
//! Data structures for API request bodies.

use serde::{Deserialize, Serialize};

use crate::application::services::CreateDictionaryDto;

/// Create dictionary request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDictionaryRequest {
    pub code: String,
    pub description: String,
}

impl From<CreateDictionaryRequest> for CreateDictionaryDto {
    fn from(request: CreateDictionaryRequest) -> Self {
        Self {
            code: request.code,
            description: request.description,
        }
    }
}
