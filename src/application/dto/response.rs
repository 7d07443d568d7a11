//! Response DTOs
//!
//! Data structures for API response bodies.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::services::DictionaryDto;

/// Dictionary response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryResponse {
    pub id: Uuid,
    pub code: String,
    pub description: String,
}

impl From<DictionaryDto> for DictionaryResponse {
    fn from(dto: DictionaryDto) -> Self {
        Self {
            id: dto.id,
            code: dto.code,
            description: dto.description,
        }
    }
}
