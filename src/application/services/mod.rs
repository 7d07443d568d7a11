//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **DictionaryService**: create, list, get, and delete dictionary records

pub mod dictionary_service;

pub use dictionary_service::{
    CreateDictionaryDto, DictionaryDto, DictionaryError, DictionaryService,
    DictionaryServiceImpl, InMemoryDictionaryService, PgDictionaryService,
};
