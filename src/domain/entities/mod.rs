//! # Domain Entities
//!
//! Core domain entities of the dictionary service.
//!
//! - **Dictionary**: a code/description record identified by a UUID
//!
//! ## Repository Traits
//!
//! Each entity has an associated repository trait defining data access operations.
//! These traits are implemented in the infrastructure layer, following the
//! dependency inversion principle.

mod dictionary;

pub use dictionary::{Dictionary, DictionaryRepository};

#[cfg(test)]
pub use dictionary::MockDictionaryRepository;
