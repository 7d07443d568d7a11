//! # Domain Layer
//!
//! The domain layer holds the dictionary entity and the repository contract
//! the rest of the service is written against. It has no knowledge of HTTP
//! or of any particular storage engine.

pub mod entities;

pub use entities::*;
