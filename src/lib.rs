//! # Dictionary Service Library
//!
//! A REST service for dictionary records: a code and a description under a
//! system-generated UUID. It provides:
//! - `POST/GET /dictionaries` and `GET/DELETE /dictionaries/{id}`
//! - PostgreSQL or in-memory storage, selected by configuration
//! - Health probes and Prometheus metrics
//!
//! ## Architecture
//!
//! - **Domain Layer**: the `Dictionary` entity and repository trait
//! - **Application Layer**: the dictionary service and DTOs
//! - **Infrastructure Layer**: repository implementations, database pool, metrics
//! - **Presentation Layer**: HTTP routes, handlers, and middleware
//!
//! ## Module Structure
//!
//! ```text
//! dictionary_service/
//! +-- config/         Configuration management
//! +-- domain/         Entity and repository trait
//! +-- application/    Service and DTOs
//! +-- infrastructure/ Repositories, database, metrics
//! +-- presentation/   HTTP routes and middleware
//! +-- shared/         Error type
//! ```

// Configuration module
pub mod config;

// Domain layer - Core business logic
pub mod domain;

// Application layer - Business services
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
