//! Server-side API backend and business logic.
//!
//! This module contains the complete backend of the club directory, including API
//! endpoints, business logic, data access, and infrastructure. The backend uses Axum
//! as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Validation, orchestration and audit logging
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database connection pool)
//! - **Startup** (`startup`) - Tracing setup, database connection and migrations
//! - **Router** (`router`) - Route registration, OpenAPI document and middleware
//! - **Utilities** (`util/`) - Parsing helpers
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes it to a controller
//! 2. **Controller** converts the DTO to params and calls a service
//! 3. **Service** validates input and orchestrates repository calls
//! 4. **Data** queries the database and converts entities to domain models
//! 5. **Service** records the mutation in the audit log and returns a domain model
//! 6. **Controller** converts the domain model to a DTO inside the response envelope

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
