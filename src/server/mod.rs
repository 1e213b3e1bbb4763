//! Server-side API backend and business logic.
//!
//! The backend uses Axum as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Business rules between controllers and storage
//! - **Data Layer** (`data/`) - Repository trait and its SeaORM implementation
//! - **Model Layer** (`model/`) - Operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state holding the service
//! - **Startup** (`startup`) - Tracing setup, database connection and migrations
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes it to a controller
//! 2. **Controller** parses the id and body, then calls the service
//! 3. **Service** applies defaults and partial updates, calls the repository
//! 4. **Data** queries the database, hiding soft-deleted rows
//! 5. **Controller** maps the result or error to a status code and JSON body

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod extract;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;

#[cfg(test)]
mod test_support;
