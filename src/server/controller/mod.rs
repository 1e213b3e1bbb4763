//! HTTP request handlers.
//!
//! Controllers parse path and body input, call the service layer and map results to
//! status codes and DTOs. They hold no business rules.

pub mod todo;
