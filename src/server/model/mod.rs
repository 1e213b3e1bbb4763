//! Server-side domain models and parameter types.
//!
//! Entity models are converted to response DTOs here, and operation parameters carry
//! already-defaulted values from the service layer into the repository.

pub mod todo;
