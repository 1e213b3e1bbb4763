//! Request and response shapes exposed at the HTTP boundary.

pub mod api;
pub mod todo;
