//! SeaORM entity models for the todo database.

pub mod prelude;

pub mod todo;
