//! Todo API Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the todo
//! API. This crate offers a builder pattern for creating test contexts with in-memory SQLite
//! databases and factories for seeding rows.
//!
//! # Overview
//!
//! The test utilities consist of these components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders inserting rows with sensible defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_todo_operations() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_todo_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let todo = factory::create_todo(db).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
