//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! // Create with defaults
//! let todo = factory::create_todo(&db).await?;
//!
//! // Customize fields, including soft-deleted rows
//! let todo = factory::todo::TodoFactory::new(&db)
//!     .title("Buy milk")
//!     .completed(true)
//!     .deleted()
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod todo;

pub use todo::create_todo;
