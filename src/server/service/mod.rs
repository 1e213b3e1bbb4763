//! Business logic layer.
//!
//! Services sit between controllers and repositories. They own the domain rules
//! (defaults, partial-update merging) and are the only place where storage conditions
//! are translated into domain errors.

pub mod todo;
