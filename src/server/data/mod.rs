//! Database repository layer.
//!
//! Repositories use SeaORM entity models internally and surface raw `DbErr` conditions;
//! translating them into domain errors is the service layer's job.

pub mod todo;
