use chrono::{DateTime, Utc};

use crate::model::todo::TodoResponse;

/// Storage priority used when a todo is created without one.
pub const DEFAULT_PRIORITY: &str = "medium";

/// Parameters for inserting a new todo.
///
/// Built by the service with defaults already applied. `id`, `completed` and the
/// timestamps are left to the repository and the column defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateTodoParams {
    pub title: String,
    pub description: String,
    pub priority: String,
    pub due_date: Option<DateTime<Utc>>,
}

impl From<entity::todo::Model> for TodoResponse {
    /// Drops the soft-delete marker, which never leaves the server.
    fn from(entity: entity::todo::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            completed: entity.completed,
            priority: entity.priority,
            due_date: entity.due_date,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
