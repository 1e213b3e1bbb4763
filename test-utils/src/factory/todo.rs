//! Todo factory for creating test todo rows.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test todos with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::todo::TodoFactory;
///
/// let todo = TodoFactory::new(&db)
///     .title("Water plants")
///     .priority("high")
///     .build()
///     .await?;
/// ```
pub struct TodoFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    description: String,
    completed: bool,
    priority: String,
    due_date: Option<DateTime<Utc>>,
    deleted_at: Option<DateTime<Utc>>,
}

impl<'a> TodoFactory<'a> {
    /// Creates a new TodoFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Todo {id}"` where id is auto-incremented
    /// - description: empty
    /// - completed: `false`
    /// - priority: `"medium"`
    /// - no due date, not deleted
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Todo {}", id),
            description: String::new(),
            completed: false,
            priority: "medium".to_string(),
            due_date: None,
            deleted_at: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    pub fn priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = priority.into();
        self
    }

    pub fn due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Marks the row as soft-deleted at insert time.
    pub fn deleted(mut self) -> Self {
        self.deleted_at = Some(Utc::now());
        self
    }

    /// Builds and inserts the todo entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::todo::Model)` - Created todo entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::todo::Model, DbErr> {
        let now = Utc::now();

        entity::todo::ActiveModel {
            id: ActiveValue::NotSet,
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            completed: ActiveValue::Set(self.completed),
            priority: ActiveValue::Set(self.priority),
            due_date: ActiveValue::Set(self.due_date),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(self.deleted_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a todo with default values.
///
/// Shorthand for `TodoFactory::new(db).build().await`.
pub async fn create_todo(db: &DatabaseConnection) -> Result<entity::todo::Model, DbErr> {
    TodoFactory::new(db).build().await
}
