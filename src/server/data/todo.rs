use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::todo::CreateTodoParams;

/// Storage access for todo rows.
///
/// Soft-deleted rows are invisible to every method.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Returns all live todos in insertion order.
    async fn find_all(&self) -> Result<Vec<entity::todo::Model>, DbErr>;

    /// Returns the live todo with `id`, or `DbErr::RecordNotFound`.
    async fn find_by_id(&self, id: i32) -> Result<entity::todo::Model, DbErr>;

    /// Inserts a new todo and returns it with its assigned id and timestamps.
    async fn create(&self, params: CreateTodoParams) -> Result<entity::todo::Model, DbErr>;

    /// Overwrites every mutable column of a live todo.
    ///
    /// Returns `DbErr::RecordNotUpdated` when no live row matched.
    async fn update(&self, todo: entity::todo::Model) -> Result<entity::todo::Model, DbErr>;

    /// Soft-deletes a live todo, or returns `DbErr::RecordNotFound`.
    async fn delete(&self, id: i32) -> Result<(), DbErr>;
}

pub struct SqlTodoRepository {
    db: DatabaseConnection,
}

impl SqlTodoRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TodoRepository for SqlTodoRepository {
    async fn find_all(&self) -> Result<Vec<entity::todo::Model>, DbErr> {
        entity::prelude::Todo::find()
            .filter(entity::todo::Column::DeletedAt.is_null())
            .order_by_asc(entity::todo::Column::Id)
            .all(&self.db)
            .await
    }

    async fn find_by_id(&self, id: i32) -> Result<entity::todo::Model, DbErr> {
        entity::prelude::Todo::find_by_id(id)
            .filter(entity::todo::Column::DeletedAt.is_null())
            .one(&self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Todo with id {} not found",
                id
            )))
    }

    async fn create(&self, params: CreateTodoParams) -> Result<entity::todo::Model, DbErr> {
        let now = Utc::now();

        entity::todo::ActiveModel {
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            priority: ActiveValue::Set(params.priority),
            due_date: ActiveValue::Set(params.due_date),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&self.db)
        .await
    }

    async fn update(&self, todo: entity::todo::Model) -> Result<entity::todo::Model, DbErr> {
        let now = Utc::now();

        let changes = entity::todo::ActiveModel {
            title: ActiveValue::Set(todo.title.clone()),
            description: ActiveValue::Set(todo.description.clone()),
            completed: ActiveValue::Set(todo.completed),
            priority: ActiveValue::Set(todo.priority.clone()),
            due_date: ActiveValue::Set(todo.due_date),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        let result = entity::prelude::Todo::update_many()
            .set(changes)
            .filter(entity::todo::Column::Id.eq(todo.id))
            .filter(entity::todo::Column::DeletedAt.is_null())
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(DbErr::RecordNotUpdated);
        }

        self.find_by_id(todo.id).await
    }

    async fn delete(&self, id: i32) -> Result<(), DbErr> {
        let marker = entity::todo::ActiveModel {
            deleted_at: ActiveValue::Set(Some(Utc::now())),
            ..Default::default()
        };

        let result = entity::prelude::Todo::update_many()
            .set(marker)
            .filter(entity::todo::Column::Id.eq(id))
            .filter(entity::todo::Column::DeletedAt.is_null())
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(DbErr::RecordNotFound(format!(
                "Todo with id {} not found",
                id
            )));
        }

        Ok(())
    }
}
