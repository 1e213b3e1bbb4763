use async_trait::async_trait;
use sea_orm::DbErr;
use std::sync::Arc;

use crate::{
    model::todo::{CreateTodoRequest, TodoResponse, UpdateTodoRequest},
    server::{
        data::todo::TodoRepository,
        error::AppError,
        model::todo::{CreateTodoParams, DEFAULT_PRIORITY},
    },
};

#[async_trait]
pub trait TodoService: Send + Sync {
    async fn get_all(&self) -> Result<Vec<TodoResponse>, AppError>;

    async fn get_by_id(&self, id: u32) -> Result<TodoResponse, AppError>;

    async fn create(&self, req: CreateTodoRequest) -> Result<TodoResponse, AppError>;

    async fn update(&self, id: u32, req: UpdateTodoRequest) -> Result<TodoResponse, AppError>;

    async fn delete(&self, id: u32) -> Result<(), AppError>;
}

pub struct TodoServiceImpl {
    repo: Arc<dyn TodoRepository>,
}

impl TodoServiceImpl {
    pub fn new(repo: Arc<dyn TodoRepository>) -> Self {
        Self { repo }
    }
}

fn not_found() -> AppError {
    AppError::NotFound("Todo not found".to_string())
}

/// Maps the repository's missing-row conditions to `AppError::NotFound`.
fn translate(err: DbErr) -> AppError {
    match err {
        DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated => not_found(),
        err => AppError::DbErr(err),
    }
}

/// Converts an API id to a storage key.
///
/// Ids beyond the storage range cannot belong to any row.
fn storage_id(id: u32) -> Result<i32, AppError> {
    i32::try_from(id).map_err(|_| not_found())
}

/// Overwrites each field of `todo` that is present in `req`.
fn apply_patch(todo: &mut entity::todo::Model, req: UpdateTodoRequest) {
    if let Some(title) = req.title {
        todo.title = title;
    }
    if let Some(description) = req.description {
        todo.description = description;
    }
    if let Some(completed) = req.completed {
        todo.completed = completed;
    }
    if let Some(priority) = req.priority {
        todo.priority = priority;
    }
    if let Some(due_date) = req.due_date {
        todo.due_date = due_date;
    }
}

#[async_trait]
impl TodoService for TodoServiceImpl {
    async fn get_all(&self) -> Result<Vec<TodoResponse>, AppError> {
        let todos = self.repo.find_all().await?;

        Ok(todos.into_iter().map(TodoResponse::from).collect())
    }

    async fn get_by_id(&self, id: u32) -> Result<TodoResponse, AppError> {
        let todo = self
            .repo
            .find_by_id(storage_id(id)?)
            .await
            .map_err(translate)?;

        Ok(todo.into())
    }

    async fn create(&self, req: CreateTodoRequest) -> Result<TodoResponse, AppError> {
        let priority = if req.priority.is_empty() {
            DEFAULT_PRIORITY.to_string()
        } else {
            req.priority
        };

        let params = CreateTodoParams {
            title: req.title,
            description: req.description,
            priority,
            due_date: req.due_date,
        };

        let todo = self.repo.create(params).await?;

        Ok(todo.into())
    }

    async fn update(&self, id: u32, req: UpdateTodoRequest) -> Result<TodoResponse, AppError> {
        let mut todo = self
            .repo
            .find_by_id(storage_id(id)?)
            .await
            .map_err(translate)?;

        apply_patch(&mut todo, req);

        let todo = self.repo.update(todo).await.map_err(translate)?;

        Ok(todo.into())
    }

    async fn delete(&self, id: u32) -> Result<(), AppError> {
        self.repo
            .delete(storage_id(id)?)
            .await
            .map_err(translate)
    }
}
