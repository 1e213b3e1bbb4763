//! Application state shared across all request handlers.
//!
//! The state is built once during startup and cloned into each handler through Axum's
//! state extraction. It only carries the service layer; storage is reachable solely
//! through the service's injected repository.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::{
    data::todo::SqlTodoRepository,
    service::todo::{TodoService, TodoServiceImpl},
};

#[derive(Clone)]
pub struct AppState {
    /// Business rules for todo items.
    pub todo_service: Arc<dyn TodoService>,
}

impl AppState {
    /// Creates application state around an already constructed service.
    ///
    /// Tests use this to substitute a fake service.
    pub fn new(todo_service: Arc<dyn TodoService>) -> Self {
        Self { todo_service }
    }

    /// Wires the SQL repository and the service on top of a database connection.
    pub fn from_database(db: DatabaseConnection) -> Self {
        let repository = Arc::new(SqlTodoRepository::new(db));

        Self::new(Arc::new(TodoServiceImpl::new(repository)))
    }
}
