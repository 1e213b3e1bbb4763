use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        todo::{CreateTodoRequest, TodoResponse, UpdateTodoRequest},
    },
    server::{error::AppError, extract::ValidatedJson, state::AppState, util::parse::parse_id},
};

/// Tag for grouping todo endpoints in OpenAPI documentation
pub static TODO_TAG: &str = "todos";

/// Replaces infrastructure errors with a client-safe message after logging them.
///
/// Domain errors (`NotFound`, `BadRequest`) pass through unchanged.
fn failure(err: AppError, message: &str, id: Option<u32>) -> AppError {
    match err {
        err @ (AppError::NotFound(_) | AppError::BadRequest(_)) => err,
        err => {
            match id {
                Some(id) => tracing::error!(error = %err, id, "{}", message),
                None => tracing::error!(error = %err, "{}", message),
            }
            AppError::InternalError(message.to_string())
        }
    }
}

/// List all todos.
///
/// Returns every todo that has not been deleted, in creation order.
///
/// # Returns
/// - `200 OK` - Array of todos
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/todos",
    tag = TODO_TAG,
    responses(
        (status = 200, description = "Successfully retrieved todos", body = Vec<TodoResponse>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_todos(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let todos = state
        .todo_service
        .get_all()
        .await
        .map_err(|e| failure(e, "Failed to fetch todos", None))?;

    Ok((StatusCode::OK, Json(todos)))
}

/// Get a todo by ID.
///
/// # Returns
/// - `200 OK` - The todo
/// - `400 Bad Request` - ID is not a non-negative integer
/// - `404 Not Found` - No such todo, or it was deleted
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/todos/{id}",
    tag = TODO_TAG,
    params(
        ("id" = u32, Path, description = "Todo ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved todo", body = TodoResponse),
        (status = 400, description = "Invalid ID", body = ErrorDto),
        (status = 404, description = "Todo not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_todo_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;

    let todo = state
        .todo_service
        .get_by_id(id)
        .await
        .map_err(|e| failure(e, "Failed to fetch todo", Some(id)))?;

    Ok((StatusCode::OK, Json(todo)))
}

/// Create a new todo.
///
/// `title` is required and must not be empty. A missing or empty `priority` becomes
/// `medium`.
///
/// # Returns
/// - `201 Created` - The created todo
/// - `400 Bad Request` - Malformed body or validation failure
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/todos",
    tag = TODO_TAG,
    request_body = CreateTodoRequest,
    responses(
        (status = 201, description = "Successfully created todo", body = TodoResponse),
        (status = 400, description = "Invalid todo data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_todo(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateTodoRequest>,
) -> Result<impl IntoResponse, AppError> {
    let todo = state
        .todo_service
        .create(payload)
        .await
        .map_err(|e| failure(e, "Failed to create todo", None))?;

    tracing::info!(id = todo.id, "Todo created");

    Ok((StatusCode::CREATED, Json(todo)))
}

/// Update a todo.
///
/// Only fields present in the body are changed.
///
/// # Returns
/// - `200 OK` - The updated todo
/// - `400 Bad Request` - Invalid ID, malformed body or validation failure
/// - `404 Not Found` - No such todo, or it was deleted
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/todos/{id}",
    tag = TODO_TAG,
    params(
        ("id" = u32, Path, description = "Todo ID")
    ),
    request_body = UpdateTodoRequest,
    responses(
        (status = 200, description = "Successfully updated todo", body = TodoResponse),
        (status = 400, description = "Invalid ID or todo data", body = ErrorDto),
        (status = 404, description = "Todo not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdateTodoRequest>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;

    let todo = state
        .todo_service
        .update(id, payload)
        .await
        .map_err(|e| failure(e, "Failed to update todo", Some(id)))?;

    tracing::info!(id = todo.id, "Todo updated");

    Ok((StatusCode::OK, Json(todo)))
}

/// Delete a todo.
///
/// The todo is soft-deleted and disappears from every other endpoint.
///
/// # Returns
/// - `200 OK` - Confirmation message
/// - `400 Bad Request` - Invalid ID
/// - `404 Not Found` - No such todo, or it was already deleted
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/todos/{id}",
    tag = TODO_TAG,
    params(
        ("id" = u32, Path, description = "Todo ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted todo", body = MessageDto),
        (status = 400, description = "Invalid ID", body = ErrorDto),
        (status = 404, description = "Todo not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;

    state
        .todo_service
        .delete(id)
        .await
        .map_err(|e| failure(e, "Failed to delete todo", Some(id)))?;

    tracing::info!(id, "Todo deleted");

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Todo deleted successfully".to_string(),
        }),
    ))
}
