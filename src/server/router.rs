use axum::Router;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller::todo, state::AppState};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Todo API",
        version = "1.0",
        description = "CRUD service for todo items"
    ),
    tags(
        (name = "todos", description = "Todo item management")
    )
)]
pub struct ApiDoc;

/// Builds every route with its OpenAPI documentation.
///
/// Todo endpoints live under `/api/v1`. The generated document is served at
/// `/api-docs/openapi.json` and browsed through Swagger UI at `/swagger`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .nest("/api/v1", todo_routes())
        .split_for_parts();

    router.merge(SwaggerUi::new("/swagger").url("/api-docs/openapi.json", api))
}

fn todo_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(todo::get_all_todos, todo::create_todo))
        .routes(routes!(
            todo::get_todo_by_id,
            todo::update_todo,
            todo::delete_todo
        ))
}

/// Attaches state and request tracing, producing the service handed to `axum::serve`.
pub fn app(state: AppState) -> Router {
    router()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
