mod model;
mod server;

use tokio::net::TcpListener;

use crate::server::{config::Config, error::AppError, router, startup, state::AppState};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    if let Err(e) = run().await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    tracing::info!("Connected to database");

    let app = router::app(AppState::from_database(db));

    let listener = TcpListener::bind(config.bind_address()).await?;
    tracing::info!("Starting server on {}", config.bind_address());

    axum::serve(listener, app).await?;

    Ok(())
}
