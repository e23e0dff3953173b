//! Server entrypoint: env config, tracing, store open, serve.

use simple_crud::{common_routes, simple_routes, AppState, SimpleStore};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("simple_crud=info,tower_http=info")),
        )
        .init();

    // Failing to open the store or create the schema is unrecoverable; the
    // process must not start.
    let db_path = std::env::var("DATABASE_PATH").unwrap_or_else(|_| "simple.db".into());
    let store = SimpleStore::open(&db_path).await?;
    let state = AppState { store };

    let app = Router::new()
        .merge(common_routes(state.clone()))
        .nest("/api", simple_routes(state))
        .layer(TraceLayer::new_for_http());

    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:1323".into());
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
