use std::env;

use axum::routing::{get, post, put};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

mod error;
mod routes;
mod state;

use sana_store::MemoryStore;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let addr = env::var("SANA_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

    let state = AppState {
        store: MemoryStore::new(),
    };

    // The portal's mobile clients call from app webviews; origins vary.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/health", get(routes::health::health_check))
        // Questionnaires (public catalog data)
        .route(
            "/questionnaires",
            get(routes::questionnaires::list_questionnaires),
        )
        .route(
            "/questionnaires/{id}",
            get(routes::questionnaires::get_questionnaire_detail),
        )
        // Submissions
        .route(
            "/submissions",
            post(routes::submissions::create_submission),
        )
        .route("/submissions", get(routes::submissions::list_submissions))
        .route(
            "/submissions/{id}",
            get(routes::submissions::get_submission),
        )
        .route(
            "/submissions/{id}/prediction",
            get(routes::submissions::get_prediction),
        )
        .route(
            "/submissions/{id}/recommendations",
            get(routes::submissions::get_recommendations),
        )
        .route(
            "/submissions/{id}/status",
            put(routes::submissions::update_status),
        )
        .layer(cors)
        .with_state(state);

    tracing::info!(%addr, "listening");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
