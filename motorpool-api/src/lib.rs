use axum::{
    routing::get,
    Json,
    Router,
    http::Method,
};
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod availability;
pub mod context;
pub mod error;
pub mod pending;
pub mod state;
pub mod vehicles;

pub use context::CheckContext;
pub use state::AppState;

pub fn app(state: AppState) -> Router {
    // The booking forms run in the browser on another origin
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            axum::http::header::AUTHORIZATION,
            axum::http::header::CONTENT_TYPE,
        ]);

    Router::new()
        .route("/health", get(health))
        .merge(availability::routes())
        .merge(vehicles::routes())
        .merge(pending::routes())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
