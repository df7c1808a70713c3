use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod error;
pub mod handlers;
pub mod state;

pub use error::ApiError;
pub use state::AppState;

pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/api/news", get(handlers::get_news))
        .route("/health", get(handlers::health))
        .layer(CatchPanicLayer::custom(error::handle_panic))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

pub mod prelude {
    pub use crate::{create_app, AppState};
    pub use nf_core::{Article, Error, NewsFeed, NewsQuery, Result};
}
