use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::IntoResponse,
    Json,
};
use nf_core::{NewsFeed, NewsQuery};
use serde_json::json;
use std::sync::Arc;

use crate::{ApiError, AppState};

pub async fn get_news(
    State(state): State<Arc<AppState>>,
    query: Result<Query<NewsQuery>, QueryRejection>,
) -> Result<Json<NewsFeed>, ApiError> {
    let Query(query) = query?;
    let articles = state.manager.aggregate(&query).await;
    Ok(Json(NewsFeed::from(articles)))
}

pub async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}
