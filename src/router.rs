use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::{app_state::AppState, health::liveness, skill::news_digest};

pub const SKILL_PATH: &str = "/linkus-news";

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(liveness))
        .route(SKILL_PATH, post(news_digest))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
