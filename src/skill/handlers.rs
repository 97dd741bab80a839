use axum::{
    Json,
    body::Bytes,
    extract::State,
    response::{IntoResponse, Response},
};
use tracing::{debug, error, info};

use crate::{
    app_state::AppState,
    config::messages,
    skill::{
        callback::spawn_delivery,
        dtos::{CallbackAck, SkillRequest, SkillResponse},
    },
    sources::build_digest,
};

/// Skill endpoint. Always answers 200; failures travel as message text.
///
/// With a callback address the caller gets an immediate acknowledgement and
/// the digest follows by POST. Without one the digest is built inline.
pub async fn news_digest(State(state): State<AppState>, body: Bytes) -> Response {
    let request: SkillRequest = serde_json::from_slice(&body).unwrap_or_else(|e| {
        debug!(error = %e, "unreadable skill request, answering synchronously");
        SkillRequest::default()
    });

    if let Some(callback_url) = request.callback_url() {
        info!("skill request received, callback mode");
        spawn_delivery(state, callback_url.to_string());
        return Json(CallbackAck::loading()).into_response();
    }

    info!("skill request received, synchronous mode");
    let message = match build_digest(state.source.as_ref()).await {
        Ok(message) => message,
        Err(e) => {
            error!(error = %e, "failed to build digest");
            messages::ERROR.to_string()
        }
    };

    Json(SkillResponse::simple_text(message)).into_response()
}
