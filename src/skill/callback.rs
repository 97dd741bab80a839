use reqwest::Client;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{Instrument, error, info, info_span, instrument};

use crate::{
    app_state::AppState,
    config::{limits, messages},
    fetcher::FetchError,
    skill::dtos::SkillResponse,
    sources::build_digest,
};

/// Build the digest in the background and POST it to `callback_url`.
///
/// Nobody awaits the handle in production; every failure is handled inside
/// the task.
pub fn spawn_delivery(state: AppState, callback_url: String) -> JoinHandle<()> {
    let span = info_span!("callback_delivery", url = %callback_url);
    tokio::spawn(async move { deliver(&state, &callback_url).await }.instrument(span))
}

/// Deliver the digest; on any failure try once more with the generic error
/// message, then give up.
pub async fn deliver(state: &AppState, callback_url: &str) {
    info!("building digest for callback");

    let result = async {
        let message = build_digest(state.source.as_ref()).await?;
        send_callback(&state.http, callback_url, &SkillResponse::simple_text(message)).await?;
        anyhow::Ok(())
    }
    .await;

    match result {
        Ok(()) => info!("callback delivered"),
        Err(e) => {
            error!(error = %e, "callback delivery failed, sending error message");
            let fallback = SkillResponse::simple_text(messages::ERROR);
            if let Err(e) = send_callback(&state.http, callback_url, &fallback).await {
                error!(error = %e, "error callback also failed, giving up");
            }
        }
    }
}

#[instrument(skip(client, body))]
pub async fn send_callback(
    client: &Client,
    callback_url: &str,
    body: &SkillResponse,
) -> Result<(), FetchError> {
    let url = url::Url::parse(callback_url)?;
    let response = client
        .post(url)
        .json(body)
        .timeout(Duration::from_secs(limits::CALLBACK_TIMEOUT_SECS))
        .send()
        .await
        .map_err(FetchError::from_reqwest_error)?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Http { status });
    }
    Ok(())
}
