use crate::{
    config::Config,
    fetcher::{FetchError, service_client},
    sources::{DigestSource, LiveSources},
};
use reqwest::Client;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn DigestSource>,
    /// Used for callback delivery.
    pub http: Client,
}

impl AppState {
    pub fn new(config: Arc<Config>) -> Result<Self, FetchError> {
        Self::with_source(Arc::new(LiveSources::new(config)?))
    }

    pub fn with_source(source: Arc<dyn DigestSource>) -> Result<Self, FetchError> {
        Ok(Self {
            source,
            http: service_client()?,
        })
    }
}
