//! Data source for the event list: the seam between the controller and the network.
use crate::config::ClientConfig;
use crate::models::EventListResponse;
use crate::request::{EventListRequest, REQUESTED_WITH_HEADER, REQUESTED_WITH_VALUE};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server returned {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Anything that can answer an event list request.
/// `?Send` because browser fetch futures are not `Send`.
#[async_trait(?Send)]
pub trait EventSource {
    async fn fetch(&self, request: &EventListRequest) -> Result<EventListResponse, FetchError>;
}

/// reqwest-backed source. Uses the browser fetch API on wasm32.
#[derive(Clone)]
pub struct HttpEventSource {
    client: reqwest::Client,
}

impl HttpEventSource {
    #[cfg_attr(target_arch = "wasm32", allow(unused_variables))]
    pub fn new(config: &ClientConfig) -> Result<Self, FetchError> {
        let builder = reqwest::Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(config.timeout);
        Ok(Self {
            client: builder.build()?,
        })
    }
}

#[async_trait(?Send)]
impl EventSource for HttpEventSource {
    async fn fetch(&self, request: &EventListRequest) -> Result<EventListResponse, FetchError> {
        let resp = self
            .client
            .get(request.url())
            .header(REQUESTED_WITH_HEADER, REQUESTED_WITH_VALUE)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }
        let text = resp.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}
