//! Minimal client for the AnkiConnect JSON protocol: one request envelope in,
//! one `{result, error}` object out.

use serde::Serialize;
use serde_json::Value;

mod request;
mod response;

pub use request::{Action, Fields, Media, Note, NoteOptions, NoteParams, Request, API_VERSION};
pub use response::validate_response;

pub const ANKI_CONNECT_URL: &str = "http://localhost:8765";

#[derive(Debug, thiserror::Error)]
pub enum AnkiError {
    #[error("could not reach the flashcard service: {0}")]
    Fetch(#[source] reqwest::Error),
    #[error("malformed flashcard service response: {0}")]
    Deserialize(#[source] reqwest::Error),
    #[error("response has an unexpected number of fields ({0})")]
    UnexpectedFieldCount(usize),
    #[error("response is missing required {0} field")]
    MissingField(&'static str),
    #[error("{0}")]
    Service(String),
}

pub struct AnkiConnect {
    client: reqwest::Client,
    endpoint: String,
}

impl AnkiConnect {
    pub fn new() -> Self {
        Self::with_endpoint(ANKI_CONNECT_URL)
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub async fn invoke<P: Serialize>(&self, request: &Request<P>) -> Result<Value, AnkiError> {
        tracing::debug!(
            endpoint = %self.endpoint,
            action = ?request.action,
            "invoking flashcard service"
        );
        let res = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(AnkiError::Fetch)?;
        let response = res.json::<Value>().await.map_err(AnkiError::Deserialize)?;
        validate_response(response)
    }
}

impl Default for AnkiConnect {
    fn default() -> Self {
        Self::new()
    }
}
