use std::time::Duration;

use log::{debug, warn};
use reqwest::{StatusCode, Url, blocking::Client};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Invalid API base URL {base:?}: {reason}")]
    InvalidBase { base: String, reason: String },

    #[error("Request to JARVIS backend failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("JARVIS backend returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to decode JARVIS backend reply: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Body of `POST /api/chat/message`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub session_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub response: String,
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub data_source: Option<String>,
}

/// Reply of `GET /api/chat/status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatStatus {
    pub available: bool,
    pub live_data_enabled: bool,
    pub active_sessions: u64,
}

/// The chat endpoints the session controller depends on.
pub trait ChatBackend {
    /// Sends one user message and waits for the assistant reply.
    fn send(&self, request: &ChatRequest) -> Result<ChatReply, BackendError>;

    /// Asks the backend to drop its state for `session_id`.
    ///
    /// Best effort: returns without waiting for the outcome, and failures are
    /// only logged.
    fn clear(&self, session_id: &str);
}

/// [`ChatBackend`] over HTTP with a blocking `reqwest` client.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    base: Url,
    client: Client,
}

impl HttpBackend {
    pub fn new(api_base: &str, timeout: Duration) -> Result<Self, BackendError> {
        let base = Url::parse(api_base.trim()).map_err(|err| BackendError::InvalidBase {
            base: api_base.to_string(),
            reason: err.to_string(),
        })?;
        if base.cannot_be_a_base() {
            return Err(BackendError::InvalidBase {
                base: api_base.to_string(),
                reason: "not a hierarchical URL".to_string(),
            });
        }
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { base, client })
    }

    fn endpoint(&self, name: &str) -> Url {
        let mut url = self.base.clone();
        let path = format!("{}/api/chat/{name}", self.base.path().trim_end_matches('/'));
        url.set_path(&path);
        url
    }

    fn clear_url(&self, session_id: &str) -> Url {
        let mut url = self.endpoint("clear");
        url.query_pairs_mut().append_pair("session_id", session_id);
        url
    }

    /// Reports whether the backend can answer and whether it serves live data.
    pub fn status(&self) -> Result<ChatStatus, BackendError> {
        let response = self.client.get(self.endpoint("status")).send()?;
        decode(response)
    }

    /// Clears server-side session state and waits for the outcome.
    pub fn clear_blocking(&self, session_id: &str) -> Result<(), BackendError> {
        let response = self.client.post(self.clear_url(session_id)).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(status_error(status, response.text().unwrap_or_default()));
        }
        Ok(())
    }
}

impl ChatBackend for HttpBackend {
    fn send(&self, request: &ChatRequest) -> Result<ChatReply, BackendError> {
        debug!(
            "POST {} ({} chars, session {})",
            self.endpoint("message"),
            request.message.len(),
            request.session_id
        );
        let response = self
            .client
            .post(self.endpoint("message"))
            .json(request)
            .send()?;
        decode(response)
    }

    fn clear(&self, session_id: &str) {
        // Fire-and-forget so the caller never waits on the network.
        let backend = self.clone();
        let session_id = session_id.to_string();
        std::thread::spawn(move || {
            if let Err(err) = backend.clear_blocking(&session_id) {
                warn!("Failed to clear session {session_id}: {err}");
            }
        });
    }
}

fn decode<T: DeserializeOwned>(response: reqwest::blocking::Response) -> Result<T, BackendError> {
    let status = response.status();
    let body = response.text()?;
    if !status.is_success() {
        return Err(status_error(status, body));
    }
    Ok(serde_json::from_str(&body)?)
}

fn status_error(status: StatusCode, body: String) -> BackendError {
    BackendError::Status {
        status: status.as_u16(),
        body,
    }
}
