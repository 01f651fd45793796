//! HTTP client for the cc-logs server.

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::{Entry, Session};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("GET {url} failed: {reason}")]
    Http { url: String, reason: String },

    #[error("unexpected response from {url}: {reason}")]
    Decode { url: String, reason: String },
}

/// Read access to session logs.
pub trait LogSource {
    /// List the sessions of a project, in server order.
    fn list_sessions(&self, project: &str) -> Result<Vec<Session>, ClientError>;

    /// Fetch every entry of one session.
    fn session_entries(&self, project: &str, session_id: &str) -> Result<Vec<Entry>, ClientError>;
}

/// `LogSource` backed by a cc-logs server's REST API.
pub struct HttpLogClient {
    agent: ureq::Agent,
    base_url: String,
}

impl HttpLogClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            agent: ureq::Agent::new_with_defaults(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn sessions_url(&self, project: &str) -> String {
        format!(
            "{}/api/projects/{}/sessions",
            self.base_url,
            urlencoding::encode(project)
        )
    }

    pub fn session_url(&self, project: &str, session_id: &str) -> String {
        format!(
            "{}/{}",
            self.sessions_url(project),
            urlencoding::encode(session_id)
        )
    }

    fn get_json_array(&self, url: &str) -> Result<Vec<Value>, ClientError> {
        debug!(url, "GET");
        let mut response = self
            .agent
            .get(url)
            .header("User-Agent", &format!("cc-extract/{}", env!("CARGO_PKG_VERSION")))
            .header("Accept", "application/json")
            .call()
            .map_err(|error| ClientError::Http {
                url: url.to_string(),
                reason: error.to_string(),
            })?;

        // Long tool output makes session logs exceed ureq's default body limit.
        response
            .body_mut()
            .with_config()
            .limit(u64::MAX)
            .read_json::<Vec<Value>>()
            .map_err(|error| ClientError::Decode {
                url: url.to_string(),
                reason: error.to_string(),
            })
    }
}

impl LogSource for HttpLogClient {
    fn list_sessions(&self, project: &str) -> Result<Vec<Session>, ClientError> {
        let raw = self.get_json_array(&self.sessions_url(project))?;

        Ok(raw
            .into_iter()
            .filter_map(|value| match serde_json::from_value::<Session>(value) {
                Ok(session) => Some(session),
                Err(error) => {
                    warn!(%error, "skipping malformed session");
                    None
                }
            })
            .collect())
    }

    fn session_entries(&self, project: &str, session_id: &str) -> Result<Vec<Entry>, ClientError> {
        let raw = self.get_json_array(&self.session_url(project, session_id))?;
        Ok(raw.into_iter().map(Entry::from_value).collect())
    }
}
