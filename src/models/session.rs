//! Session summary as listed by the cc-logs server.

use serde::Deserialize;

/// One logged conversation within a project.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Session {
    /// Opaque session identifier (usually a UUID)
    pub id: String,
    /// Creation time, ISO-8601 UTC with a `Z` suffix
    #[serde(default)]
    pub timestamp: Option<String>,
}
