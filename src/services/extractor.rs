//! Collects the entries of every session in a project that fall inside a window.

use anyhow::{Context, Result};
use chrono::{NaiveDateTime, TimeZone};
use tracing::debug;

use super::filter::{filter_entries_by_timestamp, sort_entries_by_timestamp};
use super::log_client::LogSource;
use crate::models::{Entry, Session};

/// List a project's sessions. Failure here ends the run.
pub fn fetch_sessions(source: &dyn LogSource, project: &str) -> Result<Vec<Session>> {
    source
        .list_sessions(project)
        .context("Error fetching sessions")
}

/// Fetch one session's entries, reporting failures and carrying on with none.
pub fn fetch_session_entries(source: &dyn LogSource, project: &str, session_id: &str) -> Vec<Entry> {
    match source.session_entries(project, session_id) {
        Ok(entries) => entries,
        Err(error) => {
            eprintln!("Error fetching session {}: {}", session_id, error);
            Vec::new()
        }
    }
}

/// Gather matching entries across all sessions, oldest first.
///
/// Sessions are visited one at a time in the order the server lists them.
pub fn collect_entries<Tz: TimeZone>(
    source: &dyn LogSource,
    project: &str,
    start: NaiveDateTime,
    end: NaiveDateTime,
    tz: &Tz,
) -> Result<Vec<Entry>> {
    println!("Fetching sessions...");
    let sessions = fetch_sessions(source, project)?;
    println!("Found {} sessions", sessions.len());

    let mut all_entries = Vec::new();
    for session in &sessions {
        debug!(session = %session.id, started = ?session.timestamp, "checking session");
        println!("Checking session {}...", session.id);

        let entries = fetch_session_entries(source, project, &session.id);
        let filtered = filter_entries_by_timestamp(entries, start, end, tz);

        if !filtered.is_empty() {
            println!("  Found {} entries in range", filtered.len());
            all_entries.extend(filtered);
        }
    }

    sort_entries_by_timestamp(&mut all_entries, tz);
    Ok(all_entries)
}
