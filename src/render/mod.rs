//! Standalone HTML rendering of extracted conversations.

pub mod content;
pub mod escape;

pub use content::render_entry;
pub use escape::escape_html;

use chrono::NaiveDateTime;

use crate::models::Entry;
use crate::services::timestamp::HEADER_FORMAT;

/// Inline stylesheet; the page references no external resources.
const STYLES: &str = include_str!("../../assets/styles.css");

const NO_ENTRIES: &str =
    r#"<div class="no-entries">No entries found in the specified time range.</div>"#;

/// Build the complete HTML document for a set of entries.
///
/// With a `title`, it replaces both the project/window subtitle and the
/// window in the page title.
pub fn generate_html(
    entries: &[Entry],
    start: NaiveDateTime,
    end: NaiveDateTime,
    project: &str,
    title: Option<&str>,
) -> String {
    let mut entries_html: String = entries.iter().filter_map(render_entry).collect();
    if entries_html.is_empty() {
        entries_html = NO_ENTRIES.to_string();
    }

    let start_str = escape_html(&start.format(HEADER_FORMAT).to_string());
    let end_str = escape_html(&end.format(HEADER_FORMAT).to_string());

    let (subtitle_html, page_title) = match title.filter(|t| !t.is_empty()) {
        Some(title) => (
            format!(r#"<div class="subtitle">{}</div>"#, escape_html(title)),
            format!("Claude Code Logs - {}", escape_html(title)),
        ),
        None => (
            format!(
                r#"<div class="subtitle">
                {}<br>
                {start_str} - {end_str}
            </div>"#,
                escape_html(project)
            ),
            format!("Claude Code Logs - {start_str} to {end_str}"),
        ),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{page_title}</title>
    <style>
{STYLES}
    </style>
</head>
<body>
    <div class="container">
        <header>
            <h1>🤖 Claude Code Logs</h1>
            {subtitle_html}
        </header>
        <div class="conversation-container">
{entries_html}
        </div>
    </div>
</body>
</html>"#
    )
}
