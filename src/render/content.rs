//! Fragments for individual entries and content blocks.

use serde_json::Value;

use super::escape::escape_html;
use crate::models::{BlockItem, ContentBlock, Entry, EntryKind, MessageContent};

/// Render an entry's message content.
pub fn render_message_content(content: &MessageContent) -> String {
    match content {
        MessageContent::Text(text) => text_block(text),
        MessageContent::Blocks(items) => items.iter().map(render_block_item).collect(),
        MessageContent::Other(value) => text_block(&value.to_string()),
    }
}

fn render_block_item(item: &BlockItem) -> String {
    match item {
        BlockItem::Block(block) => render_block(block),
        BlockItem::Plain(text) => text_block(text),
        BlockItem::Malformed(_) => String::new(),
    }
}

fn render_block(block: &ContentBlock) -> String {
    match block {
        // Internal reasoning is never shown.
        ContentBlock::Thinking {} => String::new(),
        ContentBlock::Text { text } => text_block(text),
        ContentBlock::ToolUse { name, input } => tool_use_block(name, input),
        ContentBlock::ToolResult { content } => tool_result_block(&tool_result_text(content)),
        ContentBlock::Unknown => String::new(),
    }
}

fn text_block(text: &str) -> String {
    format!(r#"<div class="message-text">{}</div>"#, escape_html(text))
}

fn tool_use_block(name: &str, input: &Value) -> String {
    let input_json = serde_json::to_string_pretty(input).unwrap_or_else(|_| input.to_string());
    format!(
        r#"
                        <div class="tool-use-container">
                            <div class="tool-use-header">
                                <span>🔧</span>
                                <span>{}</span>
                            </div>
                            <div class="tool-use-content">
                                <pre>{}</pre>
                            </div>
                        </div>
                    "#,
        escape_html(name),
        escape_html(&input_json)
    )
}

fn tool_result_block(result_text: &str) -> String {
    format!(
        r#"
                        <div class="tool-result-container">
                            <div class="tool-result-header">
                                <span>📋</span>
                                <span>Tool Result</span>
                            </div>
                            <div class="tool-result-content">{}</div>
                        </div>
                    "#,
        escape_html(result_text)
    )
}

/// Flatten a tool result's content into display text.
///
/// Lists are joined line by line, taking each object's `text` field.
fn tool_result_text(content: &Value) -> String {
    match content {
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Object(fields) => fields.get("text").map(value_text).unwrap_or_default(),
                other => value_text(other),
            })
            .collect::<Vec<_>>()
            .join("\n"),
        other => value_text(other),
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Render a single entry, or `None` when it has nothing visible.
pub fn render_entry(entry: &Entry) -> Option<String> {
    let timestamp = entry.timestamp.as_deref().unwrap_or("");

    let (class, avatar) = match entry.kind() {
        EntryKind::User => ("user", "U"),
        EntryKind::Assistant => ("assistant", "AI"),
        EntryKind::Other => return Some(generic_entry(entry, timestamp)),
    };

    let content_html = entry
        .content
        .as_ref()
        .map(render_message_content)
        .unwrap_or_else(|| text_block(""));
    if content_html.trim().is_empty() {
        return None;
    }

    Some(format!(
        r#"
            <div class="message {class}">
                <div class="avatar {class}">{avatar}</div>
                <div class="message-content">
                    {content_html}
                    <div class="message-meta">{}</div>
                </div>
            </div>
        "#,
        escape_html(timestamp)
    ))
}

fn generic_entry(entry: &Entry, timestamp: &str) -> String {
    let dump = serde_json::to_string_pretty(&entry.raw).unwrap_or_else(|_| entry.raw.to_string());
    format!(
        r#"
            <div class="message">
                <div class="message-content">
                    <div class="message-text">{}</div>
                    <div class="message-meta">{}</div>
                </div>
            </div>
        "#,
        escape_html(&dump),
        escape_html(timestamp)
    )
}
