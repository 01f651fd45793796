//! Entry types served by the cc-logs session endpoint.

use serde::Deserialize;
use serde_json::Value;

/// A single record within a session.
///
/// Built leniently from raw JSON: fields that are missing or have the wrong
/// shape come through as `None` instead of failing the whole session. The
/// original object is kept so entries of unknown type can be shown verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    /// `user`, `assistant`, or anything else the server emits.
    pub entry_type: String,
    pub timestamp: Option<String>,
    pub content: Option<MessageContent>,
    pub raw: Value,
}

impl Entry {
    pub fn from_value(raw: Value) -> Self {
        let entry_type = raw
            .get("type")
            .and_then(Value::as_str)
            .unwrap_or("unknown")
            .to_string();
        let timestamp = raw
            .get("timestamp")
            .and_then(Value::as_str)
            .filter(|ts| !ts.is_empty())
            .map(str::to_string);
        let content = raw
            .get("message")
            .and_then(|message| message.get("content"))
            .map(MessageContent::from_value);

        Self {
            entry_type,
            timestamp,
            content,
            raw,
        }
    }

    pub fn kind(&self) -> EntryKind {
        match self.entry_type.as_str() {
            "user" => EntryKind::User,
            "assistant" => EntryKind::Assistant,
            _ => EntryKind::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    User,
    Assistant,
    Other,
}

/// `message.content` - plain text or a list of blocks.
#[derive(Debug, Clone, PartialEq)]
pub enum MessageContent {
    Text(String),
    Blocks(Vec<BlockItem>),
    /// Neither a string nor a list; rendered as its JSON text.
    Other(Value),
}

impl MessageContent {
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::String(text) => MessageContent::Text(text.clone()),
            Value::Array(items) => {
                MessageContent::Blocks(items.iter().map(BlockItem::from_value).collect())
            }
            other => MessageContent::Other(other.clone()),
        }
    }
}

/// One element of a content list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum BlockItem {
    Block(ContentBlock),
    /// Bare strings are shown like text blocks.
    Plain(String),
    /// Anything else is skipped.
    Malformed(Value),
}

impl BlockItem {
    fn from_value(value: &Value) -> Self {
        serde_json::from_value(value.clone()).unwrap_or_else(|_| BlockItem::Malformed(value.clone()))
    }
}

/// Content block within a structured message.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum ContentBlock {
    #[serde(rename = "text")]
    Text {
        #[serde(default)]
        text: String,
    },
    #[serde(rename = "tool_use")]
    ToolUse {
        #[serde(default = "unknown_tool")]
        name: String,
        #[serde(default = "empty_object")]
        input: Value,
    },
    #[serde(rename = "tool_result")]
    ToolResult {
        #[serde(default = "empty_string")]
        content: Value,
    },
    #[serde(rename = "thinking")]
    Thinking {},
    #[serde(other)]
    Unknown,
}

fn unknown_tool() -> String {
    "unknown".to_string()
}

fn empty_object() -> Value {
    Value::Object(Default::default())
}

fn empty_string() -> Value {
    Value::String(String::new())
}
