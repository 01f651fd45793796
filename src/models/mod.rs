//! Data models for cc-logs sessions.

pub mod message;
pub mod project;
pub mod session;

pub use message::{BlockItem, ContentBlock, Entry, EntryKind, MessageContent};
pub use session::Session;
