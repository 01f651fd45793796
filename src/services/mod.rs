//! Backend services.

pub mod extractor;
pub mod filter;
pub mod log_client;
pub mod timestamp;

pub use extractor::collect_entries;
pub use log_client::HttpLogClient;
