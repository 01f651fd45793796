//! Project naming, matching the directory names cc-logs serves.

use anyhow::{Context, Result};

/// Encode a project path to the cc-logs project name format.
/// e.g., "/home/garrett/Projects/jwst-cosmos" -> "-home-garrett-Projects-jwst-cosmos"
pub fn encode_project_path(path: &str) -> String {
    path.replace('/', "-")
}

/// Project name for the current working directory.
pub fn current_project_name() -> Result<String> {
    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    Ok(encode_project_path(&cwd.to_string_lossy()))
}
