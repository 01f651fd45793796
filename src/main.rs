//! cc-extract - Claude Code conversation extractor
//!
//! Pulls the Claude Code log entries of the current project from a running
//! cc-logs server, keeps the ones inside a time window, and writes them out
//! as a single standalone HTML page.

mod config;
mod models;
mod render;
mod services;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::services::timestamp::{parse_window, WindowError};
use crate::services::{collect_entries, HttpLogClient};

/// Extract Claude Code logs from the cc-logs web interface between two timestamps
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Start timestamp (e.g., "11/19/2025, 11:29:15 AM")
    #[arg(long)]
    start: String,

    /// End timestamp (e.g., "11/19/2025, 11:29:32 AM")
    #[arg(long)]
    end: String,

    /// Output HTML file (default: conversation_extract.html)
    #[arg(long)]
    output: Option<String>,

    /// Optional title for the HTML output (replaces project name and timestamps)
    #[arg(long)]
    title: Option<String>,

    /// cc-logs server URL (default: http://localhost:2006)
    #[arg(long)]
    base_url: Option<String>,

    /// Project name as listed by cc-logs (default: derived from the current directory)
    #[arg(long, allow_hyphen_values = true)]
    project: Option<String>,

    /// Open the generated file in the default browser
    #[arg(long)]
    open: bool,

    /// Config file path (default: ~/.config/cc-extract/config.toml)
    #[arg(short, long)]
    config: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging
    let filter = if args.debug {
        "cc_extract=debug,info"
    } else {
        "cc_extract=info,warn"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Parse the window before touching the network
    let (start, end) = match parse_window(&args.start, &args.end, &Local) {
        Ok(window) => window,
        Err(e) => {
            eprintln!("{}", e);
            if matches!(e, WindowError::Timestamp(_)) {
                eprintln!("Expected format: \"MM/DD/YYYY, HH:MM:SS AM/PM\"");
            }
            std::process::exit(1);
        }
    };

    // Load configuration
    let config = if let Some(path) = &args.config {
        config::Config::from_file(path)?
    } else {
        config::Config::load()?
    };

    // Flags override config
    let base_url = args.base_url.unwrap_or(config.server.base_url);
    let output = args.output.unwrap_or(config.output.path);

    let project = match args.project {
        Some(project) => project,
        None => models::project::current_project_name()?,
    };
    println!("Project: {}", project);
    println!("Time range: {} to {}", args.start, args.end);

    let client = HttpLogClient::new(&base_url);
    let entries = match collect_entries(&client, &project, start, end, &Local) {
        Ok(entries) => entries,
        Err(e) => {
            eprintln!("{:#}", e);
            std::process::exit(1);
        }
    };

    println!("\nTotal entries found: {}", entries.len());

    println!("Generating HTML output to {}...", output);
    let html = render::generate_html(&entries, start, end, &project, args.title.as_deref());
    std::fs::write(&output, html).with_context(|| format!("Failed to write {}", output))?;

    println!("✓ Successfully extracted logs to {}", output);

    if args.open {
        if let Err(e) = open::that_detached(&output) {
            eprintln!("Failed to open browser: {}", e);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_required_and_defaults() {
        let args = Args::try_parse_from([
            "cc-extract",
            "--start",
            "11/19/2025, 11:29:15 AM",
            "--end",
            "11/19/2025, 11:29:32 AM",
        ])
        .unwrap();
        assert_eq!(args.start, "11/19/2025, 11:29:15 AM");
        assert!(args.output.is_none());
        assert!(args.base_url.is_none());
        assert!(args.title.is_none());
        assert!(!args.open);
    }

    #[test]
    fn test_args_overrides() {
        let args = Args::try_parse_from([
            "cc-extract",
            "--start",
            "2025-11-19T16:00:00Z",
            "--end",
            "2025-11-19T17:00:00Z",
            "--output",
            "out.html",
            "--title",
            "Login bug",
            "--base-url",
            "http://127.0.0.1:9999",
            "--project",
            "-srv-app",
            "--open",
        ])
        .unwrap();
        assert_eq!(args.output.as_deref(), Some("out.html"));
        assert_eq!(args.title.as_deref(), Some("Login bug"));
        assert_eq!(args.base_url.as_deref(), Some("http://127.0.0.1:9999"));
        assert_eq!(args.project.as_deref(), Some("-srv-app"));
        assert!(args.open);
    }

    #[test]
    fn test_args_project_with_leading_dash() {
        let args = Args::try_parse_from([
            "cc-extract",
            "--start",
            "11/19/2025, 11:29:15 AM",
            "--end",
            "11/19/2025, 11:29:32 AM",
            "--project",
            "-home-me-proj",
        ])
        .unwrap();
        assert_eq!(args.project.as_deref(), Some("-home-me-proj"));
    }

    #[test]
    fn test_args_missing_window() {
        assert!(Args::try_parse_from(["cc-extract", "--start", "x"]).is_err());
    }

    #[test]
    fn test_args_definition() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
