//! # Folio - Portfolio Data Server
//!
//! The main binary for the Folio portfolio API.
//!
//! This application provides:
//! - HTTP REST API server (axum-based) over a fixed portfolio dataset
//! - CLI interface for inspecting and validating the dataset
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │              apps/folio (THE BINARY)          │
//! │                                               │
//! │   ┌─────────────┐        ┌─────────────┐      │
//! │   │    CLI      │        │  HTTP API   │      │
//! │   │   (clap)    │        │   (axum)    │      │
//! │   └──────┬──────┘        └──────┬──────┘      │
//! │          └───────────┬──────────┘             │
//! │                      ▼                        │
//! │              ┌───────────────┐                │
//! │              │  folio-core   │                │
//! │              │  (THE DATA)   │                │
//! │              └───────────────┘                │
//! └───────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # Start the HTTP server
//! folio server --port 3000 --frontend-url http://localhost:5173
//!
//! # CLI operations
//! folio check
//! folio dump projects
//! ```

use clap::Parser;
use folio::cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

#[tokio::main]
async fn main() {
    // Load .env before anything reads the environment.
    let dotenv = dotenvy::dotenv();

    // Initialize tracing — FOLIO_LOG_FORMAT=json enables machine-parseable output.
    let log_format = std::env::var("FOLIO_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "folio=info,tower_http=debug".into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }

    match dotenv {
        Ok(path) => tracing::debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!("Ignoring unreadable .env file: {}", e),
    }

    // Parse CLI arguments
    let cli = cli::Cli::parse();

    // Display startup banner
    if !cli.quiet {
        print_banner();
    }

    // Execute command
    if let Err(e) = cli::execute(cli).await {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Print the Folio startup banner.
fn print_banner() {
    println!(
        r#"
  ███████╗ ██████╗ ██╗     ██╗ ██████╗
  ██╔════╝██╔═══██╗██║     ██║██╔═══██╗
  █████╗  ██║   ██║██║     ██║██║   ██║
  ██╔══╝  ██║   ██║██║     ██║██║   ██║
  ██║     ╚██████╔╝███████╗██║╚██████╔╝
  ╚═╝      ╚═════╝ ╚══════╝╚═╝ ╚═════╝

  Portfolio Server v{}
"#,
        env!("CARGO_PKG_VERSION")
    );
}
