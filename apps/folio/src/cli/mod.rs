//! # Folio CLI Module
//!
//! This module implements the CLI interface for Folio.
//!
//! ## Available Commands
//!
//! - `server` - Start the HTTP server (default when no command is given)
//! - `dump` - Print the dataset, or one section of it, as JSON
//! - `check` - Validate the dataset and print record counts

mod commands;

use crate::config::ServerConfig;
use clap::{Parser, Subcommand, ValueEnum};
use folio_core::FolioError;
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// Folio - portfolio data server
///
/// Serves a fixed portfolio dataset over a read-only REST API,
/// plus a contact form that is logged and never delivered.
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// JSON dataset file replacing the built-in content
    #[arg(short, long, global = true)]
    pub data: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start HTTP server
    Server {
        /// Host to bind to
        #[arg(short = 'H', long)]
        host: Option<String>,

        /// Port to bind to
        #[arg(short, long)]
        port: Option<u16>,

        /// Frontend origin allowed by CORS
        #[arg(long)]
        frontend_url: Option<String>,

        /// Directory served under /static
        #[arg(long)]
        static_dir: Option<PathBuf>,
    },

    /// Print the dataset as JSON
    Dump {
        /// Only print this section
        section: Option<Section>,
    },

    /// Validate the dataset and show record counts
    Check,
}

/// Top-level dataset sections.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Profile,
    Skills,
    Experiences,
    Projects,
    Socials,
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub async fn execute(cli: Cli) -> Result<(), FolioError> {
    let mut config = ServerConfig::load(cli.config.as_deref())?;
    if let Some(data) = cli.data {
        config.data_file = Some(data);
    }

    match cli.command {
        Some(Commands::Server {
            host,
            port,
            frontend_url,
            static_dir,
        }) => {
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(frontend_url) = frontend_url {
                config.frontend_url = frontend_url;
            }
            if let Some(static_dir) = static_dir {
                config.static_dir = static_dir;
            }
            cmd_server(&config).await
        }
        Some(Commands::Dump { section }) => cmd_dump(&config, section),
        Some(Commands::Check) => cmd_check(&config),
        None => cmd_server(&config).await,
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_server_flags() {
        let cli = Cli::try_parse_from(["folio", "server", "--port", "8080", "--host", "127.0.0.1"])
            .expect("valid args");
        match cli.command {
            Some(Commands::Server { host, port, .. }) => {
                assert_eq!(host.as_deref(), Some("127.0.0.1"));
                assert_eq!(port, Some(8080));
            }
            other => unreachable!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn parses_dump_section() {
        let cli = Cli::try_parse_from(["folio", "-q", "dump", "projects"]).expect("valid args");
        assert!(cli.quiet);
        assert!(matches!(
            cli.command,
            Some(Commands::Dump {
                section: Some(Section::Projects)
            })
        ));
    }

    #[test]
    fn no_subcommand_is_allowed() {
        let cli = Cli::try_parse_from(["folio"]).expect("valid args");
        assert!(cli.command.is_none());
    }

    #[test]
    fn rejects_unknown_section() {
        assert!(Cli::try_parse_from(["folio", "dump", "hobbies"]).is_err());
    }
}
