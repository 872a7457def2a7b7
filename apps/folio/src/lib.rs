//! # Folio
//!
//! Library half of the Folio binary: the HTTP API, the CLI and the
//! configuration loader. `main.rs` only sets up logging and calls
//! [`cli::execute`]; integration tests drive [`api::create_router`]
//! directly.

pub mod api;
pub mod cli;
pub mod config;
