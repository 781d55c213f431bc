//! EmissionsIQ command-line client
//!
//! Argument parsing, a thin HTTP client for the EmissionsIQ API and the
//! plain-text formatting used by the `emissions-cli` binary.

pub mod cli;
pub mod client;
pub mod output;

pub use cli::{Cli, Commands};
pub use client::{ApiClient, ClientError, RouteView};
