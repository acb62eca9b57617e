//! `issuedeck` - Issue-tracking dashboard application layer
//!
//! This crate provides the application layer for the `deck` CLI tool:
//! asynchronous service facades with simulated latency over the
//! in-process engine in `issuedeck-lib`.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - [`cli`] - Command-line interface using clap
//! - [`api`] - Async service facades over the shared store
//! - [`config`] - Latency profile for the simulated round-trips
//! - [`format`] - Output formatting (text, JSON, inline markup)
//! - [`seed`] - Deterministic sample data
//! - [`logging`] - tracing subscriber setup

#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod api;
pub mod cli;
pub mod config;
pub mod format;
pub mod logging;
pub mod seed;

/// Run the CLI application.
///
/// This is the main entry point called from `main()`.
///
/// # Errors
///
/// Returns an error if command execution fails.
pub async fn run() -> anyhow::Result<()> {
    cli::run().await
}
