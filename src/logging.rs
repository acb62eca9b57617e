//! Logging setup for `issuedeck`.
//!
//! Diagnostics go to stderr so `--json` output on stdout stays clean.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// Verbosity: 0 = warn, 1 = info, 2 = debug, 3+ = trace; `quiet` wins
/// and drops to errors only. An explicit `RUST_LOG`-style filter string
/// overrides both.
///
/// # Errors
///
/// Returns an error if a subscriber is already installed.
pub fn init_logging(
    verbose: u8,
    quiet: bool,
    filter: Option<&str>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let env_filter = match filter {
        Some(spec) => EnvFilter::try_new(spec)?,
        None => EnvFilter::try_new(format!("issuedeck={default_level},issuedeck_lib={default_level}"))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()?;

    Ok(())
}
