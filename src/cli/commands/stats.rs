//! Stats command implementation.

use anyhow::Result;

use crate::api::Dashboard;
use crate::format::format_stats;

/// Execute the stats command.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub async fn execute(dashboard: &Dashboard, json: bool) -> Result<()> {
    let stats = dashboard.issues().stats().await;

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        print!("{}", format_stats(&stats));
    }

    Ok(())
}
