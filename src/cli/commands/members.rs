//! Members command implementation.

use anyhow::Result;

use crate::api::Dashboard;

/// Execute the members command.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub async fn execute(dashboard: &Dashboard, json: bool) -> Result<()> {
    let members = dashboard.team().list().await;

    if json {
        println!("{}", serde_json::to_string_pretty(&members)?);
        return Ok(());
    }

    for member in &members {
        let role = member
            .role
            .as_deref()
            .map(|r| format!(" ({r})"))
            .unwrap_or_default();
        println!("{:>3}  {} <{}>{}", member.id, member.name, member.email, role);
    }
    println!("\n{} member(s)", members.len());

    Ok(())
}
