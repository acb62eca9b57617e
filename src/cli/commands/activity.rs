//! Activity command implementation.

use anyhow::Result;

use crate::api::Dashboard;
use crate::cli::ActivityArgs;

/// Execute the activity command.
///
/// # Errors
///
/// Returns an error if the issue does not exist.
pub async fn execute(dashboard: &Dashboard, args: &ActivityArgs, json: bool) -> Result<()> {
    // Fail loudly on a bad id instead of printing an empty feed.
    dashboard.issues().get(args.id).await?;
    let activities = dashboard.activity().for_issue(args.id).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&activities)?);
        return Ok(());
    }

    if activities.is_empty() {
        println!("No activity for issue {}.", args.id);
        return Ok(());
    }

    for activity in &activities {
        let detail = activity
            .detail
            .as_deref()
            .map(|d| format!(" ({d})"))
            .unwrap_or_default();
        println!(
            "{} {} {}{}",
            activity.timestamp.format("%Y-%m-%d %H:%M"),
            activity.actor,
            activity.kind,
            detail,
        );
    }

    Ok(())
}
