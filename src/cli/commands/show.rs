//! Show command implementation.

use anyhow::Result;
use issuedeck_lib::thread;

use crate::api::Dashboard;
use crate::cli::ShowArgs;
use crate::format::{format_issue_line, render_thread, IssueDetails};

/// Execute the show command.
///
/// # Errors
///
/// Returns an error if the issue does not exist.
pub async fn execute(dashboard: &Dashboard, args: &ShowArgs, json: bool) -> Result<()> {
    let issue = dashboard.issues().get(args.id).await?;
    let comments = dashboard.comments().thread(args.id).await;
    let activities = dashboard.activity().for_issue(args.id).await;
    let comment_count = thread::count(&comments);

    if json {
        let details = IssueDetails {
            issue,
            comments,
            comment_count,
            activities,
        };
        println!("{}", serde_json::to_string_pretty(&details)?);
        return Ok(());
    }

    println!("{}", format_issue_line(&issue));
    if let Some(ref description) = issue.description {
        println!("\n{description}");
    }
    if let Some(ref assignee) = issue.assignee {
        println!("\nAssignee: {assignee}");
    }
    println!("Reporter: {}", issue.reporter);

    println!("\nComments ({comment_count})");
    if comments.is_empty() {
        println!("  No comments yet.");
    } else {
        print!("{}", render_thread(&comments));
    }

    if !activities.is_empty() {
        println!("\nActivity");
        for activity in &activities {
            let detail = activity
                .detail
                .as_deref()
                .map(|d| format!(" ({d})"))
                .unwrap_or_default();
            println!(
                "  {} {} {}{}",
                activity.timestamp.format("%Y-%m-%d %H:%M"),
                activity.actor,
                activity.kind,
                detail,
            );
        }
    }

    Ok(())
}
