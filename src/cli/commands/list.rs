//! List command implementation.
//!
//! Primary discovery interface with the dashboard's filter semantics
//! and `IssueWithCommentCount` JSON output.

use anyhow::Result;
use issuedeck_lib::IssueFilters;

use crate::api::Dashboard;
use crate::cli::ListArgs;
use crate::format::{format_issue_table, IssueWithCommentCount};

/// Execute the list command.
///
/// # Errors
///
/// Returns an error if a filter value fails to parse.
pub async fn execute(dashboard: &Dashboard, args: &ListArgs, json: bool) -> Result<()> {
    let filters = build_filters(args)?;
    let issues = dashboard.issues().list(&filters).await;

    let mut rows = Vec::with_capacity(issues.len());
    for issue in issues {
        let comment_count = dashboard.comments().flat(issue.id).await.len();
        rows.push(IssueWithCommentCount {
            issue,
            comment_count,
        });
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else if rows.is_empty() {
        println!("No issues found.");
    } else {
        print!("{}", format_issue_table(&rows));
        println!("\n{} issue(s)", rows.len());
    }

    Ok(())
}

/// Convert CLI args to store filters.
fn build_filters(args: &ListArgs) -> Result<IssueFilters> {
    let statuses = args
        .status
        .as_deref()
        .map(str::parse)
        .transpose()?
        .map(|status| vec![status]);

    let severities = args
        .severity
        .as_deref()
        .map(str::parse)
        .transpose()?
        .map(|severity| vec![severity]);

    Ok(IssueFilters {
        statuses,
        severities,
        assignee: None,
        search: args.search.clone(),
        limit: args.limit,
        ..Default::default()
    })
}
