//! Create command implementation.

use anyhow::Result;
use issuedeck_lib::model::NewIssue;

use crate::api::Dashboard;
use crate::cli::CreateArgs;
use crate::format::format_issue_line;

/// Execute the create command.
///
/// # Errors
///
/// Returns an error if the severity fails to parse or validation fails.
pub async fn execute(dashboard: &Dashboard, args: &CreateArgs, json: bool) -> Result<()> {
    let new_issue = NewIssue {
        title: args.title.clone(),
        description: args.description.clone(),
        severity: args.severity.parse()?,
        category: args.category.clone(),
        assignee: args.assignee.clone(),
        reporter: "Jordan Reyes".to_string(),
    };

    let issue = dashboard.issues().create(new_issue).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&issue)?);
    } else {
        println!("Created {}", format_issue_line(&issue));
    }

    Ok(())
}
