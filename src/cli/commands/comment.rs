//! Comment command implementation.
//!
//! Mutations print the refreshed thread afterwards so the effect of the
//! operation is visible in one invocation.

use anyhow::Result;
use issuedeck_lib::thread;

use super::resolve_author;
use crate::api::Dashboard;
use crate::cli::{CommentCommand, CommentSubcommand};
use crate::format::render_thread;

/// Execute a comment subcommand.
///
/// # Errors
///
/// Returns an error if the target issue, comment, or member is missing,
/// or the content fails validation.
pub async fn execute(dashboard: &Dashboard, args: &CommentCommand, json: bool) -> Result<()> {
    let comments = dashboard.comments();

    match &args.command {
        CommentSubcommand::Add { issue_id, content } => {
            let author = resolve_author(dashboard, args.member_id).await?;
            let comment = comments.create(*issue_id, &author, content).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&comment)?);
            } else {
                println!("Added comment {} to issue {}\n", comment.id, issue_id);
                print_thread(dashboard, *issue_id).await;
            }
        }
        CommentSubcommand::Reply { parent_id, content } => {
            let author = resolve_author(dashboard, args.member_id).await?;
            let reply = comments.reply(*parent_id, &author, content).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&reply)?);
            } else {
                println!(
                    "Added reply {} under comment {}\n",
                    reply.id, parent_id
                );
                print_thread(dashboard, reply.issue_id).await;
            }
        }
        CommentSubcommand::Edit { id, content } => {
            let comment = comments.edit(*id, content).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&comment)?);
            } else {
                println!("Edited comment {}\n", comment.id);
                print_thread(dashboard, comment.issue_id).await;
            }
        }
        CommentSubcommand::Delete { id } => {
            let removed = comments.delete(*id).await?;
            if json {
                println!("{}", serde_json::json!({ "removed": removed }));
            } else {
                println!("Deleted {removed} comment(s)");
            }
        }
        CommentSubcommand::List { issue_id } => {
            let forest = comments.thread(*issue_id).await;
            if json {
                println!("{}", serde_json::to_string_pretty(&forest)?);
            } else {
                println!("Comments ({})", thread::count(&forest));
                if forest.is_empty() {
                    println!("  No comments yet.");
                } else {
                    print!("{}", render_thread(&forest));
                }
            }
        }
    }

    Ok(())
}

async fn print_thread(dashboard: &Dashboard, issue_id: i64) {
    let forest = dashboard.comments().thread(issue_id).await;
    println!("Comments ({})", thread::count(&forest));
    print!("{}", render_thread(&forest));
}
