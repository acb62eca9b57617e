//! Command implementations for the `deck` CLI.

pub mod activity;
pub mod comment;
pub mod create;
pub mod list;
pub mod members;
pub mod show;
pub mod stats;

use anyhow::Result;
use issuedeck_lib::model::Author;

use crate::api::Dashboard;

/// Resolve a team member id into a comment author identity.
pub(crate) async fn resolve_author(dashboard: &Dashboard, member_id: i64) -> Result<Author> {
    let member = dashboard.team().get(member_id).await?;
    Ok(Author::new(member.id, member.name, member.email))
}
