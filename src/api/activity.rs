//! Activity feed service.
//!
//! Most feed entries are recorded implicitly by store mutations; this
//! facade reads the feed and lets callers append or prune entries.

use issuedeck_lib::model::{Activity, ActivityKind};
use issuedeck_lib::Result;

use super::Dashboard;
use crate::config::OpClass;

/// Service facade for activity feed operations.
pub struct ActivityApi<'a> {
    inner: &'a Dashboard,
}

impl<'a> ActivityApi<'a> {
    pub(crate) const fn new(inner: &'a Dashboard) -> Self {
        Self { inner }
    }

    /// Feed entries for one issue, oldest first.
    pub async fn for_issue(&self, issue_id: i64) -> Vec<Activity> {
        self.inner.pause(OpClass::Read).await;
        let store = self.inner.store().lock().await;
        store
            .activities_for_issue(issue_id)
            .into_iter()
            .cloned()
            .collect()
    }

    /// The whole feed across all issues.
    pub async fn all(&self) -> Vec<Activity> {
        self.inner.pause(OpClass::Read).await;
        let store = self.inner.store().lock().await;
        store.all_activities().to_vec()
    }

    /// Append an externally sourced entry.
    ///
    /// # Errors
    ///
    /// Returns `IssueNotFound` from the store.
    pub async fn record(
        &self,
        issue_id: i64,
        kind: ActivityKind,
        actor: &str,
        detail: Option<String>,
    ) -> Result<Activity> {
        self.inner.pause(OpClass::Create).await;
        let mut store = self.inner.store().lock().await;
        store.add_activity(issue_id, kind, actor, detail)
    }

    /// Remove a single entry.
    ///
    /// # Errors
    ///
    /// Returns `ActivityNotFound` from the store.
    pub async fn delete(&self, id: i64) -> Result<()> {
        self.inner.pause(OpClass::Delete).await;
        let mut store = self.inner.store().lock().await;
        store.delete_activity(id)
    }
}
