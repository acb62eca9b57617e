//! Issue service — list, fetch, create, update, delete, stats.

use issuedeck_lib::model::{Issue, NewIssue};
use issuedeck_lib::{IssueFilters, IssueStats, IssueUpdate, Result};

use super::Dashboard;
use crate::config::OpClass;

/// Service facade for issue operations.
pub struct IssueApi<'a> {
    inner: &'a Dashboard,
}

impl<'a> IssueApi<'a> {
    pub(crate) const fn new(inner: &'a Dashboard) -> Self {
        Self { inner }
    }

    /// Issues matching the filters, sorted per the filter's sort order.
    pub async fn list(&self, filters: &IssueFilters) -> Vec<Issue> {
        self.inner.pause(OpClass::Read).await;
        let store = self.inner.store().lock().await;
        store.list_issues(filters).into_iter().cloned().collect()
    }

    /// A single issue by id.
    ///
    /// # Errors
    ///
    /// Returns `IssueNotFound` from the store.
    pub async fn get(&self, id: i64) -> Result<Issue> {
        self.inner.pause(OpClass::Read).await;
        let store = self.inner.store().lock().await;
        store.get_issue(id).cloned()
    }

    /// Create an issue.
    ///
    /// # Errors
    ///
    /// Returns `Validation`/`ValidationErrors` from the store.
    pub async fn create(&self, new_issue: NewIssue) -> Result<Issue> {
        self.inner.pause(OpClass::Create).await;
        let mut store = self.inner.store().lock().await;
        store.create_issue(new_issue)
    }

    /// Apply a field-wise update.
    ///
    /// # Errors
    ///
    /// Returns `IssueNotFound` or `Validation` from the store.
    pub async fn update(&self, id: i64, update: &IssueUpdate, actor: &str) -> Result<Issue> {
        self.inner.pause(OpClass::Update).await;
        let mut store = self.inner.store().lock().await;
        store.update_issue(id, update, actor)
    }

    /// Delete an issue with its comments.
    ///
    /// # Errors
    ///
    /// Returns `IssueNotFound` from the store.
    pub async fn delete(&self, id: i64, actor: &str) -> Result<()> {
        self.inner.pause(OpClass::Delete).await;
        let mut store = self.inner.store().lock().await;
        store.delete_issue(id, actor)
    }

    /// Title/description substring search.
    pub async fn search(&self, query: &str) -> Vec<Issue> {
        self.inner.pause(OpClass::Read).await;
        let store = self.inner.store().lock().await;
        store.search_issues(query).into_iter().cloned().collect()
    }

    /// Dashboard stat-card counts.
    pub async fn stats(&self) -> IssueStats {
        self.inner.pause(OpClass::Read).await;
        let store = self.inner.store().lock().await;
        store.issue_stats()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LatencyProfile;
    use issuedeck_lib::model::{IssueStatus, Severity};
    use issuedeck_lib::DeckError;

    fn sample(title: &str, severity: Severity) -> NewIssue {
        NewIssue {
            title: title.to_string(),
            severity,
            category: "Bug".to_string(),
            reporter: "tester".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn create_list_roundtrip() {
        let dashboard = Dashboard::new(LatencyProfile::zero());
        let issues = dashboard.issues();

        issues.create(sample("One", Severity::High)).await.unwrap();
        issues.create(sample("Two", Severity::Low)).await.unwrap();

        let all = issues.list(&IssueFilters::default()).await;
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn filters_pass_through() {
        let dashboard = Dashboard::new(LatencyProfile::zero());
        let issues = dashboard.issues();

        issues
            .create(sample("Crash", Severity::Critical))
            .await
            .unwrap();
        issues.create(sample("Tweak", Severity::Low)).await.unwrap();

        let filtered = issues
            .list(&IssueFilters {
                severities: Some(vec![Severity::Critical]),
                ..Default::default()
            })
            .await;
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "Crash");
    }

    #[tokio::test]
    async fn update_changes_status() {
        let dashboard = Dashboard::new(LatencyProfile::zero());
        let issues = dashboard.issues();

        let issue = issues.create(sample("Flow", Severity::Medium)).await.unwrap();
        let updated = issues
            .update(
                issue.id,
                &IssueUpdate {
                    status: Some(IssueStatus::Resolved),
                    ..Default::default()
                },
                "dev",
            )
            .await
            .unwrap();
        assert_eq!(updated.status, IssueStatus::Resolved);
    }

    #[tokio::test]
    async fn get_missing_issue_errors() {
        let dashboard = Dashboard::new(LatencyProfile::zero());
        let result = dashboard.issues().get(42).await;
        assert!(matches!(result, Err(DeckError::IssueNotFound { id: 42 })));
    }

    #[tokio::test]
    async fn delete_removes_issue() {
        let dashboard = Dashboard::new(LatencyProfile::zero());
        let issues = dashboard.issues();

        let issue = issues.create(sample("Gone", Severity::Medium)).await.unwrap();
        issues.delete(issue.id, "admin").await.unwrap();
        assert!(issues.get(issue.id).await.is_err());
    }
}
