//! Comment service — thread retrieval, create, reply, edit, delete.

use issuedeck_lib::model::{Author, Comment, ThreadedComment};
use issuedeck_lib::{thread, Result};

use super::Dashboard;
use crate::config::OpClass;

/// Service facade for comment operations.
pub struct CommentApi<'a> {
    inner: &'a Dashboard,
}

impl<'a> CommentApi<'a> {
    pub(crate) const fn new(inner: &'a Dashboard) -> Self {
        Self { inner }
    }

    /// The threaded comment forest for an issue, roots and nested
    /// replies in chronological order. Empty when the issue has no
    /// comments.
    pub async fn thread(&self, issue_id: i64) -> Vec<ThreadedComment> {
        self.inner.pause(OpClass::Read).await;
        let store = self.inner.store().lock().await;
        let flat: Vec<Comment> = store
            .comments_for_issue(issue_id)
            .into_iter()
            .cloned()
            .collect();
        thread::build_thread(&flat)
    }

    /// The flat (unthreaded) comment list for an issue.
    pub async fn flat(&self, issue_id: i64) -> Vec<Comment> {
        self.inner.pause(OpClass::Read).await;
        let store = self.inner.store().lock().await;
        store
            .comments_for_issue(issue_id)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Add a root comment.
    ///
    /// # Errors
    ///
    /// Returns `IssueNotFound` or `Validation` from the store.
    pub async fn create(&self, issue_id: i64, author: &Author, content: &str) -> Result<Comment> {
        self.inner.pause(OpClass::Create).await;
        let mut store = self.inner.store().lock().await;
        store.add_comment(issue_id, author, content)
    }

    /// Reply under an existing comment at any depth.
    ///
    /// # Errors
    ///
    /// Returns `CommentNotFound` or `Validation` from the store.
    pub async fn reply(&self, parent_id: i64, author: &Author, content: &str) -> Result<Comment> {
        self.inner.pause(OpClass::Create).await;
        let mut store = self.inner.store().lock().await;
        store.reply_to_comment(parent_id, author, content)
    }

    /// Edit a comment's content.
    ///
    /// # Errors
    ///
    /// Returns `CommentNotFound` or `Validation` from the store.
    pub async fn edit(&self, id: i64, content: &str) -> Result<Comment> {
        self.inner.pause(OpClass::Update).await;
        let mut store = self.inner.store().lock().await;
        store.update_comment(id, content)
    }

    /// Delete a comment and its descendants; returns how many records
    /// were removed.
    ///
    /// # Errors
    ///
    /// Returns `CommentNotFound` from the store.
    pub async fn delete(&self, id: i64) -> Result<usize> {
        self.inner.pause(OpClass::Delete).await;
        let mut store = self.inner.store().lock().await;
        store.delete_comment(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LatencyProfile;
    use issuedeck_lib::model::NewIssue;
    use issuedeck_lib::DeckError;

    fn ada() -> Author {
        Author::new(1, "Ada", "ada@example.com")
    }

    async fn dashboard_with_issue() -> (Dashboard, i64) {
        let dashboard = Dashboard::new(LatencyProfile::zero());
        let issue = dashboard
            .issues()
            .create(NewIssue {
                title: "Threading".to_string(),
                category: "Bug".to_string(),
                reporter: "tester".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();
        (dashboard, issue.id)
    }

    #[tokio::test]
    async fn thread_returns_nested_forest() {
        let (dashboard, issue_id) = dashboard_with_issue().await;
        let comments = dashboard.comments();

        let root = comments.create(issue_id, &ada(), "root").await.unwrap();
        let reply = comments.reply(root.id, &ada(), "reply").await.unwrap();
        comments.reply(reply.id, &ada(), "nested").await.unwrap();

        let forest = comments.thread(issue_id).await;
        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].replies[0].replies.len(), 1);
        assert_eq!(thread::count(&forest), 3);
    }

    #[tokio::test]
    async fn thread_for_unknown_issue_is_empty() {
        let (dashboard, _) = dashboard_with_issue().await;
        assert!(dashboard.comments().thread(999).await.is_empty());
    }

    #[tokio::test]
    async fn edit_marks_comment_edited() {
        let (dashboard, issue_id) = dashboard_with_issue().await;
        let comments = dashboard.comments();

        let comment = comments.create(issue_id, &ada(), "tpyo").await.unwrap();
        let edited = comments.edit(comment.id, "typo").await.unwrap();
        assert!(edited.is_edited);
        assert_eq!(edited.content, "typo");
    }

    #[tokio::test]
    async fn delete_cascades_and_reports_count() {
        let (dashboard, issue_id) = dashboard_with_issue().await;
        let comments = dashboard.comments();

        let root = comments.create(issue_id, &ada(), "root").await.unwrap();
        let reply = comments.reply(root.id, &ada(), "reply").await.unwrap();
        comments.reply(reply.id, &ada(), "nested").await.unwrap();

        assert_eq!(comments.delete(root.id).await.unwrap(), 3);
        assert!(comments.thread(issue_id).await.is_empty());
    }

    #[tokio::test]
    async fn reply_to_missing_parent_errors() {
        let (dashboard, _) = dashboard_with_issue().await;
        let result = dashboard.comments().reply(404, &ada(), "lost").await;
        assert!(matches!(result, Err(DeckError::CommentNotFound { id: 404 })));
    }
}
