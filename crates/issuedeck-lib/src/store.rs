//! In-memory dashboard store.
//!
//! Provides the full CRUD API for issues, comments, team members, and
//! the activity feed without any database dependency. One explicitly
//! constructed store instance is the single source of truth for the
//! process; the threaded comment view is derived from it, never stored.

use std::collections::{HashMap, HashSet, VecDeque};

use chrono::Utc;

use crate::error::{DeckError, Result};
use crate::model::{
    Activity, ActivityKind, Author, Comment, Issue, IssueStatus, NewIssue, TeamMember,
};
use crate::query::{IssueFilters, IssueSort, IssueStats, IssueUpdate, MemberUpdate};
use crate::validation::{CommentValidator, IssueValidator};

/// In-memory issue-tracking store.
///
/// All data lives in memory for the lifetime of the process. Ids are
/// monotonically increasing per record family. Every mutation records
/// an entry in the activity feed.
pub struct DashboardStore {
    issues: HashMap<i64, Issue>,
    comments: Vec<Comment>,
    members: Vec<TeamMember>,
    activities: Vec<Activity>,
    next_issue_id: i64,
    next_comment_id: i64,
    next_member_id: i64,
    next_activity_id: i64,
}

impl DashboardStore {
    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Create a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            issues: HashMap::new(),
            comments: Vec::new(),
            members: Vec::new(),
            activities: Vec::new(),
            next_issue_id: 1,
            next_comment_id: 1,
            next_member_id: 1,
            next_activity_id: 1,
        }
    }

    /// Build a store from pre-existing records (seed data).
    ///
    /// Id counters resume after the highest id in each family, so
    /// records created afterwards never collide with the seed.
    #[must_use]
    pub fn from_records(
        issues: Vec<Issue>,
        comments: Vec<Comment>,
        members: Vec<TeamMember>,
        activities: Vec<Activity>,
    ) -> Self {
        let mut store = Self::new();

        store.next_issue_id = issues.iter().map(|i| i.id).max().unwrap_or(0) + 1;
        store.next_comment_id = comments.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        store.next_member_id = members.iter().map(|m| m.id).max().unwrap_or(0) + 1;
        store.next_activity_id = activities.iter().map(|a| a.id).max().unwrap_or(0) + 1;

        for issue in issues {
            store.issues.insert(issue.id, issue);
        }
        store.comments = comments;
        store.members = members;
        store.activities = activities;

        store
    }

    // ========================================================================
    // Issues
    // ========================================================================

    /// Create a new issue in the store.
    ///
    /// # Errors
    ///
    /// Returns `Validation`/`ValidationErrors` if the new issue violates
    /// field constraints.
    pub fn create_issue(&mut self, new_issue: NewIssue) -> Result<Issue> {
        IssueValidator::validate(&new_issue).map_err(DeckError::from_validation_errors)?;

        let now = Utc::now();
        let issue = Issue {
            id: self.next_issue_id,
            title: new_issue.title,
            description: new_issue.description,
            status: IssueStatus::New,
            severity: new_issue.severity,
            category: new_issue.category,
            assignee: new_issue.assignee,
            reporter: new_issue.reporter,
            created_at: now,
            updated_at: now,
        };
        self.next_issue_id += 1;

        tracing::debug!(issue_id = issue.id, title = %issue.title, "created issue");
        let actor = issue.reporter.clone();
        self.issues.insert(issue.id, issue.clone());
        self.record_activity(issue.id, ActivityKind::Created, &actor, None);

        Ok(issue)
    }

    /// Get a single issue by ID.
    ///
    /// # Errors
    ///
    /// Returns `IssueNotFound` if the issue doesn't exist.
    pub fn get_issue(&self, id: i64) -> Result<&Issue> {
        self.issues
            .get(&id)
            .ok_or(DeckError::IssueNotFound { id })
    }

    /// Update an existing issue.
    ///
    /// # Errors
    ///
    /// Returns `IssueNotFound` if the issue doesn't exist, or
    /// `Validation` if the update is invalid.
    pub fn update_issue(&mut self, id: i64, update: &IssueUpdate, actor: &str) -> Result<Issue> {
        // Collect activities to record after releasing the borrow on issue
        let mut pending: Vec<(ActivityKind, Option<String>)> = Vec::new();

        let issue = self
            .issues
            .get_mut(&id)
            .ok_or(DeckError::IssueNotFound { id })?;

        if let Some(ref title) = update.title {
            if title.trim().is_empty() {
                return Err(DeckError::validation("title", "cannot be empty"));
            }
            issue.title.clone_from(title);
        }
        if let Some(ref description) = update.description {
            issue.description.clone_from(description);
        }
        if let Some(status) = update.status {
            let old = issue.status;
            if old != status {
                issue.status = status;
                pending.push((
                    ActivityKind::StatusChanged,
                    Some(format!("{old} -> {status}")),
                ));
            }
        }
        if let Some(severity) = update.severity {
            issue.severity = severity;
        }
        if let Some(ref category) = update.category {
            issue.category.clone_from(category);
        }
        if let Some(ref assignee) = update.assignee {
            issue.assignee.clone_from(assignee);
        }

        issue.updated_at = Utc::now();
        let updated = issue.clone();

        pending.push((ActivityKind::Updated, None));
        for (kind, detail) in pending {
            self.record_activity(id, kind, actor, detail);
        }
        tracing::debug!(issue_id = id, "updated issue");

        Ok(updated)
    }

    /// Delete an issue, its comments, and its activity history.
    ///
    /// A single `Deleted` entry remains in the feed as a marker.
    ///
    /// # Errors
    ///
    /// Returns `IssueNotFound` if the issue doesn't exist.
    pub fn delete_issue(&mut self, id: i64, actor: &str) -> Result<()> {
        if self.issues.remove(&id).is_none() {
            return Err(DeckError::IssueNotFound { id });
        }

        self.comments.retain(|c| c.issue_id != id);
        self.activities.retain(|a| a.issue_id != id);
        self.record_activity(id, ActivityKind::Deleted, actor, None);
        tracing::debug!(issue_id = id, "deleted issue");

        Ok(())
    }

    /// List issues with filters, sorted and optionally limited.
    #[must_use]
    pub fn list_issues(&self, filters: &IssueFilters) -> Vec<&Issue> {
        let mut results: Vec<&Issue> = self
            .issues
            .values()
            .filter(|issue| Self::matches_filters(issue, filters))
            .collect();

        Self::sort_issues(&mut results, filters.sort);

        if let Some(limit) = filters.limit {
            results.truncate(limit);
        }

        results
    }

    /// Search issues by title or description substring.
    #[must_use]
    pub fn search_issues(&self, query: &str) -> Vec<&Issue> {
        let query_lower = query.to_lowercase();
        let mut results: Vec<&Issue> = self
            .issues
            .values()
            .filter(|issue| {
                issue.title.to_lowercase().contains(&query_lower)
                    || issue
                        .description
                        .as_ref()
                        .is_some_and(|d| d.to_lowercase().contains(&query_lower))
            })
            .collect();
        Self::sort_issues(&mut results, IssueSort::Newest);
        results
    }

    /// Count issues matching the given filters.
    #[must_use]
    pub fn count_issues(&self, filters: &IssueFilters) -> usize {
        self.issues
            .values()
            .filter(|issue| Self::matches_filters(issue, filters))
            .count()
    }

    /// Dashboard stat-card counts.
    #[must_use]
    pub fn issue_stats(&self) -> IssueStats {
        let mut stats = IssueStats {
            total: self.issues.len(),
            ..Default::default()
        };
        for issue in self.issues.values() {
            if issue.status.is_open() {
                stats.open += 1;
            }
            if issue.status == IssueStatus::InProgress {
                stats.in_progress += 1;
            }
            if issue.status == IssueStatus::Resolved {
                stats.resolved += 1;
            }
        }
        stats
    }

    /// Get the total number of issues.
    #[must_use]
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    /// Check if the store has no issues.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    // ========================================================================
    // Comments
    // ========================================================================

    /// All comments (roots and replies) for an issue, insertion order.
    ///
    /// Returns an empty vec when the issue has no comments (or doesn't
    /// exist); threading happens in [`crate::thread::build_thread`].
    #[must_use]
    pub fn comments_for_issue(&self, issue_id: i64) -> Vec<&Comment> {
        self.comments
            .iter()
            .filter(|c| c.issue_id == issue_id)
            .collect()
    }

    /// Get a single comment by ID.
    ///
    /// # Errors
    ///
    /// Returns `CommentNotFound` if the comment doesn't exist.
    pub fn get_comment(&self, id: i64) -> Result<&Comment> {
        self.comments
            .iter()
            .find(|c| c.id == id)
            .ok_or(DeckError::CommentNotFound { id })
    }

    /// Add a root comment to an issue.
    ///
    /// # Errors
    ///
    /// Returns `IssueNotFound` if the issue doesn't exist, or
    /// `Validation` if the content is empty after trimming or too long.
    pub fn add_comment(&mut self, issue_id: i64, author: &Author, content: &str) -> Result<Comment> {
        if !self.issues.contains_key(&issue_id) {
            return Err(DeckError::IssueNotFound { id: issue_id });
        }

        let comment = self.insert_comment(issue_id, None, author, content)?;
        self.record_activity(
            issue_id,
            ActivityKind::Commented,
            &comment.author.user_name,
            Some(comment.content.clone()),
        );

        Ok(comment)
    }

    /// Add a reply under an existing comment.
    ///
    /// The reply's `issue_id` is always copied from the parent — it is
    /// never supplied by the caller, which is what keeps a reply from
    /// pointing outside its parent's issue.
    ///
    /// # Errors
    ///
    /// Returns `CommentNotFound` if the parent doesn't exist, or
    /// `Validation` if the content is empty after trimming or too long.
    pub fn reply_to_comment(
        &mut self,
        parent_id: i64,
        author: &Author,
        content: &str,
    ) -> Result<Comment> {
        let issue_id = self.get_comment(parent_id)?.issue_id;

        let comment = self.insert_comment(issue_id, Some(parent_id), author, content)?;
        self.record_activity(
            issue_id,
            ActivityKind::Commented,
            &comment.author.user_name,
            Some(comment.content.clone()),
        );

        Ok(comment)
    }

    /// Edit a comment's content.
    ///
    /// Bumps `updated_at` and marks the comment edited; everything else
    /// is immutable.
    ///
    /// # Errors
    ///
    /// Returns `CommentNotFound` if the comment doesn't exist, or
    /// `Validation` if the content is invalid.
    pub fn update_comment(&mut self, id: i64, content: &str) -> Result<Comment> {
        CommentValidator::validate_content(content)
            .map_err(|e| DeckError::validation(e.field, e.message))?;

        let comment = self
            .comments
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(DeckError::CommentNotFound { id })?;

        comment.content = content.trim().to_string();
        comment.updated_at = Utc::now();
        comment.is_edited = true;
        let updated = comment.clone();

        self.record_activity(
            updated.issue_id,
            ActivityKind::CommentEdited,
            &updated.author.user_name,
            None,
        );
        tracing::debug!(comment_id = id, "edited comment");

        Ok(updated)
    }

    /// Delete a comment and its entire descendant subtree.
    ///
    /// The cascade happens at the store level so the flat collection and
    /// the derived tree always agree; replies never survive their
    /// parent. Returns how many comments were removed.
    ///
    /// # Errors
    ///
    /// Returns `CommentNotFound` if the comment doesn't exist.
    pub fn delete_comment(&mut self, id: i64) -> Result<usize> {
        let target = self.get_comment(id)?;
        let issue_id = target.issue_id;
        let actor = target.author.user_name.clone();

        // BFS over parent links to collect the subtree.
        let mut doomed: HashSet<i64> = HashSet::from([id]);
        let mut queue: VecDeque<i64> = VecDeque::from([id]);
        while let Some(current) = queue.pop_front() {
            for comment in &self.comments {
                if comment.parent_id == Some(current) && doomed.insert(comment.id) {
                    queue.push_back(comment.id);
                }
            }
        }

        let before = self.comments.len();
        self.comments.retain(|c| !doomed.contains(&c.id));
        let removed = before - self.comments.len();

        self.record_activity(
            issue_id,
            ActivityKind::CommentDeleted,
            &actor,
            Some(format!("{removed} comment(s) removed")),
        );
        tracing::debug!(comment_id = id, removed, "deleted comment subtree");

        Ok(removed)
    }

    /// Get the total number of comments across all issues.
    #[must_use]
    pub fn comment_count(&self) -> usize {
        self.comments.len()
    }

    fn insert_comment(
        &mut self,
        issue_id: i64,
        parent_id: Option<i64>,
        author: &Author,
        content: &str,
    ) -> Result<Comment> {
        CommentValidator::validate_content(content)
            .map_err(|e| DeckError::validation(e.field, e.message))?;

        let now = Utc::now();
        let comment = Comment {
            id: self.next_comment_id,
            issue_id,
            parent_id,
            author: author.clone(),
            content: content.trim().to_string(),
            created_at: now,
            updated_at: now,
            is_edited: false,
        };
        self.next_comment_id += 1;

        tracing::debug!(
            comment_id = comment.id,
            issue_id,
            parent_id,
            "created comment"
        );
        self.comments.push(comment.clone());

        Ok(comment)
    }

    // ========================================================================
    // Team Members
    // ========================================================================

    /// Add a team member.
    ///
    /// # Errors
    ///
    /// Returns `Validation` if the name or email is empty.
    pub fn add_member(
        &mut self,
        name: &str,
        email: &str,
        role: Option<String>,
    ) -> Result<TeamMember> {
        if name.trim().is_empty() {
            return Err(DeckError::validation("name", "cannot be empty"));
        }
        if email.trim().is_empty() {
            return Err(DeckError::validation("email", "cannot be empty"));
        }

        let member = TeamMember {
            id: self.next_member_id,
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            role,
        };
        self.next_member_id += 1;
        self.members.push(member.clone());

        Ok(member)
    }

    /// Get a team member by ID.
    ///
    /// # Errors
    ///
    /// Returns `MemberNotFound` if the member doesn't exist.
    pub fn get_member(&self, id: i64) -> Result<&TeamMember> {
        self.members
            .iter()
            .find(|m| m.id == id)
            .ok_or(DeckError::MemberNotFound { id })
    }

    /// Update a team member.
    ///
    /// # Errors
    ///
    /// Returns `MemberNotFound` if the member doesn't exist.
    pub fn update_member(&mut self, id: i64, update: &MemberUpdate) -> Result<TeamMember> {
        let member = self
            .members
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or(DeckError::MemberNotFound { id })?;

        if let Some(ref name) = update.name {
            member.name.clone_from(name);
        }
        if let Some(ref email) = update.email {
            member.email.clone_from(email);
        }
        if let Some(ref role) = update.role {
            member.role.clone_from(role);
        }

        Ok(member.clone())
    }

    /// Remove a team member.
    ///
    /// # Errors
    ///
    /// Returns `MemberNotFound` if the member doesn't exist.
    pub fn remove_member(&mut self, id: i64) -> Result<()> {
        let before = self.members.len();
        self.members.retain(|m| m.id != id);
        if self.members.len() == before {
            return Err(DeckError::MemberNotFound { id });
        }
        Ok(())
    }

    /// All team members, insertion order.
    #[must_use]
    pub fn list_members(&self) -> &[TeamMember] {
        &self.members
    }

    // ========================================================================
    // Activity Feed
    // ========================================================================

    /// Append an externally sourced activity entry.
    ///
    /// # Errors
    ///
    /// Returns `IssueNotFound` if the issue doesn't exist.
    pub fn add_activity(
        &mut self,
        issue_id: i64,
        kind: ActivityKind,
        actor: &str,
        detail: Option<String>,
    ) -> Result<Activity> {
        if !self.issues.contains_key(&issue_id) {
            return Err(DeckError::IssueNotFound { id: issue_id });
        }
        Ok(self.record_activity(issue_id, kind, actor, detail))
    }

    /// Activity entries for a specific issue.
    #[must_use]
    pub fn activities_for_issue(&self, issue_id: i64) -> Vec<&Activity> {
        self.activities
            .iter()
            .filter(|a| a.issue_id == issue_id)
            .collect()
    }

    /// The whole activity feed across all issues.
    #[must_use]
    pub fn all_activities(&self) -> &[Activity] {
        &self.activities
    }

    /// Remove a single activity entry.
    ///
    /// # Errors
    ///
    /// Returns `ActivityNotFound` if the entry doesn't exist.
    pub fn delete_activity(&mut self, id: i64) -> Result<()> {
        let before = self.activities.len();
        self.activities.retain(|a| a.id != id);
        if self.activities.len() == before {
            return Err(DeckError::ActivityNotFound { id });
        }
        Ok(())
    }

    // ========================================================================
    // Internal Helpers
    // ========================================================================

    fn record_activity(
        &mut self,
        issue_id: i64,
        kind: ActivityKind,
        actor: &str,
        detail: Option<String>,
    ) -> Activity {
        let activity = Activity {
            id: self.next_activity_id,
            issue_id,
            kind,
            actor: actor.to_string(),
            detail,
            timestamp: Utc::now(),
        };
        self.next_activity_id += 1;
        self.activities.push(activity.clone());
        activity
    }

    fn matches_filters(issue: &Issue, filters: &IssueFilters) -> bool {
        if let Some(ref statuses) = filters.statuses {
            if !statuses.contains(&issue.status) {
                return false;
            }
        }

        if let Some(ref severities) = filters.severities {
            if !severities.contains(&issue.severity) {
                return false;
            }
        }

        if let Some(ref assignee) = filters.assignee {
            if issue.assignee.as_deref() != Some(assignee.as_str()) {
                return false;
            }
        }

        if let Some(ref query) = filters.search {
            let query_lower = query.to_lowercase();
            let in_title = issue.title.to_lowercase().contains(&query_lower);
            let in_description = issue
                .description
                .as_ref()
                .is_some_and(|d| d.to_lowercase().contains(&query_lower));
            if !in_title && !in_description {
                return false;
            }
        }

        true
    }

    fn sort_issues(issues: &mut [&Issue], sort: IssueSort) {
        match sort {
            IssueSort::Newest => {
                issues.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
            }
            IssueSort::Oldest => {
                issues.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
            }
            IssueSort::Severity => {
                issues.sort_by(|a, b| {
                    a.severity
                        .cmp(&b.severity)
                        .then(b.created_at.cmp(&a.created_at))
                });
            }
            IssueSort::Title => {
                issues.sort_by_key(|a| a.title.to_lowercase());
            }
        }
    }
}

impl Default for DashboardStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Severity;
    use crate::thread;

    fn new_issue(title: &str) -> NewIssue {
        NewIssue {
            title: title.to_string(),
            description: None,
            severity: Severity::Medium,
            category: "Bug".to_string(),
            assignee: None,
            reporter: "tester".to_string(),
        }
    }

    fn author() -> Author {
        Author::new(1, "Ada", "ada@example.com")
    }

    #[test]
    fn create_and_get_issue() {
        let mut store = DashboardStore::new();
        let created = store.create_issue(new_issue("Login broken")).unwrap();
        assert_eq!(created.id, 1);
        assert_eq!(created.status, IssueStatus::New);
        assert_eq!(created.created_at, created.updated_at);

        let fetched = store.get_issue(created.id).unwrap();
        assert_eq!(fetched.title, "Login broken");
    }

    #[test]
    fn issue_ids_are_monotonic() {
        let mut store = DashboardStore::new();
        let a = store.create_issue(new_issue("A")).unwrap();
        let b = store.create_issue(new_issue("B")).unwrap();
        assert!(b.id > a.id);
    }

    #[test]
    fn create_issue_empty_title_rejected() {
        let mut store = DashboardStore::new();
        let result = store.create_issue(new_issue("  "));
        assert!(matches!(result, Err(DeckError::Validation { .. })));
        assert!(store.is_empty());
    }

    #[test]
    fn update_issue_records_status_change() {
        let mut store = DashboardStore::new();
        let issue = store.create_issue(new_issue("Flow")).unwrap();

        let update = IssueUpdate {
            status: Some(IssueStatus::InProgress),
            ..Default::default()
        };
        let updated = store.update_issue(issue.id, &update, "dev").unwrap();
        assert_eq!(updated.status, IssueStatus::InProgress);

        let kinds: Vec<ActivityKind> = store
            .activities_for_issue(issue.id)
            .iter()
            .map(|a| a.kind)
            .collect();
        assert!(kinds.contains(&ActivityKind::StatusChanged));
    }

    #[test]
    fn update_nonexistent_issue_fails_and_leaves_store_unchanged() {
        let mut store = DashboardStore::new();
        store.create_issue(new_issue("Only")).unwrap();
        let snapshot: Vec<Issue> = store.list_issues(&IssueFilters::default())
            .into_iter()
            .cloned()
            .collect();

        let update = IssueUpdate {
            title: Some("X".to_string()),
            ..Default::default()
        };
        let result = store.update_issue(999, &update, "dev");
        assert!(matches!(result, Err(DeckError::IssueNotFound { id: 999 })));

        let after: Vec<Issue> = store.list_issues(&IssueFilters::default())
            .into_iter()
            .cloned()
            .collect();
        assert_eq!(snapshot, after);
    }

    #[test]
    fn delete_issue_removes_its_comments() {
        let mut store = DashboardStore::new();
        let issue = store.create_issue(new_issue("Doomed")).unwrap();
        store.add_comment(issue.id, &author(), "one").unwrap();
        store.add_comment(issue.id, &author(), "two").unwrap();

        store.delete_issue(issue.id, "admin").unwrap();
        assert!(store.get_issue(issue.id).is_err());
        assert!(store.comments_for_issue(issue.id).is_empty());
    }

    #[test]
    fn list_issues_filters_by_status_and_severity() {
        let mut store = DashboardStore::new();
        let a = store.create_issue(new_issue("A")).unwrap();
        let mut critical = new_issue("B");
        critical.severity = Severity::Critical;
        store.create_issue(critical).unwrap();

        store
            .update_issue(
                a.id,
                &IssueUpdate {
                    status: Some(IssueStatus::Resolved),
                    ..Default::default()
                },
                "dev",
            )
            .unwrap();

        let resolved = store.list_issues(&IssueFilters {
            statuses: Some(vec![IssueStatus::Resolved]),
            ..Default::default()
        });
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].title, "A");

        let critical_only = store.list_issues(&IssueFilters {
            severities: Some(vec![Severity::Critical]),
            ..Default::default()
        });
        assert_eq!(critical_only.len(), 1);
        assert_eq!(critical_only[0].title, "B");
    }

    #[test]
    fn list_issues_search_matches_description() {
        let mut store = DashboardStore::new();
        let mut with_description = new_issue("Plain title");
        with_description.description = Some("crashes on login".to_string());
        store.create_issue(with_description).unwrap();
        store.create_issue(new_issue("Other")).unwrap();

        let found = store.list_issues(&IssueFilters {
            search: Some("LOGIN".to_string()),
            ..Default::default()
        });
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Plain title");
    }

    #[test]
    fn issue_stats_counts_match_dashboard_cards() {
        let mut store = DashboardStore::new();
        let a = store.create_issue(new_issue("A")).unwrap();
        let b = store.create_issue(new_issue("B")).unwrap();
        store.create_issue(new_issue("C")).unwrap();

        store
            .update_issue(
                a.id,
                &IssueUpdate {
                    status: Some(IssueStatus::InProgress),
                    ..Default::default()
                },
                "dev",
            )
            .unwrap();
        store
            .update_issue(
                b.id,
                &IssueUpdate {
                    status: Some(IssueStatus::Resolved),
                    ..Default::default()
                },
                "dev",
            )
            .unwrap();

        let stats = store.issue_stats();
        assert_eq!(stats.total, 3);
        assert_eq!(stats.open, 2);
        assert_eq!(stats.in_progress, 1);
        assert_eq!(stats.resolved, 1);
    }

    #[test]
    fn add_comment_on_empty_issue_sets_creation_fields() {
        let mut store = DashboardStore::new();
        let issue = store.create_issue(new_issue("Talk")).unwrap();

        let comment = store.add_comment(issue.id, &author(), "First!").unwrap();
        assert_eq!(comment.id, 1);
        assert!(!comment.is_edited);
        assert_eq!(comment.created_at, comment.updated_at);
        assert!(comment.parent_id.is_none());
    }

    #[test]
    fn add_comment_to_missing_issue_fails() {
        let mut store = DashboardStore::new();
        let result = store.add_comment(404, &author(), "hello");
        assert!(matches!(result, Err(DeckError::IssueNotFound { id: 404 })));
        assert_eq!(store.comment_count(), 0);
    }

    #[test]
    fn add_comment_rejects_blank_content() {
        let mut store = DashboardStore::new();
        let issue = store.create_issue(new_issue("Talk")).unwrap();
        let result = store.add_comment(issue.id, &author(), "   ");
        assert!(matches!(result, Err(DeckError::Validation { .. })));
        assert_eq!(store.comment_count(), 0);
    }

    #[test]
    fn reply_copies_issue_id_from_parent() {
        let mut store = DashboardStore::new();
        let issue = store.create_issue(new_issue("Talk")).unwrap();
        let root = store.add_comment(issue.id, &author(), "root").unwrap();

        let reply = store.reply_to_comment(root.id, &author(), "reply").unwrap();
        assert_eq!(reply.parent_id, Some(root.id));
        assert_eq!(reply.issue_id, issue.id);
    }

    #[test]
    fn reply_to_missing_parent_fails() {
        let mut store = DashboardStore::new();
        store.create_issue(new_issue("Talk")).unwrap();

        let result = store.reply_to_comment(99, &author(), "into the void");
        assert!(matches!(result, Err(DeckError::CommentNotFound { id: 99 })));
        assert_eq!(store.comment_count(), 0);
    }

    #[test]
    fn update_comment_bumps_edit_state() {
        let mut store = DashboardStore::new();
        let issue = store.create_issue(new_issue("Talk")).unwrap();
        let comment = store.add_comment(issue.id, &author(), "tpyo").unwrap();

        let updated = store.update_comment(comment.id, "typo").unwrap();
        assert_eq!(updated.content, "typo");
        assert!(updated.is_edited);
        assert!(updated.updated_at >= updated.created_at);
        // Author identity is immutable.
        assert_eq!(updated.author, comment.author);
    }

    #[test]
    fn update_missing_comment_fails_and_leaves_store_unchanged() {
        let mut store = DashboardStore::new();
        let issue = store.create_issue(new_issue("Talk")).unwrap();
        let comment = store.add_comment(issue.id, &author(), "only").unwrap();

        let result = store.update_comment(comment.id + 1, "nope");
        assert!(matches!(result, Err(DeckError::CommentNotFound { .. })));
        assert_eq!(store.get_comment(comment.id).unwrap().content, "only");
    }

    #[test]
    fn delete_comment_cascades_to_descendants() {
        let mut store = DashboardStore::new();
        let issue = store.create_issue(new_issue("Talk")).unwrap();
        let root = store.add_comment(issue.id, &author(), "root").unwrap();
        let child = store.reply_to_comment(root.id, &author(), "child").unwrap();
        store
            .reply_to_comment(child.id, &author(), "grandchild")
            .unwrap();
        let other = store.add_comment(issue.id, &author(), "unrelated").unwrap();

        let removed = store.delete_comment(root.id).unwrap();
        assert_eq!(removed, 3);

        let remaining = store.comments_for_issue(issue.id);
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, other.id);
    }

    #[test]
    fn delete_missing_comment_fails() {
        let mut store = DashboardStore::new();
        let result = store.delete_comment(12);
        assert!(matches!(result, Err(DeckError::CommentNotFound { id: 12 })));
    }

    #[test]
    fn store_flat_list_threads_into_forest() {
        let mut store = DashboardStore::new();
        let issue = store.create_issue(new_issue("Talk")).unwrap();
        let root = store.add_comment(issue.id, &author(), "root").unwrap();
        let reply = store.reply_to_comment(root.id, &author(), "reply").unwrap();
        store
            .reply_to_comment(reply.id, &author(), "nested")
            .unwrap();

        let flat: Vec<Comment> = store
            .comments_for_issue(issue.id)
            .into_iter()
            .cloned()
            .collect();
        let forest = thread::build_thread(&flat);

        assert_eq!(forest.len(), 1);
        assert_eq!(thread::count(&forest), 3);
        assert_eq!(forest[0].replies[0].replies.len(), 1);
    }

    #[test]
    fn comment_activity_is_recorded() {
        let mut store = DashboardStore::new();
        let issue = store.create_issue(new_issue("Talk")).unwrap();
        let root = store.add_comment(issue.id, &author(), "root").unwrap();
        store.update_comment(root.id, "root!").unwrap();
        store.delete_comment(root.id).unwrap();

        let kinds: Vec<ActivityKind> = store
            .activities_for_issue(issue.id)
            .iter()
            .map(|a| a.kind)
            .collect();
        assert!(kinds.contains(&ActivityKind::Commented));
        assert!(kinds.contains(&ActivityKind::CommentEdited));
        assert!(kinds.contains(&ActivityKind::CommentDeleted));
    }

    #[test]
    fn team_member_crud() {
        let mut store = DashboardStore::new();
        let member = store
            .add_member("Grace", "grace@example.com", Some("QA".to_string()))
            .unwrap();
        assert_eq!(store.get_member(member.id).unwrap().name, "Grace");

        let updated = store
            .update_member(
                member.id,
                &MemberUpdate {
                    role: Some(Some("Lead".to_string())),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.role.as_deref(), Some("Lead"));

        store.remove_member(member.id).unwrap();
        assert!(matches!(
            store.get_member(member.id),
            Err(DeckError::MemberNotFound { .. })
        ));
    }

    #[test]
    fn delete_activity_removes_entry() {
        let mut store = DashboardStore::new();
        let issue = store.create_issue(new_issue("Feed")).unwrap();
        let activity = store
            .add_activity(issue.id, ActivityKind::Updated, "bot", None)
            .unwrap();

        store.delete_activity(activity.id).unwrap();
        assert!(matches!(
            store.delete_activity(activity.id),
            Err(DeckError::ActivityNotFound { .. })
        ));
    }

    #[test]
    fn from_records_resumes_id_counters() {
        let mut seeded = DashboardStore::new();
        let issue = seeded.create_issue(new_issue("Seed")).unwrap();
        let comment = seeded.add_comment(issue.id, &author(), "hi").unwrap();

        let issues: Vec<Issue> = seeded.list_issues(&IssueFilters::default())
            .into_iter()
            .cloned()
            .collect();
        let comments: Vec<Comment> = seeded
            .comments_for_issue(issue.id)
            .into_iter()
            .cloned()
            .collect();

        let mut store = DashboardStore::from_records(issues, comments, Vec::new(), Vec::new());
        let next = store.create_issue(new_issue("After seed")).unwrap();
        assert!(next.id > issue.id);
        let next_comment = store.add_comment(issue.id, &author(), "again").unwrap();
        assert!(next_comment.id > comment.id);
    }
}
