//! Core data types for issuedeck-lib.
//!
//! Serde output uses the dashboard's camelCase field names so JSON seed
//! data and `--json` output stay interchangeable with the frontend shapes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[allow(clippy::trivially_copy_pass_by_ref)]
const fn is_false(b: &bool) -> bool {
    !*b
}

/// Issue lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum IssueStatus {
    #[default]
    New,
    InProgress,
    Testing,
    Resolved,
    Closed,
}

impl IssueStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::InProgress => "in-progress",
            Self::Testing => "testing",
            Self::Resolved => "resolved",
            Self::Closed => "closed",
        }
    }

    /// Counted as "open" on the dashboard stat cards.
    #[must_use]
    pub const fn is_open(self) -> bool {
        !self.is_terminal()
    }

    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Resolved | Self::Closed)
    }
}

impl fmt::Display for IssueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for IssueStatus {
    type Err = crate::error::DeckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "new" => Ok(Self::New),
            "in-progress" | "in_progress" | "inprogress" => Ok(Self::InProgress),
            "testing" => Ok(Self::Testing),
            "resolved" => Ok(Self::Resolved),
            "closed" => Ok(Self::Closed),
            other => Err(crate::error::DeckError::InvalidStatus {
                status: other.to_string(),
            }),
        }
    }
}

/// Issue severity, critical first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    #[default]
    Medium,
    Low,
}

impl Severity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Severity {
    type Err = crate::error::DeckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "critical" => Ok(Self::Critical),
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            other => Err(crate::error::DeckError::InvalidSeverity {
                severity: other.to_string(),
            }),
        }
    }
}

/// The primary issue entity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    /// Unique ID, assigned by the store.
    pub id: i64,

    /// Title (1-200 chars).
    pub title: String,

    /// Detailed description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Workflow status.
    #[serde(default)]
    pub status: IssueStatus,

    /// Severity (critical..low).
    #[serde(default)]
    pub severity: Severity,

    /// Free-form category (Bug, Feature, UI, ...).
    pub category: String,

    /// Assigned team member name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,

    /// Who reported the issue.
    pub reporter: String,

    /// Creation timestamp.
    pub created_at: DateTime<Utc>,

    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Fields supplied when creating an issue; the store fills in the rest.
#[derive(Debug, Clone, Default)]
pub struct NewIssue {
    pub title: String,
    pub description: Option<String>,
    pub severity: Severity,
    pub category: String,
    pub assignee: Option<String>,
    pub reporter: String,
}

/// Comment author identity, immutable after creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub user_id: i64,
    pub user_name: String,
    pub user_email: String,
}

impl Author {
    #[must_use]
    pub fn new(user_id: i64, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            user_id,
            user_name: name.into(),
            user_email: email.into(),
        }
    }
}

/// A comment on an issue, as stored (flat).
///
/// `parent_id` is `None` for root comments and the parent comment's id
/// for replies. The reply tree is derived, never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: i64,
    pub issue_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
    #[serde(flatten)]
    pub author: Author,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_edited: bool,
}

impl Comment {
    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// A comment plus its nested replies — the derived thread view.
///
/// Replies are chronological ascending at every level, ties broken by
/// id ascending.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ThreadedComment {
    #[serde(flatten)]
    pub comment: Comment,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub replies: Vec<ThreadedComment>,
}

impl ThreadedComment {
    #[must_use]
    pub const fn new(comment: Comment) -> Self {
        Self {
            comment,
            replies: Vec::new(),
        }
    }

    #[must_use]
    pub const fn id(&self) -> i64 {
        self.comment.id
    }
}

impl From<Comment> for ThreadedComment {
    fn from(comment: Comment) -> Self {
        Self::new(comment)
    }
}

/// A team member shown in assignee pickers and avatars.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Activity feed entry kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Created,
    Updated,
    StatusChanged,
    Commented,
    CommentEdited,
    CommentDeleted,
    Deleted,
}

impl ActivityKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Updated => "updated",
            Self::StatusChanged => "status_changed",
            Self::Commented => "commented",
            Self::CommentEdited => "comment_edited",
            Self::CommentDeleted => "comment_deleted",
            Self::Deleted => "deleted",
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An entry in the per-issue activity feed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: i64,
    pub issue_id: i64,
    pub kind: ActivityKind,
    pub actor: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn status_round_trips_through_strings() {
        for status in [
            IssueStatus::New,
            IssueStatus::InProgress,
            IssueStatus::Testing,
            IssueStatus::Resolved,
            IssueStatus::Closed,
        ] {
            assert_eq!(status.as_str().parse::<IssueStatus>().unwrap(), status);
        }
    }

    #[test]
    fn status_parse_accepts_underscore_variant() {
        assert_eq!(
            "in_progress".parse::<IssueStatus>().unwrap(),
            IssueStatus::InProgress
        );
    }

    #[test]
    fn status_parse_rejects_unknown() {
        assert!("urgent".parse::<IssueStatus>().is_err());
    }

    #[test]
    fn open_excludes_resolved_and_closed() {
        assert!(IssueStatus::New.is_open());
        assert!(IssueStatus::InProgress.is_open());
        assert!(IssueStatus::Testing.is_open());
        assert!(!IssueStatus::Resolved.is_open());
        assert!(!IssueStatus::Closed.is_open());
    }

    #[test]
    fn severity_orders_critical_first() {
        assert!(Severity::Critical < Severity::High);
        assert!(Severity::High < Severity::Medium);
        assert!(Severity::Medium < Severity::Low);
    }

    #[test]
    fn comment_serializes_author_flat() {
        let ts = Utc.with_ymd_and_hms(2026, 1, 5, 12, 0, 0).unwrap();
        let comment = Comment {
            id: 1,
            issue_id: 7,
            parent_id: None,
            author: Author::new(3, "Ada", "ada@example.com"),
            content: "First".to_string(),
            created_at: ts,
            updated_at: ts,
            is_edited: false,
        };

        let json = serde_json::to_value(&comment).unwrap();
        assert_eq!(json["userId"], 3);
        assert_eq!(json["userName"], "Ada");
        assert!(json.get("parentId").is_none());
        assert!(json.get("isEdited").is_none());
    }
}
