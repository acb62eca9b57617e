//! Query, filter, and aggregate types for issue operations.

use serde::{Deserialize, Serialize};

use crate::model::{IssueStatus, Severity};

/// Fields to update on an issue. `None` leaves a field untouched;
/// `Some(None)` on the double-optional fields clears them.
#[derive(Debug, Clone, Default)]
pub struct IssueUpdate {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub status: Option<IssueStatus>,
    pub severity: Option<Severity>,
    pub category: Option<String>,
    pub assignee: Option<Option<String>>,
}

impl IssueUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.status.is_none()
            && self.severity.is_none()
            && self.category.is_none()
            && self.assignee.is_none()
    }
}

/// Fields to update on a team member.
#[derive(Debug, Clone, Default)]
pub struct MemberUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<Option<String>>,
}

/// Sort order for issue listings.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum IssueSort {
    /// Most recently created first — the dashboard default.
    #[default]
    Newest,
    Oldest,
    /// Critical first, ties by newest.
    Severity,
    Title,
}

/// Filter options for listing issues.
#[derive(Debug, Clone, Default)]
pub struct IssueFilters {
    /// Keep only issues with one of these statuses; `None` keeps all.
    pub statuses: Option<Vec<IssueStatus>>,
    /// Keep only issues with one of these severities; `None` keeps all.
    pub severities: Option<Vec<Severity>>,
    /// Keep only issues assigned to this member.
    pub assignee: Option<String>,
    /// Case-insensitive substring match on title and description.
    pub search: Option<String>,
    pub sort: IssueSort,
    pub limit: Option<usize>,
}

/// Dashboard stat-card counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueStats {
    /// All issues.
    pub total: usize,
    /// Neither resolved nor closed.
    pub open: usize,
    pub in_progress: usize,
    pub resolved: usize,
}
