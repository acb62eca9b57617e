use issuedeck_lib::model::{Activity, Issue, ThreadedComment};
use serde::{Deserialize, Serialize};

/// Issue with its comment total for list/search views.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueWithCommentCount {
    #[serde(flatten)]
    pub issue: Issue,
    pub comment_count: usize,
}

/// Issue with full relations for the show view.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueDetails {
    #[serde(flatten)]
    pub issue: Issue,
    /// Threaded forest, chronological at every level.
    pub comments: Vec<ThreadedComment>,
    /// Total comments including nested replies.
    pub comment_count: usize,
    pub activities: Vec<Activity>,
}
