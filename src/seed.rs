//! Deterministic sample data for the dashboard.
//!
//! Every run starts from the same records with fixed timestamps, so
//! command output is stable across invocations. Issue 1 carries a
//! nested comment thread that exercises every depth the UI renders.

use chrono::{DateTime, TimeZone, Utc};
use issuedeck_lib::model::{
    Activity, ActivityKind, Author, Comment, Issue, IssueStatus, Severity, TeamMember,
};
use issuedeck_lib::DashboardStore;

fn at(day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 7, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

fn issue(
    id: i64,
    title: &str,
    description: &str,
    status: IssueStatus,
    severity: Severity,
    category: &str,
    assignee: Option<&str>,
    day: u32,
) -> Issue {
    Issue {
        id,
        title: title.to_string(),
        description: Some(description.to_string()),
        status,
        severity,
        category: category.to_string(),
        assignee: assignee.map(String::from),
        reporter: "Jordan Reyes".to_string(),
        created_at: at(day, 9, 0),
        updated_at: at(day, 9, 0),
    }
}

fn comment(
    id: i64,
    issue_id: i64,
    parent_id: Option<i64>,
    author: &Author,
    content: &str,
    day: u32,
    hour: u32,
) -> Comment {
    let ts = at(day, hour, 0);
    Comment {
        id,
        issue_id,
        parent_id,
        author: author.clone(),
        content: content.to_string(),
        created_at: ts,
        updated_at: ts,
        is_edited: false,
    }
}

/// The team roster shown in assignee pickers.
#[must_use]
pub fn members() -> Vec<TeamMember> {
    vec![
        TeamMember {
            id: 1,
            name: "Sarah Chen".to_string(),
            email: "sarah.chen@example.com".to_string(),
            role: Some("Frontend".to_string()),
        },
        TeamMember {
            id: 2,
            name: "Marcus Webb".to_string(),
            email: "marcus.webb@example.com".to_string(),
            role: Some("Backend".to_string()),
        },
        TeamMember {
            id: 3,
            name: "Priya Nair".to_string(),
            email: "priya.nair@example.com".to_string(),
            role: Some("QA".to_string()),
        },
        TeamMember {
            id: 4,
            name: "Jordan Reyes".to_string(),
            email: "jordan.reyes@example.com".to_string(),
            role: Some("PM".to_string()),
        },
    ]
}

/// Build the fully seeded store.
#[must_use]
pub fn sample_store() -> DashboardStore {
    let issues = vec![
        issue(
            1,
            "Dashboard charts render blank on reload",
            "Hard refresh on the reports page shows empty chart areas until a filter changes.",
            IssueStatus::InProgress,
            Severity::High,
            "Bug",
            Some("Sarah Chen"),
            1,
        ),
        issue(
            2,
            "Search ignores issue descriptions",
            "The search box only matches titles; descriptions should match too.",
            IssueStatus::New,
            Severity::Medium,
            "Bug",
            None,
            2,
        ),
        issue(
            3,
            "Add keyboard shortcuts for triage",
            "Power users want j/k navigation and quick status changes.",
            IssueStatus::New,
            Severity::Low,
            "Feature",
            None,
            3,
        ),
        issue(
            4,
            "Session expires during long comment drafts",
            "Drafts are lost when the session times out mid-write.",
            IssueStatus::Testing,
            Severity::Critical,
            "Bug",
            Some("Marcus Webb"),
            4,
        ),
        issue(
            5,
            "Export issue list as CSV",
            "Reporting wants a CSV download matching the current filters.",
            IssueStatus::Resolved,
            Severity::Medium,
            "Feature",
            Some("Priya Nair"),
            5,
        ),
        issue(
            6,
            "Avatar images missing for new members",
            "Members created after the last deploy fall back to broken image links.",
            IssueStatus::Closed,
            Severity::Low,
            "UI",
            Some("Sarah Chen"),
            6,
        ),
    ];

    let sarah = Author::new(1, "Sarah Chen", "sarah.chen@example.com");
    let marcus = Author::new(2, "Marcus Webb", "marcus.webb@example.com");
    let priya = Author::new(3, "Priya Nair", "priya.nair@example.com");

    let comments = vec![
        comment(
            1,
            1,
            None,
            &sarah,
            "Reproduced on Chrome and Firefox, the chart data request never fires.",
            1,
            10,
        ),
        comment(
            2,
            1,
            Some(1),
            &marcus,
            "The fetch is gated on a filter-change event, so a cold load skips it.",
            1,
            11,
        ),
        comment(
            3,
            1,
            Some(2),
            &sarah,
            "Right, firing it on mount fixes it locally. PR incoming.",
            1,
            12,
        ),
        comment(
            4,
            1,
            Some(1),
            &priya,
            "Adding a regression check to the smoke suite for this.",
            1,
            13,
        ),
        comment(
            5,
            1,
            None,
            &priya,
            "Also seeing **blank** stat cards on slow connections, same root cause?",
            2,
            9,
        ),
        comment(
            6,
            4,
            None,
            &marcus,
            "Draft state now survives re-auth, please verify with a `30s` session TTL.",
            4,
            15,
        ),
    ];

    let activities = vec![
        Activity {
            id: 1,
            issue_id: 1,
            kind: ActivityKind::Created,
            actor: "Jordan Reyes".to_string(),
            detail: None,
            timestamp: at(1, 9, 0),
        },
        Activity {
            id: 2,
            issue_id: 1,
            kind: ActivityKind::StatusChanged,
            actor: "Sarah Chen".to_string(),
            detail: Some("new -> in-progress".to_string()),
            timestamp: at(1, 10, 30),
        },
        Activity {
            id: 3,
            issue_id: 4,
            kind: ActivityKind::StatusChanged,
            actor: "Marcus Webb".to_string(),
            detail: Some("in-progress -> testing".to_string()),
            timestamp: at(4, 16, 0),
        },
        Activity {
            id: 4,
            issue_id: 5,
            kind: ActivityKind::StatusChanged,
            actor: "Priya Nair".to_string(),
            detail: Some("testing -> resolved".to_string()),
            timestamp: at(6, 11, 0),
        },
    ];

    DashboardStore::from_records(issues, comments, members(), activities)
}
