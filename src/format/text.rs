//! Text formatting functions for `issuedeck`.
//!
//! Provides plain text (non-ANSI) formatting for terminal output:
//! - Status icons (○ ◐ ● ✓ ✗)
//! - Severity badges ([critical]..[low])
//! - Issue lines and the aligned issue table
//! - The indented comment-thread view and the stat summary

use issuedeck_lib::model::{Issue, IssueStatus, Severity, ThreadedComment};
use issuedeck_lib::IssueStats;
use unicode_width::UnicodeWidthStr;

use super::output::IssueWithCommentCount;

/// Status icon characters.
pub mod icons {
    /// New issue - untriaged (hollow circle).
    pub const NEW: &str = "○";
    /// In progress - active work (half-filled).
    pub const IN_PROGRESS: &str = "◐";
    /// Testing - awaiting verification (filled circle).
    pub const TESTING: &str = "●";
    /// Resolved - fixed (checkmark).
    pub const RESOLVED: &str = "✓";
    /// Closed - done or won't fix (X mark).
    pub const CLOSED: &str = "✗";
}

/// Return the icon character for a status.
#[must_use]
pub const fn format_status_icon(status: IssueStatus) -> &'static str {
    match status {
        IssueStatus::New => icons::NEW,
        IssueStatus::InProgress => icons::IN_PROGRESS,
        IssueStatus::Testing => icons::TESTING,
        IssueStatus::Resolved => icons::RESOLVED,
        IssueStatus::Closed => icons::CLOSED,
    }
}

/// Format severity as a bracketed badge.
#[must_use]
pub fn format_severity_badge(severity: Severity) -> String {
    format!("[{}]", severity.as_str())
}

/// Format a single-line issue summary.
///
/// Format: `{icon} #{id} [{severity}] [{category}] {title}`
#[must_use]
pub fn format_issue_line(issue: &Issue) -> String {
    format!(
        "{} #{} {} [{}] {}",
        format_status_icon(issue.status),
        issue.id,
        format_severity_badge(issue.severity),
        issue.category,
        issue.title,
    )
}

/// Format an aligned issue table with comment counts.
#[must_use]
pub fn format_issue_table(rows: &[IssueWithCommentCount]) -> String {
    const TITLE_WIDTH: usize = 40;

    let mut out = String::new();
    out.push_str(&format!(
        "  {:>4}  {:10}  {:12}  {:<TITLE_WIDTH$}  {:>8}\n",
        "ID", "SEVERITY", "STATUS", "TITLE", "COMMENTS"
    ));

    for row in rows {
        let issue = &row.issue;
        out.push_str(&format!(
            "{} {:>4}  {:10}  {:12}  {}  {:>8}\n",
            format_status_icon(issue.status),
            issue.id,
            issue.severity.as_str(),
            issue.status.as_str(),
            pad_title(&issue.title, TITLE_WIDTH),
            row.comment_count,
        ));
    }

    out
}

/// Truncate to `width` display columns and pad the remainder.
fn pad_title(title: &str, width: usize) -> String {
    let mut taken = String::new();
    let mut used = 0;
    for ch in title.chars() {
        let ch_width = ch.to_string().width();
        if used + ch_width > width.saturating_sub(1) {
            taken.push('…');
            used += 1;
            break;
        }
        taken.push(ch);
        used += ch_width;
    }
    if used < width {
        taken.push_str(&" ".repeat(width - used));
    }
    taken
}

/// Render a threaded comment forest, two spaces of indent per depth.
///
/// Each node prints as `{author} ({timestamp}): {content}` with an
/// `(edited)` marker when applicable.
#[must_use]
pub fn render_thread(forest: &[ThreadedComment]) -> String {
    let mut out = String::new();
    render_nodes(forest, 0, &mut out);
    out
}

fn render_nodes(forest: &[ThreadedComment], depth: usize, out: &mut String) {
    for node in forest {
        let comment = &node.comment;
        let edited = if comment.is_edited { " (edited)" } else { "" };
        out.push_str(&format!(
            "{}{} ({}): {}{}\n",
            "  ".repeat(depth),
            comment.author.user_name,
            comment.created_at.format("%Y-%m-%d %H:%M"),
            comment.content,
            edited,
        ));
        render_nodes(&node.replies, depth + 1, out);
    }
}

/// Format the dashboard stat cards as a text block.
#[must_use]
pub fn format_stats(stats: &IssueStats) -> String {
    format!(
        "Total Issues: {}\nOpen Issues:  {}\nIn Progress:  {}\nResolved:     {}\n",
        stats.total, stats.open, stats.in_progress, stats.resolved
    )
}
