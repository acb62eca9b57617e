//! `issuedeck-lib` — In-process issue and comment-thread engine.
//!
//! Provides the data model, the in-memory store, and the comment
//! threading algorithms for the issuedeck dashboard. Everything lives
//! in memory for the lifetime of the process; there is no persistence
//! layer and no I/O.
//!
//! # Quick Start
//!
//! ```
//! use issuedeck_lib::model::{Author, NewIssue};
//! use issuedeck_lib::{DashboardStore, thread};
//!
//! let mut store = DashboardStore::new();
//!
//! let issue = store.create_issue(NewIssue {
//!     title: "Search results are stale".into(),
//!     category: "Bug".into(),
//!     reporter: "sam".into(),
//!     ..Default::default()
//! }).unwrap();
//!
//! let ada = Author::new(1, "Ada", "ada@example.com");
//! let root = store.add_comment(issue.id, &ada, "Reproduced on main").unwrap();
//! store.reply_to_comment(root.id, &ada, "Bisected to the cache layer").unwrap();
//!
//! let flat: Vec<_> = store.comments_for_issue(issue.id).into_iter().cloned().collect();
//! let forest = thread::build_thread(&flat);
//! assert_eq!(thread::count(&forest), 2);
//! ```

pub mod error;
pub mod model;
pub mod query;
pub mod store;
pub mod thread;
pub mod validation;

pub use error::{DeckError, Result};
pub use model::{
    Activity, ActivityKind, Author, Comment, Issue, IssueStatus, NewIssue, Severity, TeamMember,
    ThreadedComment,
};
pub use query::{IssueFilters, IssueSort, IssueStats, IssueUpdate, MemberUpdate};
pub use store::DashboardStore;
