//! Asynchronous service facades over the engine store.
//!
//! The original dashboard talked to promise-based mock services; here
//! each operation is an async method that first suspends for the
//! configured artificial delay, then performs the synchronous store
//! operation atomically. Callers must not assume completion order
//! matches call order when they race operations with different delays —
//! reconcile using the returned record's id/`updatedAt`.

mod activity;
mod comments;
mod issues;
mod team;

pub use activity::ActivityApi;
pub use comments::CommentApi;
pub use issues::IssueApi;
pub use team::TeamApi;

use std::sync::Arc;

use issuedeck_lib::DashboardStore;
use tokio::sync::Mutex;

use crate::config::{LatencyProfile, OpClass};

/// Composition root: owns the one store instance and hands out service
/// facades to consumers. Created at app start, dropped at app exit (or
/// per test case).
#[derive(Clone)]
pub struct Dashboard {
    store: Arc<Mutex<DashboardStore>>,
    latency: LatencyProfile,
}

impl Dashboard {
    /// A dashboard over an empty store.
    #[must_use]
    pub fn new(latency: LatencyProfile) -> Self {
        Self::with_store(DashboardStore::new(), latency)
    }

    /// A dashboard over a pre-populated store.
    #[must_use]
    pub fn with_store(store: DashboardStore, latency: LatencyProfile) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            latency,
        }
    }

    #[must_use]
    pub fn issues(&self) -> IssueApi<'_> {
        IssueApi::new(self)
    }

    #[must_use]
    pub fn comments(&self) -> CommentApi<'_> {
        CommentApi::new(self)
    }

    #[must_use]
    pub fn team(&self) -> TeamApi<'_> {
        TeamApi::new(self)
    }

    #[must_use]
    pub fn activity(&self) -> ActivityApi<'_> {
        ActivityApi::new(self)
    }

    pub(crate) async fn pause(&self, class: OpClass) {
        let delay = self.latency.delay_for(class);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    pub(crate) fn store(&self) -> &Mutex<DashboardStore> {
        &self.store
    }
}
