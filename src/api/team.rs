//! Team member service.

use issuedeck_lib::model::TeamMember;
use issuedeck_lib::{MemberUpdate, Result};

use super::Dashboard;
use crate::config::OpClass;

/// Service facade for team member operations.
pub struct TeamApi<'a> {
    inner: &'a Dashboard,
}

impl<'a> TeamApi<'a> {
    pub(crate) const fn new(inner: &'a Dashboard) -> Self {
        Self { inner }
    }

    /// All team members.
    pub async fn list(&self) -> Vec<TeamMember> {
        self.inner.pause(OpClass::Read).await;
        let store = self.inner.store().lock().await;
        store.list_members().to_vec()
    }

    /// A single member by id.
    ///
    /// # Errors
    ///
    /// Returns `MemberNotFound` from the store.
    pub async fn get(&self, id: i64) -> Result<TeamMember> {
        self.inner.pause(OpClass::Read).await;
        let store = self.inner.store().lock().await;
        store.get_member(id).cloned()
    }

    /// Add a member.
    ///
    /// # Errors
    ///
    /// Returns `Validation` from the store.
    pub async fn add(&self, name: &str, email: &str, role: Option<String>) -> Result<TeamMember> {
        self.inner.pause(OpClass::Create).await;
        let mut store = self.inner.store().lock().await;
        store.add_member(name, email, role)
    }

    /// Update a member.
    ///
    /// # Errors
    ///
    /// Returns `MemberNotFound` from the store.
    pub async fn update(&self, id: i64, update: &MemberUpdate) -> Result<TeamMember> {
        self.inner.pause(OpClass::Update).await;
        let mut store = self.inner.store().lock().await;
        store.update_member(id, update)
    }

    /// Remove a member.
    ///
    /// # Errors
    ///
    /// Returns `MemberNotFound` from the store.
    pub async fn remove(&self, id: i64) -> Result<()> {
        self.inner.pause(OpClass::Delete).await;
        let mut store = self.inner.store().lock().await;
        store.remove_member(id)
    }
}
