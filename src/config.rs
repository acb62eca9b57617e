//! Latency configuration for the service layer.
//!
//! The dashboard simulates network round-trips so the UI's loading
//! states can be exercised without a server. Delays are grouped per
//! operation class and injected into the service layer at construction
//! time; tests use [`LatencyProfile::zero`] for determinism.

use std::time::Duration;

/// The operation classes that carry distinct simulated delays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpClass {
    Read,
    Create,
    Update,
    Delete,
}

/// Per-operation-class artificial delays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyProfile {
    pub read: Duration,
    pub create: Duration,
    pub update: Duration,
    pub delete: Duration,
}

impl LatencyProfile {
    /// No delay at all; the profile for tests and `--fast` runs.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            read: Duration::ZERO,
            create: Duration::ZERO,
            update: Duration::ZERO,
            delete: Duration::ZERO,
        }
    }

    /// Uniform delay for every operation class.
    #[must_use]
    pub const fn uniform(delay: Duration) -> Self {
        Self {
            read: delay,
            create: delay,
            update: delay,
            delete: delay,
        }
    }

    #[must_use]
    pub const fn delay_for(&self, class: OpClass) -> Duration {
        match class {
            OpClass::Read => self.read,
            OpClass::Create => self.create,
            OpClass::Update => self.update,
            OpClass::Delete => self.delete,
        }
    }

    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.read.is_zero()
            && self.create.is_zero()
            && self.update.is_zero()
            && self.delete.is_zero()
    }
}

impl Default for LatencyProfile {
    /// The delays the mock services shipped with: reads 300ms, creates
    /// 400ms, updates 300ms, deletes 250ms.
    fn default() -> Self {
        Self {
            read: Duration::from_millis(300),
            create: Duration::from_millis(400),
            update: Duration::from_millis(300),
            delete: Duration::from_millis(250),
        }
    }
}
