//! The deployment capability trait.

use tally_core::{CounterValue, InstanceId, Result};

/// A runtime that hosts deployed instances.
///
/// The two capabilities a runtime provides are *deploy* (construct and
/// initialize a new instance) and *read* (the single query defined against
/// an instance). Implementations decide where instance state lives; callers
/// only ever hold an [`InstanceId`].
///
/// # Contract
///
/// - `deploy` is all-or-nothing: on `Err`, no instance is observable and
///   the returned identity of a prior call is unaffected.
/// - By the time `deploy` returns `Ok(id)`, `read(id)` yields `0`.
/// - `read` is a pure query: no side effects, stable result absent writes.
/// - Implementations must be safe to share across threads; concurrent
///   deploys and reads need no caller-side coordination.
pub trait Runtime: Send + Sync {
    /// Deploy a new instance, returning its identity.
    ///
    /// The instance's state cell is initialized to zero before the identity
    /// becomes visible to any reader.
    fn deploy(&self) -> Result<InstanceId>;

    /// Read the counter value of a deployed instance.
    ///
    /// Fails with `InstanceNotFound` for an identity this runtime never
    /// deployed.
    fn read(&self, instance: InstanceId) -> Result<CounterValue>;

    /// Number of instances currently hosted by this runtime.
    fn instance_count(&self) -> usize;
}
