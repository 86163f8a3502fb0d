//! In-process runtime implementation.
//!
//! `LocalRuntime` keeps every instance's state cell in a lock-guarded
//! registry. There is no disk, no recovery, and no teardown API; dropping
//! the runtime drops every cell it hosts.
//!
//! ## Deployment sequence
//!
//! ```text
//! 1. Acquire registry write lock
//! 2. Check capacity limit (reject before any state is created)
//! 3. Construct a vacant cell and initialize it to zero
//! 4. Insert under a fresh InstanceId
//! 5. Release lock, return the identity
//! ```
//!
//! Because the cell is initialized before insertion and insertion happens
//! under the write lock, no reader can ever observe a registered-but-vacant
//! cell: a returned identity always reads zero.

use crate::runtime::Runtime;
use parking_lot::RwLock;
use std::collections::HashMap;
use tally_core::{CounterValue, Error, InstanceId, Result, StateCell};

/// In-process instance runtime.
///
/// # Thread Safety
///
/// The registry lock serializes deploys against each other and against
/// reads. Reads take the lock in shared mode, so concurrent queries do not
/// contend with one another.
pub struct LocalRuntime {
    /// Registry of hosted instances
    ///
    /// Invariant: every cell in the registry is initialized.
    cells: RwLock<HashMap<InstanceId, StateCell>>,

    /// Optional instance limit
    ///
    /// `None` means unbounded. Deploying at the limit fails without
    /// touching the registry.
    max_instances: Option<usize>,
}

impl LocalRuntime {
    /// Create an unbounded runtime.
    pub fn new() -> Self {
        LocalRuntime {
            cells: RwLock::new(HashMap::new()),
            max_instances: None,
        }
    }

    /// Create a runtime that hosts at most `limit` instances.
    ///
    /// Deploying past the limit fails with `CapacityExceeded`, the local
    /// stand-in for resource exhaustion in an external runtime.
    pub fn with_capacity_limit(limit: usize) -> Self {
        LocalRuntime {
            cells: RwLock::new(HashMap::new()),
            max_instances: Some(limit),
        }
    }
}

impl Default for LocalRuntime {
    fn default() -> Self {
        Self::new()
    }
}

impl Runtime for LocalRuntime {
    fn deploy(&self) -> Result<InstanceId> {
        let mut cells = self.cells.write();

        if let Some(limit) = self.max_instances {
            if cells.len() >= limit {
                tracing::warn!(limit, "deploy rejected: instance capacity exceeded");
                return Err(Error::CapacityExceeded { limit });
            }
        }

        let id = InstanceId::new();
        let mut cell = StateCell::vacant();
        cell.initialize();

        // The identity must read zero from the moment it is visible.
        debug_assert!(cell.is_initialized());
        cells.insert(id, cell);

        tracing::debug!(instance = %id, hosted = cells.len(), "instance deployed");
        Ok(id)
    }

    fn read(&self, instance: InstanceId) -> Result<CounterValue> {
        let cells = self.cells.read();
        let cell = cells
            .get(&instance)
            .ok_or(Error::InstanceNotFound(instance))?;
        cell.read()
    }

    fn instance_count(&self) -> usize {
        self.cells.read().len()
    }
}
