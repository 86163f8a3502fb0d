//! Handle to a deployed instance.

use crate::error::Result;
use crate::{CounterValue, InstanceId};
use std::fmt;
use std::sync::Arc;
use tally_runtime::Runtime;

/// A deployed instance.
///
/// The handle pairs the instance's identity with the runtime hosting its
/// state cell. One instance owns exactly one cell; no state is shared
/// across instances. Cloning the handle clones nothing but the reference,
/// so clones observe the same cell.
///
/// # Example
///
/// ```ignore
/// let counter = factory.deploy()?;
/// assert_eq!(counter.read()?, 0);
/// assert_eq!(counter.read()?, 0); // pure query, stable result
/// ```
#[derive(Clone)]
pub struct Instance {
    id: InstanceId,
    runtime: Arc<dyn Runtime>,
}

impl Instance {
    pub(crate) fn new(id: InstanceId, runtime: Arc<dyn Runtime>) -> Self {
        Instance { id, runtime }
    }

    /// The identity the runtime assigned at deployment.
    pub fn id(&self) -> InstanceId {
        self.id
    }

    /// Read the current counter value.
    ///
    /// Side-effect-free; repeated calls return the same value. Immediately
    /// after deployment this is `0`.
    pub fn read(&self) -> Result<CounterValue> {
        Ok(self.runtime.read(self.id)?)
    }
}

impl fmt::Debug for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instance").field("id", &self.id).finish()
    }
}
