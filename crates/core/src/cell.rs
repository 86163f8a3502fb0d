//! StateCell: the single counter cell an instance owns.
//!
//! A cell starts *vacant* and becomes *ready* when [`StateCell::initialize`]
//! writes the zero value. Initialization is the only write in scope; after
//! it, [`StateCell::read`] returns the same value for the life of the cell.
//!
//! ## Defensive contract
//!
//! Reading a vacant cell is an error, never an implicit zero. The runtime
//! initializes every cell before registering it, so callers going through
//! the factory can't observe this error; it exists so that a misbehaving
//! runtime implementation fails loudly instead of fabricating a value.

use crate::error::{Error, Result};
use crate::types::CounterValue;
use serde::{Deserialize, Serialize};

/// A counter cell with an explicit vacant state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateCell {
    slot: Slot,
}

/// Cell occupancy. Vacant until the initializing write lands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
enum Slot {
    Vacant,
    Ready(CounterValue),
}

impl StateCell {
    /// Create a vacant cell.
    ///
    /// The cell holds no value until [`initialize`](Self::initialize) runs.
    pub fn vacant() -> Self {
        StateCell { slot: Slot::Vacant }
    }

    /// Initialize the cell to zero.
    ///
    /// Always succeeds. Running it on an already-ready cell resets the
    /// value to zero, which leaves the post-initialization invariant
    /// (`read() == 0`) intact either way.
    pub fn initialize(&mut self) {
        self.slot = Slot::Ready(0);
    }

    /// Read the current value.
    ///
    /// Pure query: repeated calls return the same value absent any write.
    /// Fails with [`Error::UninitializedCell`] on a vacant cell.
    pub fn read(&self) -> Result<CounterValue> {
        match self.slot {
            Slot::Ready(value) => Ok(value),
            Slot::Vacant => Err(Error::UninitializedCell),
        }
    }

    /// Check whether the cell has been initialized.
    pub fn is_initialized(&self) -> bool {
        matches!(self.slot, Slot::Ready(_))
    }
}

impl Default for StateCell {
    fn default() -> Self {
        Self::vacant()
    }
}
