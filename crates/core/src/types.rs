//! Identity and value types.
//!
//! This module defines [`InstanceId`], the unique identity of a deployed
//! instance, and [`CounterValue`], the semantic type of the counter a
//! state cell holds.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The counter value held by a state cell.
///
/// Counters are non-negative; an unsigned width encodes that directly.
pub type CounterValue = u64;

/// Unique identifier for a deployed instance
///
/// InstanceId is assigned by the runtime at deployment time and is the only
/// way callers address an instance afterwards. It's used in:
/// - The runtime's instance registry
/// - Query calls against a deployed instance
/// - Log fields on deployment events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstanceId(Uuid);

impl InstanceId {
    /// Create a new random InstanceId using UUID v4
    ///
    /// # Examples
    ///
    /// ```
    /// use tally_core::types::InstanceId;
    ///
    /// let id1 = InstanceId::new();
    /// let id2 = InstanceId::new();
    /// assert_ne!(id1, id2); // Each InstanceId is unique
    /// ```
    pub fn new() -> Self {
        InstanceId(Uuid::new_v4())
    }

    /// Create InstanceId from raw bytes
    ///
    /// # Examples
    ///
    /// ```
    /// use tally_core::types::InstanceId;
    ///
    /// let bytes = [0u8; 16];
    /// let id = InstanceId::from_bytes(bytes);
    /// ```
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        InstanceId(Uuid::from_bytes(bytes))
    }

    /// Get raw bytes representation
    ///
    /// # Examples
    ///
    /// ```
    /// use tally_core::types::InstanceId;
    ///
    /// let id = InstanceId::new();
    /// let bytes = id.as_bytes();
    /// let id2 = InstanceId::from_bytes(*bytes);
    /// assert_eq!(id, id2);
    /// ```
    pub fn as_bytes(&self) -> &[u8; 16] {
        self.0.as_bytes()
    }
}

impl Default for InstanceId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
