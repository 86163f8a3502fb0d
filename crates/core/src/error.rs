//! Canonical error types for Tally.
//!
//! This is the internal error vocabulary shared by the runtime and the
//! facade. The facade collapses these into its own two public kinds.

use crate::types::InstanceId;
use thiserror::Error;

/// All internal Tally errors.
#[derive(Debug, Error)]
pub enum Error {
    /// The runtime could not construct an instance
    #[error("deployment failed: {reason}")]
    DeploymentFailed {
        /// Runtime-supplied failure reason
        reason: String,
    },

    /// The runtime's instance limit is reached
    #[error("instance capacity exceeded: limit {limit}")]
    CapacityExceeded {
        /// Configured instance limit
        limit: usize,
    },

    /// Query addressed an identity the runtime has never deployed
    #[error("instance not found: {0}")]
    InstanceNotFound(InstanceId),

    /// A state cell was read before it was initialized
    ///
    /// Unreachable through the factory, which initializes every cell before
    /// handing out a handle. A vacant cell never reads as zero.
    #[error("state cell read before initialization")]
    UninitializedCell,
}

/// Result type for internal Tally operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this error is a deployment failure.
    pub fn is_deployment(&self) -> bool {
        matches!(
            self,
            Error::DeploymentFailed { .. } | Error::CapacityExceeded { .. }
        )
    }

    /// Check if this error is a query failure.
    pub fn is_query(&self) -> bool {
        matches!(self, Error::InstanceNotFound(_) | Error::UninitializedCell)
    }
}
