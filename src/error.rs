//! Unified error types for Tally.
//!
//! This module provides a clean error type that wraps internal errors
//! and presents a consistent interface to users. Exactly two kinds exist
//! at this surface: deployment failures and query failures.

use thiserror::Error;

/// All Tally errors.
///
/// This is the canonical error type for all facade operations. Internal
/// error details are collapsed into the failure kind plus a message.
#[derive(Debug, Error)]
pub enum Error {
    /// The runtime could not construct an instance
    ///
    /// No instance handle exists when this is returned; a failed deploy
    /// leaves nothing observable.
    #[error("deployment failed: {0}")]
    Deployment(String),

    /// A query against an instance failed
    #[error("query failed: {0}")]
    Query(String),
}

/// Result type for Tally operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this is a deployment failure.
    pub fn is_deployment(&self) -> bool {
        matches!(self, Error::Deployment(_))
    }

    /// Check if this is a query failure.
    pub fn is_query(&self) -> bool {
        matches!(self, Error::Query(_))
    }
}

// Convert from internal core errors
impl From<tally_core::Error> for Error {
    fn from(e: tally_core::Error) -> Self {
        use tally_core::Error as CoreError;
        match e {
            CoreError::DeploymentFailed { reason } => Error::Deployment(reason),
            CoreError::CapacityExceeded { limit } => {
                Error::Deployment(format!("instance capacity exceeded: limit {}", limit))
            }
            e @ CoreError::InstanceNotFound(_) => Error::Query(e.to_string()),
            e @ CoreError::UninitializedCell => Error::Query(e.to_string()),
        }
    }
}
