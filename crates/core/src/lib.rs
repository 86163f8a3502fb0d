//! Core types for Tally.
//!
//! This crate defines the fundamental types shared by the runtime and the
//! public facade:
//! - [`InstanceId`]: unique identity of a deployed instance
//! - [`StateCell`]: the single counter cell an instance owns
//! - [`Error`]: the canonical internal error type

pub mod cell;
pub mod error;
pub mod types;

pub use cell::StateCell;
pub use error::{Error, Result};
pub use types::{CounterValue, InstanceId};
