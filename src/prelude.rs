//! Convenient imports for Tally.
//!
//! This module re-exports the most commonly used types so you can get
//! started with a single import:
//!
//! ```ignore
//! use tally::prelude::*;
//!
//! let factory = Factory::local();
//! let counter = factory.deploy()?;
//! assert_eq!(counter.read()?, 0);
//! ```

// Main entry points
pub use crate::factory::{Factory, FactoryBuilder, FactoryMetrics};
pub use crate::instance::Instance;

// Error handling
pub use crate::error::{Error, Result};

// Core types
pub use tally_core::{CounterValue, InstanceId};

// Runtime capability
pub use tally_runtime::{LocalRuntime, Runtime};
