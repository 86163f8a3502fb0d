//! # Tally
//!
//! Embedded runtime for deploying independent counter instances.
//!
//! Each deployed instance owns a single state cell holding a counter that
//! is initialized to zero and readable through a side-effect-free query.
//! Instances share nothing; deploying two of them yields two independent
//! cells.
//!
//! ## Quick Start
//!
//! ```ignore
//! use tally::prelude::*;
//!
//! // Factory over a fresh in-process runtime
//! let factory = Factory::local();
//!
//! // Deploy an instance and read its counter
//! let counter = factory.deploy()?;
//! assert_eq!(counter.read()?, 0);
//! ```
//!
//! ## Injected runtimes
//!
//! The deployment runtime is a capability trait ([`Runtime`]). Production
//! embeddings can supply their own implementation; [`LocalRuntime`] is the
//! in-process one used by [`Factory::local`]:
//!
//! ```ignore
//! use std::sync::Arc;
//! use tally::prelude::*;
//!
//! let runtime = Arc::new(LocalRuntime::with_capacity_limit(64));
//! let factory = Factory::with_runtime(runtime);
//! ```

#![warn(missing_docs)]

mod error;
mod factory;
mod instance;

pub mod prelude;

// Re-export main entry points
pub use error::{Error, Result};
pub use factory::{Factory, FactoryBuilder, FactoryMetrics};
pub use instance::Instance;

// Re-export core and runtime types
pub use tally_core::{CounterValue, InstanceId};
pub use tally_runtime::{LocalRuntime, Runtime};
