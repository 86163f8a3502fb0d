//! Deployment runtime for Tally.
//!
//! The runtime is the capability that hosts deployed instances. It is
//! modeled as a trait so the facade stays independent of where instances
//! actually live; [`LocalRuntime`] is the in-process implementation.

pub mod local;
pub mod runtime;

pub use local::LocalRuntime;
pub use runtime::Runtime;
