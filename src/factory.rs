//! Instance factory: the main entry point for Tally.
//!
//! This module provides the [`Factory`] struct, which produces deployed,
//! ready-to-query [`Instance`] handles over a runtime capability.

use crate::error::Result;
use crate::instance::Instance;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tally_core::{CounterValue, InstanceId};
use tally_runtime::{LocalRuntime, Runtime};

/// The Tally instance factory.
///
/// A factory deploys independent counter instances against a runtime and
/// hands back [`Instance`] handles. By the time [`Factory::deploy`]
/// returns `Ok`, the returned handle reads zero.
///
/// # Example
///
/// ```ignore
/// use tally::prelude::*;
///
/// let factory = Factory::local();
///
/// let counter = factory.deploy()?;
/// assert_eq!(counter.read()?, 0);
/// ```
pub struct Factory {
    /// The runtime capability hosting deployed instances
    runtime: Arc<dyn Runtime>,

    /// Successful deploys through this factory
    deployed: AtomicU64,

    /// Rejected deploys through this factory
    failed: AtomicU64,
}

impl Factory {
    /// Create a factory over a fresh in-process runtime.
    ///
    /// The runtime is unbounded and private to this factory. Nothing
    /// touches the filesystem; all instances are gone when the factory is
    /// dropped.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let factory = Factory::local();
    /// ```
    pub fn local() -> Self {
        Self::with_runtime(Arc::new(LocalRuntime::new()))
    }

    /// Create a factory over an injected runtime capability.
    ///
    /// Use this to host instances somewhere other than the in-process
    /// registry, or to share one runtime between several factories.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let runtime = Arc::new(LocalRuntime::with_capacity_limit(64));
    /// let factory = Factory::with_runtime(runtime);
    /// ```
    pub fn with_runtime(runtime: Arc<dyn Runtime>) -> Self {
        Factory {
            runtime,
            deployed: AtomicU64::new(0),
            failed: AtomicU64::new(0),
        }
    }

    /// Create a builder for factory configuration.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let factory = Factory::builder()
    ///     .max_instances(64)
    ///     .build();
    /// ```
    pub fn builder() -> FactoryBuilder {
        FactoryBuilder::new()
    }

    /// Deploy a new instance.
    ///
    /// Constructs an instance, initializes its state cell to zero, and
    /// returns a handle usable for [`Instance::read`]. All-or-nothing: on
    /// failure no handle is returned and no partial instance is observable.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let counter = factory.deploy()?;
    /// assert_eq!(counter.read()?, 0);
    /// ```
    pub fn deploy(&self) -> Result<Instance> {
        match self.runtime.deploy() {
            Ok(id) => {
                self.deployed.fetch_add(1, Ordering::SeqCst);
                Ok(Instance::new(id, Arc::clone(&self.runtime)))
            }
            Err(e) => {
                self.failed.fetch_add(1, Ordering::SeqCst);
                Err(e.into())
            }
        }
    }

    /// Read the counter of a deployed instance by identity.
    ///
    /// Equivalent to [`Instance::read`] for callers that hold an
    /// [`InstanceId`] rather than a handle.
    pub fn read(&self, instance: InstanceId) -> Result<CounterValue> {
        Ok(self.runtime.read(instance)?)
    }

    /// Number of instances currently hosted by the underlying runtime.
    pub fn instance_count(&self) -> usize {
        self.runtime.instance_count()
    }

    /// Get the underlying runtime capability.
    pub fn runtime(&self) -> Arc<dyn Runtime> {
        Arc::clone(&self.runtime)
    }

    /// Get factory metrics.
    pub fn metrics(&self) -> FactoryMetrics {
        FactoryMetrics {
            instances: self.runtime.instance_count(),
            deployed: self.deployed.load(Ordering::SeqCst),
            failed: self.failed.load(Ordering::SeqCst),
        }
    }
}

/// Factory metrics.
#[derive(Debug, Clone)]
pub struct FactoryMetrics {
    /// Instances currently hosted by the runtime
    pub instances: usize,
    /// Successful deploys through this factory
    pub deployed: u64,
    /// Rejected deploys through this factory
    pub failed: u64,
}

/// Builder for factory configuration.
///
/// # Example
///
/// ```ignore
/// // Bounded runtime: deploys past the limit fail
/// let factory = Factory::builder()
///     .max_instances(8)
///     .build();
///
/// // Unbounded (same as Factory::local())
/// let factory = Factory::builder().build();
/// ```
pub struct FactoryBuilder {
    max_instances: Option<usize>,
}

impl FactoryBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        FactoryBuilder { max_instances: None }
    }

    /// Limit the number of instances the runtime will host.
    ///
    /// Deploying past the limit fails with a deployment error and leaves
    /// existing instances untouched.
    pub fn max_instances(mut self, limit: usize) -> Self {
        self.max_instances = Some(limit);
        self
    }

    /// Build a factory over an in-process runtime with this configuration.
    pub fn build(self) -> Factory {
        let runtime: Arc<dyn Runtime> = match self.max_instances {
            Some(limit) => Arc::new(LocalRuntime::with_capacity_limit(limit)),
            None => Arc::new(LocalRuntime::new()),
        };
        Factory::with_runtime(runtime)
    }
}

impl Default for FactoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
