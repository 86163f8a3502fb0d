//! Deployment lifecycle tests.
//!
//! Covers the factory's core guarantee: every successful deploy yields an
//! independent instance whose counter reads zero, and every failed deploy
//! leaves nothing observable.

use crate::{create_bounded_factory, create_factory, create_shared_runtime};
use std::collections::HashSet;
use tally::{Factory, InstanceId};

// ============================================================================
// Basic Operations
// ============================================================================

#[test]
fn deploy_then_read_returns_zero() {
    let factory = create_factory();

    let counter = factory.deploy().unwrap();
    assert_eq!(counter.read().unwrap(), 0);
}

#[test]
fn read_is_idempotent() {
    let factory = create_factory();
    let counter = factory.deploy().unwrap();

    let first = counter.read().unwrap();
    let second = counter.read().unwrap();
    assert_eq!(first, second);
}

#[test]
fn instances_are_independent() {
    let factory = create_factory();

    let a = factory.deploy().unwrap();
    let b = factory.deploy().unwrap();

    assert_ne!(a.id(), b.id());

    // Interleaved reads, both stay zero
    assert_eq!(a.read().unwrap(), 0);
    assert_eq!(b.read().unwrap(), 0);
    assert_eq!(a.read().unwrap(), 0);
}

#[test]
fn repeated_deploys_yield_distinct_instances() {
    let factory = create_factory();

    let instances: Vec<_> = (0..16).map(|_| factory.deploy().unwrap()).collect();

    let ids: HashSet<_> = instances.iter().map(|i| i.id()).collect();
    assert_eq!(ids.len(), 16);
    assert_eq!(factory.instance_count(), 16);

    for instance in &instances {
        assert_eq!(instance.read().unwrap(), 0);
    }
}

#[test]
fn cloned_handle_reads_same_cell() {
    let factory = create_factory();
    let counter = factory.deploy().unwrap();

    let copy = counter.clone();
    assert_eq!(copy.id(), counter.id());
    assert_eq!(copy.read().unwrap(), 0);
}

#[test]
fn factory_read_by_identity_matches_handle() {
    let factory = create_factory();
    let counter = factory.deploy().unwrap();

    assert_eq!(factory.read(counter.id()).unwrap(), counter.read().unwrap());
}

// ============================================================================
// Injected Runtime
// ============================================================================

#[test]
fn factory_over_shared_runtime() {
    let runtime = create_shared_runtime();
    let factory = Factory::with_runtime(runtime.clone());

    let counter = factory.deploy().unwrap();
    assert_eq!(counter.read().unwrap(), 0);

    // The runtime hosts the instance, not the factory
    use tally::Runtime;
    assert_eq!(runtime.instance_count(), 1);
    assert_eq!(runtime.read(counter.id()).unwrap(), 0);
}

#[test]
fn two_factories_share_one_runtime() {
    let runtime = create_shared_runtime();
    let first = Factory::with_runtime(runtime.clone());
    let second = Factory::with_runtime(runtime);

    first.deploy().unwrap();
    second.deploy().unwrap();

    assert_eq!(first.instance_count(), 2);
    assert_eq!(second.instance_count(), 2);
}

// ============================================================================
// Failure Paths
// ============================================================================

#[test]
fn deploy_past_capacity_fails() {
    let factory = create_bounded_factory(2);

    factory.deploy().unwrap();
    factory.deploy().unwrap();

    let err = factory.deploy().unwrap_err();
    assert!(err.is_deployment());
    assert!(!err.is_query());
}

#[test]
fn failed_deploy_leaves_no_partial_instance() {
    let factory = create_bounded_factory(2);

    let a = factory.deploy().unwrap();
    let b = factory.deploy().unwrap();
    assert!(factory.deploy().is_err());

    // Registry unchanged, survivors still read zero
    assert_eq!(factory.instance_count(), 2);
    assert_eq!(a.read().unwrap(), 0);
    assert_eq!(b.read().unwrap(), 0);
}

#[test]
fn unknown_identity_is_a_query_failure() {
    let factory = create_factory();

    let err = factory.read(InstanceId::new()).unwrap_err();
    assert!(err.is_query());
}

// ============================================================================
// Metrics
// ============================================================================

#[test]
fn metrics_track_deploy_outcomes() {
    let factory = create_bounded_factory(1);

    factory.deploy().unwrap();
    assert!(factory.deploy().is_err());

    let metrics = factory.metrics();
    assert_eq!(metrics.instances, 1);
    assert_eq!(metrics.deployed, 1);
    assert_eq!(metrics.failed, 1);
}
