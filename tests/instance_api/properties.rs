//! Property tests.
//!
//! Generalizes the deployment guarantees over arbitrary instance counts
//! and capacity limits.

use proptest::prelude::*;
use std::collections::HashSet;
use tally::Factory;

proptest! {
    /// N deploys produce N distinct instances, each reading zero.
    #[test]
    fn n_deploys_yield_n_distinct_zero_instances(n in 0usize..64) {
        let factory = Factory::local();

        let instances: Vec<_> = (0..n)
            .map(|_| factory.deploy().unwrap())
            .collect();

        let ids: HashSet<_> = instances.iter().map(|i| i.id()).collect();
        prop_assert_eq!(ids.len(), n);
        prop_assert_eq!(factory.instance_count(), n);

        for instance in &instances {
            prop_assert_eq!(instance.read().unwrap(), 0);
        }
    }

    /// A capacity limit admits exactly `limit` deploys, regardless of how
    /// many more are attempted, and rejects leave the registry untouched.
    #[test]
    fn capacity_limit_is_exact(limit in 0usize..16, extra in 1usize..8) {
        let factory = Factory::builder().max_instances(limit).build();

        for _ in 0..limit {
            factory.deploy().unwrap();
        }

        for _ in 0..extra {
            let err = factory.deploy().unwrap_err();
            prop_assert!(err.is_deployment());
        }

        prop_assert_eq!(factory.instance_count(), limit);
    }

    /// Reads are idempotent: any number of reads on a fresh instance
    /// return the same value.
    #[test]
    fn reads_are_idempotent(reads in 1usize..32) {
        let factory = Factory::local();
        let counter = factory.deploy().unwrap();

        let first = counter.read().unwrap();
        for _ in 1..reads {
            prop_assert_eq!(counter.read().unwrap(), first);
        }
        prop_assert_eq!(first, 0);
    }
}
