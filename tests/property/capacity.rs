// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Disk Capacity
//!
//! Whatever sequence of partitions is attempted, a disk never holds more
//! than its capacity and rejected partitions leave no trace.

use cim_inventory::{Disk, InventoryError, StorageKind};
use proptest::prelude::*;

// ============================================================================
// Property Test Strategies
// ============================================================================

fn storage_kind() -> impl Strategy<Value = StorageKind> {
    prop_oneof![Just(StorageKind::Ssd), Just(StorageKind::Magnetic)]
}

/// Partition sizes, some larger than a typical disk
fn partition_sizes() -> impl Strategy<Value = Vec<u64>> {
    prop::collection::vec(0u64..1500, 0..30)
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Property: Used space never exceeds capacity
    #[test]
    fn prop_used_never_exceeds_capacity(
        kind in storage_kind(),
        capacity in 0u64..4000,
        sizes in partition_sizes(),
    ) {
        let mut disk = Disk::new(kind, capacity);
        for (i, size) in sizes.into_iter().enumerate() {
            let _ = disk.add_partition(size, format!("p{}", i));
            prop_assert!(disk.used_capacity() <= disk.capacity());
        }
    }

    /// Property: A rejected partition leaves the disk unchanged
    #[test]
    fn prop_rejection_is_atomic(
        capacity in 0u64..4000,
        sizes in partition_sizes(),
    ) {
        let mut disk = Disk::new(StorageKind::Magnetic, capacity);
        for size in sizes {
            let before = disk.clone();
            let outcome = disk.add_partition(size, "p").map(|_| ());
            match outcome {
                Ok(_) => prop_assert_eq!(disk.partitions().len(), before.partitions().len() + 1),
                Err(InventoryError::CapacityExceeded { requested, remaining }) => {
                    prop_assert_eq!(requested, size);
                    prop_assert!(requested > remaining);
                    prop_assert_eq!(&disk, &before);
                }
                Err(other) => prop_assert!(false, "unexpected error: {}", other),
            }
        }
    }

    /// Property: Accepted partitions are indexed 0, 1, 2, ...
    #[test]
    fn prop_indices_are_dense(sizes in partition_sizes()) {
        let mut disk = Disk::new(StorageKind::Ssd, 10_000);
        for size in sizes {
            let _ = disk.add_partition(size, "p");
        }

        for (expected, partition) in disk.partitions().iter().enumerate() {
            prop_assert_eq!(partition.index(), expected);
        }
    }

    /// Property: Fitting exactly is accepted
    #[test]
    fn prop_exact_fill_accepted(capacity in 0u64..4000, split in 0u64..4000) {
        let first = split.min(capacity);
        let disk = Disk::new(StorageKind::Ssd, capacity)
            .with_partition(first, "a")
            .and_then(|d| d.with_partition(capacity - first, "b"));

        prop_assert!(disk.is_ok());
        prop_assert_eq!(disk.map(|d| d.remaining_capacity()).ok(), Some(0));
    }
}
