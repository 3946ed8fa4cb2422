// Copyright (c) 2025 - Cowboy AI, Inc.
//! Disk and Partition Components with Capacity Invariants

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::invariants::{remaining_capacity, validate_partition_fits, ValidationError};
use super::StorageKind;
use crate::errors::{InventoryError, InventoryResult};
use crate::tree::{Container, TreeNode};

/// Slice of a disk
///
/// The index is assigned by the owning [`Disk`] and is never reused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Partition {
    index: usize,
    size: u64,
    name: String,
}

impl Partition {
    pub fn index(&self) -> usize {
        self.index
    }

    /// Size in GiB
    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl TreeNode for Partition {
    fn label(&self) -> String {
        format!("[{}]: {} GiB, {}", self.index, self.size, self.name)
    }
}

/// Disk drive holding an ordered set of partitions
///
/// # Invariants
/// - Sum of partition sizes never exceeds `capacity`
/// - Partition indices are 0, 1, 2, ... in insertion order
/// - A rejected partition leaves the disk untouched
///
/// # Examples
///
/// ```rust
/// use cim_inventory::domain::{Disk, StorageKind};
///
/// let disk = Disk::new(StorageKind::Magnetic, 2000)
///     .with_partition(500, "system").unwrap()
///     .with_partition(1500, "data").unwrap();
/// assert_eq!(disk.remaining_capacity(), 0);
///
/// assert!(disk.clone().with_partition(1, "overflow").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DiskRecord")]
pub struct Disk {
    kind: StorageKind,
    /// Capacity in GiB
    capacity: u64,
    partitions: Container<Partition>,
}

impl Disk {
    pub fn new(kind: StorageKind, capacity: u64) -> Self {
        Self {
            kind,
            capacity,
            partitions: Container::new(),
        }
    }

    /// Create from a numeric storage tag (0 = SSD, 1 = magnetic)
    pub fn from_tag(tag: u8, capacity: u64) -> Result<Self, ValidationError> {
        Ok(Self::new(StorageKind::try_from(tag)?, capacity))
    }

    /// Append a partition of `size` GiB
    ///
    /// Fails with [`InventoryError::CapacityExceeded`] if the partition does
    /// not fit into the remaining space.
    pub fn add_partition(
        &mut self,
        size: u64,
        name: impl Into<String>,
    ) -> InventoryResult<&mut Self> {
        let name = name.into();

        if let Err(err) = validate_partition_fits(self.capacity, self.used_capacity(), size) {
            warn!(disk = %self.label(), partition = %name, size, "Rejected partition: {}", err);
            return Err(err);
        }

        let index = self.partitions.len();
        debug!(disk = %self.label(), index, size, "Added partition {}", name);
        self.partitions.add(Partition { index, size, name });
        Ok(self)
    }

    /// Builder form of [`Disk::add_partition`]
    pub fn with_partition(mut self, size: u64, name: impl Into<String>) -> InventoryResult<Self> {
        self.add_partition(size, name)?;
        Ok(self)
    }

    pub fn kind(&self) -> StorageKind {
        self.kind
    }

    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    /// Sum of partition sizes in GiB
    pub fn used_capacity(&self) -> u64 {
        self.partitions.iter().map(Partition::size).sum()
    }

    pub fn remaining_capacity(&self) -> u64 {
        remaining_capacity(self.capacity, self.used_capacity())
    }

    pub fn partitions(&self) -> &Container<Partition> {
        &self.partitions
    }
}

impl TreeNode for Disk {
    fn label(&self) -> String {
        format!("{}, {} GiB", self.kind.display_name(), self.capacity)
    }

    fn children(&self) -> Vec<&dyn TreeNode> {
        self.partitions.nodes().collect()
    }
}

/// Wire form of a disk; partitions are replayed through the capacity check
#[derive(Deserialize)]
struct DiskRecord {
    kind: StorageKind,
    capacity: u64,
    #[serde(default)]
    partitions: Vec<PartitionRecord>,
}

#[derive(Deserialize)]
struct PartitionRecord {
    size: u64,
    name: String,
}

impl TryFrom<DiskRecord> for Disk {
    type Error = InventoryError;

    fn try_from(record: DiskRecord) -> Result<Self, Self::Error> {
        record
            .partitions
            .into_iter()
            .try_fold(Disk::new(record.kind, record.capacity), |disk, p| {
                disk.with_partition(p.size, p.name)
            })
    }
}
