//! Hardware inventory tree for the Composable Information Machine
//!
//! A [`Network`] owns [`Computer`]s, which own addresses and hardware
//! [`Component`]s; disks in turn own partitions. Every node renders into a
//! single ASCII tree, can be looked up by identity, and deep-clones into a
//! copy that shares nothing with the original.
//!
//! ```rust
//! use cim_inventory::{Computer, Cpu, Disk, Network, StorageKind};
//!
//! let net = Network::new("lab").with_computer(
//!     Computer::new("db01")
//!         .with_address("10.0.0.1")?
//!         .with_component(Cpu::new(8, 3200))
//!         .with_component(
//!             Disk::new(StorageKind::Ssd, 500).with_partition(500, "data")?,
//!         ),
//! );
//!
//! assert_eq!(
//!     net.to_string(),
//!     "Network: lab\n\\-Host: db01\n  +-10.0.0.1\n  +-CPU, 8 cores @ 3200MHz\n  \\-SSD, 500 GiB\n    \\-[0]: 500 GiB, data"
//! );
//! # Ok::<(), cim_inventory::InventoryError>(())
//! ```

pub mod domain;
pub mod errors;
pub mod tree;

// Re-export commonly used types
pub use domain::{
    Address, Component, Computer, Cpu, Disk, Memory, Network, Partition, StorageKind,
    ValidationError,
};
pub use errors::{InventoryError, InventoryResult};
pub use tree::{Container, TreeNode};
