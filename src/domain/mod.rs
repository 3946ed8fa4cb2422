// Copyright (c) 2025 - Cowboy AI, Inc.
//! Inventory Domain Models
//!
//! Node types of the inventory tree and the value objects they are built
//! from. Every type implements [`TreeNode`](crate::tree::TreeNode).
//!
//! # Value Objects with Invariants
//!
//! - [`Address`] - dotted-quad address, four octets in [0,255]
//! - [`StorageKind`] - SSD or magnetic, numeric tag 0/1
//!
//! # Leaves
//!
//! - [`Cpu`], [`Memory`], [`Partition`]
//!
//! # Composites
//!
//! - [`Disk`] - partitions, never over capacity
//! - [`Computer`] - addresses and components, identity by name
//! - [`Network`] - computers, root of the rendered tree

pub mod address;
pub mod component;
pub mod computer;
pub mod disk;
pub mod invariants;
pub mod network;
pub mod storage_kind;

pub use address::Address;
pub use component::{Component, Cpu, Memory};
pub use computer::Computer;
pub use disk::{Disk, Partition};
pub use invariants::{ValidationError, ValidationResult};
pub use network::Network;
pub use storage_kind::StorageKind;
