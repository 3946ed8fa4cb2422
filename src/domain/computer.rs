// Copyright (c) 2025 - Cowboy AI, Inc.
//! Computer Entity
//!
//! A host in the inventory. Identity is its name: two computers with the
//! same name compare equal no matter what hardware they hold, which is what
//! [`Network::find_computer`](super::Network::find_computer) relies on.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{Address, Component, Disk};
use crate::errors::InventoryResult;
use crate::tree::{Container, TreeNode};

/// Host with its addresses and installed components
///
/// Addresses and components are kept apart; rendering lists all addresses
/// first, then components, each group in insertion order.
///
/// # Examples
///
/// ```rust
/// use cim_inventory::domain::{Computer, Cpu, Memory};
///
/// let host = Computer::new("server1.misis.ru")
///     .with_address("192.168.1.1").unwrap()
///     .with_component(Cpu::new(4, 2500))
///     .with_component(Memory::new(16000));
///
/// assert_eq!(host.components().len(), 2);
/// assert_eq!(host, Computer::new("server1.misis.ru"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Computer {
    name: String,
    #[serde(default)]
    addresses: Container<Address>,
    #[serde(default)]
    components: Container<Component>,
}

impl Computer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            addresses: Container::new(),
            components: Container::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Validate and attach an address
    pub fn add_address(&mut self, address: impl AsRef<str>) -> InventoryResult<&mut Self> {
        let address = Address::new(address.as_ref())?;
        debug!(host = %self.name, %address, "Added address");
        self.addresses.add(address);
        Ok(self)
    }

    /// Attach a component (CPU, memory, disk)
    pub fn add_component(&mut self, component: impl Into<Component>) -> &mut Self {
        let component = component.into();
        debug!(host = %self.name, component = %component.label(), "Added component");
        self.components.add(component);
        self
    }

    /// Builder form of [`Computer::add_address`]
    pub fn with_address(mut self, address: impl AsRef<str>) -> InventoryResult<Self> {
        self.add_address(address)?;
        Ok(self)
    }

    /// Builder form of [`Computer::add_component`]
    pub fn with_component(mut self, component: impl Into<Component>) -> Self {
        self.add_component(component);
        self
    }

    pub fn addresses(&self) -> &Container<Address> {
        &self.addresses
    }

    /// Installed hardware, addresses excluded
    pub fn components(&self) -> &Container<Component> {
        &self.components
    }

    pub fn components_mut(&mut self) -> &mut Container<Component> {
        &mut self.components
    }

    /// Disks among the installed components
    pub fn disks(&self) -> impl Iterator<Item = &Disk> + '_ {
        self.components.iter().filter_map(Component::as_disk)
    }
}

impl PartialEq for Computer {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Computer {}

impl TreeNode for Computer {
    fn label(&self) -> String {
        format!("Host: {}", self.name)
    }

    fn children(&self) -> Vec<&dyn TreeNode> {
        self.addresses
            .nodes()
            .chain(self.components.nodes())
            .collect()
    }
}
