// Copyright (c) 2025 - Cowboy AI, Inc.
//! Network Aggregate - root of the inventory tree

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

use super::Computer;
use crate::errors::{InventoryError, InventoryResult};
use crate::tree::{Container, TreeNode};

/// Named network of computers
///
/// `Display` renders the whole inventory as an ASCII tree:
///
/// ```text
/// Network: MISIS network
/// +-Host: server1.misis.ru
/// | +-192.168.1.1
/// | \-Memory, 16000 MiB
/// \-Host: server2.misis.ru
///   \-10.0.0.1
/// ```
///
/// Computers keep insertion order. `clone()` yields a fully independent copy
/// of every host, component and partition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Network {
    name: String,
    #[serde(default)]
    computers: Container<Computer>,
}

impl Network {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            computers: Container::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn add_computer(&mut self, computer: Computer) -> &mut Self {
        debug!(network = %self.name, host = %computer.name(), "Added computer");
        self.computers.add(computer);
        self
    }

    /// Builder form of [`Network::add_computer`]
    pub fn with_computer(mut self, computer: Computer) -> Self {
        self.add_computer(computer);
        self
    }

    /// Stored computer with the given name
    ///
    /// Lookup goes through name-only equality, so the result carries the
    /// stored hardware, never that of the probe.
    pub fn find_computer(&self, name: &str) -> InventoryResult<&Computer> {
        self.computers
            .find(&Computer::new(name))
            .inspect_err(|_| warn!(network = %self.name, host = name, "Computer not found"))
    }

    /// Mutable access to the stored computer with the given name
    pub fn find_computer_mut(&mut self, name: &str) -> InventoryResult<&mut Computer> {
        let network = &self.name;
        self.computers
            .find_mut(&Computer::new(name))
            .inspect_err(|_| warn!(network = %network, host = name, "Computer not found"))
    }

    pub fn computers(&self) -> &Container<Computer> {
        &self.computers
    }

    pub fn len(&self) -> usize {
        self.computers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.computers.is_empty()
    }

    /// JSON snapshot of the whole inventory
    pub fn to_json(&self) -> InventoryResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Rebuild an inventory from a JSON snapshot, re-checking every invariant
    pub fn from_json(json: &str) -> InventoryResult<Self> {
        serde_json::from_str(json).map_err(|e| InventoryError::Deserialization(e.to_string()))
    }
}

impl PartialEq for Network {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Network {}

impl TreeNode for Network {
    fn label(&self) -> String {
        format!("Network: {}", self.name)
    }

    fn children(&self) -> Vec<&dyn TreeNode> {
        self.computers.nodes().collect()
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_tree())
    }
}
