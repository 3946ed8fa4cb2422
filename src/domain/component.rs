// Copyright (c) 2025 - Cowboy AI, Inc.
//! Hardware components installed in a computer

use serde::{Deserialize, Serialize};

use super::Disk;
use crate::tree::TreeNode;

/// Processor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cpu {
    cores: u32,
    /// Clock speed in MHz
    mhz: u32,
}

impl Cpu {
    pub fn new(cores: u32, mhz: u32) -> Self {
        Self { cores, mhz }
    }

    pub fn cores(&self) -> u32 {
        self.cores
    }

    pub fn mhz(&self) -> u32 {
        self.mhz
    }
}

impl TreeNode for Cpu {
    fn label(&self) -> String {
        format!("CPU, {} cores @ {}MHz", self.cores, self.mhz)
    }
}

/// Memory module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Memory {
    /// Size in MiB
    size: u64,
}

impl Memory {
    pub fn new(size: u64) -> Self {
        Self { size }
    }

    pub fn size(&self) -> u64 {
        self.size
    }
}

impl TreeNode for Memory {
    fn label(&self) -> String {
        format!("Memory, {} MiB", self.size)
    }
}

/// Any component a computer can hold
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Component {
    Cpu(Cpu),
    Memory(Memory),
    Disk(Disk),
}

impl Component {
    pub fn as_disk(&self) -> Option<&Disk> {
        match self {
            Self::Disk(disk) => Some(disk),
            _ => None,
        }
    }

    pub fn as_disk_mut(&mut self) -> Option<&mut Disk> {
        match self {
            Self::Disk(disk) => Some(disk),
            _ => None,
        }
    }

    fn node(&self) -> &dyn TreeNode {
        match self {
            Self::Cpu(cpu) => cpu,
            Self::Memory(memory) => memory,
            Self::Disk(disk) => disk,
        }
    }
}

impl TreeNode for Component {
    fn label(&self) -> String {
        self.node().label()
    }

    fn children(&self) -> Vec<&dyn TreeNode> {
        self.node().children()
    }
}

impl From<Cpu> for Component {
    fn from(cpu: Cpu) -> Self {
        Self::Cpu(cpu)
    }
}

impl From<Memory> for Component {
    fn from(memory: Memory) -> Self {
        Self::Memory(memory)
    }
}

impl From<Disk> for Component {
    fn from(disk: Disk) -> Self {
        Self::Disk(disk)
    }
}
