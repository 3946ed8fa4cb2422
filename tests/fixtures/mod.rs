// Copyright (c) 2025 - Cowboy AI, Inc.
//! Test Fixtures for cim-inventory
//!
//! Provides the reference two-host MISIS inventory and its exact rendering.
//! Fixtures are the only place that builds the reference network; tests
//! clone or mutate what they get from here.
#![allow(dead_code)]

use cim_inventory::{Computer, Cpu, Disk, Memory, Network, StorageKind};

pub const NETWORK_NAME: &str = "MISIS network";
pub const SERVER1: &str = "server1.misis.ru";
pub const SERVER2: &str = "server2.misis.ru";

/// Exact rendering of [`misis_network`]
pub const MISIS_RENDER: &str = r"Network: MISIS network
+-Host: server1.misis.ru
| +-192.168.1.1
| +-CPU, 4 cores @ 2500MHz
| \-Memory, 16000 MiB
\-Host: server2.misis.ru
  +-10.0.0.1
  +-CPU, 8 cores @ 3200MHz
  \-HDD, 2000 GiB
    +-[0]: 500 GiB, system
    \-[1]: 1500 GiB, data";

pub fn server1() -> Computer {
    Computer::new(SERVER1)
        .with_address("192.168.1.1")
        .expect("Invalid address in test fixture")
        .with_component(Cpu::new(4, 2500))
        .with_component(Memory::new(16000))
}

pub fn server2() -> Computer {
    Computer::new(SERVER2)
        .with_address("10.0.0.1")
        .expect("Invalid address in test fixture")
        .with_component(Cpu::new(8, 3200))
        .with_component(
            Disk::new(StorageKind::Magnetic, 2000)
                .with_partition(500, "system")
                .and_then(|d| d.with_partition(1500, "data"))
                .expect("Partitions exceed disk in test fixture"),
        )
}

/// Reference two-host network
pub fn misis_network() -> Network {
    Network::new(NETWORK_NAME)
        .with_computer(server1())
        .with_computer(server2())
}

/// Single-partition SSD added to a host in clone tests
pub fn fast_ssd() -> Disk {
    Disk::new(StorageKind::Ssd, 500)
        .with_partition(500, "fast_storage")
        .expect("Partition exceeds disk in test fixture")
}
