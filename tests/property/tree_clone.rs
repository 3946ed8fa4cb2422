// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Tree Cloning and Rendering
//!
//! Generates arbitrary inventories and checks that clones render the same,
//! stay independent, and that every node occupies exactly one line.

use cim_inventory::{Component, Computer, Cpu, Disk, Memory, Network, StorageKind, TreeNode};
use proptest::prelude::*;

// ============================================================================
// Property Test Strategies
// ============================================================================

fn address() -> impl Strategy<Value = String> {
    (any::<u8>(), any::<u8>(), any::<u8>(), any::<u8>())
        .prop_map(|(a, b, c, d)| format!("{}.{}.{}.{}", a, b, c, d))
}

fn disk() -> impl Strategy<Value = Disk> {
    (any::<bool>(), 1u64..2000, prop::collection::vec(1u64..500, 0..5)).prop_map(
        |(ssd, capacity, sizes)| {
            let kind = if ssd { StorageKind::Ssd } else { StorageKind::Magnetic };
            let mut disk = Disk::new(kind, capacity);
            for (i, size) in sizes.into_iter().enumerate() {
                let _ = disk.add_partition(size, format!("part{}", i));
            }
            disk
        },
    )
}

fn component() -> impl Strategy<Value = Component> {
    prop_oneof![
        (1u32..64, 800u32..5000).prop_map(|(c, m)| Component::from(Cpu::new(c, m))),
        (1u64..65536).prop_map(|s| Component::from(Memory::new(s))),
        disk().prop_map(Component::from),
    ]
}

fn computer(index: usize) -> impl Strategy<Value = Computer> {
    (
        prop::collection::vec(address(), 0..3),
        prop::collection::vec(component(), 0..5),
    )
        .prop_map(move |(addresses, components)| {
            let mut host = Computer::new(format!("host{}.example.com", index));
            for addr in addresses {
                host.add_address(addr).expect("generated address is valid");
            }
            for comp in components {
                host.add_component(comp);
            }
            host
        })
}

fn network() -> impl Strategy<Value = Network> {
    (0usize..5)
        .prop_flat_map(|n| (0..n).map(computer).collect::<Vec<_>>())
        .prop_map(|hosts| {
            hosts
                .into_iter()
                .fold(Network::new("generated"), |net, host| net.with_computer(host))
        })
}

/// Nodes in a subtree, including its root
fn count_nodes(node: &dyn TreeNode) -> usize {
    1 + node.children().into_iter().map(count_nodes).sum::<usize>()
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Property: A clone renders identically to its source
    #[test]
    fn prop_clone_renders_identically(net in network()) {
        prop_assert_eq!(net.clone().to_string(), net.to_string());
    }

    /// Property: Growing the clone never changes the source
    #[test]
    fn prop_clone_is_isolated(net in network(), extra in component()) {
        let before = net.to_string();
        let mut copy = net.clone();

        copy.add_computer(Computer::new("extra.example.com"));
        for host in net.computers().iter() {
            copy.find_computer_mut(host.name())
                .expect("clone holds every host")
                .add_component(extra.clone());
        }

        prop_assert_eq!(net.to_string(), before);
    }

    /// Property: One line per node
    #[test]
    fn prop_one_line_per_node(net in network()) {
        prop_assert_eq!(net.to_string().lines().count(), count_nodes(&net));
    }

    /// Property: Every non-root line carries exactly one connector
    #[test]
    fn prop_every_line_has_connector(net in network()) {
        for line in net.to_string().lines().skip(1) {
            let body = line.trim_start_matches(['|', ' ']);
            prop_assert!(body.starts_with("+-") || body.starts_with("\\-"), "line: {}", line);
        }
    }

    /// Property: JSON snapshots restore the same tree
    #[test]
    fn prop_json_snapshot_restores_render(net in network()) {
        let restored = Network::from_json(&net.to_json().unwrap()).unwrap();
        prop_assert_eq!(restored.to_string(), net.to_string());
    }
}
