// Copyright (c) 2025 - Cowboy AI, Inc.
//! Pure Validation Functions - Domain Invariants
//!
//! All business rule checks for inventory construction live here. Every
//! function is pure (no I/O, no mutation) and reports failures through a
//! typed error so callers can decide what to do.
//!
//! # Invariant Categories
//!
//! 1. **Structural Invariants**: addresses are four octets in [0,255]
//! 2. **Taxonomy Invariants**: storage kind tags are known
//! 3. **Capacity Invariants**: partitions never exceed their disk

use crate::errors::{InventoryError, InventoryResult};

/// Validation result with detailed error information
pub type ValidationResult<T = ()> = Result<T, ValidationError>;

/// Validation error with context
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Not four dot-separated integers
    #[error("Invalid network address: {0}")]
    InvalidAddress(String),

    /// Integer octet outside [0,255]
    #[error("Invalid network address: {address} (octet {octet} out of range 0-255)")]
    OctetOutOfRange { address: String, octet: i64 },

    /// Unknown storage kind tag
    #[error("Invalid storage type: {0}")]
    InvalidStorageKind(u8),
}

/// Number of octets in a dotted-quad address
pub const OCTET_COUNT: usize = 4;

/// Parse and validate a dotted-quad address
///
/// # Rules
/// - Exactly four period-separated fields
/// - Every field is a non-empty run of ASCII digits (no sign, no whitespace)
/// - Every integer lies in [0,255]
pub fn validate_address(address: &str) -> ValidationResult<[u8; OCTET_COUNT]> {
    let fields: Vec<&str> = address.split('.').collect();
    if fields.len() != OCTET_COUNT {
        return Err(ValidationError::InvalidAddress(address.to_string()));
    }

    let mut octets = [0u8; OCTET_COUNT];
    for (slot, field) in octets.iter_mut().zip(fields) {
        if !field.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::InvalidAddress(address.to_string()));
        }

        let value = field
            .parse::<i64>()
            .map_err(|_| ValidationError::InvalidAddress(address.to_string()))?;

        *slot = u8::try_from(value).map_err(|_| ValidationError::OctetOutOfRange {
            address: address.to_string(),
            octet: value,
        })?;
    }

    Ok(octets)
}

/// Space left on a disk of `capacity` GiB holding partitions of `used` GiB
pub fn remaining_capacity(capacity: u64, used: u64) -> u64 {
    capacity.saturating_sub(used)
}

/// Validate that a new partition fits into the remaining disk space
///
/// # Rules
/// - `requested <= capacity - used`
/// - A partition that exactly fills the disk is accepted
pub fn validate_partition_fits(capacity: u64, used: u64, requested: u64) -> InventoryResult<()> {
    let remaining = remaining_capacity(capacity, used);
    if requested > remaining {
        return Err(InventoryError::CapacityExceeded {
            requested,
            remaining,
        });
    }
    Ok(())
}
