// Copyright (c) 2025 - Cowboy AI, Inc.
//! Network Address Value Object with Validation Invariants

use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

use super::invariants::{validate_address, ValidationError, OCTET_COUNT};
use crate::tree::TreeNode;

/// Dotted-quad network address
///
/// Invariants:
/// - Exactly four period-separated integer octets
/// - Every octet in [0,255]
/// - The text is kept as given; equality compares that text
///
/// # Examples
///
/// ```rust
/// use cim_inventory::domain::Address;
///
/// let addr = Address::new("192.168.1.1").unwrap();
/// assert_eq!(addr.octets(), [192, 168, 1, 1]);
///
/// assert!(Address::new("256.0.0.1").is_err());
/// assert!(Address::new("1.2.3").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address {
    address: String,
    octets: [u8; OCTET_COUNT],
}

impl Address {
    /// Create a new address with validation
    pub fn new(address: impl Into<String>) -> Result<Self, ValidationError> {
        let address = address.into();
        let octets = validate_address(&address)?;
        Ok(Self { address, octets })
    }

    pub fn as_str(&self) -> &str {
        &self.address
    }

    pub fn octets(&self) -> [u8; OCTET_COUNT] {
        self.octets
    }

    /// Check if this address falls into an RFC 1918 private range
    pub fn is_private(&self) -> bool {
        self.to_ipv4().is_private()
    }

    pub fn to_ipv4(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.octets)
    }
}

impl TreeNode for Address {
    fn label(&self) -> String {
        self.address.clone()
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.address)
    }
}

impl FromStr for Address {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Address {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Address {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Address> for String {
    fn from(value: Address) -> Self {
        value.address
    }
}

impl From<Ipv4Addr> for Address {
    fn from(ip: Ipv4Addr) -> Self {
        Self {
            address: ip.to_string(),
            octets: ip.octets(),
        }
    }
}
