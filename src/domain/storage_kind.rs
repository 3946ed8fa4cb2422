// Copyright (c) 2025 - Cowboy AI, Inc.
//! Disk storage kind taxonomy

use serde::{Deserialize, Serialize};
use std::fmt;

use super::invariants::ValidationError;

/// Physical storage technology of a disk
///
/// Numeric tags are stable: `Ssd = 0`, `Magnetic = 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageKind {
    /// Solid state drive
    Ssd,
    /// Spinning magnetic drive
    Magnetic,
}

impl StorageKind {
    pub const SSD_TAG: u8 = 0;
    pub const MAGNETIC_TAG: u8 = 1;

    /// Numeric tag of this kind
    pub fn tag(&self) -> u8 {
        match self {
            Self::Ssd => Self::SSD_TAG,
            Self::Magnetic => Self::MAGNETIC_TAG,
        }
    }

    /// Short name used in rendered labels
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Ssd => "SSD",
            Self::Magnetic => "HDD",
        }
    }
}

impl fmt::Display for StorageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl TryFrom<u8> for StorageKind {
    type Error = ValidationError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            Self::SSD_TAG => Ok(Self::Ssd),
            Self::MAGNETIC_TAG => Ok(Self::Magnetic),
            other => Err(ValidationError::InvalidStorageKind(other)),
        }
    }
}
