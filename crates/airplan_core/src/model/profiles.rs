//! Named scenario profiles
//!
//! Two independent families drive unit sizing: room volume levels and target
//! air-quality levels. Each is a small ordered list of named numeric levels
//! with a display unit. Level values increase with the "bigger"/"better"
//! ordering the dashboard presents.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ProfileError;

/// Which scenario family a profile belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProfileKind {
    /// Room volume (m3 in the reference catalog)
    Volume,
    /// Target air quality (air changes per hour)
    Quality,
}

impl fmt::Display for ProfileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileKind::Volume => write!(f, "volume"),
            ProfileKind::Quality => write!(f, "quality"),
        }
    }
}

/// One named level within a family, e.g. "medium" -> 60.0
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileLevel {
    pub name: String,
    pub value: f64,
}

impl ProfileLevel {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// An ordered family of named levels with a shared display unit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileFamily {
    pub kind: ProfileKind,
    /// Display unit for the numeric levels, e.g. "m3" or "ACH"
    pub unit: String,
    pub levels: Vec<ProfileLevel>,
}

impl ProfileFamily {
    pub fn new(kind: ProfileKind, unit: impl Into<String>, levels: Vec<ProfileLevel>) -> Self {
        Self {
            kind,
            unit: unit.into(),
            levels,
        }
    }

    /// Resolve a level by name
    pub fn level(&self, name: &str) -> Result<&ProfileLevel, ProfileError> {
        self.levels
            .iter()
            .find(|l| l.name == name)
            .ok_or_else(|| ProfileError::UnknownLevel {
                family: self.kind,
                name: name.to_string(),
            })
    }

    /// Level names in catalog order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.levels.iter().map(|l| l.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}
