//! Read-only catalog and parameter store
//!
//! The `Catalog` holds the raw device table, both scenario profile families
//! and the global parameter map. It is built once at startup and passed by
//! shared reference into every evaluation; nothing here mutates after
//! construction, so concurrent readers need no coordination.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::ParameterError;
use crate::model::{DeviceKey, DeviceSpec, ProfileFamily};

/// Amortization period for upfront cost, in years
pub const NOMINAL_PERIOD: &str = "nominal period";
/// Colour-map identifier the external renderer uses for noise shading
pub const NOISE_CMAP: &str = "noise cmap";

/// A single global setting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ParameterValue {
    Number(f64),
    Text(String),
}

/// Flat map of named global settings, immutable after load
#[derive(Debug, Clone, Default)]
pub struct Parameters {
    values: FxHashMap<String, ParameterValue>,
}

impl Parameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a setting. Only meaningful during construction; the store is
    /// read-only once handed to a `Catalog`.
    pub fn insert(&mut self, name: impl Into<String>, value: ParameterValue) {
        self.values.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Result<&ParameterValue, ParameterError> {
        self.values
            .get(name)
            .ok_or_else(|| ParameterError::Missing(name.to_string()))
    }

    /// Resolve a numeric setting
    pub fn number(&self, name: &str) -> Result<f64, ParameterError> {
        match self.get(name)? {
            ParameterValue::Number(v) => Ok(*v),
            ParameterValue::Text(_) => Err(ParameterError::Kind {
                name: name.to_string(),
                expected: "numeric",
            }),
        }
    }

    /// Resolve a textual setting
    pub fn text(&self, name: &str) -> Result<&str, ParameterError> {
        match self.get(name)? {
            ParameterValue::Text(v) => Ok(v.as_str()),
            ParameterValue::Number(_) => Err(ParameterError::Kind {
                name: name.to_string(),
                expected: "text",
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(String, ParameterValue)> for Parameters {
    fn from_iter<T: IntoIterator<Item = (String, ParameterValue)>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// The read-only store every evaluation draws from
#[derive(Debug, Clone)]
pub struct Catalog {
    devices: Vec<DeviceSpec>,
    volumes: ProfileFamily,
    qualities: ProfileFamily,
    parameters: Parameters,
}

impl Catalog {
    pub fn new(
        devices: Vec<DeviceSpec>,
        volumes: ProfileFamily,
        qualities: ProfileFamily,
        parameters: Parameters,
    ) -> Self {
        Self {
            devices,
            volumes,
            qualities,
            parameters,
        }
    }

    /// All known devices in natural catalog order
    pub fn devices(&self) -> &[DeviceSpec] {
        &self.devices
    }

    /// Look up one device by identity
    pub fn device(&self, key: &DeviceKey) -> Option<&DeviceSpec> {
        self.devices.iter().find(|d| &d.key == key)
    }

    pub fn volume_profiles(&self) -> &ProfileFamily {
        &self.volumes
    }

    pub fn quality_profiles(&self) -> &ProfileFamily {
        &self.qualities
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }
}
