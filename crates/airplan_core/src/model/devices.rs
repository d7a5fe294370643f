//! Device catalog records
//!
//! A `DeviceSpec` mirrors one row of the manufacturer data table. Records are
//! validated at evaluation time, never silently patched: a physically invalid
//! field is a `DataError` and the device contributes no output row.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DataError;

/// Identity of a catalog device. Unique per catalog; the row key of every
/// output table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeviceKey {
    pub manufacturer: String,
    pub model: String,
}

impl DeviceKey {
    pub fn new(manufacturer: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            manufacturer: manufacturer.into(),
            model: model.into(),
        }
    }
}

impl fmt::Display for DeviceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.manufacturer, self.model)
    }
}

/// Manufacturer specification for one air-cleaning device
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceSpec {
    pub key: DeviceKey,
    /// Upfront purchase cost in dollars
    pub price: f64,
    /// Rated airflow capacity in m3/h (CADR-like operating point)
    pub airflow: f64,
    /// Single-unit operating noise in dB
    pub noise_level: f64,
    /// Annual running cost in dollars (electricity plus amortized filters)
    pub running_cost: f64,
}

impl DeviceSpec {
    /// Check the record against the physical invariants every evaluation
    /// relies on. Airflow is a divisor and must be strictly positive.
    pub fn validate(&self) -> Result<(), DataError> {
        for (field, value) in [
            ("price", self.price),
            ("airflow", self.airflow),
            ("noise_level", self.noise_level),
            ("running_cost", self.running_cost),
        ] {
            if !value.is_finite() {
                return Err(DataError::NonFinite {
                    device: self.key.clone(),
                    field,
                });
            }
        }
        if self.airflow <= 0.0 {
            return Err(DataError::NonPositiveAirflow {
                device: self.key.clone(),
                value: self.airflow,
            });
        }
        for (field, value) in [("price", self.price), ("running_cost", self.running_cost)] {
            if value < 0.0 {
                return Err(DataError::NegativeField {
                    device: self.key.clone(),
                    field,
                    value,
                });
            }
        }
        Ok(())
    }
}
