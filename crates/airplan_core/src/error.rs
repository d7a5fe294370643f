use std::fmt;

use crate::model::{DeviceKey, ProfileKind};

/// Errors raised by a malformed or physically invalid device record
#[derive(Debug, Clone)]
pub enum DataError {
    /// A spec field is NaN or infinite
    NonFinite {
        device: DeviceKey,
        field: &'static str,
    },
    /// Airflow capacity must be strictly positive (it is a divisor)
    NonPositiveAirflow { device: DeviceKey, value: f64 },
    /// Costs cannot be negative
    NegativeField {
        device: DeviceKey,
        field: &'static str,
        value: f64,
    },
}

impl DataError {
    /// The device whose record raised the error
    pub fn device(&self) -> &DeviceKey {
        match self {
            DataError::NonFinite { device, .. }
            | DataError::NonPositiveAirflow { device, .. }
            | DataError::NegativeField { device, .. } => device,
        }
    }
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataError::NonFinite { device, field } => {
                write!(f, "device {device}: field {field} is not finite")
            }
            DataError::NonPositiveAirflow { device, value } => {
                write!(f, "device {device}: airflow capacity {value} must be > 0")
            }
            DataError::NegativeField {
                device,
                field,
                value,
            } => {
                write!(f, "device {device}: field {field} is negative ({value})")
            }
        }
    }
}

impl std::error::Error for DataError {}

/// Errors related to global parameter lookups
#[derive(Debug, Clone)]
pub enum ParameterError {
    /// The named parameter is absent from the store
    Missing(String),
    /// The named parameter exists but holds the wrong kind of value
    Kind {
        name: String,
        expected: &'static str,
    },
}

impl fmt::Display for ParameterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterError::Missing(name) => write!(f, "parameter {name:?} not found"),
            ParameterError::Kind { name, expected } => {
                write!(f, "parameter {name:?} is not a {expected} value")
            }
        }
    }
}

impl std::error::Error for ParameterError {}

/// Errors related to scenario profile lookups
#[derive(Debug, Clone)]
pub enum ProfileError {
    UnknownLevel { family: ProfileKind, name: String },
}

impl fmt::Display for ProfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileError::UnknownLevel { family, name } => {
                write!(f, "unknown {family} level {name:?}")
            }
        }
    }
}

impl std::error::Error for ProfileError {}

/// Umbrella error for table-level evaluation requests
#[derive(Debug, Clone)]
pub enum EvaluateError {
    Data(DataError),
    Parameter(ParameterError),
    Profile(ProfileError),
}

impl fmt::Display for EvaluateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvaluateError::Data(e) => write!(f, "{e}"),
            EvaluateError::Parameter(e) => write!(f, "{e}"),
            EvaluateError::Profile(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for EvaluateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EvaluateError::Data(e) => Some(e),
            EvaluateError::Parameter(e) => Some(e),
            EvaluateError::Profile(e) => Some(e),
        }
    }
}

impl From<DataError> for EvaluateError {
    fn from(e: DataError) -> Self {
        EvaluateError::Data(e)
    }
}

impl From<ParameterError> for EvaluateError {
    fn from(e: ParameterError) -> Self {
        EvaluateError::Parameter(e)
    }
}

impl From<ProfileError> for EvaluateError {
    fn from(e: ProfileError) -> Self {
        EvaluateError::Profile(e)
    }
}

pub type Result<T> = std::result::Result<T, EvaluateError>;
