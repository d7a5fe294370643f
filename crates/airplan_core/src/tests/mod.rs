//! Integration tests for the airplan evaluation engine
//!
//! Tests are organized by topic:
//! - `sizing` - Unit-count arithmetic and device validation
//! - `noise` - Decibel combination and cost-efficiency arithmetic
//! - `tables` - Full-scenario and synoptic table construction
//! - `sweep` - Batch sweep over the scenario cross-product
//! - `store` - Catalog and parameter store lookups

use crate::catalog::{Catalog, NOMINAL_PERIOD, NOISE_CMAP, ParameterValue, Parameters};
use crate::model::{DeviceKey, DeviceSpec, ProfileFamily, ProfileKind, ProfileLevel};

mod noise;

pub(crate) fn device(
    manufacturer: &str,
    model: &str,
    price: f64,
    airflow: f64,
    noise_level: f64,
    running_cost: f64,
) -> DeviceSpec {
    DeviceSpec {
        key: DeviceKey::new(manufacturer, model),
        price,
        airflow,
        noise_level,
        running_cost,
    }
}

pub(crate) fn sample_devices() -> Vec<DeviceSpec> {
    vec![
        device("Aeris", "Aair Lite", 500.0, 200.0, 55.0, 40.0),
        device("Coway", "AP-1512HH", 230.0, 300.0, 53.0, 55.0),
        device("Levoit", "Core 300", 100.0, 187.0, 50.0, 45.0),
        device("Dyson", "Pure Cool TP04", 550.0, 310.0, 62.0, 70.0),
        device("IQAir", "HealthPro 250", 900.0, 440.0, 57.0, 110.0),
        device("Xiaomi", "Mi 3H", 150.0, 380.0, 64.0, 50.0),
    ]
}

pub(crate) fn sample_parameters() -> Parameters {
    let mut params = Parameters::new();
    params.insert(NOMINAL_PERIOD, ParameterValue::Number(5.0));
    params.insert(NOISE_CMAP, ParameterValue::Text("inferno".to_string()));
    params
}

/// Reference catalog: 3 volume levels x 3 quality levels, medium room 60 m3,
/// good quality 4 ACH.
pub(crate) fn sample_catalog() -> Catalog {
    Catalog::new(
        sample_devices(),
        ProfileFamily::new(
            ProfileKind::Volume,
            "m3",
            vec![
                ProfileLevel::new("small", 30.0),
                ProfileLevel::new("medium", 60.0),
                ProfileLevel::new("large", 150.0),
            ],
        ),
        ProfileFamily::new(
            ProfileKind::Quality,
            "ACH",
            vec![
                ProfileLevel::new("poor", 2.0),
                ProfileLevel::new("good", 4.0),
                ProfileLevel::new("excellent", 6.0),
            ],
        ),
        sample_parameters(),
    )
}
