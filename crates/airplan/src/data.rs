//! Catalog file loading
//!
//! The on-disk catalog is a YAML document mirroring the evaluation boundary:
//! a device table, the two scenario profile families and a parameter map.
//! Parameter values load as strings and are parsed number-first, so
//! `"5"` becomes numeric while `"inferno"` stays text.
//!
//! Load-time checks reject duplicate device identities and profile families
//! whose level names repeat or whose values fail to increase; the core
//! engine trusts those invariants afterwards.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use color_eyre::Result;
use color_eyre::eyre::{WrapErr, bail, eyre};
use serde::{Deserialize, Serialize};

use airplan_core::catalog::{Catalog, ParameterValue, Parameters};
use airplan_core::model::{DeviceKey, DeviceSpec, ProfileFamily, ProfileKind, ProfileLevel};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceData {
    pub manufacturer: String,
    pub model: String,
    pub price: f64,
    pub airflow: f64,
    pub noise_level: f64,
    pub running_cost: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelData {
    pub name: String,
    pub value: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileData {
    pub unit: String,
    pub levels: Vec<LevelData>,
}

impl ProfileData {
    fn into_family(self, kind: ProfileKind) -> Result<ProfileFamily> {
        if self.levels.is_empty() {
            bail!("{kind} profile has no levels");
        }
        let mut names = HashSet::new();
        for level in &self.levels {
            if !names.insert(level.name.clone()) {
                bail!("duplicate {kind} level {:?}", level.name);
            }
        }
        for pair in self.levels.windows(2) {
            if pair[1].value <= pair[0].value {
                bail!(
                    "{kind} level {:?} ({}) does not increase past {:?} ({})",
                    pair[1].name,
                    pair[1].value,
                    pair[0].name,
                    pair[0].value
                );
            }
        }
        Ok(ProfileFamily::new(
            kind,
            self.unit,
            self.levels
                .into_iter()
                .map(|l| ProfileLevel::new(l.name, l.value))
                .collect(),
        ))
    }
}

/// Serialized form of a complete catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogData {
    pub devices: Vec<DeviceData>,
    pub volumes: ProfileData,
    pub qualities: ProfileData,
    pub parameters: HashMap<String, String>,
}

impl CatalogData {
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_saphyr::Error> {
        serde_saphyr::from_str(yaml)
    }

    /// Convert into the core store, enforcing the load-time invariants
    pub fn into_catalog(self) -> Result<Catalog> {
        let mut seen = HashSet::new();
        for d in &self.devices {
            if !seen.insert((d.manufacturer.clone(), d.model.clone())) {
                bail!("duplicate device {} {}", d.manufacturer, d.model);
            }
        }

        let devices = self
            .devices
            .into_iter()
            .map(|d| DeviceSpec {
                key: DeviceKey::new(d.manufacturer, d.model),
                price: d.price,
                airflow: d.airflow,
                noise_level: d.noise_level,
                running_cost: d.running_cost,
            })
            .collect();

        let volumes = self.volumes.into_family(ProfileKind::Volume)?;
        let qualities = self.qualities.into_family(ProfileKind::Quality)?;

        let parameters: Parameters = self
            .parameters
            .into_iter()
            .map(|(name, raw)| {
                let value = match raw.parse::<f64>() {
                    Ok(n) => ParameterValue::Number(n),
                    Err(_) => ParameterValue::Text(raw),
                };
                (name, value)
            })
            .collect();

        Ok(Catalog::new(devices, volumes, qualities, parameters))
    }
}

impl Default for CatalogData {
    /// The built-in reference catalog: market devices with manufacturer CADR,
    /// noise and cost figures, the three-level room/quality families and the
    /// reference parameter set.
    fn default() -> Self {
        let device = |manufacturer: &str,
                      model: &str,
                      price: f64,
                      airflow: f64,
                      noise_level: f64,
                      running_cost: f64| DeviceData {
            manufacturer: manufacturer.to_string(),
            model: model.to_string(),
            price,
            airflow,
            noise_level,
            running_cost,
        };

        Self {
            devices: vec![
                device("Philips", "AC2887", 329.0, 333.0, 63.0, 75.0),
                device("Coway", "AP-1512HH", 229.0, 300.0, 53.0, 55.0),
                device("Levoit", "Core 300", 99.0, 187.0, 50.0, 45.0),
                device("Winix", "5500-2", 179.0, 390.0, 58.0, 60.0),
                device("Xiaomi", "Mi Air Purifier 3H", 149.0, 380.0, 64.0, 50.0),
                device("Blueair", "Blue Pure 211+", 299.0, 590.0, 56.0, 80.0),
                device("Dyson", "Pure Cool TP04", 549.0, 310.0, 62.0, 70.0),
                device("IQAir", "HealthPro 250", 899.0, 440.0, 57.0, 110.0),
                device("Samsung", "AX40", 249.0, 312.0, 50.0, 55.0),
                device("Honeywell", "HPA300", 249.0, 510.0, 60.0, 90.0),
            ],
            volumes: ProfileData {
                unit: "m3".to_string(),
                levels: vec![
                    LevelData {
                        name: "small".to_string(),
                        value: 30.0,
                    },
                    LevelData {
                        name: "medium".to_string(),
                        value: 60.0,
                    },
                    LevelData {
                        name: "large".to_string(),
                        value: 150.0,
                    },
                ],
            },
            qualities: ProfileData {
                unit: "ACH".to_string(),
                levels: vec![
                    LevelData {
                        name: "poor".to_string(),
                        value: 2.0,
                    },
                    LevelData {
                        name: "good".to_string(),
                        value: 4.0,
                    },
                    LevelData {
                        name: "excellent".to_string(),
                        value: 6.0,
                    },
                ],
            },
            parameters: HashMap::from([
                ("nominal period".to_string(), "5".to_string()),
                ("noise cmap".to_string(), "inferno".to_string()),
            ]),
        }
    }
}

/// Load a catalog from a YAML file, or fall back to the built-in catalog
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    let data = match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .wrap_err_with(|| format!("reading catalog file {}", path.display()))?;
            CatalogData::from_yaml(&text)
                .map_err(|e| eyre!("parsing catalog file {}: {e}", path.display()))?
        }
        None => {
            tracing::debug!("no catalog file given, using the built-in catalog");
            CatalogData::default()
        }
    };
    data.into_catalog()
}

#[cfg(test)]
mod tests {
    use super::*;
    use airplan_core::catalog::NOMINAL_PERIOD;

    #[test]
    fn default_catalog_converts() {
        let catalog = CatalogData::default().into_catalog().unwrap();
        assert_eq!(catalog.devices().len(), 10);
        assert_eq!(catalog.parameters().number(NOMINAL_PERIOD).unwrap(), 5.0);
        assert_eq!(catalog.parameters().text("noise cmap").unwrap(), "inferno");
    }

    #[test]
    fn yaml_round_trip_preserves_the_catalog() {
        let data = CatalogData::default();
        let yaml = serde_saphyr::to_string(&data).unwrap();
        let parsed = CatalogData::from_yaml(&yaml).unwrap();

        assert_eq!(parsed.devices.len(), data.devices.len());
        assert_eq!(parsed.volumes.levels.len(), 3);
        assert_eq!(parsed.parameters.len(), 2);

        let catalog = parsed.into_catalog().unwrap();
        assert_eq!(catalog.volume_profiles().level("medium").unwrap().value, 60.0);
    }

    #[test]
    fn duplicate_device_is_rejected() {
        let mut data = CatalogData::default();
        data.devices.push(data.devices[0].clone());
        let err = data.into_catalog().unwrap_err();
        assert!(err.to_string().contains("duplicate device"));
    }

    #[test]
    fn duplicate_level_name_is_rejected() {
        let mut data = CatalogData::default();
        data.volumes.levels.push(LevelData {
            name: "small".to_string(),
            value: 500.0,
        });
        let err = data.into_catalog().unwrap_err();
        assert!(err.to_string().contains("duplicate volume level"));
    }

    #[test]
    fn non_increasing_levels_are_rejected() {
        let mut data = CatalogData::default();
        data.qualities.levels.push(LevelData {
            name: "mediocre".to_string(),
            value: 3.0,
        });
        let err = data.into_catalog().unwrap_err();
        assert!(err.to_string().contains("does not increase"));
    }

    #[test]
    fn parameters_parse_number_first() {
        let mut data = CatalogData::default();
        data.parameters
            .insert("target margin".to_string(), "0.25".to_string());
        let catalog = data.into_catalog().unwrap();
        assert_eq!(catalog.parameters().number("target margin").unwrap(), 0.25);
    }
}
