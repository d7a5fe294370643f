//! Scenario evaluation engine
//!
//! Pure functions of (device subset, volume level, quality level) into result
//! tables. No hidden state: everything an evaluation needs comes in through
//! the `Catalog` reference and the call arguments, so results are
//! deterministic and requests can run concurrently against a shared catalog.
//!
//! The one piece of non-obvious arithmetic lives in [`combined_noise`]:
//! decibels are a logarithmic measure of sound intensity, so `n` identical
//! sources combine by summing linear intensities, not by multiplying the
//! decibel figure.

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, NOMINAL_PERIOD};
use crate::error::{DataError, Result};
use crate::model::{
    CostRow, DeviceEvaluation, DeviceKey, DeviceSpec, ScenarioTable, SkippedDevice, SynopticRow,
    SynopticTable,
};

/// Caller policy for devices whose records fail validation.
///
/// The engine never decides this itself: `Abort` fails the whole table on the
/// first bad record, `Skip` drops the device into the table's `skipped` list
/// and carries on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InvalidDevicePolicy {
    #[default]
    Abort,
    Skip,
}

/// Caller-supplied filtering and policy for a table evaluation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EvalOptions {
    /// Manufacturers to leave out of the table entirely
    pub exclude_manufacturers: Vec<String>,
    /// Individual devices to leave out
    pub exclude_devices: Vec<DeviceKey>,
    pub on_invalid: InvalidDevicePolicy,
}

impl EvalOptions {
    fn admits(&self, device: &DeviceSpec) -> bool {
        !self
            .exclude_manufacturers
            .iter()
            .any(|m| *m == device.key.manufacturer)
            && !self.exclude_devices.contains(&device.key)
    }
}

/// Smallest count of identical devices meeting or exceeding `target_ach` in a
/// room of `volume`: `ceil(target * volume / airflow)`, minimum 1.
///
/// Callers must have validated `device.airflow > 0` first.
pub fn units_required(device: &DeviceSpec, volume: f64, target_ach: f64) -> u32 {
    let required_flow = target_ach * volume;
    ((required_flow / device.airflow).ceil() as u32).max(1)
}

/// Decibel level of `units` identical sources at `noise_level` dB running
/// simultaneously: `10 * log10(n * 10^(L / 10))`.
///
/// Two 60 dB sources combine to about 63 dB, never 120.
pub fn combined_noise(noise_level: f64, units: u32) -> f64 {
    10.0 * (f64::from(units) * 10f64.powf(noise_level / 10.0)).log10()
}

/// Air changes per annualized dollar: achieved ACH over the upfront cost
/// spread across the nominal period plus the annual running cost.
pub fn cost_efficiency(achieved_ach: f64, upfront: f64, running: f64, period_years: f64) -> f64 {
    achieved_ach / (upfront / period_years + running)
}

/// Evaluate one device against a room volume and target ACH.
///
/// Validates the record first; an invalid field fails the device rather than
/// producing a misleading zero-cost row. Cost aggregation is exactly linear
/// in the unit count.
pub fn evaluate_device(
    device: &DeviceSpec,
    volume: f64,
    target_ach: f64,
) -> std::result::Result<DeviceEvaluation, DataError> {
    device.validate()?;

    let units = units_required(device, volume, target_ach);
    Ok(DeviceEvaluation {
        device: device.key.clone(),
        units,
        upfront_total: f64::from(units) * device.price,
        running_total: f64::from(units) * device.running_cost,
        combined_noise: combined_noise(device.noise_level, units),
        achieved_ach: f64::from(units) * device.airflow / volume,
    })
}

fn display_label(device: &DeviceKey, units: u32) -> String {
    if units > 1 {
        format!("{device} (x{units})")
    } else {
        device.to_string()
    }
}

/// Build the full-scenario cost/noise table for one (volume, quality) pair.
///
/// Evaluates every catalog device the options admit, applies the caller's
/// invalid-device policy, and sorts rows ascending by upfront cost with
/// catalog order breaking ties.
pub fn cost_analysis(
    catalog: &Catalog,
    volume: &str,
    quality: &str,
    options: &EvalOptions,
) -> Result<ScenarioTable> {
    let vol = catalog.volume_profiles().level(volume)?;
    let qual = catalog.quality_profiles().level(quality)?;

    let mut rows = Vec::new();
    let mut skipped = Vec::new();
    for device in catalog.devices().iter().filter(|d| options.admits(d)) {
        match evaluate_device(device, vol.value, qual.value) {
            Ok(eval) => rows.push(CostRow {
                label: display_label(&eval.device, eval.units),
                device: eval.device,
                units: eval.units,
                upfront_total: eval.upfront_total,
                running_total: eval.running_total,
                combined_noise: eval.combined_noise,
            }),
            Err(reason) => match options.on_invalid {
                InvalidDevicePolicy::Abort => return Err(reason.into()),
                InvalidDevicePolicy::Skip => skipped.push(SkippedDevice {
                    device: device.key.clone(),
                    reason,
                }),
            },
        }
    }

    // Stable sort: equal upfront costs keep natural catalog order
    rows.sort_by(|a, b| a.upfront_total.total_cmp(&b.upfront_total));

    Ok(ScenarioTable {
        volume: vol.clone(),
        quality: qual.clone(),
        rows,
        skipped,
    })
}

/// Build the cross-scenario trade-off table at one volume level.
///
/// Each admitted device is taken as a single unit: achieved ACH is what one
/// unit delivers in the room, cost efficiency divides that by the annualized
/// total cost, and noise goes through the same combination rule with n = 1.
/// The quality level is carried on the table only as the renderer's reference
/// line, not used for sizing.
pub fn synoptic_analysis(
    catalog: &Catalog,
    volume: &str,
    quality: &str,
    options: &EvalOptions,
) -> Result<SynopticTable> {
    let vol = catalog.volume_profiles().level(volume)?;
    let target_ach = catalog.quality_profiles().level(quality)?.value;
    let period = catalog.parameters().number(NOMINAL_PERIOD)?;

    let mut rows = Vec::new();
    let mut skipped = Vec::new();
    for device in catalog.devices().iter().filter(|d| options.admits(d)) {
        if let Err(reason) = device.validate() {
            match options.on_invalid {
                InvalidDevicePolicy::Abort => return Err(reason.into()),
                InvalidDevicePolicy::Skip => {
                    skipped.push(SkippedDevice {
                        device: device.key.clone(),
                        reason,
                    });
                    continue;
                }
            }
        }

        let achieved_ach = device.airflow / vol.value;
        rows.push(SynopticRow {
            device: device.key.clone(),
            cost_efficiency: cost_efficiency(
                achieved_ach,
                device.price,
                device.running_cost,
                period,
            ),
            achieved_ach,
            combined_noise: combined_noise(device.noise_level, 1),
        });
    }

    Ok(SynopticTable {
        volume: vol.clone(),
        target_ach,
        rows,
        skipped,
    })
}
