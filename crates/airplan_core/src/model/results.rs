//! Evaluation results and output tables
//!
//! Contains the derived per-device metrics and the two table shapes handed to
//! the rendering/export layer. Everything here is computed fresh per request
//! and never mutated after construction.

use serde::Serialize;

use crate::error::DataError;

use super::devices::DeviceKey;
use super::profiles::ProfileLevel;

/// Derived metrics for one device under one (volume, quality) scenario
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeviceEvaluation {
    pub device: DeviceKey,
    /// Smallest unit count meeting or exceeding the target ACH
    pub units: u32,
    /// `units * price`
    pub upfront_total: f64,
    /// `units * running_cost`, per annum
    pub running_total: f64,
    /// Decibel level of `units` identical sources running together
    pub combined_noise: f64,
    /// `units * airflow / volume`; >= target by construction
    pub achieved_ach: f64,
}

/// A device the caller's skip policy dropped, with the error it raised
#[derive(Debug, Clone)]
pub struct SkippedDevice {
    pub device: DeviceKey,
    pub reason: DataError,
}

/// One row of the full-scenario cost/noise table
#[derive(Debug, Clone, Serialize)]
pub struct CostRow {
    pub device: DeviceKey,
    /// Composite display label, `"{manufacturer} {model} (xN)"`; the
    /// multiplier suffix is suppressed at one unit
    pub label: String,
    pub units: u32,
    pub upfront_total: f64,
    pub running_total: f64,
    pub combined_noise: f64,
}

/// Full-scenario table: every admitted device evaluated against one
/// (volume, quality) pair, sorted ascending by upfront cost
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioTable {
    pub volume: ProfileLevel,
    pub quality: ProfileLevel,
    pub rows: Vec<CostRow>,
    /// Devices dropped under `InvalidDevicePolicy::Skip`; the caller decides
    /// whether and how to report these
    #[serde(skip)]
    pub skipped: Vec<SkippedDevice>,
}

/// One row of the cross-scenario (synoptic) table
#[derive(Debug, Clone, Serialize)]
pub struct SynopticRow {
    pub device: DeviceKey,
    /// Air changes per annualized dollar; higher is better
    pub cost_efficiency: f64,
    pub achieved_ach: f64,
    pub combined_noise: f64,
}

/// Cross-scenario table: single-unit trade-off space at one volume level.
/// `target_ach` is the quality level the renderer draws as a reference line.
#[derive(Debug, Clone, Serialize)]
pub struct SynopticTable {
    pub volume: ProfileLevel,
    pub target_ach: f64,
    pub rows: Vec<SynopticRow>,
    #[serde(skip)]
    pub skipped: Vec<SkippedDevice>,
}
