mod devices;
mod profiles;
mod results;

pub use devices::{DeviceKey, DeviceSpec};
pub use profiles::{ProfileFamily, ProfileKind, ProfileLevel};
pub use results::{
    CostRow, DeviceEvaluation, ScenarioTable, SkippedDevice, SynopticRow, SynopticTable,
};
