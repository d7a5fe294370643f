//! Air-cleaner sizing, cost and noise analysis library
//!
//! This crate answers, for each device in a catalog and each room scenario:
//! how many units are needed, what they cost upfront and per year, how loud
//! the installation is, and how cost-efficient it is at producing clean air.
//! It supports:
//! - Unit sizing against a target air-changes-per-hour for a room volume
//! - Perceptually correct decibel combination for multi-unit installations
//! - Cost aggregation and amortized cost-efficiency ranking
//! - Per-scenario cost/noise tables and a cross-scenario trade-off table
//! - Batch sweeps over the full volume x quality cross-product
//!
//! The result tables are the sole interface to the (external) chart and
//! dashboard rendering layer; nothing here performs I/O.
//!
//! ```ignore
//! use airplan_core::{Catalog, EvalOptions, cost_analysis};
//!
//! let table = cost_analysis(&catalog, "medium", "good", &EvalOptions::default())?;
//! for row in &table.rows {
//!     println!("{}: {} upfront", row.label, row.upfront_total);
//! }
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod catalog;
pub mod error;
pub mod evaluate;
pub mod sweep;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use catalog::{Catalog, ParameterValue, Parameters};
pub use error::{DataError, EvaluateError, ParameterError, ProfileError};
pub use evaluate::{EvalOptions, InvalidDevicePolicy, cost_analysis, synoptic_analysis};
pub use sweep::sweep_cost_analysis;
