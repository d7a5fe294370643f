//! Table rendering and artifact export
//!
//! The result tables are the hand-off to the external chart/dashboard
//! renderer: `render_*` produce the human-readable text views, and the sweep
//! writes one JSON artifact per scenario pair, named
//! `<volume_index>_<quality_index>.json` the way the dashboard expects, plus
//! `synoptic.json` for the overview.

use std::fs;
use std::path::{Path, PathBuf};

use color_eyre::Result;
use color_eyre::eyre::WrapErr;

use airplan_core::catalog::Catalog;
use airplan_core::model::{ScenarioTable, SkippedDevice, SynopticTable};

use crate::format::{cost_label, format_db};

/// Log devices dropped under the skip policy. This is the caller half of the
/// invalid-device contract: the engine reports, the front-end warns.
pub fn warn_skipped(skipped: &[SkippedDevice]) {
    for s in skipped {
        tracing::warn!("skipping {}: {}", s.device, s.reason);
    }
}

/// Render the full-scenario cost/noise table as aligned text
pub fn render_scenario(table: &ScenarioTable, catalog: &Catalog) -> String {
    let mut out = format!(
        "Air cleaner costs: {} room ({} {}), {} air quality ({} {})\n\n",
        table.volume.name,
        table.volume.value,
        catalog.volume_profiles().unit,
        table.quality.name,
        table.quality.value,
        catalog.quality_profiles().unit,
    );

    let label_width = table
        .rows
        .iter()
        .map(|r| r.label.len())
        .max()
        .unwrap_or(0)
        .max("Device".len());

    out.push_str(&format!(
        "{:<label_width$}  {:>20}  {:>6}\n",
        "Device", "Cost", "Noise"
    ));
    for row in &table.rows {
        out.push_str(&format!(
            "{:<label_width$}  {:>20}  {:>6}\n",
            row.label,
            cost_label(row.upfront_total, row.running_total),
            format_db(row.combined_noise),
        ));
    }
    out
}

/// Render the cross-scenario trade-off table as aligned text
pub fn render_synoptic(table: &SynopticTable, catalog: &Catalog) -> String {
    let mut out = format!(
        "Air cleaners on the market: efficacy for a {} sized room ({} {}), target {} ACH\n\n",
        table.volume.name,
        table.volume.value,
        catalog.volume_profiles().unit,
        table.target_ach,
    );

    let label_width = table
        .rows
        .iter()
        .map(|r| r.device.to_string().len())
        .max()
        .unwrap_or(0)
        .max("Device".len());

    out.push_str(&format!(
        "{:<label_width$}  {:>10}  {:>6}  {:>6}\n",
        "Device", "ACH per $", "ACH", "Noise"
    ));
    for row in &table.rows {
        out.push_str(&format!(
            "{:<label_width$}  {:>10.4}  {:>6.2}  {:>6}\n",
            row.device.to_string(),
            row.cost_efficiency,
            row.achieved_ach,
            format_db(row.combined_noise),
        ));
    }
    out
}

/// Write one JSON artifact per swept scenario table. Tables arrive in sweep
/// order (volume-major), so the artifact for table `i` is
/// `<i / qualities>_<i % qualities>.json`.
pub fn write_sweep_artifacts(
    out_dir: &Path,
    catalog: &Catalog,
    tables: &[ScenarioTable],
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir)
        .wrap_err_with(|| format!("creating output directory {}", out_dir.display()))?;

    let quality_count = catalog.quality_profiles().len();
    let mut paths = Vec::with_capacity(tables.len());
    for (i, table) in tables.iter().enumerate() {
        let path = out_dir.join(format!("{}_{}.json", i / quality_count, i % quality_count));
        let json = serde_json::to_string_pretty(table)?;
        fs::write(&path, json).wrap_err_with(|| format!("writing {}", path.display()))?;
        tracing::debug!(
            "wrote {} ({} room, {} quality)",
            path.display(),
            table.volume.name,
            table.quality.name
        );
        paths.push(path);
    }
    Ok(paths)
}

/// Write the synoptic overview artifact
pub fn write_synoptic_artifact(out_dir: &Path, table: &SynopticTable) -> Result<PathBuf> {
    fs::create_dir_all(out_dir)
        .wrap_err_with(|| format!("creating output directory {}", out_dir.display()))?;
    let path = out_dir.join("synoptic.json");
    let json = serde_json::to_string_pretty(table)?;
    fs::write(&path, json).wrap_err_with(|| format!("writing {}", path.display()))?;
    Ok(path)
}
