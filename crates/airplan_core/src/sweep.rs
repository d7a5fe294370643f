//! Batch sweep over every (volume, quality) scenario pair
//!
//! Purely compositional: one `cost_analysis` per pair, volume-major, used to
//! pre-generate all dashboard variants. Evaluation is a pure function of the
//! immutable catalog, so pairs fan out across threads with no coordination;
//! output order is identical with and without the `parallel` feature.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::catalog::Catalog;
use crate::error::Result;
use crate::evaluate::{EvalOptions, cost_analysis};
use crate::model::ScenarioTable;

/// Every (volume, quality) name pair in sweep order: volume-major, levels in
/// catalog order. The table at sweep index `i` belongs to the pair at `i`.
pub fn scenario_pairs(catalog: &Catalog) -> Vec<(String, String)> {
    catalog
        .volume_profiles()
        .names()
        .flat_map(|v| {
            catalog
                .quality_profiles()
                .names()
                .map(move |q| (v.to_string(), q.to_string()))
        })
        .collect()
}

/// Evaluate the full volume x quality cross-product, one full-scenario table
/// per pair. A failing pair fails the sweep; use
/// `InvalidDevicePolicy::Skip` in the options to drop bad devices instead.
pub fn sweep_cost_analysis(catalog: &Catalog, options: &EvalOptions) -> Result<Vec<ScenarioTable>> {
    let pairs = scenario_pairs(catalog);

    #[cfg(feature = "parallel")]
    let tables: Result<Vec<ScenarioTable>> = pairs
        .par_iter()
        .map(|(vol, qual)| cost_analysis(catalog, vol, qual, options))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let tables: Result<Vec<ScenarioTable>> = pairs
        .iter()
        .map(|(vol, qual)| cost_analysis(catalog, vol, qual, options))
        .collect();

    tables
}
