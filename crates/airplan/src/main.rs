use std::path::PathBuf;

use clap::{Parser, Subcommand};

use airplan_core::evaluate::{
    EvalOptions, InvalidDevicePolicy, cost_analysis, synoptic_analysis,
};
use airplan_core::sweep::sweep_cost_analysis;

mod data;
mod format;
mod logging;
mod report;

use data::load_catalog;
use logging::init_logging;

#[derive(Parser, Debug)]
#[command(name = "airplan")]
#[command(about = "Sizing, cost and noise analysis for air cleaning devices")]
struct Args {
    /// Path to a YAML catalog file (default: the built-in catalog)
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Args, Debug)]
struct EvalFlags {
    /// Room volume level
    #[arg(short, long, default_value = "medium")]
    volume: String,

    /// Target air quality level
    #[arg(short, long, default_value = "good")]
    quality: String,

    /// Manufacturer to leave out of the tables (repeatable)
    #[arg(long = "exclude", value_name = "MANUFACTURER")]
    exclude: Vec<String>,

    /// Drop invalid device records with a warning instead of failing
    #[arg(long)]
    skip_invalid: bool,
}

impl EvalFlags {
    fn options(&self) -> EvalOptions {
        EvalOptions {
            exclude_manufacturers: self.exclude.clone(),
            on_invalid: if self.skip_invalid {
                InvalidDevicePolicy::Skip
            } else {
                InvalidDevicePolicy::Abort
            },
            ..Default::default()
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Cost and noise table for one room scenario
    Scenario {
        #[command(flatten)]
        flags: EvalFlags,
    },
    /// Cost-efficiency trade-off table across the catalog
    Synoptic {
        #[command(flatten)]
        flags: EvalFlags,
    },
    /// Pre-generate every scenario table plus the synoptic overview as JSON
    /// artifacts for the dashboard
    Sweep {
        /// Output directory for the artifact files
        #[arg(short, long, default_value = "products")]
        out: PathBuf,

        /// Volume and quality select the synoptic artifact's frame
        #[command(flatten)]
        flags: EvalFlags,
    },
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    init_logging(&args.log_level)?;

    let catalog = load_catalog(args.catalog.as_deref())?;
    tracing::info!("catalog loaded with {} devices", catalog.devices().len());

    match args.command {
        Command::Scenario { flags } => {
            let table = cost_analysis(&catalog, &flags.volume, &flags.quality, &flags.options())?;
            report::warn_skipped(&table.skipped);
            print!("{}", report::render_scenario(&table, &catalog));
        }
        Command::Synoptic { flags } => {
            let table =
                synoptic_analysis(&catalog, &flags.volume, &flags.quality, &flags.options())?;
            report::warn_skipped(&table.skipped);
            print!("{}", report::render_synoptic(&table, &catalog));
        }
        Command::Sweep { out, flags } => {
            let options = flags.options();
            let tables = sweep_cost_analysis(&catalog, &options)?;
            for table in &tables {
                report::warn_skipped(&table.skipped);
            }
            let paths = report::write_sweep_artifacts(&out, &catalog, &tables)?;

            let synoptic = synoptic_analysis(&catalog, &flags.volume, &flags.quality, &options)?;
            report::warn_skipped(&synoptic.skipped);
            let synoptic_path = report::write_synoptic_artifact(&out, &synoptic)?;

            tracing::info!("wrote {} artifacts to {}", paths.len() + 1, out.display());
            println!(
                "Wrote {} scenario tables and {} to {}",
                paths.len(),
                synoptic_path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default(),
                out.display()
            );
        }
    }

    Ok(())
}
