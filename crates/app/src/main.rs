//! Merges the oil tables under `data/` into `data/oils.json`.
//!
//! Takes no arguments. Paths and merge mode come from `soapdata.toml` in the
//! working directory when present. Logging follows `RUST_LOG` (default
//! `info`, which includes one line per matched oil).

use anyhow::Context;
use soapdata_import::{MergeConfig, MergeSummary};
use std::path::Path;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match run_from(Path::new(MergeConfig::DEFAULT_FILE)) {
        Ok(summary) => {
            tracing::info!(
                "Done: {} oils, {} matched, {} with defaults only",
                summary.records,
                summary.matched,
                summary.unmatched
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run_from(config_path: &Path) -> anyhow::Result<MergeSummary> {
    let config = MergeConfig::load(config_path)
        .with_context(|| format!("Failed to load {}", config_path.display()))?;
    soapdata_import::run(&config).with_context(|| {
        format!("Merge failed, {} left unchanged", config.output_path.display())
    })
}
