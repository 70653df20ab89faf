use std::path::Path;

use crate::config::MergeConfig;
use crate::csv::{read_table, RawRow, TableProfile};
use crate::error::ImportError;
use crate::export;
use crate::merge::{merge, MergeStrategy, MergeSummary, SourceTables};

/// Read and decode every table the configured strategy needs.
pub fn load_tables(config: &MergeConfig) -> Result<SourceTables, ImportError> {
    let strategy = config.strategy;

    let oils = match strategy {
        MergeStrategy::FuzzyJoin => read_logged(&config.oils_path, &TableProfile::oils())?,
        MergeStrategy::Positional => Vec::new(),
    };

    let quality = match (&config.quality_path, strategy) {
        (Some(path), _) => read_logged(path, &TableProfile::quality())?,
        (None, MergeStrategy::Positional) => {
            return Err(ImportError::MissingTable {
                strategy: strategy.to_string(),
                table: "quality".to_string(),
            })
        }
        (None, MergeStrategy::FuzzyJoin) => Vec::new(),
    };

    let composition = match &config.composition_path {
        Some(path) => read_logged(path, &TableProfile::composition(strategy))?,
        None => Vec::new(),
    };

    let tables = SourceTables::decode(strategy, &oils, &quality, &composition)?;
    if tables.quality.is_empty() {
        tracing::info!("No quality data, Iodine and INS stay at 0.0");
    }
    tracing::debug!(
        oils = tables.oils.len(),
        quality = tables.quality.len(),
        composition = tables.composition.len(),
        "Tables indexed"
    );
    Ok(tables)
}

fn read_logged(path: &Path, profile: &TableProfile) -> Result<Vec<RawRow>, ImportError> {
    let rows = read_table(path, profile)?;
    tracing::debug!(table = %profile.name, rows = rows.len(), "Read {}", path.display());
    Ok(rows)
}

/// Load, merge and write in one go. The output file is only touched once
/// every table has been read and merged without error.
pub fn run(config: &MergeConfig) -> Result<MergeSummary, ImportError> {
    tracing::info!(
        strategy = %config.strategy,
        output = %config.output_path.display(),
        "Merging oil tables"
    );

    let tables = load_tables(config)?;
    let outcome = merge(config.strategy, &tables);
    export::write_json(&config.output_path, &outcome.records)?;

    let summary = outcome.summary;
    tracing::info!(
        records = summary.records,
        matched = summary.matched,
        unmatched = summary.unmatched,
        "Wrote {}",
        config.output_path.display()
    );
    Ok(summary)
}
