use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Missing {table} table: {}", path.display())]
    MissingFile { table: String, path: PathBuf },
    #[error("Malformed row in {table} table at line {line}: {reason}")]
    MalformedRow {
        table: String,
        line: u64,
        reason: String,
    },
    #[error("The {strategy} merge needs the {table} table, but no path is configured")]
    MissingTable { strategy: String, table: String },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}
