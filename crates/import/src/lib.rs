pub mod config;
pub mod csv;
pub mod error;
pub mod export;
pub mod match_engine;
pub mod merge;
pub mod pipeline;
pub mod rows;

pub use config::MergeConfig;
pub use crate::csv::{RawRow, TableProfile};
pub use error::ImportError;
pub use match_engine::{names_match, FuzzyMatcher, NameIndex};
pub use merge::{merge, MergeOutcome, MergeStrategy, MergeSummary, SourceTables};
pub use pipeline::{load_tables, run};
pub use rows::{CompositionRow, OilRow, QualityRow};
