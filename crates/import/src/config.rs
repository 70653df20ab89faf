use serde::{Deserialize, Deserializer, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ImportError;
use crate::merge::MergeStrategy;

/// Input tables, output document and merge mode for one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeConfig {
    pub strategy: MergeStrategy,
    pub oils_path: PathBuf,
    /// `None` means the table is not available and its index stays empty.
    /// In TOML an empty string disables the table.
    #[serde(deserialize_with = "optional_path")]
    pub quality_path: Option<PathBuf>,
    #[serde(deserialize_with = "optional_path")]
    pub composition_path: Option<PathBuf>,
    pub output_path: PathBuf,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            strategy: MergeStrategy::FuzzyJoin,
            oils_path: PathBuf::from("data/oils.csv"),
            quality_path: Some(PathBuf::from("data/oil_quality.csv")),
            composition_path: Some(PathBuf::from("data/oil_composition.csv")),
            output_path: PathBuf::from("data/oils.json"),
        }
    }
}

impl MergeConfig {
    pub const DEFAULT_FILE: &'static str = "soapdata.toml";

    pub fn from_toml(toml_content: &str) -> Result<Self, ImportError> {
        Ok(toml::from_str(toml_content)?)
    }

    /// Read `path` if it exists, otherwise fall back to the built-in layout.
    pub fn load(path: &Path) -> Result<Self, ImportError> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Resolve every relative path against `base`.
    pub fn relative_to(mut self, base: &Path) -> Self {
        self.oils_path = base.join(&self.oils_path);
        self.quality_path = self.quality_path.map(|p| base.join(p));
        self.composition_path = self.composition_path.map(|p| base.join(p));
        self.output_path = base.join(&self.output_path);
        self
    }
}

fn optional_path<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<PathBuf>, D::Error> {
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|s| !s.trim().is_empty()).map(PathBuf::from))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(MergeConfig::from_toml("").unwrap(), MergeConfig::default());
    }

    #[test]
    fn partial_toml_overrides() {
        let cfg = MergeConfig::from_toml(
            r#"
            strategy = "positional"
            output_path = "out/oils.json"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.strategy, MergeStrategy::Positional);
        assert_eq!(cfg.output_path, PathBuf::from("out/oils.json"));
        assert_eq!(cfg.oils_path, PathBuf::from("data/oils.csv"));
        assert!(cfg.quality_path.is_some());
    }

    #[test]
    fn empty_string_disables_table() {
        let cfg = MergeConfig::from_toml(r#"composition_path = """#).unwrap();
        assert_eq!(cfg.composition_path, None);
        assert!(cfg.quality_path.is_some());
    }

    #[test]
    fn unknown_strategy_is_rejected() {
        let err = MergeConfig::from_toml(r#"strategy = "best-match""#).unwrap_err();
        assert!(matches!(err, ImportError::Config(_)));
    }

    #[test]
    fn load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = MergeConfig::load(&dir.path().join(MergeConfig::DEFAULT_FILE)).unwrap();
        assert_eq!(cfg, MergeConfig::default());
    }

    #[test]
    fn relative_to_joins_all_paths() {
        let cfg = MergeConfig::default().relative_to(Path::new("/srv/soap"));
        assert_eq!(cfg.oils_path, PathBuf::from("/srv/soap/data/oils.csv"));
        assert_eq!(cfg.output_path, PathBuf::from("/srv/soap/data/oils.json"));
        assert_eq!(
            cfg.quality_path,
            Some(PathBuf::from("/srv/soap/data/oil_quality.csv"))
        );
    }
}
