use serde::{Deserialize, Serialize};
use soapdata_core::{FattyAcidComposition, OilRecord, SaponificationInfo, UNKNOWN_SAP_VALUE};
use std::fmt;

use crate::csv::RawRow;
use crate::error::ImportError;
use crate::match_engine::{FuzzyMatcher, NameIndex};
use crate::rows::{CompositionRow, OilRow, QualityRow};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MergeStrategy {
    /// Drive from the base oil list and attach quality/composition data by
    /// fuzzy name match.
    #[default]
    FuzzyJoin,
    /// Drive from the quality table and look up the composition table by
    /// exact name; SAP coefficients come from the composition table.
    Positional,
}

impl fmt::Display for MergeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MergeStrategy::FuzzyJoin => write!(f, "fuzzy-join"),
            MergeStrategy::Positional => write!(f, "positional"),
        }
    }
}

impl std::str::FromStr for MergeStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fuzzy-join" | "fuzzy" => Ok(MergeStrategy::FuzzyJoin),
            "positional" => Ok(MergeStrategy::Positional),
            other => Err(format!("Unknown merge strategy: '{other}'")),
        }
    }
}

/// All source tables, decoded and held in memory before merging starts.
#[derive(Debug, Clone, Default)]
pub struct SourceTables {
    pub oils: Vec<OilRow>,
    pub quality: NameIndex<QualityRow>,
    pub composition: NameIndex<CompositionRow>,
}

impl SourceTables {
    /// Decode raw rows. Composition rows carry SAP columns only for the
    /// positional merge.
    pub fn decode(
        strategy: MergeStrategy,
        oils: &[RawRow],
        quality: &[RawRow],
        composition: &[RawRow],
    ) -> Result<Self, ImportError> {
        let with_sap = strategy == MergeStrategy::Positional;
        Ok(SourceTables {
            oils: oils.iter().map(OilRow::decode).collect::<Result<_, _>>()?,
            quality: quality.iter().map(QualityRow::decode).collect::<Result<_, _>>()?,
            composition: composition
                .iter()
                .map(|row| CompositionRow::decode(row, with_sap))
                .collect::<Result<_, _>>()?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MergeSummary {
    pub records: usize,
    /// Records that received data from a second table.
    pub matched: usize,
    pub unmatched: usize,
}

#[derive(Debug, Clone)]
pub struct MergeOutcome {
    pub records: Vec<OilRecord>,
    pub summary: MergeSummary,
}

pub fn merge(strategy: MergeStrategy, tables: &SourceTables) -> MergeOutcome {
    let (records, matched) = match strategy {
        MergeStrategy::FuzzyJoin => fuzzy_join(tables),
        MergeStrategy::Positional => positional(tables),
    };
    let summary = MergeSummary {
        records: records.len(),
        matched,
        unmatched: records.len() - matched,
    };
    MergeOutcome { records, summary }
}

fn fuzzy_join(tables: &SourceTables) -> (Vec<OilRecord>, usize) {
    let matcher = FuzzyMatcher::new(&tables.quality);
    let mut matched = 0;

    let records = tables
        .oils
        .iter()
        .map(|oil| {
            let mut sap = SaponificationInfo::new(&oil.sap_value, oil.naoh, oil.koh);
            let mut composition = FattyAcidComposition::zero();
            let mut hit = false;

            // Every match overwrites the previous one; a match without a
            // composition row leaves the earlier composition in place.
            for (key, quality) in matcher.matches(&oil.name) {
                tracing::info!(oil = %oil.name, matched = %key, "quality match");
                sap = sap.with_quality(quality.iodine, quality.ins);
                if let Some(comp) = tables.composition.get(key) {
                    composition = comp.composition;
                }
                hit = true;
            }

            if hit {
                matched += 1;
            }
            OilRecord::new(&oil.name, sap).with_composition(composition)
        })
        .collect();

    (records, matched)
}

fn positional(tables: &SourceTables) -> (Vec<OilRecord>, usize) {
    let mut matched = 0;

    let records = tables
        .quality
        .iter()
        .map(|(name, quality)| {
            let base = SaponificationInfo::new(UNKNOWN_SAP_VALUE, 0.0, 0.0)
                .with_quality(quality.iodine, quality.ins);

            match tables.composition.get(name) {
                Some(comp) => {
                    tracing::info!(oil = %name, "composition match");
                    matched += 1;
                    let sap = match comp.sap {
                        Some(cols) => SaponificationInfo {
                            naoh: cols.naoh,
                            koh: cols.koh,
                            ..base
                        },
                        None => base,
                    };
                    OilRecord::new(name, sap).with_composition(comp.composition)
                }
                None => OilRecord::new(name, base),
            }
        })
        .collect();

    (records, matched)
}
