use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FattyAcid {
    Lauric,
    Myristic,
    Palmitic,
    Stearic,
    Ricinoleic,
    Oleic,
    Linoleic,
    Linolenic,
}

impl FattyAcid {
    /// Declared order. Composition table columns 1..=8 follow it.
    pub const ALL: [FattyAcid; 8] = [
        FattyAcid::Lauric,
        FattyAcid::Myristic,
        FattyAcid::Palmitic,
        FattyAcid::Stearic,
        FattyAcid::Ricinoleic,
        FattyAcid::Oleic,
        FattyAcid::Linoleic,
        FattyAcid::Linolenic,
    ];

    pub fn index(self) -> usize {
        match self {
            FattyAcid::Lauric => 0,
            FattyAcid::Myristic => 1,
            FattyAcid::Palmitic => 2,
            FattyAcid::Stearic => 3,
            FattyAcid::Ricinoleic => 4,
            FattyAcid::Oleic => 5,
            FattyAcid::Linoleic => 6,
            FattyAcid::Linolenic => 7,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FattyAcid::Lauric => "Lauric",
            FattyAcid::Myristic => "Myristic",
            FattyAcid::Palmitic => "Palmitic",
            FattyAcid::Stearic => "Stearic",
            FattyAcid::Ricinoleic => "Ricinoleic",
            FattyAcid::Oleic => "Oleic",
            FattyAcid::Linoleic => "Linoleic",
            FattyAcid::Linolenic => "Linolenic",
        }
    }
}

impl fmt::Display for FattyAcid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for FattyAcid {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FattyAcid::ALL
            .into_iter()
            .find(|acid| acid.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown fatty acid: '{s}'"))
    }
}

/// Percentages of each fatty acid in an oil. Always carries all eight keys;
/// anything not supplied by a source table stays at 0.0.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FattyAcidComposition([f64; 8]);

impl FattyAcidComposition {
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn get(&self, acid: FattyAcid) -> f64 {
        self.0[acid.index()]
    }

    pub fn set(&mut self, acid: FattyAcid, value: f64) {
        self.0[acid.index()] = value;
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|v| *v == 0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (FattyAcid, f64)> + '_ {
        FattyAcid::ALL.into_iter().map(move |acid| (acid, self.get(acid)))
    }
}

impl Serialize for FattyAcidComposition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(FattyAcid::ALL.len()))?;
        for (acid, value) in self.iter() {
            map.serialize_entry(acid.name(), &value)?;
        }
        map.end()
    }
}
