use serde::Serialize;

use super::fatty_acid::FattyAcidComposition;

/// Placeholder SAP string used when no source column carries the raw value.
pub const UNKNOWN_SAP_VALUE: &str = "0-0";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SaponificationInfo {
    /// Raw SAP value as given by the source, whitespace removed. Not reparsed.
    #[serde(rename = "SAP-value")]
    pub sap_value: String,
    #[serde(rename = "NaOH")]
    pub naoh: f64,
    #[serde(rename = "KOH")]
    pub koh: f64,
    #[serde(rename = "Iodine")]
    pub iodine: f64,
    #[serde(rename = "INS")]
    pub ins: f64,
}

impl SaponificationInfo {
    pub fn new(sap_value: &str, naoh: f64, koh: f64) -> Self {
        SaponificationInfo {
            sap_value: sap_value.to_string(),
            naoh,
            koh,
            iodine: 0.0,
            ins: 0.0,
        }
    }

    pub fn with_quality(mut self, iodine: f64, ins: f64) -> Self {
        self.iodine = iodine;
        self.ins = ins;
        self
    }
}

/// One consolidated oil entry of the output document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OilRecord {
    pub name: String,
    pub saponification: SaponificationInfo,
    #[serde(rename = "fatty-acid-composition")]
    pub fatty_acid_composition: FattyAcidComposition,
}

impl OilRecord {
    pub fn new(name: &str, saponification: SaponificationInfo) -> Self {
        OilRecord {
            name: name.to_string(),
            saponification,
            fatty_acid_composition: FattyAcidComposition::zero(),
        }
    }

    pub fn with_composition(mut self, composition: FattyAcidComposition) -> Self {
        self.fatty_acid_composition = composition;
        self
    }
}
