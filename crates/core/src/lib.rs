pub mod fatty_acid;
pub mod oil;

pub use fatty_acid::{FattyAcid, FattyAcidComposition};
pub use oil::{OilRecord, SaponificationInfo, UNKNOWN_SAP_VALUE};
