use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use soapdata_core::OilRecord;
use std::path::{Path, PathBuf};

use crate::error::ImportError;

/// Render records as a JSON array indented by four spaces.
pub fn to_json(records: &[OilRecord]) -> Result<Vec<u8>, ImportError> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    records.serialize(&mut ser)?;
    Ok(buf)
}

/// Write the document to `path`, replacing any existing file.
///
/// The JSON is fully rendered before the filesystem is touched and lands via
/// a sibling temp file plus rename, so a failed run never leaves a truncated
/// document behind.
pub fn write_json(path: &Path, records: &[OilRecord]) -> Result<(), ImportError> {
    let contents = to_json(records)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let tmp = temp_path(path);
    if let Err(e) = std::fs::write(&tmp, &contents).and_then(|_| std::fs::rename(&tmp, path)) {
        let _ = std::fs::remove_file(&tmp);
        return Err(e.into());
    }
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use soapdata_core::SaponificationInfo;

    fn olive() -> OilRecord {
        OilRecord::new("Olive Oil", SaponificationInfo::new("0.134", 0.134, 0.19))
    }

    #[test]
    fn empty_document() {
        assert_eq!(to_json(&[]).unwrap(), b"[]");
    }

    #[test]
    fn four_space_indent() {
        let text = String::from_utf8(to_json(&[olive()]).unwrap()).unwrap();
        let expected = r#"[
    {
        "name": "Olive Oil",
        "saponification": {
            "SAP-value": "0.134",
            "NaOH": 0.134,
            "KOH": 0.19,
            "Iodine": 0.0,
            "INS": 0.0
        },
        "fatty-acid-composition": {
            "Lauric": 0.0,
            "Myristic": 0.0,
            "Palmitic": 0.0,
            "Stearic": 0.0,
            "Ricinoleic": 0.0,
            "Oleic": 0.0,
            "Linoleic": 0.0,
            "Linolenic": 0.0
        }
    }
]"#;
        assert_eq!(text, expected);
    }

    #[test]
    fn write_json_creates_parent_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("oils.json");

        write_json(&path, &[olive(), olive()]).unwrap();
        write_json(&path, &[olive()]).unwrap();

        let value: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 1);
        assert!(!temp_path(&path).exists());
    }
}
