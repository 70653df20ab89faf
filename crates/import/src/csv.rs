use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::ImportError;
use crate::merge::MergeStrategy;

/// Layout of one `;`-delimited source table.
#[derive(Debug, Clone)]
pub struct TableProfile {
    pub name: String,
    pub delimiter: String,
    pub has_header: bool,
    /// Rows with fewer fields than this are rejected as malformed.
    pub min_columns: usize,
}

impl Default for TableProfile {
    fn default() -> Self {
        Self {
            name: "table".to_string(),
            delimiter: ";".to_string(),
            has_header: true,
            min_columns: 1,
        }
    }
}

impl TableProfile {
    /// Base oil list: `name;sap;NaOH;KOH;...`, no header row.
    pub fn oils() -> Self {
        Self {
            name: "oils".to_string(),
            has_header: false,
            min_columns: 4,
            ..Self::default()
        }
    }

    /// Quality table: name at 0, Iodine at 6, INS at 7.
    pub fn quality() -> Self {
        Self {
            name: "quality".to_string(),
            min_columns: 8,
            ..Self::default()
        }
    }

    /// Composition table: name, eight fatty acids, and for the positional
    /// merge two trailing NaOH/KOH SAP columns.
    pub fn composition(strategy: MergeStrategy) -> Self {
        let min_columns = match strategy {
            MergeStrategy::FuzzyJoin => 9,
            MergeStrategy::Positional => 11,
        };
        Self {
            name: "composition".to_string(),
            min_columns,
            ..Self::default()
        }
    }

    fn delimiter_byte(&self) -> u8 {
        self.delimiter.as_bytes().first().copied().unwrap_or(b';')
    }
}

/// A data row split into fields, with the source line for diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRow {
    pub line: u64,
    pub fields: Vec<String>,
}

impl RawRow {
    pub fn get(&self, col: usize) -> Option<&str> {
        self.fields.get(col).map(String::as_str)
    }
}

pub struct TableReader;

impl TableReader {
    pub fn parse_profile<R: Read>(
        reader: &mut csv::Reader<R>,
        profile: &TableProfile,
    ) -> Result<Vec<RawRow>, ImportError> {
        let mut rows = Vec::new();

        for result in reader.records() {
            let record = result?;

            let line = record.position().map(|p| p.line()).unwrap_or_default();
            let fields: Vec<String> = record.iter().map(|s| s.to_string()).collect();

            if fields.len() < profile.min_columns {
                return Err(ImportError::MalformedRow {
                    table: profile.name.clone(),
                    line,
                    reason: format!(
                        "expected at least {} columns, found {}",
                        profile.min_columns,
                        fields.len()
                    ),
                });
            }

            rows.push(RawRow { line, fields });
        }

        Ok(rows)
    }
}

pub fn parse_table<R: Read>(data: R, profile: &TableProfile) -> Result<Vec<RawRow>, ImportError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(profile.has_header)
        .delimiter(profile.delimiter_byte())
        .flexible(true)
        .from_reader(data);

    TableReader::parse_profile(&mut reader, profile)
}

pub fn read_table(path: &Path, profile: &TableProfile) -> Result<Vec<RawRow>, ImportError> {
    if !path.exists() {
        return Err(ImportError::MissingFile {
            table: profile.name.clone(),
            path: path.to_path_buf(),
        });
    }
    let file = File::open(path)?;
    parse_table(file, profile)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oils_table_has_no_header() {
        let data = b"'Olive Oil';0.134;0.134;0.19\n'Coconut Oil';0.183;0.183;0.257\n";
        let rows = parse_table(&data[..], &TableProfile::oils()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get(0), Some("'Olive Oil'"));
        assert_eq!(rows[1].get(3), Some("0.257"));
    }

    #[test]
    fn header_row_is_skipped() {
        let data = b"Oil;a;b;c;d;e;Iodine;INS\nOlive Oil;1;2;3;4;5;85;146\n";
        let rows = parse_table(&data[..], &TableProfile::quality()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get(0), Some("Olive Oil"));
        assert_eq!(rows[0].line, 2);
    }

    #[test]
    fn empty_lines_are_skipped() {
        let data = b"Olive;0.134;0.134;0.19\n\nLard;0.138;0.138;0.194\n";
        let rows = parse_table(&data[..], &TableProfile::oils()).unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn whitespace_only_line_is_malformed() {
        let data = b"Olive;0.134;0.134;0.19\n   \nLard;0.138;0.138;0.194\n";
        let err = parse_table(&data[..], &TableProfile::oils()).unwrap_err();
        assert!(matches!(err, ImportError::MalformedRow { line: 2, .. }));
    }

    #[test]
    fn short_row_is_malformed() {
        let data = b"Olive;0.134;0.134\n";
        let err = parse_table(&data[..], &TableProfile::oils()).unwrap_err();
        assert!(matches!(
            err,
            ImportError::MalformedRow { ref table, line: 1, .. } if table == "oils"
        ));
    }

    #[test]
    fn positional_composition_needs_sap_columns() {
        let data = b"Oil;La;My;Pa;St;Ri;Ol;Li;Ln\nOlive;0;0;13;3;0;71;10;1\n";
        let fuzzy = TableProfile::composition(MergeStrategy::FuzzyJoin);
        let positional = TableProfile::composition(MergeStrategy::Positional);
        assert!(parse_table(&data[..], &fuzzy).is_ok());
        assert!(parse_table(&data[..], &positional).is_err());
    }

    #[test]
    fn read_table_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.csv");
        let err = read_table(&path, &TableProfile::oils()).unwrap_err();
        assert!(matches!(err, ImportError::MissingFile { .. }));
    }
}
