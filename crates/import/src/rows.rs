use soapdata_core::{FattyAcid, FattyAcidComposition};

use crate::csv::RawRow;
use crate::error::ImportError;

/// Strip the single quotes some tables wrap names in.
pub fn clean_name(s: &str) -> String {
    s.trim_matches('\'').to_string()
}

/// Remove every whitespace character, so `0.128 - 0.135` becomes `0.128-0.135`.
pub fn clean_sap_value(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

pub(crate) fn parse_number(row: &RawRow, table: &str, col: usize) -> Result<f64, ImportError> {
    let field = field(row, table, col)?;
    let value: f64 = field.trim().parse().map_err(|_| ImportError::MalformedRow {
        table: table.to_string(),
        line: row.line,
        reason: format!("column {col}: '{field}' is not a number"),
    })?;
    if !value.is_finite() {
        return Err(ImportError::MalformedRow {
            table: table.to_string(),
            line: row.line,
            reason: format!("column {col}: '{field}' is not a finite number"),
        });
    }
    Ok(value)
}

fn field<'a>(row: &'a RawRow, table: &str, col: usize) -> Result<&'a str, ImportError> {
    row.get(col).ok_or_else(|| ImportError::MalformedRow {
        table: table.to_string(),
        line: row.line,
        reason: format!("missing column {col}"),
    })
}

/// A row of the base oil list.
#[derive(Debug, Clone, PartialEq)]
pub struct OilRow {
    pub name: String,
    pub sap_value: String,
    pub naoh: f64,
    pub koh: f64,
}

impl OilRow {
    pub fn decode(row: &RawRow) -> Result<Self, ImportError> {
        const TABLE: &str = "oils";
        Ok(OilRow {
            name: clean_name(field(row, TABLE, 0)?),
            sap_value: clean_sap_value(field(row, TABLE, 1)?),
            naoh: parse_number(row, TABLE, 2)?,
            koh: parse_number(row, TABLE, 3)?,
        })
    }
}

/// Iodine and INS indices for one oil of the quality table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QualityRow {
    pub iodine: f64,
    pub ins: f64,
}

impl QualityRow {
    pub const IODINE_COLUMN: usize = 6;
    pub const INS_COLUMN: usize = 7;

    /// Returns the cleaned oil name together with its indices.
    pub fn decode(row: &RawRow) -> Result<(String, Self), ImportError> {
        const TABLE: &str = "quality";
        let name = clean_name(field(row, TABLE, 0)?);
        let quality = QualityRow {
            iodine: parse_number(row, TABLE, Self::IODINE_COLUMN)?,
            ins: parse_number(row, TABLE, Self::INS_COLUMN)?,
        };
        Ok((name, quality))
    }
}

/// Fatty acid breakdown of one oil, optionally with the SAP coefficients the
/// extended composition table carries in columns 9 and 10.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompositionRow {
    pub composition: FattyAcidComposition,
    pub sap: Option<SapColumns>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SapColumns {
    pub naoh: f64,
    pub koh: f64,
}

impl CompositionRow {
    pub const NAOH_SAP_COLUMN: usize = 9;
    pub const KOH_SAP_COLUMN: usize = 10;

    pub fn decode(row: &RawRow, with_sap: bool) -> Result<(String, Self), ImportError> {
        const TABLE: &str = "composition";
        let name = clean_name(field(row, TABLE, 0)?);

        let mut composition = FattyAcidComposition::zero();
        for acid in FattyAcid::ALL {
            composition.set(acid, parse_number(row, TABLE, acid.index() + 1)?);
        }

        let sap = if with_sap {
            Some(SapColumns {
                naoh: parse_number(row, TABLE, Self::NAOH_SAP_COLUMN)?,
                koh: parse_number(row, TABLE, Self::KOH_SAP_COLUMN)?,
            })
        } else {
            None
        };

        Ok((name, CompositionRow { composition, sap }))
    }
}
