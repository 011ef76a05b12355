//! CSV schema validation and row mapping.
//!
//! The source format is a plain CSV sheet with one header row. Sheets are
//! maintained by hand, so two normalizations happen here: header names are
//! trimmed of incidental whitespace before any lookup, and empty cells map to
//! empty strings rather than an error. Everything else about a bad sheet is
//! surfaced as [`LoadError::Malformed`] with the offending detail.

use std::io::Read;

use csv::{ReaderBuilder, StringRecord, Trim};
use serde::Deserialize;

use crate::error::LoadError;
use crate::record::SchemeRecord;

/// Columns every catalog sheet must carry, after header trimming.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "Scheme_Name",
    "Category",
    "Description",
    "Who_Can_Apply",
    "Benefits",
    "Link",
];

/// One source row before it becomes a [`SchemeRecord`].
///
/// Kept separate so the CSV column names stay a loader concern; the public
/// record type serializes under its own field names.
#[derive(Debug, Deserialize)]
struct RawSchemeRow {
    #[serde(rename = "Scheme_Name")]
    name: String,
    #[serde(rename = "Category")]
    category: String,
    #[serde(rename = "Description")]
    description: String,
    #[serde(rename = "Who_Can_Apply")]
    eligibility: String,
    #[serde(rename = "Benefits")]
    benefits: String,
    #[serde(rename = "Link")]
    apply_link: String,
}

impl RawSchemeRow {
    fn into_record(self) -> SchemeRecord {
        SchemeRecord {
            name: self.name,
            category: self.category,
            description: self.description,
            eligibility: self.eligibility,
            benefits: self.benefits,
            apply_link: self.apply_link,
        }
    }
}

fn validate_headers(headers: &StringRecord) -> Result<(), LoadError> {
    for required in REQUIRED_COLUMNS {
        if !headers.iter().any(|header| header == required) {
            return Err(LoadError::Malformed(format!(
                "missing required column: {required}"
            )));
        }
    }
    Ok(())
}

/// Read every row from `reader` into scheme records, in source order.
///
/// Fails on the first unreadable row; a partially read sheet is never
/// returned.
pub(crate) fn read_records<R: Read>(reader: R) -> Result<Vec<SchemeRecord>, LoadError> {
    let mut csv_reader = ReaderBuilder::new().trim(Trim::Headers).from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|err| LoadError::Malformed(err.to_string()))?
        .clone();
    validate_headers(&headers)?;

    let mut records = Vec::new();
    for row in csv_reader.deserialize() {
        let row: RawSchemeRow = row.map_err(|err| LoadError::Malformed(err.to_string()))?;
        records.push(row.into_record());
    }
    Ok(records)
}
