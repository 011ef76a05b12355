//! Scheme records and the catalog that holds them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One welfare scheme as loaded from the catalog source.
///
/// Field values are kept verbatim for display. Matching operates on a
/// lowercased derivation computed by the matching layer; nothing here is
/// mutated after load. Missing cells in the source become empty strings,
/// never a null state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SchemeRecord {
    /// Short scheme title. Not guaranteed unique; duplicate rows in the
    /// source are preserved as independent records.
    pub name: String,
    /// Self-declared grouping such as "Agriculture" or "Housing". The set is
    /// data-driven from the source; only the "All" wildcard is fixed, and it
    /// lives in the matching layer, not here.
    pub category: String,
    /// What the scheme provides, in prose.
    pub description: String,
    /// Who may apply, in prose.
    pub eligibility: String,
    /// What an applicant receives, in prose.
    pub benefits: String,
    /// Application URL exactly as found in the source. Source sheets often
    /// carry stray quote characters around links; call
    /// [`sanitized_link`](SchemeRecord::sanitized_link) before rendering a
    /// hyperlink.
    pub apply_link: String,
}

impl SchemeRecord {
    /// The application URL with stray quote characters removed and edge
    /// whitespace trimmed. The stored field stays untouched.
    pub fn sanitized_link(&self) -> String {
        self.apply_link.replace(['"', '\''], "").trim().to_string()
    }
}

/// An ordered, read-only collection of scheme records for one session.
///
/// Row order from the source is preserved and is the authoritative tie-break
/// for all downstream result ordering. The catalog is immutable after
/// construction, so sharing it across threads needs no locking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    records: Vec<SchemeRecord>,
    categories: Vec<String>,
    loaded_at: DateTime<Utc>,
}

impl Catalog {
    /// Build a catalog from already-materialized records.
    ///
    /// The distinct category values are collected in first-seen order so a
    /// presentation layer can render a chooser without hardcoding values.
    pub fn from_records(records: Vec<SchemeRecord>) -> Self {
        let mut categories: Vec<String> = Vec::new();
        for record in &records {
            if !categories.iter().any(|c| c == &record.category) {
                categories.push(record.category.clone());
            }
        }
        Self {
            records,
            categories,
            loaded_at: Utc::now(),
        }
    }

    /// All records in source order.
    pub fn records(&self) -> &[SchemeRecord] {
        &self.records
    }

    /// Distinct category values in first-seen order.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Number of records in the catalog.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the catalog holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// When this catalog snapshot was materialized.
    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    /// Iterate over records in source order.
    pub fn iter(&self) -> std::slice::Iter<'_, SchemeRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a SchemeRecord;
    type IntoIter = std::slice::Iter<'a, SchemeRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, category: &str) -> SchemeRecord {
        SchemeRecord {
            name: name.into(),
            category: category.into(),
            description: String::new(),
            eligibility: String::new(),
            benefits: String::new(),
            apply_link: String::new(),
        }
    }

    #[test]
    fn sanitized_link_strips_quotes_and_whitespace() {
        let cases = [
            ("\"https://pmkisan.gov.in\"", "https://pmkisan.gov.in"),
            ("'https://pmkisan.gov.in'", "https://pmkisan.gov.in"),
            ("  https://pmkisan.gov.in  ", "https://pmkisan.gov.in"),
            (" \"'https://pmkisan.gov.in'\" ", "https://pmkisan.gov.in"),
            ("", ""),
        ];

        for (input, expected) in cases {
            let rec = SchemeRecord {
                apply_link: input.into(),
                ..record("PM-KISAN", "Agriculture")
            };
            assert_eq!(rec.sanitized_link(), expected);
            assert_eq!(rec.apply_link, input, "stored field must stay verbatim");
        }
    }

    #[test]
    fn categories_collected_in_first_seen_order() {
        let catalog = Catalog::from_records(vec![
            record("a", "Agriculture"),
            record("b", "Student"),
            record("c", "Agriculture"),
            record("d", "Health"),
        ]);

        assert_eq!(catalog.categories(), ["Agriculture", "Student", "Health"]);
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn duplicate_records_are_preserved() {
        let catalog = Catalog::from_records(vec![
            record("PM-KISAN", "Agriculture"),
            record("PM-KISAN", "Agriculture"),
        ]);

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.records()[0], catalog.records()[1]);
    }

    #[test]
    fn iteration_follows_source_order() {
        let catalog = Catalog::from_records(vec![
            record("first", "A"),
            record("second", "B"),
            record("third", "C"),
        ]);

        let names: Vec<&str> = catalog.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["first", "second", "third"]);
    }
}
