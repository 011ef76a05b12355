//! JanSeva Catalog Layer
//!
//! This is where scheme data enters the system. We read a tabular source,
//! validate the minimal schema, and hand back an ordered, read-only catalog
//! that the matching layer can search.
//!
//! ## What we do here
//!
//! - **Validate the schema** - The header row must carry the six required
//!   columns; header names are trimmed of incidental whitespace first.
//! - **Map rows to records** - One row, one [`SchemeRecord`], in source
//!   order. Empty cells become empty strings, never an error.
//! - **Fail cleanly** - A missing file is [`LoadError::SourceMissing`];
//!   anything else wrong with the sheet is [`LoadError::Malformed`]. A
//!   partially populated catalog is never returned.
//! - **Log the outcome** - Structured logs via tracing for debugging
//!   deployments where the sheet is edited by hand.
//!
//! ## Main entry point
//!
//! Call [`load_catalog`] with a file path, or [`load_catalog_from_reader`]
//! with any reader, and get back a [`Catalog`].
//!
//! ## Example
//!
//! ```
//! use catalog::load_catalog_from_reader;
//!
//! let sheet = "\
//! Scheme_Name,Category,Description,Who_Can_Apply,Benefits,Link
//! Kisan Credit Card,Agriculture,Short term crop credit,All farmers,Credit up to Rs 3 lakh,https://www.myscheme.gov.in/schemes/kcc
//! ";
//!
//! let catalog = load_catalog_from_reader(sheet.as_bytes()).unwrap();
//! assert_eq!(catalog.len(), 1);
//! assert_eq!(catalog.records()[0].category, "Agriculture");
//! assert_eq!(catalog.categories(), ["Agriculture"]);
//! ```

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Instant;

use tracing::{info, warn, Level};

mod error;
mod loader;
mod record;

pub use crate::error::LoadError;
pub use crate::loader::REQUIRED_COLUMNS;
pub use crate::record::{Catalog, SchemeRecord};

/// Load a scheme catalog from the CSV file at `path`.
///
/// A file that cannot be opened maps to [`LoadError::SourceMissing`]; a file
/// that opens but does not parse as a scheme table maps to
/// [`LoadError::Malformed`].
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog, LoadError> {
    let start = Instant::now();
    let path = path.as_ref();

    let span = tracing::span!(Level::INFO, "catalog.load", path = %path.display());
    let _guard = span.enter();

    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) => {
            let elapsed_micros = start.elapsed().as_micros();
            warn!(error = %err, elapsed_micros, "catalog_load_failure");
            return Err(LoadError::SourceMissing(path.display().to_string()));
        }
    };

    match loader::read_records(file) {
        Ok(records) => {
            let catalog = Catalog::from_records(records);
            let elapsed_micros = start.elapsed().as_micros();
            info!(
                record_count = catalog.len(),
                category_count = catalog.categories().len(),
                elapsed_micros,
                "catalog_load_success"
            );
            Ok(catalog)
        }
        Err(err) => {
            let elapsed_micros = start.elapsed().as_micros();
            warn!(error = %err, elapsed_micros, "catalog_load_failure");
            Err(err)
        }
    }
}

/// Load a scheme catalog from any reader, such as an embedded sample sheet
/// or an in-memory fixture.
pub fn load_catalog_from_reader<R: Read>(reader: R) -> Result<Catalog, LoadError> {
    let records = loader::read_records(reader)?;
    Ok(Catalog::from_records(records))
}
