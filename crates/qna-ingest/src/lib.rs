//! Raw-table ingestion for the quarterly national accounts pipeline.
//!
//! - **recode**: the fixed label-to-category lookup, supplied at startup
//! - **normalize**: merging raw table batches into one observation table
//! - **csv_table**: loading raw tables from three-column CSV exports
//! - **discovery**: classifying CSV files by embedded SIDRA table code

pub mod csv_table;
pub mod discovery;
pub mod error;
pub mod normalize;
pub mod recode;

pub use csv_table::read_raw_table;
pub use discovery::{discover_raw_tables, list_csv_files};
pub use error::{IngestError, NormalizeError, Result};
pub use normalize::Normalizer;
pub use recode::RecodeTable;
