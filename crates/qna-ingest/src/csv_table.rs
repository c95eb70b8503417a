//! CSV loading of raw tables.
//!
//! Raw tables exported from the statistical agency come as three-column
//! CSVs (period code, category label, value) whose first record is the
//! header row. The header is kept: the normalizer consumes it as the
//! column-header mapping per batch.

use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;

use qna_model::{RawRow, RawTable, TableRole};

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Read a raw table from a CSV file, tagging it with its role.
pub fn read_raw_table(path: &Path, role: TableRole) -> Result<RawTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("read csv: {}", path.display()))?;
    let mut table = RawTable::new(role);
    for record in reader.records() {
        let record = record.with_context(|| format!("read record: {}", path.display()))?;
        let row = RawRow {
            period_code: normalize_cell(record.get(0).unwrap_or("")),
            category_label: normalize_cell(record.get(1).unwrap_or("")),
            value_text: normalize_cell(record.get(2).unwrap_or("")),
        };
        if row.period_code.is_empty() && row.category_label.is_empty() && row.value_text.is_empty()
        {
            continue;
        }
        table.push_row(row);
    }
    Ok(table)
}
