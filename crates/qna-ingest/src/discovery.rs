//! Raw-table file discovery.

use std::path::{Path, PathBuf};

use tracing::warn;

use qna_model::TableRole;

use crate::error::{IngestError, Result};

/// Lists all CSV files in a directory, sorted by filename.
pub fn list_csv_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;
    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("csv"))
            .unwrap_or(false);
        if is_csv {
            files.push(path);
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Discover raw tables in a directory, classified by the SIDRA table code
/// embedded in the filename (e.g. `tabela_1620.csv` carries the raw index
/// numbers). Files with no recognizable code are skipped.
pub fn discover_raw_tables(dir: &Path) -> Result<Vec<(PathBuf, TableRole)>> {
    let mut discovered = Vec::new();
    for path in list_csv_files(dir)? {
        let stem = path
            .file_stem()
            .and_then(|v| v.to_str())
            .unwrap_or("")
            .to_string();
        match role_for_filename(&stem) {
            Some(role) => discovered.push((path, role)),
            None => warn!(path = %path.display(), "no table code in filename, skipping"),
        }
    }
    Ok(discovered)
}

/// Match a filename stem to a table role by embedded SIDRA table code.
///
/// Codes are matched on digit-run boundaries so `16205` does not match
/// table 1620.
fn role_for_filename(stem: &str) -> Option<TableRole> {
    let digit_runs = stem
        .split(|ch: char| !ch.is_ascii_digit())
        .filter(|run| !run.is_empty());
    for run in digit_runs {
        for role in TableRole::ALL {
            if run == role.table_code() {
                return Some(role);
            }
        }
    }
    None
}
