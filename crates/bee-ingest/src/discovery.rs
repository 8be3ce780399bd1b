//! Input file discovery.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use bee_model::RawTable;

use crate::csv_table::read_raw_table;
use crate::error::{IngestError, Result};

/// Lists all CSV files below a directory, recursively.
///
/// Hidden files and directories are skipped. Files are sorted by path; that
/// order is the merge order of the run.
pub fn list_csv_files(dir: &Path) -> Result<Vec<PathBuf>> {
    list_csv_files_excluding(dir, None)
}

/// Like [`list_csv_files`], but never descends into `excluded`.
///
/// The pipeline passes its output directory here so earlier outputs are not
/// read back as input.
pub fn list_csv_files_excluding(dir: &Path, excluded: Option<&Path>) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }
    let excluded = excluded.and_then(|path| std::fs::canonicalize(path).ok());
    let mut files = Vec::new();
    collect_csv_files(dir, excluded.as_deref(), &mut files)?;
    files.sort();
    Ok(files)
}

fn collect_csv_files(dir: &Path, excluded: Option<&Path>, files: &mut Vec<PathBuf>) -> Result<()> {
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

        let hidden = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.starts_with('.'));
        if hidden {
            continue;
        }

        if path.is_dir() {
            if excluded.is_some_and(|skip| std::fs::canonicalize(&path).is_ok_and(|p| p == skip)) {
                debug!(path = %path.display(), "skipping output directory");
                continue;
            }
            collect_csv_files(&path, excluded, files)?;
            continue;
        }

        // Check for .csv extension (case-insensitive)
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
        if is_csv && path.is_file() {
            files.push(path);
        }
    }
    Ok(())
}

/// Reads every usable CSV file below `dir` in merge order.
///
/// USDA tables that are not state-level, or cannot be classified or dated,
/// are skipped with a log line.
pub fn load_raw_tables(dir: &Path) -> Result<Vec<RawTable>> {
    load_raw_tables_excluding(dir, None)
}

/// Like [`load_raw_tables`], skipping the `excluded` directory.
pub fn load_raw_tables_excluding(dir: &Path, excluded: Option<&Path>) -> Result<Vec<RawTable>> {
    let files = list_csv_files_excluding(dir, excluded)?;
    info!(dir = %dir.display(), file_count = files.len(), "discovered input files");

    let mut tables = Vec::with_capacity(files.len());
    for path in &files {
        if let Some(table) = read_raw_table(path)? {
            debug!(
                source = %table.source,
                columns = table.headers.len(),
                rows = table.rows.len(),
                "loaded table"
            );
            tables.push(table);
        }
    }
    Ok(tables)
}
