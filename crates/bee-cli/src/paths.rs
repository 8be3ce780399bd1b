//! Default locations for run outputs.

use std::path::{Path, PathBuf};

/// Directory name used when `--output-dir` is not given.
pub const DEFAULT_OUTPUT_DIR_NAME: &str = "processed";

/// `processed` next to the input directory, never inside it.
///
/// The input path is resolved first, so `.` and `data/..` name their real
/// parent. A filesystem root has no parent; its outputs land inside it and
/// discovery skips them.
pub fn default_output_dir(input_dir: &Path) -> PathBuf {
    let resolved = std::fs::canonicalize(input_dir)
        .or_else(|_| std::path::absolute(input_dir))
        .unwrap_or_else(|_| input_dir.to_path_buf());
    match resolved.parent() {
        Some(parent) => parent.join(DEFAULT_OUTPUT_DIR_NAME),
        None => resolved.join(DEFAULT_OUTPUT_DIR_NAME),
    }
}
