//! Markdown source discovery by filesystem walking.

use std::fs;
use std::path::{Path, PathBuf};

use crate::ContentError;

/// Markdown file found under the content directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SourceFile {
    /// Path relative to the content directory, without `.md`, `/`-separated.
    pub name: String,
    /// Absolute path of the file.
    pub path: PathBuf,
}

/// Collect every `*.md` file under `source_dir`, sorted by name.
///
/// Hidden files and directories (leading `.`) are skipped. Unreadable
/// subdirectories are skipped with a warning.
pub(crate) fn scan(source_dir: &Path) -> Result<Vec<SourceFile>, ContentError> {
    let entries = fs::read_dir(source_dir).map_err(|e| ContentError::io(source_dir, e))?;

    let mut files = Vec::new();
    scan_entries(entries, "", &mut files);
    files.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(files)
}

fn scan_directory(dir_path: &Path, prefix: &str, files: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir_path) else {
        tracing::warn!(path = %dir_path.display(), "Failed to read directory, skipping");
        return;
    };
    scan_entries(entries, prefix, files);
}

fn scan_entries(entries: fs::ReadDir, prefix: &str, files: &mut Vec<SourceFile>) {
    for entry in entries.filter_map(Result::ok) {
        let file_name = entry.file_name();
        let file_name = file_name.to_string_lossy();
        if file_name.starts_with('.') {
            continue;
        }

        let path = entry.path();
        let is_dir = entry.file_type().is_ok_and(|t| t.is_dir());
        if is_dir {
            let nested = format!("{prefix}{file_name}/");
            scan_directory(&path, &nested, files);
        } else if let Some(stem) = file_name.strip_suffix(".md") {
            files.push(SourceFile {
                name: format!("{prefix}{stem}"),
                path,
            });
        }
    }
}
