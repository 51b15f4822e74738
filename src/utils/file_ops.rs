use std::path::{Path, PathBuf};

use super::format::timestamp_slug;

/// Backup path for a file about to be overwritten:
/// `report.md` becomes `report_backup_20260825_143059.md`.
pub fn backup_path(original: &Path) -> PathBuf {
    backup_path_with_slug(original, &timestamp_slug())
}

fn backup_path_with_slug(original: &Path, slug: &str) -> PathBuf {
    let stem = original
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "file".to_string());

    let name = match original.extension() {
        Some(ext) => format!("{}_backup_{}.{}", stem, slug, ext.to_string_lossy()),
        None => format!("{}_backup_{}", stem, slug),
    };

    original.with_file_name(name)
}
