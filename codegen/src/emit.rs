//! Artifact writing.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use css_data_spec::serializer::json;
use css_data_spec::MergedProperty;

/// Writes `content` to `path`, creating parent directories as needed.
///
/// # Errors
///
/// Returns an error if a directory cannot be created or the file cannot be
/// written.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}

/// Writes a merged property table as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if the table cannot be serialized or the file cannot be
/// written.
pub fn write_table(path: &Path, table: &[MergedProperty]) -> Result<()> {
    let text = json::to_string_pretty(table).context("Failed to serialize property table")?;
    write_file(path, &text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_missing_directories() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("out").join("nested").join("css-properties.json");
        write_table(&path, &[]).expect("write");
        let text = fs::read_to_string(&path).expect("read back");
        assert_eq!(text, "[]\n");
    }
}
