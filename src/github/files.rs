//! Extraction of changed file names from API responses

use super::types::FileChangeSet;
use serde_json::Value;

/// Collect the `filename` of each entry in a files array
///
/// Entries without a string `filename` are skipped. A value that is not an
/// array yields an empty set.
pub(crate) fn collect_filenames(entries: &Value, url: &str) -> FileChangeSet {
    let Some(entries) = entries.as_array() else {
        tracing::debug!(url, "Response has no files list");
        return FileChangeSet::new();
    };

    let mut files = FileChangeSet::new();
    for entry in entries {
        match entry.get("filename").and_then(Value::as_str) {
            Some(filename) => {
                files.insert(filename);
            }
            None => tracing::debug!(url, "Skipping file entry without a filename"),
        }
    }
    files
}
