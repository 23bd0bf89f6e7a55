//! Atomic output files.

use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use vtlower_common::{Result, TranslateError};

/// Write `text` to `path` through a temporary sibling file renamed into place.
///
/// The target is either left untouched or fully replaced.
pub fn write_atomic(path: &Path, text: &str) -> Result<()> {
    let unavailable = |source| TranslateError::OutputUnavailable {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let mut file = NamedTempFile::new_in(dir).map_err(unavailable)?;
    file.write_all(text.as_bytes()).map_err(unavailable)?;
    file.flush().map_err(unavailable)?;
    file.persist(path).map_err(|err| unavailable(err.error))?;

    tracing::debug!(path = %path.display(), bytes = text.len(), "wrote output");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output.h");
        std::fs::write(&path, "stale").unwrap();

        write_atomic(&path, "#pragma once\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "#pragma once\n");
    }

    #[test]
    fn test_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("output.h");

        let err = write_atomic(&path, "x").unwrap_err();
        assert!(matches!(err, TranslateError::OutputUnavailable { .. }));
        assert!(!path.exists());
    }
}
