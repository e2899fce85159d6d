//! File-system primitives shared by the accessors.

use std::io::{self, Write};
use std::path::Path;

use errors::Defect;
use tempfile::NamedTempFile;

/// Replace `path` with `contents` via a temporary file in the same directory.
///
/// Missing parent directories are created. Readers never observe a
/// half-written file.
pub fn write_atomic(path: &Path, contents: &str) -> Result<(), Defect> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new(".")
    };
    std::fs::create_dir_all(parent).map_err(|e| Defect::io(parent, e))?;

    let mut file = NamedTempFile::new_in(parent).map_err(|e| Defect::io(path, e))?;
    file.write_all(contents.as_bytes())
        .map_err(|e| Defect::io(path, e))?;
    file.persist(path).map_err(|e| Defect::io(path, e.error))?;
    tracing::debug!("Wrote {}", path.display());
    Ok(())
}

/// Read a text file, treating a missing file as `None`.
pub fn read_optional(path: &Path) -> Result<Option<String>, Defect> {
    match std::fs::read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(Defect::io(path, e))
    }
}

/// Delete a file. Returns whether there was anything to delete.
pub fn remove_file(path: &Path) -> Result<bool, Defect> {
    match std::fs::remove_file(path) {
        Ok(()) => {
            tracing::info!("Removed {}", path.display());
            Ok(true)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(Defect::io(path, e))
    }
}

/// Move `from` to `to`. Returns `false` when `from` does not exist.
///
/// An existing `to` is never replaced.
pub fn rename_file(from: &Path, to: &Path) -> Result<bool, Defect> {
    if !from.exists() {
        return Ok(false);
    }
    if to.exists() {
        return Err(Defect::io(
            to,
            io::Error::new(io::ErrorKind::AlreadyExists, "refusing to overwrite")
        ));
    }
    std::fs::rename(from, to).map_err(|e| Defect::io(from, e))?;
    tracing::info!("Renamed {} to {}", from.display(), to.display());
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_atomic_creates_parents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".vscode").join("extensions.json");

        write_atomic(&path, "{}\n").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}\n");
    }

    #[test]
    fn test_write_atomic_replaces_contents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("setup.cfg");
        std::fs::write(&path, "old contents that are longer\n").unwrap();

        write_atomic(&path, "new\n").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new\n");
        let leftovers = std::fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(leftovers, 1);
    }

    #[test]
    fn test_read_optional() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("README.md");
        assert_eq!(read_optional(&path).unwrap(), None);

        std::fs::write(&path, "# Title\n").unwrap();
        assert_eq!(read_optional(&path).unwrap().as_deref(), Some("# Title\n"));
    }

    #[test]
    fn test_remove_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".cspell.json");
        assert!(!remove_file(&path).unwrap());

        std::fs::write(&path, "{}").unwrap();
        assert!(remove_file(&path).unwrap());
        assert!(!path.exists());
    }

    #[test]
    fn test_rename_file() {
        let dir = TempDir::new().unwrap();
        let from = dir.path().join("cspell.json");
        let to = dir.path().join(".cspell.json");
        assert!(!rename_file(&from, &to).unwrap());

        std::fs::write(&from, "{}").unwrap();
        assert!(rename_file(&from, &to).unwrap());
        assert!(to.exists());
        assert!(!from.exists());
    }

    #[test]
    fn test_rename_file_keeps_existing_destination() {
        let dir = TempDir::new().unwrap();
        let from = dir.path().join("cspell.json");
        let to = dir.path().join(".cspell.json");
        std::fs::write(&from, "{\"words\": [\"old\"]}").unwrap();
        std::fs::write(&to, "{\"words\": [\"new\"]}").unwrap();

        let err = rename_file(&from, &to).unwrap_err();

        assert!(matches!(err, Defect::Io { .. }));
        assert!(from.exists());
        assert_eq!(std::fs::read_to_string(&to).unwrap(), "{\"words\": [\"new\"]}");
    }
}
