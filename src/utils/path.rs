use crate::core::error::{Result, TextIoError};
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

/// Checks whether anything exists at `path`, following symlinks.
///
/// A stat failure other than "not found" (permission denied, a file used as a
/// directory component, ...) is reported as existing.
pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
    let path = path.as_ref();
    match std::fs::metadata(path) {
        Ok(_) => true,
        Err(e) => {
            log::warn!("stat '{}' - {}", path.display(), e);
            e.kind() != ErrorKind::NotFound
        }
    }
}

pub fn validate_filepath<P: AsRef<Path>>(path: P) -> String {
    match try_validate_filepath(path) {
        Ok(abs) => abs.to_string_lossy().into_owned(),
        Err(e) => {
            log::warn!("{}", e);
            String::new()
        }
    }
}

pub fn try_validate_filepath<P: AsRef<Path>>(path: P) -> Result<PathBuf> {
    let abs = absolute_path(&path)?;
    match std::fs::metadata(&abs) {
        Ok(_) => Ok(abs),
        Err(e) if e.kind() == ErrorKind::NotFound => Err(TextIoError::PathNotFound(abs)),
        Err(e) => Err(e.into()),
    }
}

/// Joins a relative path onto the working directory and removes `.` and `..`
/// components lexically. Symlinks are left unresolved.
pub fn absolute_path<P: AsRef<Path>>(path: P) -> Result<PathBuf> {
    let path = path.as_ref();
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        let cwd = std::env::current_dir().map_err(|e| {
            TextIoError::PathResolution(format!("{} ({})", path.display(), e))
        })?;
        cwd.join(path)
    };
    Ok(clean_path(&joined))
}

fn clean_path(path: &Path) -> PathBuf {
    let mut cleaned = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(cleaned.components().next_back(), Some(Component::Normal(_))) {
                    cleaned.pop();
                }
            }
            other => cleaned.push(other.as_os_str()),
        }
    }
    cleaned
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_file_exists() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("present.txt");
        fs::write(&file, "x").unwrap();

        assert!(file_exists(&file));
        assert!(file_exists(temp_dir.path()));
        assert!(!file_exists(temp_dir.path().join("missing.txt")));
    }

    #[cfg(unix)]
    #[test]
    fn test_file_exists_non_not_found_error_counts_as_existing() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("plain.txt");
        fs::write(&file, "x").unwrap();

        // stat through a regular file fails with ENOTDIR, not ENOENT
        assert!(file_exists(file.join("child")));
    }

    #[test]
    fn test_validate_filepath_absolute() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("data.csv");
        fs::write(&file, "a,b").unwrap();

        let validated = validate_filepath(&file);
        assert!(Path::new(&validated).is_absolute());
        assert!(fs::metadata(&validated).is_ok());
    }

    #[test]
    fn test_validate_filepath_relative() {
        let validated = validate_filepath("Cargo.toml");
        assert!(Path::new(&validated).is_absolute());
        assert!(validated.ends_with("Cargo.toml"));
        assert!(fs::metadata(&validated).is_ok());
    }

    #[test]
    fn test_validate_filepath_missing() {
        let temp_dir = TempDir::new().unwrap();
        assert_eq!(validate_filepath(temp_dir.path().join("nope.txt")), "");
        assert!(matches!(
            try_validate_filepath(temp_dir.path().join("nope.txt")),
            Err(TextIoError::PathNotFound(_))
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_absolute_path_is_lexical() {
        let abs = absolute_path("/a/b/../c/./d").unwrap();
        assert_eq!(abs, PathBuf::from("/a/c/d"));

        let abs = absolute_path("/../x").unwrap();
        assert_eq!(abs, PathBuf::from("/x"));

        let cwd = std::env::current_dir().unwrap();
        assert_eq!(absolute_path("src/../Cargo.toml").unwrap(), cwd.join("Cargo.toml"));
    }
}
