//! Bank discovery.
//!
//! With explicit arguments every path must exist under the project root
//! (or be absolute) and order is preserved.
//! Without arguments the content directory is scanned (non-recursively) for
//! `*.json` files, sorted by name, skipping reserved names.

use std::path::PathBuf;

use thiserror::Error;

use crate::config::Settings;
use crate::resolve_path;

/// Fatal discovery failures. Nothing is validated when one occurs.
#[derive(Error, Debug)]
pub enum DiscoveryError {
    /// An explicitly named file does not exist.
    #[error("Question file '{}' not found", .0.display())]
    NotFound(PathBuf),

    /// An explicitly named path is a directory, not a bank file.
    #[error("Question path '{}' is a directory, not a file", .0.display())]
    NotAFile(PathBuf),

    /// The content directory, or an entry in it, is missing or unreadable.
    #[error("cannot read content directory {path}: {source}")]
    ContentDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Files to validate, in processing order.
pub fn discover_files(
    explicit: &[PathBuf],
    settings: &Settings,
) -> Result<Vec<PathBuf>, DiscoveryError> {
    if !explicit.is_empty() {
        return explicit
            .iter()
            .map(|entry| {
                let resolved = resolve_path(entry, &settings.root);
                if !resolved.exists() {
                    Err(DiscoveryError::NotFound(entry.clone()))
                } else if resolved.is_dir() {
                    Err(DiscoveryError::NotAFile(entry.clone()))
                } else {
                    Ok(resolved)
                }
            })
            .collect();
    }

    let dir = settings.content_path();
    let entries = std::fs::read_dir(&dir).map_err(|source| DiscoveryError::ContentDir {
        path: dir.clone(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|source| DiscoveryError::ContentDir {
                path: dir.clone(),
                source,
            })?
            .path();
        let is_bank = path.is_file()
            && path.extension().is_some_and(|ext| ext == "json")
            && path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| !settings.is_excluded(name));
        if is_bank {
            files.push(path);
        }
    }
    files.sort();

    tracing::debug!(dir = %dir.display(), files = files.len(), "scanned content directory");
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn fixture() -> (tempfile::TempDir, Settings) {
        let dir = tempfile::tempdir().unwrap();
        let content = dir.path().join("docs/questions");
        std::fs::create_dir_all(content.join("nested")).unwrap();
        for name in [
            "securityplus.json",
            "networkplus.json",
            "networkplus-pbq.json",
            "schema.json",
            "manifest.json",
            "notes.txt",
        ] {
            std::fs::write(content.join(name), b"[]").unwrap();
        }
        std::fs::write(content.join("nested/deep.json"), b"[]").unwrap();
        let settings = Settings::new(dir.path());
        (dir, settings)
    }

    fn names(files: &[PathBuf]) -> Vec<String> {
        files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn scan_is_sorted_flat_and_skips_reserved() {
        let (_dir, settings) = fixture();
        let files = discover_files(&[], &settings).unwrap();
        assert_eq!(
            names(&files),
            vec!["networkplus-pbq.json", "networkplus.json", "securityplus.json"]
        );
    }

    #[test]
    fn scan_honours_configured_exclusions() {
        let (_dir, mut settings) = fixture();
        settings.exclude = vec!["networkplus.json".to_string()];
        let files = discover_files(&[], &settings).unwrap();
        assert!(names(&files).contains(&"schema.json".to_string()));
        assert!(!names(&files).contains(&"networkplus.json".to_string()));
    }

    #[test]
    fn explicit_paths_keep_order() {
        let (dir, settings) = fixture();
        let args = vec![
            PathBuf::from("docs/questions/securityplus.json"),
            PathBuf::from("docs/questions/networkplus.json"),
        ];
        let files = discover_files(&args, &settings).unwrap();
        assert_eq!(files[0], dir.path().join("docs/questions/securityplus.json"));
        assert_eq!(files[1], dir.path().join("docs/questions/networkplus.json"));
    }

    #[test]
    fn explicit_reserved_name_is_not_filtered() {
        let (_dir, settings) = fixture();
        let args = [PathBuf::from("docs/questions/schema.json")];
        let files = discover_files(&args, &settings).unwrap();
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn missing_explicit_path_names_the_argument() {
        let (_dir, settings) = fixture();
        let args = vec![
            PathBuf::from("docs/questions/networkplus.json"),
            PathBuf::from("docs/questions/ccna.json"),
        ];
        let err = discover_files(&args, &settings).unwrap_err();
        let missing = Path::new("docs/questions/ccna.json");
        assert!(matches!(&err, DiscoveryError::NotFound(p) if p == missing));
        assert_eq!(
            err.to_string(),
            "Question file 'docs/questions/ccna.json' not found"
        );
    }

    #[test]
    fn explicit_path_only_resolves_under_root() {
        // Cargo.toml exists in the test's working directory but not under the root.
        assert!(Path::new("Cargo.toml").exists());
        let (_dir, settings) = fixture();
        let err = discover_files(&[PathBuf::from("Cargo.toml")], &settings).unwrap_err();
        assert!(matches!(&err, DiscoveryError::NotFound(p) if p == Path::new("Cargo.toml")));
    }

    #[test]
    fn explicit_absolute_path_outside_root_is_accepted() {
        let (_dir, settings) = fixture();
        let other = tempfile::tempdir().unwrap();
        let bank = other.path().join("extra.json");
        std::fs::write(&bank, b"[]").unwrap();
        let files = discover_files(&[bank.clone()], &settings).unwrap();
        assert_eq!(files, vec![bank]);
    }

    #[test]
    fn explicit_directory_gets_its_own_error() {
        let (_dir, settings) = fixture();
        let err = discover_files(&[PathBuf::from("docs/questions")], &settings).unwrap_err();
        assert!(matches!(&err, DiscoveryError::NotAFile(p) if p == Path::new("docs/questions")));
        assert_eq!(
            err.to_string(),
            "Question path 'docs/questions' is a directory, not a file"
        );
    }

    #[test]
    fn missing_content_dir_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = discover_files(&[], &Settings::new(dir.path())).unwrap_err();
        assert!(matches!(err, DiscoveryError::ContentDir { .. }));
    }
}
