//! Project configuration.
//!
//! An optional `qbank.yaml` at the project root (or the file named by
//! `--config`) overrides where banks live and which files are skipped:
//!
//! ```yaml
//! content_dir: docs/questions
//! exclude: [schema.json, manifest.json]
//! pbq_suffix: pbq.json
//! ```
//!
//! Every key is optional. Unknown keys are rejected so typos surface early.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use qbank_core::DEFAULT_PBQ_SUFFIX;

/// File name looked up at the project root when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "qbank.yaml";

/// Content directory relative to the project root.
pub const DEFAULT_CONTENT_DIR: &str = "docs/questions";

/// File names in the content directory that are never treated as banks.
pub const DEFAULT_EXCLUDE: [&str; 2] = ["schema.json", "manifest.json"];

/// Errors raised while reading the configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid YAML or has unknown keys.
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// On-disk configuration as written by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QbankConfig {
    #[serde(default)]
    pub content_dir: Option<PathBuf>,
    #[serde(default)]
    pub exclude: Option<Vec<String>>,
    #[serde(default)]
    pub pbq_suffix: Option<String>,
}

impl QbankConfig {
    /// Parse a configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&text, path)
    }

    /// Load `explicit` if given, else `<root>/qbank.yaml` when it exists,
    /// else the defaults.
    pub fn discover(explicit: Option<&Path>, root: &Path) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let default = root.join(DEFAULT_CONFIG_FILE);
                if default.is_file() {
                    Self::load(&default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn from_yaml(text: &str, path: &Path) -> Result<Self, ConfigError> {
        // An empty file deserializes as unit, not a map.
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Resolved runtime settings for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Project root; relative paths and manifest `file` entries hang off it.
    pub root: PathBuf,
    /// Content directory, relative to `root` unless absolute.
    pub content_dir: PathBuf,
    /// File names skipped during directory scans.
    pub exclude: Vec<String>,
    /// File-name suffix marking a PBQ bank.
    pub pbq_suffix: String,
}

impl Settings {
    /// Defaults rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::from_config(root, QbankConfig::default())
    }

    /// Merge a parsed config over the defaults.
    pub fn from_config(root: impl Into<PathBuf>, config: QbankConfig) -> Self {
        Self {
            root: root.into(),
            content_dir: config
                .content_dir
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CONTENT_DIR)),
            exclude: config
                .exclude
                .unwrap_or_else(|| DEFAULT_EXCLUDE.iter().map(|s| s.to_string()).collect()),
            pbq_suffix: config
                .pbq_suffix
                .unwrap_or_else(|| DEFAULT_PBQ_SUFFIX.to_string()),
        }
    }

    /// Absolute content directory.
    pub fn content_path(&self) -> PathBuf {
        self.root.join(&self.content_dir)
    }

    /// Whether a file name is reserved and skipped by scans.
    pub fn is_excluded(&self, file_name: &str) -> bool {
        self.exclude.iter().any(|name| name == file_name)
    }
}

/// Walk up from `start` to the first directory holding `qbank.yaml` or the
/// default content directory.
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| {
            dir.join(DEFAULT_CONFIG_FILE).is_file() || dir.join(DEFAULT_CONTENT_DIR).is_dir()
        })
        .map(Path::to_path_buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let settings = Settings::new("/repo");
        assert_eq!(settings.content_dir, PathBuf::from("docs/questions"));
        assert_eq!(settings.content_path(), PathBuf::from("/repo/docs/questions"));
        assert!(settings.is_excluded("schema.json"));
        assert!(settings.is_excluded("manifest.json"));
        assert!(!settings.is_excluded("networkplus.json"));
        assert_eq!(settings.pbq_suffix, "pbq.json");
    }

    #[test]
    fn partial_config_overrides_only_given_keys() {
        let config =
            QbankConfig::from_yaml("content_dir: banks\n", Path::new("qbank.yaml")).unwrap();
        let settings = Settings::from_config("/repo", config);
        assert_eq!(settings.content_path(), PathBuf::from("/repo/banks"));
        assert!(settings.is_excluded("schema.json"));
    }

    #[test]
    fn full_config() {
        let yaml = "content_dir: content\nexclude: [index.json]\npbq_suffix: .perf.json\n";
        let config = QbankConfig::from_yaml(yaml, Path::new("qbank.yaml")).unwrap();
        let settings = Settings::from_config("/repo", config);
        assert!(settings.is_excluded("index.json"));
        assert!(!settings.is_excluded("schema.json"));
        assert_eq!(settings.pbq_suffix, ".perf.json");
    }

    #[test]
    fn unknown_keys_rejected() {
        let err = QbankConfig::from_yaml("contnet_dir: x\n", Path::new("qbank.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("qbank.yaml"));
    }

    #[test]
    fn empty_file_is_default() {
        let config = QbankConfig::from_yaml("\n", Path::new("qbank.yaml")).unwrap();
        assert_eq!(config, QbankConfig::default());
    }

    #[test]
    fn discover_reads_root_file_when_present() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("qbank.yaml"), "pbq_suffix: perf.json\n").unwrap();
        let config = QbankConfig::discover(None, dir.path()).unwrap();
        assert_eq!(config.pbq_suffix.as_deref(), Some("perf.json"));
    }

    #[test]
    fn discover_without_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = QbankConfig::discover(None, dir.path()).unwrap();
        assert_eq!(config, QbankConfig::default());
    }

    #[test]
    fn explicit_missing_config_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.yaml");
        let err = QbankConfig::discover(Some(&missing), dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn project_root_found_from_nested_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("docs/questions")).unwrap();
        let nested = dir.path().join("docs/questions");
        assert_eq!(find_project_root(&nested), Some(dir.path().to_path_buf()));
    }
}
