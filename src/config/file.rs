//! Configuration file loading and discovery.
//!
//! Supports loading configuration from YAML files with automatic discovery.

use super::types::GateConfig;
use std::path::{Path, PathBuf};

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
const CONFIG_FILE_NAMES: &[&str] = &[".dotver.yaml", ".dotver.yml", "dotver.yaml", "dotver.yml"];

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Current directory
/// 3. Git repository root (if in a repo)
/// 4. User config directory (~/.config/dotver/)
/// 5. Home directory
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        if path.exists() {
            return Some(path.to_path_buf());
        }
    }

    if let Some(path) = std::env::current_dir()
        .ok()
        .and_then(|cwd| find_config_in_dir(&cwd))
    {
        return Some(path);
    }

    if let Some(path) = find_git_root().and_then(|root| find_config_in_dir(&root)) {
        return Some(path);
    }

    if let Some(path) = dirs::config_dir().and_then(|dir| find_config_in_dir(&dir.join("dotver")))
    {
        return Some(path);
    }

    dirs::home_dir().and_then(|home| find_config_in_dir(&home))
}

/// Find a config file in a specific directory.
pub fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// Find the git repository root by walking up the directory tree.
fn find_git_root() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    cwd.ancestors()
        .find(|dir| dir.join(".git").exists())
        .map(Path::to_path_buf)
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug)]
pub enum ConfigFileError {
    /// File not found
    NotFound(PathBuf),
    /// IO error reading file
    Io(std::io::Error),
    /// YAML parsing error
    Parse(serde_yaml::Error),
}

impl std::fmt::Display for ConfigFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(path) => {
                write!(f, "Config file not found: {}", path.display())
            }
            Self::Io(e) => write!(f, "Failed to read config file: {e}"),
            Self::Parse(e) => write!(f, "Failed to parse config file: {e}"),
        }
    }
}

impl std::error::Error for ConfigFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigFileError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_yaml::Error> for ConfigFileError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Parse(err)
    }
}

impl From<ConfigFileError> for crate::error::Error {
    fn from(err: ConfigFileError) -> Self {
        match err {
            ConfigFileError::Io(source) => Self::from(source),
            other => Self::config(other.to_string()),
        }
    }
}

/// Load a `GateConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> Result<GateConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let config: GateConfig = serde_yaml::from_str(&content)?;
    tracing::debug!(
        "Loaded {} version requirements from {}",
        config.requirements.len(),
        path.display()
    );
    Ok(config)
}

/// Load config from discovered file, or return default.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (GateConfig, Option<PathBuf>) {
    discover_config_file(explicit_path).map_or_else(
        || (GateConfig::default(), None),
        |path| match load_config_file(&path) {
            Ok(config) => (config, Some(path)),
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                (GateConfig::default(), None)
            }
        },
    )
}

// ============================================================================
// Configuration Merging
// ============================================================================

impl GateConfig {
    /// Merge another config into this one, with `other` taking precedence.
    ///
    /// Requirements are merged per tool. Development sentinels are combined.
    pub fn merge(&mut self, other: &Self) {
        for (tool, constraint) in &other.requirements {
            self.requirements.insert(tool.clone(), constraint.clone());
        }

        for sentinel in &other.development_versions {
            if !self.development_versions.contains(sentinel) {
                self.development_versions.push(sentinel.clone());
            }
        }

        if other.allow_missing {
            self.allow_missing = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".dotver.yaml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "requirements:\n  npm: '>=5.4.0'\n  go: '>=1.11'\nallow_missing: true"
        )
        .unwrap();

        let config = load_config_file(&path).unwrap();
        assert_eq!(config.requirements.len(), 2);
        assert_eq!(config.requirements["npm"], ">=5.4.0");
        assert!(config.allow_missing);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_config_file(Path::new("/nonexistent/.dotver.yaml")).unwrap_err();
        assert!(matches!(err, ConfigFileError::NotFound(_)));
    }

    #[test]
    fn test_load_invalid_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dotver.yaml");
        std::fs::write(&path, "requirements: [not, a, map]").unwrap();

        let err = load_config_file(&path).unwrap_err();
        assert!(matches!(err, ConfigFileError::Parse(_)));
        assert!(err.to_string().starts_with("Failed to parse config file"));
    }

    #[test]
    fn test_find_config_in_dir_prefers_hidden_yaml() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("dotver.yml"), "").unwrap();
        std::fs::write(dir.path().join(".dotver.yaml"), "").unwrap();

        let found = find_config_in_dir(dir.path()).unwrap();
        assert_eq!(found.file_name().unwrap(), ".dotver.yaml");
    }

    #[test]
    fn test_explicit_path_wins() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.yaml");
        std::fs::write(&path, "allow_missing: true").unwrap();

        let (config, loaded_from) = load_or_default(Some(&path));
        assert_eq!(loaded_from.as_deref(), Some(path.as_path()));
        assert!(config.allow_missing);
    }

    #[test]
    fn test_merge() {
        let mut base = GateConfig::builder()
            .require("npm", ">=5.4.0")
            .require("go", ">=1.11")
            .build();
        let overrides = GateConfig::builder()
            .require("npm", ">=6")
            .development_version("dev")
            .build();

        base.merge(&overrides);
        assert_eq!(base.requirements["npm"], ">=6");
        assert_eq!(base.requirements["go"], ">=1.11");
        assert_eq!(base.development_versions, vec!["development", "dev"]);
    }
}
