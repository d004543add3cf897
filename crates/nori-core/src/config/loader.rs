//! Configuration file discovery and loading

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::overlay::RawOverlay;
use crate::error::NoriError;
use crate::result::Result;

/// On-disk configuration document: an ordered sequence of overlay records
///
/// JSON/YAML files carry the list under `overlays`; TOML files use repeated
/// `[[overlay]]` tables.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigDocument {
    #[serde(default, alias = "overlay")]
    pub overlays: Vec<RawOverlay>,
}

/// Configuration loader for discovering and loading config files
pub struct ConfigLoader;

impl ConfigLoader {
    /// Auto-discover config file by traversing upward from start_path
    ///
    /// Searches for config files in the following order:
    /// 1. `.norirc.json` - NORI dotfile config (JSON)
    /// 2. `.norirc.toml` - NORI dotfile config (TOML)
    /// 3. `nori.yaml` - unified config (YAML)
    /// 4. `nori.yml` - unified config (YAML, short extension)
    /// 5. `nori.json` - unified config (JSON)
    ///
    /// Starts from the given directory and moves up the directory tree until
    /// a config is found or the filesystem root is reached.
    pub fn auto_discover(start_path: &Path) -> Result<Option<PathBuf>> {
        let mut current = start_path
            .canonicalize()
            .map_err(|e| NoriError::config_error(format!("Invalid path: {e}")))?;

        loop {
            for filename in &[
                ".norirc.json",
                ".norirc.toml",
                "nori.yaml",
                "nori.yml",
                "nori.json",
            ] {
                let config_path = current.join(filename);
                if config_path.exists() && config_path.is_file() {
                    tracing::debug!("Found config: {}", config_path.display());
                    return Ok(Some(config_path));
                }
            }

            // Move up to parent directory
            if let Some(parent) = current.parent() {
                current = parent.to_path_buf();
            } else {
                // Reached filesystem root
                break;
            }
        }

        Ok(None)
    }

    /// Load overlay sources from a specific file
    ///
    /// Supports JSON (.json), YAML (.yaml, .yml), and TOML (.toml) formats.
    /// The returned sources are raw: pass them to
    /// [`super::OverlayList::load`] together with a rule catalog to obtain a
    /// validated overlay list.
    pub fn load_from_file(path: &Path) -> Result<Vec<RawOverlay>> {
        let content = fs::read_to_string(path).map_err(|e| NoriError::io_error(path, e))?;
        let ext = path.extension().and_then(|e| e.to_str());

        let document: ConfigDocument = match ext {
            Some("json") => serde_json::from_str(&content).map_err(|e| {
                NoriError::config_error(format!(
                    "Failed to parse '{}' as JSON: {e}",
                    path.display()
                ))
            })?,
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content).map_err(|e| {
                NoriError::config_error(format!(
                    "Failed to parse '{}' as YAML: {e}",
                    path.display()
                ))
            })?,
            Some("toml") => toml::from_str(&content).map_err(|e| {
                NoriError::config_error(format!(
                    "Failed to parse '{}' as TOML: {e}",
                    path.display()
                ))
            })?,
            _ => {
                return Err(NoriError::config_error(format!(
                    "Unsupported config extension for '{}' (expected .json, .yaml, .yml, or .toml)",
                    path.display()
                )));
            }
        };

        tracing::debug!(
            overlays = document.overlays.len(),
            "loaded overlay sources from {}",
            path.display()
        );
        Ok(document.overlays)
    }

    /// Load overlay sources from path or auto-discover
    ///
    /// If a custom path is provided, loads from that path. Otherwise attempts
    /// to auto-discover a config file starting from the given directory (or
    /// the current directory).
    pub fn load(custom_path: Option<&Path>, start_dir: Option<&Path>) -> Result<Vec<RawOverlay>> {
        let config_path = if let Some(path) = custom_path {
            if !path.exists() {
                return Err(NoriError::config_error(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            path.to_path_buf()
        } else {
            let search_dir = start_dir.unwrap_or_else(|| Path::new("."));
            let current_dir = search_dir.canonicalize().map_err(|e| {
                NoriError::config_error(format!("Failed to resolve directory: {e}"))
            })?;

            Self::auto_discover(&current_dir)?.ok_or_else(|| {
                NoriError::config_error(
                    "No config file found (.norirc.json, .norirc.toml, nori.yaml, nori.yml, or nori.json)"
                        .to_string(),
                )
            })?
        };

        Self::load_from_file(&config_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_temp_config(dir: &Path, filename: &str, content: &str) -> PathBuf {
        let path = dir.join(filename);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_from_file_json() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = create_temp_config(
            temp_dir.path(),
            "nori.json",
            r#"{
                "overlays": [
                    {
                        "patterns": ["**/*.json"],
                        "plugin": "jsonc",
                        "rules": { "no-comments": "off" }
                    }
                ]
            }"#,
        );

        let sources = ConfigLoader::load_from_file(&config_path).unwrap();
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].patterns, vec!["**/*.json"]);
        assert_eq!(sources[0].rules.len(), 1);
    }

    #[test]
    fn test_load_from_file_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = create_temp_config(
            temp_dir.path(),
            "nori.yaml",
            r#"
overlays:
  - patterns: ["**/*.json", "**/*.jsonc", "**/*.json5"]
    plugin: jsonc
    extends: all
    rules:
      no-comments: "off"
      indent: ["error", 2]
"#,
        );

        let sources = ConfigLoader::load_from_file(&config_path).unwrap();
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].extends.as_deref(), Some("all"));
        assert_eq!(sources[0].rules.len(), 2);
    }

    #[test]
    fn test_load_from_file_toml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = create_temp_config(
            temp_dir.path(),
            ".norirc.toml",
            r#"
[[overlay]]
patterns = ["**/package.json"]
plugin = "jsonc"

[overlay.rules]
no-comments = "error"
"#,
        );

        let sources = ConfigLoader::load_from_file(&config_path).unwrap();
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].patterns, vec!["**/package.json"]);
        assert_eq!(sources[0].rules.0[0].0, "no-comments");
    }

    #[test]
    fn test_auto_discover() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("src/nested");
        fs::create_dir_all(&nested).unwrap();

        // Create config in root
        create_temp_config(temp_dir.path(), "nori.json", r#"{"overlays": []}"#);

        // Search from nested directory
        let found = ConfigLoader::auto_discover(&nested).unwrap();
        assert!(found.is_some());
    }

    #[test]
    fn test_auto_discover_priority() {
        let temp_dir = TempDir::new().unwrap();

        create_temp_config(temp_dir.path(), ".norirc.json", r#"{"overlays": []}"#);
        create_temp_config(temp_dir.path(), "nori.yaml", "overlays: []");
        create_temp_config(temp_dir.path(), "nori.json", r#"{"overlays": []}"#);

        // Should find .norirc.json first (highest priority)
        let found = ConfigLoader::auto_discover(temp_dir.path()).unwrap();
        assert!(found.is_some());
        assert_eq!(found.unwrap().file_name().unwrap(), ".norirc.json");
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = ConfigLoader::load_from_file(Path::new("nonexistent.json"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let config_path =
            create_temp_config(temp_dir.path(), "invalid.json", r#"{ invalid json }"#);

        let result = ConfigLoader::load_from_file(&config_path);
        assert!(result.is_err());
    }

    #[test]
    fn test_unsupported_extension() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = create_temp_config(temp_dir.path(), "nori.ini", "overlays=");

        let result = ConfigLoader::load_from_file(&config_path);
        assert!(result.is_err());
    }
}
