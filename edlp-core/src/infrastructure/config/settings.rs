// edlp-core/src/infrastructure/config/settings.rs

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::infrastructure::error::InfrastructureError;

/// Persistence backend behind the `PolicyStore` port.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    #[default]
    DuckDB,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = InfrastructureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "duckdb" => Ok(Self::DuckDB),
            "memory" => Ok(Self::Memory),
            other => Err(InfrastructureError::ConfigError(format!(
                "Unknown store backend '{}'. Expected: duckdb, memory.",
                other
            ))),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Validate)]
pub struct AppConfig {
    #[serde(default = "default_bind")]
    #[validate(length(min = 1, message = "Bind address cannot be empty"))]
    pub bind: String,

    #[serde(default)]
    pub store: StoreBackend,

    #[serde(rename = "db-path", default = "default_db_path")]
    #[validate(length(min = 1, message = "Database path cannot be empty"))]
    pub db_path: String,

    #[serde(rename = "export-prefix", default = "default_export_prefix")]
    #[validate(length(min = 1, message = "Export prefix cannot be empty"))]
    pub export_prefix: String,

    #[serde(default = "default_true")]
    pub cors: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            store: StoreBackend::default(),
            db_path: default_db_path(),
            export_prefix: default_export_prefix(),
            cors: true,
        }
    }
}

fn default_bind() -> String {
    "0.0.0.0:3000".to_string()
}
fn default_db_path() -> String {
    "edlp_db.duckdb".to_string()
}
fn default_export_prefix() -> String {
    "eDLP_Strategy_Export".to_string()
}
fn default_true() -> bool {
    true
}

// --- LOADER ---

/// Loads `edlp.yaml` from `config_dir`, layers `EDLP_*` env vars on top and
/// validates the result. A missing file is not an error: defaults apply.
/// A missing directory is.
#[instrument(skip(config_dir))]
pub fn load_app_config(config_dir: &Path) -> Result<AppConfig, InfrastructureError> {
    if !config_dir.is_dir() {
        return Err(InfrastructureError::ConfigNotFound(
            config_dir.display().to_string(),
        ));
    }

    let mut config = match find_config_file(config_dir) {
        Some(path) => {
            info!(path = ?path, "Loading configuration");
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config at {:?}", path))?;
            serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse config YAML at {:?}", path))?
        }
        None => {
            warn!(dir = ?config_dir, "No edlp.yaml found, using defaults");
            AppConfig::default()
        }
    };

    apply_env_overrides(&mut config, |key| std::env::var(key).ok())?;
    config.validate()?;

    Ok(config)
}

fn find_config_file(root: &Path) -> Option<PathBuf> {
    ["edlp.yaml", "edlp.yml", "edlp_conf.yaml"]
        .into_iter()
        .map(|name| root.join(name))
        .find(|p| p.exists())
}

// `lookup` is injected so tests don't have to mutate the process environment.
fn apply_env_overrides<F>(config: &mut AppConfig, lookup: F) -> Result<(), InfrastructureError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(val) = lookup("EDLP_BIND") {
        info!(old = ?config.bind, new = ?val, "Overriding bind address via ENV");
        config.bind = val;
    }
    if let Some(val) = lookup("EDLP_DB_PATH") {
        info!(old = ?config.db_path, new = ?val, "Overriding database path via ENV");
        config.db_path = val;
    }
    if let Some(val) = lookup("EDLP_STORE") {
        config.store = val.parse()?;
        info!(store = ?config.store, "Overriding store backend via ENV");
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_missing_file_uses_defaults() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let config = load_app_config(dir.path())?;
        assert_eq!(config.bind, "0.0.0.0:3000");
        assert_eq!(config.store, StoreBackend::DuckDB);
        assert_eq!(config.export_prefix, "eDLP_Strategy_Export");
        assert!(config.cors);
        Ok(())
    }

    #[test]
    fn test_missing_directory_is_an_error() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let result = load_app_config(&dir.path().join("nowhere"));
        assert!(matches!(result, Err(InfrastructureError::ConfigNotFound(_))));
        Ok(())
    }

    #[test]
    fn test_yaml_file_is_loaded() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        fs::write(
            dir.path().join("edlp.yaml"),
            "bind: 127.0.0.1:8080\nstore: memory\ndb-path: /var/lib/edlp.duckdb\ncors: false\n",
        )?;
        let config = load_app_config(dir.path())?;
        assert_eq!(config.bind, "127.0.0.1:8080");
        assert_eq!(config.store, StoreBackend::Memory);
        assert_eq!(config.db_path, "/var/lib/edlp.duckdb");
        assert!(!config.cors);
        Ok(())
    }

    #[test]
    fn test_empty_values_fail_validation() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        fs::write(dir.path().join("edlp.yaml"), "db-path: \"\"\n")?;
        let result = load_app_config(dir.path());
        assert!(matches!(result, Err(InfrastructureError::InvalidConfig(_))));
        Ok(())
    }

    #[test]
    fn test_broken_yaml_is_reported() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        fs::write(dir.path().join("edlp.yaml"), "bind: [unclosed\n")?;
        assert!(load_app_config(dir.path()).is_err());
        Ok(())
    }

    #[test]
    fn test_env_overrides() -> anyhow::Result<()> {
        let env: HashMap<&str, &str> = HashMap::from([
            ("EDLP_BIND", "127.0.0.1:9000"),
            ("EDLP_DB_PATH", ":memory:"),
            ("EDLP_STORE", "Memory"),
        ]);
        let mut config = AppConfig::default();
        apply_env_overrides(&mut config, |k| env.get(k).map(|v| v.to_string()))?;
        assert_eq!(config.bind, "127.0.0.1:9000");
        assert_eq!(config.db_path, ":memory:");
        assert_eq!(config.store, StoreBackend::Memory);
        Ok(())
    }

    #[test]
    fn test_unknown_backend_is_rejected() {
        let mut config = AppConfig::default();
        let result = apply_env_overrides(&mut config, |k| {
            (k == "EDLP_STORE").then(|| "postgres".to_string())
        });
        assert!(matches!(result, Err(InfrastructureError::ConfigError(_))));
    }
}
