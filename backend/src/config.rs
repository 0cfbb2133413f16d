//! # Backend Configuration
//!
//! Settings are read from a YAML file:
//!
//! ```yaml
//! data_directory: "/home/me/.local/share/MedNote"
//! key_prefix: "mednote"
//! seed_on_first_run: true
//! intake_mode:
//!   kind: free_text
//! ```
//!
//! Every field is optional. `MEDNOTE_DATA_DIR` overrides `data_directory`.

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::IntakeMode;

pub const DATA_DIR_ENV: &str = "MEDNOTE_DATA_DIR";
const APP_DIRECTORY_NAME: &str = "MedNote";
const DEFAULT_KEY_PREFIX: &str = "mednote";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Where the JSON slot files live
    pub data_directory: PathBuf,
    /// Namespace for every storage key
    pub key_prefix: String,
    /// Start fresh installations with the bundled demo records
    pub seed_on_first_run: bool,
    pub intake_mode: IntakeMode,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            data_directory: default_data_directory(),
            key_prefix: DEFAULT_KEY_PREFIX.to_string(),
            seed_on_first_run: true,
            intake_mode: IntakeMode::default(),
        }
    }
}

/// Platform data dir (e.g. `~/.local/share/MedNote`), or the temp dir if there is none
pub fn default_data_directory() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(APP_DIRECTORY_NAME)
}

impl BackendConfig {
    /// Read the config file at `path`. A missing file yields the defaults.
    /// The data directory environment override is applied either way.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let config = if path.exists() {
            let yaml = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file {}", path.display()))?;
            let config: BackendConfig = serde_yaml::from_str(&yaml)
                .with_context(|| format!("Invalid config file {}", path.display()))?;
            info!("Loaded config from {}", path.display());
            config
        } else {
            info!("No config file at {}, using defaults", path.display());
            BackendConfig::default()
        };

        Ok(config.with_env_overrides())
    }

    /// Write the config as YAML (temp file + rename)
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let yaml = serde_yaml::to_string(self).context("Failed to serialize config")?;
        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, yaml)?;
        fs::rename(&temp_path, path)?;

        debug!("Saved config to {}", path.display());
        Ok(())
    }

    pub fn with_env_overrides(mut self) -> Self {
        if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
            self.data_directory = PathBuf::from(dir);
            info!(
                "Data directory overridden by {}: {}",
                DATA_DIR_ENV,
                self.data_directory.display()
            );
        }
        self
    }

    pub fn keys(&self) -> StorageKeys {
        StorageKeys::with_prefix(&self.key_prefix)
    }
}

/// The fixed slot names, one per entity kind plus the session flag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    pub patients: String,
    pub consultations: String,
    pub exams: String,
    pub reminders: String,
    pub session: String,
}

impl StorageKeys {
    pub fn with_prefix(prefix: &str) -> Self {
        Self {
            patients: format!("{}_patients", prefix),
            consultations: format!("{}_consultations", prefix),
            exams: format!("{}_exams", prefix),
            reminders: format!("{}_reminders", prefix),
            session: format!("{}:isAuthenticated", prefix),
        }
    }
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self::with_prefix(DEFAULT_KEY_PREFIX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_keys() {
        let keys = StorageKeys::default();
        assert_eq!(keys.patients, "mednote_patients");
        assert_eq!(keys.consultations, "mednote_consultations");
        assert_eq!(keys.exams, "mednote_exams");
        assert_eq!(keys.reminders, "mednote_reminders");
        assert_eq!(keys.session, "mednote:isAuthenticated");
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config: BackendConfig =
            serde_yaml::from_str("key_prefix: clinica\nseed_on_first_run: false\n").unwrap();

        assert_eq!(config.keys().patients, "clinica_patients");
        assert!(!config.seed_on_first_run);
        assert_eq!(config.intake_mode, IntakeMode::FreeText);
        assert!(config.data_directory.ends_with(APP_DIRECTORY_NAME));
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("conf").join("mednote.yaml");
        let config = BackendConfig {
            data_directory: temp_dir.path().join("data"),
            key_prefix: "teste".to_string(),
            seed_on_first_run: false,
            intake_mode: IntakeMode::Checklist {
                chronic_disease_options: vec!["HAS".to_string()],
                medication_options: vec!["Losartana".to_string()],
            },
        };

        config.save(&path).unwrap();
        let yaml = fs::read_to_string(&path).unwrap();
        let reloaded: BackendConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(reloaded, config);
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("mednote.yaml");
        fs::write(&path, "seed_on_first_run: [not, a, bool]").unwrap();

        let err = BackendConfig::load(&path).unwrap_err();
        assert!(err.to_string().contains("Invalid config file"));
    }
}
