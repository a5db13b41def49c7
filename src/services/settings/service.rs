use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

use crate::models::settings::Settings;

/// Overrides the config file location.
pub const CONFIG_ENV_VAR: &str = "CLASS_SCHEDULE_CONFIG";

const CONFIG_FILE_NAME: &str = "config.toml";
const DATABASE_FILE_NAME: &str = "schedule.db";

/// Resolves and reads the startup configuration.
pub struct SettingsService {
    config_path: Option<PathBuf>,
}

impl SettingsService {
    /// Uses `$CLASS_SCHEDULE_CONFIG` if set, else `<config dir>/config.toml`.
    pub fn new() -> Self {
        let config_path = std::env::var_os(CONFIG_ENV_VAR)
            .map(PathBuf::from)
            .or_else(|| project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME)));
        Self { config_path }
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: Some(path.into()),
        }
    }

    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Reads the config file. A missing file yields defaults; a malformed
    /// file or an unusable vocabulary is an error.
    pub fn load(&self) -> Result<Settings> {
        let Some(path) = self.config_path.as_deref() else {
            log::warn!("No config directory available, using default settings");
            return Ok(Settings::default());
        };

        if !path.exists() {
            log::info!("No config at {}, using defaults", path.display());
            return Ok(Settings::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config from {}", path.display()))?;
        let settings = Settings::from_toml(&content)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings in {}: {}", path.display(), e))?;

        log::info!(
            "Loaded settings from {}: {} day(s) x {} hour(s)",
            path.display(),
            settings.vocabulary.days.len(),
            settings.vocabulary.hours.len()
        );
        Ok(settings)
    }

    /// Writes `settings` to the config path, creating parent directories.
    pub fn save(&self, settings: &Settings) -> Result<()> {
        let path = self
            .config_path
            .as_deref()
            .ok_or_else(|| anyhow!("No config path available"))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create dir {}", parent.display()))?;
        }

        let content = settings.to_toml().context("failed to serialize settings")?;
        std::fs::write(path, content)
            .with_context(|| format!("failed to write config to {}", path.display()))?;
        Ok(())
    }

    /// Writes a default config file on first run so the labels can be
    /// edited. Returns whether a file was created.
    pub fn initialize_if_missing(&self) -> Result<bool> {
        match self.config_path.as_deref() {
            Some(path) if !path.exists() => {
                self.save(&Settings::default())?;
                log::info!("Wrote default config to {}", path.display());
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

impl Default for SettingsService {
    fn default() -> Self {
        Self::new()
    }
}

/// Database file location: the configured path, else the platform data dir,
/// else the working directory.
pub fn resolve_database_path(settings: &Settings) -> Result<PathBuf> {
    if let Some(path) = &settings.database_path {
        return Ok(path.clone());
    }

    match project_dirs() {
        Some(dirs) => {
            let data_dir = dirs.data_dir();
            std::fs::create_dir_all(data_dir)
                .with_context(|| format!("failed to create dir {}", data_dir.display()))?;
            Ok(data_dir.join(DATABASE_FILE_NAME))
        }
        None => Ok(PathBuf::from(DATABASE_FILE_NAME)),
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("org", "ClassSchedule", "ClassSchedule")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::vocabulary::Vocabulary;
    use serial_test::serial;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let service = SettingsService::with_path(dir.path().join("config.toml"));
        assert_eq!(service.load().unwrap(), Settings::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let service = SettingsService::with_path(dir.path().join("nested").join("config.toml"));

        let mut settings = Settings::default();
        settings.vocabulary = Vocabulary::new(["Mon", "Wed"], ["09:00", "11:00"]);
        settings.export_padding = 32;
        service.save(&settings).unwrap();

        assert_eq!(service.load().unwrap(), settings);
    }

    #[test]
    fn test_first_run_writes_default_config_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let service = SettingsService::with_path(&path);

        assert!(service.initialize_if_missing().unwrap());
        assert!(path.exists());
        assert_eq!(service.load().unwrap(), Settings::default());

        std::fs::write(&path, "export_padding = 4\n").unwrap();
        assert!(!service.initialize_if_missing().unwrap());
        assert_eq!(service.load().unwrap().export_padding, 4);
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "export_padding = \"wide\"").unwrap();
        assert!(SettingsService::with_path(&path).load().is_err());
    }

    #[test]
    fn test_invalid_vocabulary_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[vocabulary]\ndays = []\nhours = [\"08:00\"]\n").unwrap();

        let err = SettingsService::with_path(&path).load().unwrap_err();
        assert!(err.to_string().contains("Invalid settings"));
    }

    #[test]
    #[serial]
    fn test_env_var_overrides_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::env::set_var(CONFIG_ENV_VAR, &path);
        let service = SettingsService::new();
        std::env::remove_var(CONFIG_ENV_VAR);

        assert_eq!(service.config_path(), Some(path.as_path()));
    }

    #[test]
    fn test_configured_database_path_wins() {
        let mut settings = Settings::default();
        settings.database_path = Some(PathBuf::from("/tmp/elsewhere.db"));
        assert_eq!(
            resolve_database_path(&settings).unwrap(),
            PathBuf::from("/tmp/elsewhere.db")
        );
    }
}
