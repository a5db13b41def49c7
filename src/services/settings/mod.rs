mod service;

pub use service::{resolve_database_path, SettingsService, CONFIG_ENV_VAR};
