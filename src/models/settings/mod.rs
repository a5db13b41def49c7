// Settings module
// Startup configuration read from config.toml

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::models::schedule::ScheduleError;
use crate::models::vocabulary::Vocabulary;

/// Endpoint the contact form posts to.
pub const DEFAULT_CONTACT_ENDPOINT: &str = "https://formspree.io/f/xpwlqyob";

/// Margin (in pixels) added around an exported grid image.
pub const DEFAULT_EXPORT_PADDING: u32 = 20;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// SQLite file holding the schedule. Defaults to the platform data dir.
    pub database_path: Option<PathBuf>,
    pub contact_endpoint: String,
    pub export_padding: u32,
    /// Initial appearance. `None` follows the operating system.
    pub dark_mode: Option<bool>,
    /// Day and hour labels. Kept last so it serializes as a trailing table.
    pub vocabulary: Vocabulary,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database_path: None,
            contact_endpoint: DEFAULT_CONTACT_ENDPOINT.to_string(),
            export_padding: DEFAULT_EXPORT_PADDING,
            dark_mode: None,
            vocabulary: Vocabulary::default(),
        }
    }
}

impl Settings {
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    pub fn validate(&self) -> Result<(), ScheduleError> {
        self.vocabulary.validate()
    }
}
