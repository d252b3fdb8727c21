use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Settings {
    /// When enabled the application initialises the logger at debug level.
    /// Defaults to `false` when the field is missing in the settings file.
    #[serde(default)]
    pub debug_logging: bool,
    /// Directory holding the persisted profile (accounts, session, history).
    /// If `None`, a platform default is used.
    pub profile_dir: Option<String>,
    /// Seconds an error/success banner stays visible before auto-dismiss.
    #[serde(default = "default_banner_duration")]
    pub banner_duration: f32,
    /// Maximum number of entries kept per history category.
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
    /// Last known window size. If absent, a default size is used.
    #[serde(default)]
    pub window_size: Option<(f32, f32)>,
}

fn default_banner_duration() -> f32 {
    5.0
}

fn default_history_limit() -> usize {
    10
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug_logging: false,
            profile_dir: None,
            banner_duration: default_banner_duration(),
            history_limit: default_history_limit(),
            window_size: Some((900.0, 640.0)),
        }
    }
}

impl Settings {
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).unwrap_or_default();
        if content.is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, path: &str) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Resolve the profile directory: explicit override, else the platform
    /// config dir, else the working directory as a last resort.
    pub fn profile_dir(&self) -> PathBuf {
        if let Some(dir) = &self.profile_dir {
            return PathBuf::from(dir);
        }
        dirs_next::config_dir()
            .map(|p| p.join("StegoStudio"))
            .unwrap_or_else(|| PathBuf::from("stego_studio_profile"))
    }
}
