use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_PATH: &str = "config/quickchat.json";
pub const DEFAULT_CHANNEL_PREFIX: &str = "quickchat_room_";
pub const DEFAULT_SYSTEM_SENDER: &str = "Sistema";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Prepended to the room code to form the channel name. Tabs only see
    /// each other when this matches exactly.
    pub channel_prefix: String,
    /// Sender name used for join/leave notices.
    pub system_sender: String,
    /// Number of tabs opened at startup.
    pub initial_tabs: usize,
    pub window_title: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            channel_prefix: DEFAULT_CHANNEL_PREFIX.to_string(),
            system_sender: DEFAULT_SYSTEM_SENDER.to_string(),
            initial_tabs: 2,
            window_title: "QuickChat".to_string(),
        }
    }
}

/// Where the active config came from. Anything but `File` means defaults.
#[derive(Debug)]
pub enum ConfigSource {
    File,
    Unreadable(std::io::Error),
    Invalid(serde_json::Error),
}

/// Reads `path`, falling back to `AppConfig::default()` when the file is
/// missing or does not parse. Logging is left to the caller.
pub fn load_config(path: &str) -> (AppConfig, ConfigSource) {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) => return (AppConfig::default(), ConfigSource::Unreadable(err)),
    };
    match serde_json::from_str::<AppConfig>(&content) {
        Ok(config) => (config, ConfigSource::File),
        Err(err) => (AppConfig::default(), ConfigSource::Invalid(err)),
    }
}

pub fn save_config(path: &str, config: &AppConfig) -> std::io::Result<()> {
    let target = Path::new(path);
    if let Some(dir) = target.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    fs::write(target, serde_json::to_string_pretty(config)?)
}
