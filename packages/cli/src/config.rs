use codestudio_editor::{DEFAULT_URL_TEMPLATE, PUBLISH_NOTIFICATION_MS};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_CONFIG_NAME: &str = "codestudio.config.json";

/// CodeStudio configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory holding the persisted project list
    #[serde(default = "default_storage_dir")]
    pub storage_dir: String,

    /// Directory the active project's buffers are checked out into
    #[serde(default = "default_workspace_dir")]
    pub workspace_dir: String,

    /// Pattern for fabricated publish URLs; `{id}` is substituted
    #[serde(default = "default_publish_url_template")]
    pub publish_url_template: String,

    /// How long the publish notification stays up
    #[serde(default = "default_notification_ms")]
    pub notification_ms: u64,

    /// Where `codestudio preview` writes the composed document
    #[serde(default = "default_preview_file")]
    pub preview_file: String,

    /// Port for `codestudio serve`
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_storage_dir() -> String {
    ".codestudio".to_string()
}

fn default_workspace_dir() -> String {
    ".".to_string()
}

fn default_publish_url_template() -> String {
    DEFAULT_URL_TEMPLATE.to_string()
}

fn default_notification_ms() -> u64 {
    PUBLISH_NOTIFICATION_MS
}

fn default_preview_file() -> String {
    "preview.html".to_string()
}

fn default_port() -> u16 {
    3030
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    pub fn get_storage_dir(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.storage_dir)
    }

    pub fn get_workspace_dir(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.workspace_dir)
    }

    pub fn get_preview_file(&self, cwd: &str) -> PathBuf {
        self.get_workspace_dir(cwd).join(&self.preview_file)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_dir: default_storage_dir(),
            workspace_dir: default_workspace_dir(),
            publish_url_template: default_publish_url_template(),
            notification_ms: default_notification_ms(),
            preview_file: default_preview_file(),
            port: default_port(),
        }
    }
}
