use crate::{
    common::{CommandOpener, XdgIconTheme},
    config::Messages,
    error::Result,
};
use serde::{Deserialize, Serialize};

/// The config file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    /// Application name reported to the notification server
    pub app_name: String,
    /// Command used to open files and directories
    pub opener: String,
    /// Icon names to try, in order of preference
    pub icons: Vec<String>,
    /// Whether to ask the server to append to an existing bubble
    pub canonical_append: bool,
    /// Translated notification strings
    pub messages: Messages,
}

impl Default for ConfigFile {
    fn default() -> Self {
        ConfigFile {
            app_name: "DownloadNotify".into(),
            opener: "xdg-open".into(),
            icons: vec![
                "folder-download".into(),
                "emblem-downloads".into(),
                "web-browser".into(),
            ],
            canonical_append: true,
            messages: Messages::default(),
        }
    }
}

impl ConfigFile {
    /// Load ~/.config/download-notify/download-notify.toml
    #[mutants::skip] // Cannot test directly, depends on system state
    pub fn load() -> Result<Self> {
        Ok(confy::load("download-notify")?)
    }

    /// Build the opener from the configured command
    pub fn opener(&self) -> Result<CommandOpener> {
        self.opener.parse()
    }

    /// Look up the icon theme, if the xdg base directories are available
    #[mutants::skip] // Cannot test directly, depends on system state
    pub fn icon_theme(&self) -> Option<XdgIconTheme> {
        XdgIconTheme::new()
            .map_err(|e| log::debug!("Icon theme lookup unavailable: {e}"))
            .ok()
    }
}
