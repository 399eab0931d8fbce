//! Desktop configuration document decoding and appearance resolution.

use platform_host::{
    SessionStore, LEGACY_SESSION_BACKGROUND_KEY, LEGACY_SESSION_THEME_COLOR_KEY,
    LEGACY_SESSION_TITLE_KEY, SESSION_BACKGROUND_KEY, SESSION_THEME_COLOR_KEY, SESSION_TITLE_KEY,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{ApplicationDescriptor, DesktopAppearance, WindowManagerConfig};

/// Request path of the desktop configuration document.
pub const DESKTOP_CONFIG_PATH: &str = "config.json";
/// Document title used when neither the session nor the config supplies one.
pub const DEFAULT_DESKTOP_TITLE: &str = "Retro Desktop";
/// Theme color used when neither the session nor the config supplies one.
pub const DEFAULT_THEME_COLOR: &str = "#000080";

#[derive(Debug, Error)]
/// Errors raised while decoding the desktop configuration document.
pub enum ConfigError {
    /// The document is not valid JSON or does not match the expected shape.
    #[error("invalid desktop config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// `desktop` section of the configuration document.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DesktopSection {
    pub background: Option<String>,
    pub title: Option<String>,
    pub theme_color: Option<String>,
}

/// Decoded configuration document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DesktopConfig {
    pub shortcuts: Vec<ApplicationDescriptor>,
    pub desktop: DesktopSection,
    pub window_manager: WindowManagerConfig,
}

/// Decodes a configuration document. Missing sections fall back to their defaults.
///
/// # Errors
///
/// Returns [`ConfigError::Parse`] when `raw` is not a valid configuration document.
pub fn parse_desktop_config(raw: &str) -> Result<DesktopConfig, ConfigError> {
    Ok(serde_json::from_str(raw)?)
}

/// Resolves the desktop appearance: session override, then config value, then built-in default.
///
/// Each override is looked up under its current key, then its legacy key. Empty strings count as
/// unset at every level.
pub fn resolve_appearance(section: &DesktopSection, session: &dyn SessionStore) -> DesktopAppearance {
    let pick = |keys: [&str; 2], configured: &Option<String>| {
        keys.into_iter()
            .find_map(|key| session.get_string(key).filter(|value| !value.is_empty()))
            .or_else(|| configured.clone().filter(|value| !value.is_empty()))
    };

    DesktopAppearance {
        background: pick(
            [SESSION_BACKGROUND_KEY, LEGACY_SESSION_BACKGROUND_KEY],
            &section.background,
        ),
        title: pick([SESSION_TITLE_KEY, LEGACY_SESSION_TITLE_KEY], &section.title)
            .unwrap_or_else(|| DEFAULT_DESKTOP_TITLE.to_string()),
        theme_color: pick(
            [SESSION_THEME_COLOR_KEY, LEGACY_SESSION_THEME_COLOR_KEY],
            &section.theme_color,
        )
        .unwrap_or_else(|| DEFAULT_THEME_COLOR.to_string()),
    }
}
