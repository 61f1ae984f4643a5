use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub mod theme;

pub use theme::Theme;

const DEFAULT_CONFIG_FILES: &[&str] = &[
    "knot.toml",
    "config/knot.toml",
    "crates/config/knot.toml",
    "../knot.toml",
    "../config/knot.toml",
    "../crates/config/knot.toml",
];

/// Stock greeting catalog for the ambient input placeholder
pub const DEFAULT_GREETINGS: [&str; 9] = [
    "Hello...",
    "Hola...",
    "Bonjour...",
    "Ciao...",
    "Olá...",
    "Guten Tag...",
    "Konnichiwa...",
    "Namaste...",
    "Salaam...",
];

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub placeholder: PlaceholderConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

/// Configuration for the input placeholder suggestion engine.
///
/// ```
/// use knot_config::PlaceholderConfig;
///
/// let placeholder = PlaceholderConfig::default();
/// assert_eq!(placeholder.rotation_interval_ms, 3000);
/// assert_eq!(placeholder.greetings.len(), 9);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceholderConfig {
    /// Ambient rotation period in milliseconds
    #[serde(default = "PlaceholderConfig::default_rotation_interval")]
    pub rotation_interval_ms: u64,
    /// Greeting catalog for ambient rotation
    #[serde(default = "PlaceholderConfig::default_greetings")]
    pub greetings: Vec<String>,
}

impl PlaceholderConfig {
    const fn default_rotation_interval() -> u64 {
        3_000
    }

    fn default_greetings() -> Vec<String> {
        DEFAULT_GREETINGS.iter().map(|s| s.to_string()).collect()
    }

    /// Rotation period as a [`Duration`]
    pub fn rotation_interval(&self) -> Duration {
        Duration::from_millis(self.rotation_interval_ms)
    }
}

impl Default for PlaceholderConfig {
    fn default() -> Self {
        Self {
            rotation_interval_ms: Self::default_rotation_interval(),
            greetings: Self::default_greetings(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Name of the theme applied at startup
    #[serde(default = "SessionConfig::default_theme_name")]
    pub default_theme: String,
}

impl SessionConfig {
    fn default_theme_name() -> String {
        "Navy Emerald".to_string()
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            default_theme: Self::default_theme_name(),
        }
    }
}

/// Load the application configuration by combining defaults, files, and environment overrides.
///
/// ```
/// use knot_config::load;
///
/// std::env::remove_var("KNOT_CONFIG");
///
/// let config = load().expect("configuration should load with defaults");
/// assert!(!config.placeholder.greetings.is_empty());
/// ```
pub fn load() -> anyhow::Result<AppConfig> {
    let defaults = AppConfig::default();

    let rotation_interval =
        i64::try_from(defaults.placeholder.rotation_interval_ms).unwrap_or(i64::MAX);

    let mut builder = config::Config::builder();
    builder = builder
        .set_default("placeholder.rotation_interval_ms", rotation_interval)
        .unwrap()
        .set_default(
            "placeholder.greetings",
            defaults.placeholder.greetings.clone(),
        )
        .unwrap()
        .set_default(
            "session.default_theme",
            defaults.session.default_theme.clone(),
        )
        .unwrap();

    let environment_overrides = config::Environment::with_prefix("KNOT").separator("__");

    let mut config_file_attached = false;

    if let Ok(path) = std::env::var("KNOT_CONFIG") {
        builder = builder.add_source(config::File::from(PathBuf::from(&path)));
        config_file_attached = true;
        debug!(path, "loading configuration via KNOT_CONFIG");
    } else if let Ok(cwd) = std::env::current_dir() {
        let fallback = DEFAULT_CONFIG_FILES
            .iter()
            .map(|candidate| cwd.join(candidate))
            .find(|path| path.exists());

        if let Some(path) = fallback {
            debug!(path = %path.display(), "loading configuration file");
            builder = builder.add_source(config::File::from(path));
            config_file_attached = true;
        }
    }

    if !config_file_attached {
        debug!("no configuration file found, relying on defaults and environment overrides");
    }

    builder = builder.add_source(environment_overrides);

    let cfg = builder.build().context("unable to build configuration")?;

    let mut config = cfg
        .try_deserialize::<AppConfig>()
        .context("invalid configuration")?;

    sanitize(&mut config);

    Ok(config)
}

/// Repair configuration values that would break the session rather than
/// failing startup over them.
fn sanitize(config: &mut AppConfig) {
    if config.placeholder.rotation_interval_ms == 0 {
        warn!("placeholder.rotation_interval_ms must be positive, using default");
        config.placeholder.rotation_interval_ms = PlaceholderConfig::default_rotation_interval();
    }

    config
        .placeholder
        .greetings
        .retain(|greeting| !greeting.trim().is_empty());
    if config.placeholder.greetings.is_empty() {
        warn!("placeholder.greetings is empty, using stock catalog");
        config.placeholder.greetings = PlaceholderConfig::default_greetings();
    }

    if !Theme::is_known(&config.session.default_theme) {
        warn!(
            theme = %config.session.default_theme,
            "unknown session.default_theme, using the first built-in theme"
        );
        config.session.default_theme = Theme::builtin()[0].name.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.placeholder.rotation_interval_ms, 3_000);
        assert_eq!(
            config.placeholder.rotation_interval(),
            Duration::from_secs(3)
        );
        assert_eq!(config.placeholder.greetings.len(), 9);
        assert_eq!(config.session.default_theme, "Navy Emerald");
    }

    #[test]
    fn test_sanitize_repairs_broken_values() {
        let mut config = AppConfig::default();
        config.placeholder.rotation_interval_ms = 0;
        config.placeholder.greetings = vec!["  ".to_string()];
        config.session.default_theme = "Vantablack".to_string();

        sanitize(&mut config);

        assert_eq!(config.placeholder.rotation_interval_ms, 3_000);
        assert_eq!(config.placeholder.greetings.len(), 9);
        assert_eq!(config.session.default_theme, "Navy Emerald");
    }
}
