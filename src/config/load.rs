use std::{env, path::PathBuf};

use super::schema::Settings;

/// Where settings come from, highest precedence first: `DUETTO__`-prefixed
/// environment variables, then the optional `config.toml`, then struct
/// defaults. A player embedded without any config file runs on defaults.
impl Settings {
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let mut builder = ::config::Config::builder();

        if let Some(path) = resolve_config_path() {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("DUETTO")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Reject values the player cannot run with.
    pub fn validate(&self) -> Result<(), String> {
        if self.playback.initial_volume > 100 {
            return Err("playback.initial_volume must be <= 100".to_string());
        }
        if self.playback.volume_step == 0 || self.playback.volume_step > 100 {
            return Err("playback.volume_step must be in 1..=100".to_string());
        }
        if !self.playlist.resource_template.contains("{name}") {
            return Err("playlist.resource_template must contain {name}".to_string());
        }
        Ok(())
    }
}

/// The config file to read: `DUETTO_CONFIG_PATH` wins over the XDG default.
pub fn resolve_config_path() -> Option<PathBuf> {
    env::var_os("DUETTO_CONFIG_PATH")
        .map(PathBuf::from)
        .or_else(default_config_path)
}

/// `$XDG_CONFIG_HOME/duetto/config.toml`, falling back to
/// `~/.config/duetto/config.toml`. `None` when neither variable is set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))?;
    Some(config_home.join("duetto").join("config.toml"))
}
