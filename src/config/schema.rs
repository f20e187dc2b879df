use serde::Deserialize;

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/duetto/config.toml` or `~/.config/duetto/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `DUETTO__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub playlist: PlaylistSettings,
    pub playback: PlaybackSettings,
    pub lyrics: LyricsSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            playlist: PlaylistSettings::default(),
            playback: PlaybackSettings::default(),
            lyrics: LyricsSettings::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlaylistSettings {
    /// Playlist resource fetched when no query parameter names one.
    pub default_resource: String,
    /// Template applied to the `?playlist=` query parameter; `{name}` is
    /// replaced by the parameter value.
    pub resource_template: String,
}

impl Default for PlaylistSettings {
    fn default() -> Self {
        Self {
            default_resource: "./music/playlist.json".to_string(),
            resource_template: "./music/{name}.json".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlaybackSettings {
    /// Volume percent both targets start with (0-100).
    pub initial_volume: u8,
    /// Percent step applied by the volume up/down commands.
    pub volume_step: u8,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            initial_volume: 100,
            volume_step: 20,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LyricsSettings {
    /// Glyph rendered for a timed lyric line with empty text.
    pub placeholder: String,
}

impl Default for LyricsSettings {
    fn default() -> Self {
        Self {
            placeholder: "♪".to_string(),
        }
    }
}
