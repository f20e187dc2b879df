use serde::Deserialize;

/// One playlist entry, immutable once loaded.
///
/// The playlist resource uses camelCase keys; `duration` carries a
/// pre-extracted length in seconds and is authoritative when present.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    pub src: String,
    pub title: String,
    pub artist: String,
    pub cover: String,
    /// Lyric source URI, when the track ships timed lyrics.
    #[serde(default)]
    pub lrc: Option<String>,
    /// Label/stream link shown next to the artist, when one exists.
    #[serde(default)]
    pub copyright_url: Option<String>,
    /// Known duration in seconds; `None` means probe the render target.
    #[serde(default)]
    pub duration: Option<f64>,
}
