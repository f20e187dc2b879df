use tracing::warn;

use crate::config::PlaylistSettings;

use super::model::Track;

/// Resolve the playlist resource path from an optional query parameter.
///
/// `?playlist=name` selects an alternate resource through the configured
/// template; no parameter selects the default resource.
pub fn resource_path(param: Option<&str>, settings: &PlaylistSettings) -> String {
    match param {
        Some(name) => settings.resource_template.replace("{name}", name),
        None => settings.default_resource.clone(),
    }
}

/// Parse an already-fetched playlist document.
///
/// A missing, malformed or empty resource is not fatal: it degrades to the
/// fixed single-entry fallback list, logged and never retried.
pub fn parse_playlist(json: Option<&str>) -> Vec<Track> {
    let Some(json) = json else {
        warn!("playlist resource missing, using fallback entry");
        return fallback_playlist();
    };

    match serde_json::from_str::<Vec<Track>>(json) {
        Ok(tracks) if !tracks.is_empty() => tracks,
        Ok(_) => {
            warn!("playlist resource is empty, using fallback entry");
            fallback_playlist()
        }
        Err(err) => {
            warn!(%err, "failed to parse playlist, using fallback entry");
            fallback_playlist()
        }
    }
}

/// The hardcoded placeholder list used when the playlist cannot be loaded.
pub fn fallback_playlist() -> Vec<Track> {
    vec![Track {
        src: "./music/往欄印.opus".to_string(),
        title: "往欄印".to_string(),
        artist: "MyGO!!!!!".to_string(),
        cover: "./music/往欄印.jpg".to_string(),
        lrc: Some("./music/往欄印.lrc".to_string()),
        copyright_url: Some("https://bmu.lnk.to/MyGO7th_SGwe".to_string()),
        duration: Some(298.15),
    }]
}
