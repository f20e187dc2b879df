use thiserror::Error;
use tracing::warn;

use crate::lyrics::{ActiveLineTracker, LyricsIndex};
use crate::playlist::Track;

use super::types::LoadGeneration;

/// Host-provided lyric text retrieval.
///
/// The core consumes the fetched text synchronously while building a
/// session; the host decides how the bytes actually arrive.
pub trait LyricsSource {
    fn fetch(&mut self, uri: &str) -> Result<String, LyricsError>;
}

/// A lyric source that could not be retrieved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to load lyrics from {uri}: {reason}")]
pub struct LyricsError {
    pub uri: String,
    pub reason: String,
}

/// Per-track state: metadata, duration source of truth and the lyric index.
///
/// A session is recreated on every index change; the old lyric index is
/// discarded with it. The load generation ties asynchronous readiness
/// signals back to the load that requested them.
#[derive(Debug)]
pub struct TrackSession {
    track: Track,
    lyrics: LyricsIndex,
    tracker: ActiveLineTracker,
    generation: LoadGeneration,
}

impl TrackSession {
    /// Build the session for `track`, fetching and parsing lyrics when the
    /// track names a source.
    ///
    /// Lyric trouble degrades to the empty index, logged and never thrown,
    /// so it cannot block audio playback.
    pub fn new(
        track: Track,
        generation: LoadGeneration,
        lyrics_source: &mut dyn LyricsSource,
    ) -> Self {
        let lyrics = match &track.lrc {
            Some(uri) => match lyrics_source.fetch(uri) {
                Ok(text) => LyricsIndex::from_text(&text),
                Err(err) => {
                    warn!(%err, "lyrics unavailable, continuing without");
                    LyricsIndex::empty()
                }
            },
            None => LyricsIndex::empty(),
        };

        Self {
            track,
            lyrics,
            tracker: ActiveLineTracker::new(),
            generation,
        }
    }

    pub fn track(&self) -> &Track {
        &self.track
    }

    pub fn generation(&self) -> LoadGeneration {
        self.generation
    }

    pub fn lyrics(&self) -> &LyricsIndex {
        &self.lyrics
    }

    /// Whether the track has any timed lyric lines; `false` is the
    /// user-visible "no lyrics available" state.
    pub fn has_lyrics(&self) -> bool {
        !self.lyrics.is_empty()
    }

    /// The single duration rule: known > probed (finite) > unknown.
    ///
    /// `probed` must be the value reported by the target actually being
    /// asked about; duration display, progress fractions and click-to-seek
    /// math all go through here rather than re-deriving the precedence.
    pub fn resolved_duration(&self, probed: Option<f64>) -> Option<f64> {
        self.track
            .duration
            .or(probed.filter(|d| d.is_finite() && *d > 0.0))
    }

    /// The last resolved lyric line, if any.
    pub fn active_lyric(&self) -> Option<usize> {
        self.tracker.current()
    }

    /// Resolve the active lyric line at `seconds`, reporting transitions
    /// only.
    pub fn resolve_lyric(&mut self, seconds: f64) -> Option<Option<usize>> {
        self.tracker.resolve(&self.lyrics, seconds)
    }
}
