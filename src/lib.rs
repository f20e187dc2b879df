//! Playback-state synchronization and lyrics-timing core for a dual-view
//! media player.
//!
//! The host environment owns two interchangeable render targets (a mini
//! and a large view of the same player) plus the actual decode resources;
//! this crate owns everything about their shared state: which view is
//! audible, where playback is, which lyric line is highlighted, what the
//! playlist points at. The host adapts its media handles to
//! [`RenderTarget`], feeds gestures and callbacks into [`Player`], and
//! renders the [`PlayerUpdate`]s it gets back.
//!
//! Exactly one view is audible at any time. A view switch hands the
//! position over and only silences the old target once the new target's
//! asynchronous play attempt settles successfully, so an autoplay-policy
//! rejection never interrupts playback.

pub mod config;
pub mod lyrics;
pub mod panel;
pub mod playback;
pub mod player;
pub mod playlist;

pub use config::Settings;
pub use lyrics::{ActiveLineTracker, LyricLine, LyricsIndex};
pub use panel::{PanelKind, PanelState};
pub use playback::{
    LyricsError, LyricsSource, PlayRejected, PlayTicket, PlaybackPosition, PlayerEvent,
    RenderTarget, TrackSession, ViewCoordinator, ViewKind,
};
pub use player::{Player, PlayerUpdate};
pub use playlist::{PlaylistNavigator, Track};
