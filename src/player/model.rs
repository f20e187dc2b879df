use tracing::debug;

use crate::config::Settings;
use crate::panel::{PanelKind, PanelState};
use crate::playback::{
    LoadGeneration, LyricsSource, PlaybackPosition, PlayerEvent, RenderTarget, TrackSession,
    ViewCoordinator, ViewKind,
};
use crate::playlist::{PlaylistNavigator, Track};

/// One observable state change, in the order it happened.
///
/// Commands and event handlers return these so the host can re-render only
/// what moved. Updates are facts about the new state, not requests.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerUpdate {
    /// A different track is now loaded.
    TrackChanged { index: usize },
    /// The current track's duration became known.
    DurationResolved { seconds: f64 },
    /// The authoritative position moved. `fraction` is `None` while the
    /// duration is still unknown.
    Progress { seconds: f64, fraction: Option<f64> },
    /// The highlighted lyric line changed; `None` clears the highlight.
    LyricLineChanged { line: Option<usize> },
    /// The active view designation changed (including a handoff rollback).
    ViewChanged { view: ViewKind },
    PlayingChanged { view: ViewKind, playing: bool },
    VolumeChanged { percent: u8 },
    LoopChanged { looping: bool },
    PanelChanged { panel: PanelKind },
    FlipChanged { flipped: bool },
}

/// The whole player: one instance owns every piece of playback state.
///
/// The host constructs it with two render-target handles and a lyric
/// source, then drives it with commands (user gestures) and
/// [`PlayerEvent`]s (target callbacks). Each call runs to completion and
/// returns the updates it produced.
pub struct Player<T> {
    settings: Settings,
    navigator: PlaylistNavigator,
    session: Option<TrackSession>,
    coordinator: ViewCoordinator<T>,
    lyrics_source: Box<dyn LyricsSource>,
    generation: LoadGeneration,
    /// A one-shot "start playing once metadata is ready" wait, scoped to
    /// the load generation that armed it.
    pending_autoplay: Option<LoadGeneration>,
    volume_percent: u8,
    looping: bool,
    panel: PanelState,
}

impl<T: RenderTarget> Player<T> {
    /// Build the player and stage the first track.
    ///
    /// Nothing starts playing: the first track is loaded into both targets
    /// paused, and playback waits for a user gesture.
    pub fn new(
        mini: T,
        large: T,
        tracks: Vec<Track>,
        lyrics_source: Box<dyn LyricsSource>,
        settings: Settings,
    ) -> Self {
        let volume_percent = settings.playback.initial_volume.min(100);
        let mut player = Self {
            settings,
            navigator: PlaylistNavigator::new(tracks),
            session: None,
            coordinator: ViewCoordinator::new(mini, large, ViewKind::Large),
            lyrics_source,
            generation: LoadGeneration::default(),
            pending_autoplay: None,
            volume_percent,
            looping: false,
            panel: PanelState::new(),
        };
        player.load_current(false);
        player
    }

    /// Load the navigator's current track into both targets.
    ///
    /// Replaces the session (and with it the lyric index and tracker),
    /// bumps the load generation and, when `auto_play` is set, arms the
    /// one-shot autoplay wait for that generation.
    pub fn load_current(&mut self, auto_play: bool) -> Vec<PlayerUpdate> {
        let Some(track) = self.navigator.current_track().cloned() else {
            return Vec::new();
        };

        let generation = self.generation.bump();
        self.pending_autoplay = auto_play.then_some(generation);
        self.session = Some(TrackSession::new(
            track.clone(),
            generation,
            self.lyrics_source.as_mut(),
        ));
        self.coordinator.load(&track.src, self.volume_percent);

        let mut updates = vec![PlayerUpdate::TrackChanged {
            index: self.navigator.current_index(),
        }];
        if let Some(seconds) = track.duration {
            updates.push(PlayerUpdate::DurationResolved { seconds });
        }
        updates
    }

    /// Jump to the playlist entry at `index` and start it.
    pub fn select_track(&mut self, index: usize) -> Vec<PlayerUpdate> {
        self.navigator.select(index);
        self.load_current(true)
    }

    /// Advance to the next track (wrapping) and start it.
    pub fn next_track(&mut self) -> Vec<PlayerUpdate> {
        if self.navigator.is_empty() {
            return Vec::new();
        }
        self.navigator.next();
        self.load_current(true)
    }

    /// Step back to the previous track (wrapping) and start it.
    pub fn prev_track(&mut self) -> Vec<PlayerUpdate> {
        if self.navigator.is_empty() {
            return Vec::new();
        }
        self.navigator.prev();
        self.load_current(true)
    }

    /// Hand playback over to `view`. No-op when it is already active.
    pub fn switch_view(&mut self, view: ViewKind) -> Vec<PlayerUpdate> {
        if view == self.coordinator.active() {
            return Vec::new();
        }
        self.coordinator.switch_to(view);
        vec![PlayerUpdate::ViewChanged { view }]
    }

    /// Flip the named target's paused state.
    pub fn toggle_play(&mut self, view: ViewKind) -> Vec<PlayerUpdate> {
        let playing = self.coordinator.toggle_play(view);
        vec![PlayerUpdate::PlayingChanged { view, playing }]
    }

    /// Seek the named target to a fraction of the resolved duration.
    ///
    /// The fraction is clamped to `0..=1`. While the duration is still
    /// unknown there is nothing meaningful to seek to, so the click does
    /// nothing.
    pub fn seek_to_fraction(&mut self, view: ViewKind, fraction: f64) -> Vec<PlayerUpdate> {
        let fraction = fraction.clamp(0.0, 1.0);
        let probed = self.coordinator.clock(view).probed_duration();
        let Some(duration) = self
            .session
            .as_ref()
            .and_then(|s| s.resolved_duration(probed))
        else {
            return Vec::new();
        };

        let seconds = fraction * duration;
        self.coordinator.clock_mut(view).seek_to(seconds);
        vec![PlayerUpdate::Progress {
            seconds,
            fraction: Some(fraction),
        }]
    }

    /// Seek the named target to an absolute position in seconds.
    ///
    /// The position is clamped to the resolved duration when one is known,
    /// so the target is never commanded past end-of-track.
    pub fn seek_to_seconds(&mut self, view: ViewKind, seconds: f64) -> Vec<PlayerUpdate> {
        let probed = self.coordinator.clock(view).probed_duration();
        let duration = self
            .session
            .as_ref()
            .and_then(|s| s.resolved_duration(probed));
        let seconds = match duration {
            Some(d) => seconds.clamp(0.0, d),
            None => seconds.max(0.0),
        };
        self.coordinator.clock_mut(view).seek_to(seconds);
        let fraction = duration.map(|d| (seconds / d).clamp(0.0, 1.0));
        vec![PlayerUpdate::Progress { seconds, fraction }]
    }

    /// Set the shared volume, mirrored into both targets. Clamped to 100.
    pub fn set_volume(&mut self, percent: u8) -> Vec<PlayerUpdate> {
        let percent = percent.min(100);
        self.volume_percent = percent;
        self.coordinator.set_volume_percent(percent);
        vec![PlayerUpdate::VolumeChanged { percent }]
    }

    /// Raise the volume by the configured step.
    pub fn volume_up(&mut self) -> Vec<PlayerUpdate> {
        let step = self.settings.playback.volume_step;
        self.set_volume(self.volume_percent.saturating_add(step))
    }

    /// Lower the volume by the configured step.
    pub fn volume_down(&mut self) -> Vec<PlayerUpdate> {
        let step = self.settings.playback.volume_step;
        self.set_volume(self.volume_percent.saturating_sub(step))
    }

    /// Toggle single-track looping, mirrored into both targets.
    ///
    /// A looping target restarts itself and never reports `Ended`, so the
    /// end-of-track advance is implicitly disabled while this is on.
    pub fn toggle_loop(&mut self) -> Vec<PlayerUpdate> {
        self.looping = !self.looping;
        self.coordinator.set_looping(self.looping);
        vec![PlayerUpdate::LoopChanged {
            looping: self.looping,
        }]
    }

    /// Show the named back-face panel.
    pub fn switch_panel(&mut self, panel: PanelKind) -> Vec<PlayerUpdate> {
        if self.panel.switch_panel(panel) {
            vec![PlayerUpdate::PanelChanged { panel }]
        } else {
            Vec::new()
        }
    }

    /// Flip the large view's card over (or back).
    pub fn toggle_flip(&mut self) -> Vec<PlayerUpdate> {
        let flipped = self.panel.toggle_flip();
        vec![PlayerUpdate::FlipChanged { flipped }]
    }

    /// Settle a finished panel swipe.
    pub fn settle_swipe(&mut self, drag_fraction: f64, threshold: f64) -> Vec<PlayerUpdate> {
        let before = self.panel.panel();
        let panel = self.panel.settle_swipe(drag_fraction, threshold);
        if panel != before {
            vec![PlayerUpdate::PanelChanged { panel }]
        } else {
            Vec::new()
        }
    }

    /// Feed one host-delivered event through the state machine.
    pub fn handle_event(&mut self, event: PlayerEvent) -> Vec<PlayerUpdate> {
        match event {
            PlayerEvent::PositionTick { view, seconds } => self.on_tick(view, seconds),
            PlayerEvent::MetadataReady { view } => self.on_metadata_ready(view),
            PlayerEvent::Ended { view } => self.on_ended(view),
            PlayerEvent::PlaySettled { ticket, result } => {
                let before = self.coordinator.active();
                self.coordinator.handle_play_settled(ticket, result);
                let after = self.coordinator.active();
                if after != before {
                    vec![PlayerUpdate::ViewChanged { view: after }]
                } else {
                    Vec::new()
                }
            }
        }
    }

    /// Position report. Only the active view's clock is authoritative;
    /// ticks from the other target are dropped.
    fn on_tick(&mut self, view: ViewKind, seconds: f64) -> Vec<PlayerUpdate> {
        if view != self.coordinator.active() {
            return Vec::new();
        }

        let probed = self.coordinator.clock(view).probed_duration();
        let mut updates = Vec::new();
        match &mut self.session {
            Some(session) => {
                let fraction = session
                    .resolved_duration(probed)
                    .map(|d| (seconds / d).clamp(0.0, 1.0));
                updates.push(PlayerUpdate::Progress { seconds, fraction });
                if let Some(line) = session.resolve_lyric(seconds) {
                    updates.push(PlayerUpdate::LyricLineChanged { line });
                }
            }
            None => updates.push(PlayerUpdate::Progress {
                seconds,
                fraction: None,
            }),
        }
        updates
    }

    /// A target finished parsing its container.
    ///
    /// Resolves the duration when the playlist did not already carry one,
    /// and fires the armed autoplay wait exactly once. A second readiness
    /// report for the same load finds the wait already consumed.
    fn on_metadata_ready(&mut self, view: ViewKind) -> Vec<PlayerUpdate> {
        if view != self.coordinator.active() {
            debug!(?view, "metadata readiness from inactive view ignored");
            return Vec::new();
        }
        let Some(session) = &self.session else {
            return Vec::new();
        };

        let mut updates = Vec::new();
        if session.track().duration.is_none() {
            let probed = self.coordinator.clock(view).probed_duration();
            if let Some(seconds) = session.resolved_duration(probed) {
                updates.push(PlayerUpdate::DurationResolved { seconds });
            }
        }

        if self.pending_autoplay == Some(session.generation()) {
            self.pending_autoplay = None;
            self.coordinator.play_active();
            updates.push(PlayerUpdate::PlayingChanged {
                view,
                playing: true,
            });
        }
        updates
    }

    /// The active target ran out of audio: advance to the next track.
    fn on_ended(&mut self, view: ViewKind) -> Vec<PlayerUpdate> {
        if view != self.coordinator.active() || self.navigator.is_empty() {
            return Vec::new();
        }
        self.navigator.next();
        self.load_current(true)
    }

    pub fn active_view(&self) -> ViewKind {
        self.coordinator.active()
    }

    /// Snapshot of the authoritative (active-view) position.
    pub fn position(&self) -> PlaybackPosition {
        let clock = self.coordinator.active_clock();
        PlaybackPosition {
            current_time: clock.position(),
            duration: self
                .session
                .as_ref()
                .and_then(|s| s.resolved_duration(clock.probed_duration())),
            is_playing: !clock.is_paused(),
        }
    }

    pub fn is_playing(&self) -> bool {
        !self.coordinator.active_clock().is_paused()
    }

    pub fn current_index(&self) -> usize {
        self.navigator.current_index()
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.navigator.current_track()
    }

    pub fn tracks(&self) -> &[Track] {
        self.navigator.tracks()
    }

    /// Whether the current track has any timed lyric lines.
    pub fn has_lyrics(&self) -> bool {
        self.session.as_ref().is_some_and(TrackSession::has_lyrics)
    }

    /// The currently highlighted lyric line, if any.
    pub fn active_lyric(&self) -> Option<usize> {
        self.session.as_ref().and_then(TrackSession::active_lyric)
    }

    /// The text to render for lyric line `index`, with the configured
    /// placeholder substituted for empty lines.
    pub fn lyric_display_text(&self, index: usize) -> Option<&str> {
        let session = self.session.as_ref()?;
        let line = session.lyrics().lines().get(index)?;
        Some(line.display_text(&self.settings.lyrics.placeholder))
    }

    pub fn lyric_line_count(&self) -> usize {
        self.session.as_ref().map_or(0, |s| s.lyrics().len())
    }

    pub fn volume(&self) -> u8 {
        self.volume_percent
    }

    pub fn looping(&self) -> bool {
        self.looping
    }

    pub fn panel(&self) -> &PanelState {
        &self.panel
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The named view's underlying handle, for host-side inspection.
    pub fn target(&self, view: ViewKind) -> &T {
        self.coordinator.clock(view).target()
    }

    #[cfg(test)]
    pub(crate) fn target_mut(&mut self, view: ViewKind) -> &mut T {
        self.coordinator.clock_mut(view).target_mut()
    }
}
