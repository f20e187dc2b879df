use tracing::{debug, warn};

use super::clock::PlaybackClock;
use super::types::{PlayRejected, PlayTicket, RenderTarget, ViewKind};

/// An in-flight view handoff.
///
/// The old target keeps playing until the new target's play attempt settles
/// successfully; the brief overlap is the only moment both targets may be
/// audible.
#[derive(Debug, Copy, Clone)]
struct PendingHandoff {
    ticket: PlayTicket,
    from: ViewKind,
    to: ViewKind,
}

/// Holds both render-target handles and the single "active" designation.
///
/// Exactly one view is active at any time; position ticks are only ever
/// sourced from it. All transport on the handles goes through here so the
/// designation and the audible state cannot drift apart.
#[derive(Debug)]
pub struct ViewCoordinator<T> {
    mini: PlaybackClock<T>,
    large: PlaybackClock<T>,
    active: ViewKind,
    pending: Option<PendingHandoff>,
    next_ticket: u64,
}

impl<T: RenderTarget> ViewCoordinator<T> {
    pub fn new(mini: T, large: T, initial: ViewKind) -> Self {
        Self {
            mini: PlaybackClock::new(mini),
            large: PlaybackClock::new(large),
            active: initial,
            pending: None,
            next_ticket: 0,
        }
    }

    pub fn active(&self) -> ViewKind {
        self.active
    }

    pub fn clock(&self, view: ViewKind) -> &PlaybackClock<T> {
        match view {
            ViewKind::Mini => &self.mini,
            ViewKind::Large => &self.large,
        }
    }

    pub fn clock_mut(&mut self, view: ViewKind) -> &mut PlaybackClock<T> {
        match view {
            ViewKind::Mini => &mut self.mini,
            ViewKind::Large => &mut self.large,
        }
    }

    pub fn active_clock(&self) -> &PlaybackClock<T> {
        self.clock(self.active)
    }

    /// Whether a handoff is still waiting for its play attempt to settle.
    pub fn handoff_pending(&self) -> bool {
        self.pending.is_some()
    }

    fn take_ticket(&mut self) -> PlayTicket {
        self.next_ticket += 1;
        PlayTicket(self.next_ticket)
    }

    /// Load a new source into both targets and mirror the volume into both.
    ///
    /// Any in-flight handoff belongs to the superseded load and is dropped;
    /// its eventual settlement will arrive with a stale ticket.
    pub fn load(&mut self, src: &str, volume_percent: u8) {
        self.pending = None;
        for view in [ViewKind::Mini, ViewKind::Large] {
            let clock = self.clock_mut(view);
            clock.set_source(src);
            clock.set_volume_percent(volume_percent);
        }
    }

    /// Mirror the volume into both targets.
    pub fn set_volume_percent(&mut self, percent: u8) {
        self.mini.set_volume_percent(percent);
        self.large.set_volume_percent(percent);
    }

    /// Mirror the loop flag into both targets.
    pub fn set_looping(&mut self, looping: bool) {
        self.mini.set_looping(looping);
        self.large.set_looping(looping);
    }

    /// Hand playback over to `view`.
    ///
    /// The synchronous portion (snapshot, designation flip, position seed)
    /// completes before control returns, so a tick dispatched right after
    /// already reads the new active view. If playback was running, the old
    /// target is paused only once the new target's play attempt settles.
    pub fn switch_to(&mut self, view: ViewKind) {
        if view == self.active {
            return;
        }

        let from = self.active;
        let (snapshot_time, was_playing) = {
            let clock = self.clock(from);
            (clock.position(), !clock.is_paused())
        };

        self.active = view;
        self.clock_mut(view).seek_to(snapshot_time);

        if was_playing {
            let ticket = self.take_ticket();
            self.clock_mut(view).play(ticket);
            self.pending = Some(PendingHandoff { ticket, from, to: view });
        } else {
            // Nothing audible to hand off; the time seed was the whole job.
            self.clock_mut(from).pause();
        }
    }

    /// Flip the named target's paused state and nothing else.
    ///
    /// Returns whether the target is now (attempting to be) playing. The
    /// play attempt's settlement is not tracked here: a rejection simply
    /// leaves that target paused.
    pub fn toggle_play(&mut self, view: ViewKind) -> bool {
        if self.clock(view).is_paused() {
            let ticket = self.take_ticket();
            self.clock_mut(view).play(ticket);
            true
        } else {
            self.clock_mut(view).pause();
            false
        }
    }

    /// Start the active target without a tracked handoff (used once a fresh
    /// load signals readiness).
    pub fn play_active(&mut self) -> PlayTicket {
        let ticket = self.take_ticket();
        let view = self.active;
        self.clock_mut(view).play(ticket);
        ticket
    }

    /// Deliver the settlement of a play attempt.
    ///
    /// Only the ticket of the in-flight handoff is meaningful; anything else
    /// is stale and inert. On success the old target goes quiet; on
    /// rejection the previous target stays the audible one and the failure
    /// is swallowed.
    pub fn handle_play_settled(&mut self, ticket: PlayTicket, result: Result<(), PlayRejected>) {
        let Some(pending) = self.pending else {
            debug!(?ticket, "play settlement with no handoff in flight");
            return;
        };
        if pending.ticket != ticket {
            debug!(?ticket, "stale play settlement for superseded handoff");
            return;
        }
        self.pending = None;

        match result {
            Ok(()) => {
                self.clock_mut(pending.from).pause();
            }
            Err(err) => {
                warn!(%err, "view handoff rejected, staying on previous target");
                self.active = pending.from;
                // The rejected target never started; make its state agree.
                self.clock_mut(pending.to).pause();
            }
        }
    }
}
