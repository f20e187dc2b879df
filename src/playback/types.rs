//! Small playback types: view identity, position snapshots, play tickets
//! and the host-delivered event enum.

use thiserror::Error;

/// Which of the two interchangeable view representations a handle belongs to.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ViewKind {
    Mini,
    Large,
}

impl ViewKind {
    pub fn other(self) -> Self {
        match self {
            Self::Mini => Self::Large,
            Self::Large => Self::Mini,
        }
    }
}

/// The authoritative playback position, owned by the active target.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PlaybackPosition {
    /// Seconds from the start of the track, never negative.
    pub current_time: f64,
    /// Resolved duration in seconds, `None` while still unknown.
    pub duration: Option<f64>,
    pub is_playing: bool,
}

/// Identity of one asynchronous play attempt.
///
/// Tickets are allocated monotonically; a settlement carrying a ticket
/// nobody waits for anymore is inert.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PlayTicket(pub u64);

/// Monotonic track-load counter.
///
/// A pending "play once ready" wait is scoped to a single generation, so
/// rapid next/next/next leaves stale waits provably dead.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct LoadGeneration(u64);

impl LoadGeneration {
    /// Advance to the next generation and return it.
    pub fn bump(&mut self) -> Self {
        self.0 += 1;
        *self
    }
}

/// Why a play attempt did not start, e.g. an autoplay policy denial.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("play attempt rejected: {reason}")]
pub struct PlayRejected {
    pub reason: String,
}

impl PlayRejected {
    pub fn new(reason: impl Into<String>) -> Self {
        Self { reason: reason.into() }
    }
}

/// Discrete events the host environment feeds into the core.
///
/// All state transitions run to completion inside a single handler; the
/// host's event loop delivers these one at a time.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerEvent {
    /// Periodic position report from one render target.
    PositionTick { view: ViewKind, seconds: f64 },
    /// A target finished parsing its container and can report a duration.
    MetadataReady { view: ViewKind },
    /// A target ran out of audio.
    Ended { view: ViewKind },
    /// An asynchronous play attempt settled.
    PlaySettled {
        ticket: PlayTicket,
        result: Result<(), PlayRejected>,
    },
}

/// Control surface of one independent media handle.
///
/// The host owns the actual decode/playback resources (two of them, one per
/// view) and adapts them to this trait; the core never touches the
/// environment directly.
pub trait RenderTarget {
    fn set_source(&mut self, uri: &str);

    /// Begin playback. Completion is asynchronous: the host must later
    /// deliver [`PlayerEvent::PlaySettled`] carrying the same ticket. The
    /// call itself must not be assumed to have succeeded.
    fn play(&mut self, ticket: PlayTicket);

    fn pause(&mut self);

    fn is_paused(&self) -> bool;

    fn current_time(&self) -> f64;

    fn set_current_time(&mut self, seconds: f64);

    /// Probed duration in seconds; `None` until metadata is ready.
    fn duration(&self) -> Option<f64>;

    fn volume(&self) -> f32;

    fn set_volume(&mut self, volume: f32);

    fn looping(&self) -> bool;

    fn set_looping(&mut self, looping: bool);
}
