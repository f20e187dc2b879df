//! Playback core: the render-target abstraction, per-track session state
//! and the single-active-view coordinator.
//!
//! Exactly one render target is audible at any time. View switches hand the
//! position over to the other target and only silence the old one after the
//! new target's asynchronous play attempt settles successfully, so a
//! rejected attempt (autoplay policy) never interrupts playback.

mod clock;
mod coordinator;
mod session;
mod types;

pub use clock::PlaybackClock;
pub use coordinator::ViewCoordinator;
pub use session::{LyricsError, LyricsSource, TrackSession};
pub use types::{
    LoadGeneration, PlayRejected, PlayTicket, PlaybackPosition, PlayerEvent, RenderTarget,
    ViewKind,
};

#[cfg(test)]
pub(crate) mod testing;
