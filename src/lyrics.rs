//! Timestamped lyric parsing and active-line resolution.
//!
//! The `LyricsIndex` maps playback time to the lyric line that should be
//! highlighted; `ActiveLineTracker` turns per-tick resolution into
//! change-only signals so the UI never re-scrolls redundantly.

mod model;
mod parse;

pub use model::*;
pub use parse::parse;

#[cfg(test)]
mod tests;
