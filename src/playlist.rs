//! Playlist loading and linear navigation.
//!
//! Tracks come from an already-fetched JSON resource; a missing or
//! malformed resource degrades to a fixed single-entry list so the player
//! never starts empty.

mod load;
mod model;
mod navigator;

pub use load::{fallback_playlist, parse_playlist, resource_path};
pub use model::Track;
pub use navigator::PlaylistNavigator;
