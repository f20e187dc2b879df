//! Configuration loader and schema types.
//!
//! Settings cover the playlist resource paths, playback volume defaults and
//! the lyric placeholder glyph; they load from a TOML file with environment
//! overrides.

mod load;
mod schema;

pub use schema::*;

#[cfg(test)]
mod tests;
