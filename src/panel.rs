//! Flip-card and swipe-panel presentation state.
//!
//! Pure state transitions only: the host measures pixels and converts drags
//! to fractions of the container width before asking the core to settle.

mod model;

pub use model::*;
