//! The player facade tying everything together: playlist position, the
//! per-track session, view handoffs, volume/loop mirroring and the panel
//! state, exposed as commands that return render updates.

mod model;
pub use model::*;
