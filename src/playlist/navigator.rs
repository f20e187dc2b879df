use super::model::Track;

/// Linear ordered track list with wrap-around prev/next addressing.
///
/// Invariant: `current` is always a valid index while the list is
/// non-empty. Navigation wraps modulo the list length, so a single-track
/// list reselects the same track (the resulting reload is accepted).
#[derive(Debug, Clone)]
pub struct PlaylistNavigator {
    tracks: Vec<Track>,
    current: usize,
}

impl PlaylistNavigator {
    pub fn new(tracks: Vec<Track>) -> Self {
        Self { tracks, current: 0 }
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.tracks.get(self.current)
    }

    /// Advance to the next track, wrapping at the end of the list.
    /// Returns the new index. No-op on an empty list.
    pub fn next(&mut self) -> usize {
        if !self.tracks.is_empty() {
            self.current = (self.current + 1) % self.tracks.len();
        }
        self.current
    }

    /// Step back to the previous track, wrapping at the start of the list.
    /// Returns the new index. No-op on an empty list.
    pub fn prev(&mut self) -> usize {
        if !self.tracks.is_empty() {
            self.current = (self.current + self.tracks.len() - 1) % self.tracks.len();
        }
        self.current
    }

    /// Jump directly to `index`.
    ///
    /// All callers derive the index from the rendered list itself, so an
    /// out-of-range value is an internal invariant violation, not user
    /// input: fail fast.
    pub fn select(&mut self, index: usize) {
        assert!(
            index < self.tracks.len(),
            "playlist index {index} out of range (len {})",
            self.tracks.len()
        );
        self.current = index;
    }
}
