/// The two back-face panels the user can swipe between.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum PanelKind {
    #[default]
    Lyrics,
    Playlist,
}

/// Flip-card and panel state for the large view's back face.
#[derive(Debug, Clone, Default)]
pub struct PanelState {
    panel: PanelKind,
    flipped: bool,
}

impl PanelState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn panel(&self) -> PanelKind {
        self.panel
    }

    pub fn flipped(&self) -> bool {
        self.flipped
    }

    /// Show the named panel. Returns `true` when the panel changed.
    pub fn switch_panel(&mut self, panel: PanelKind) -> bool {
        let changed = self.panel != panel;
        self.panel = panel;
        changed
    }

    /// Flip the card over (or back). Returns the new flipped state.
    pub fn toggle_flip(&mut self) -> bool {
        self.flipped = !self.flipped;
        self.flipped
    }

    /// Settle a finished swipe.
    ///
    /// `drag_fraction` is the horizontal drag as a fraction of the container
    /// width, rightwards positive. A drag beyond `threshold` in the
    /// direction of the other panel switches to it; anything else snaps back
    /// to the current panel. Returns the settled panel.
    pub fn settle_swipe(&mut self, drag_fraction: f64, threshold: f64) -> PanelKind {
        if drag_fraction.abs() > threshold {
            match self.panel {
                PanelKind::Playlist if drag_fraction > 0.0 => self.panel = PanelKind::Lyrics,
                PanelKind::Lyrics if drag_fraction < 0.0 => self.panel = PanelKind::Playlist,
                _ => {}
            }
        }
        self.panel
    }

    /// Wrapper offset in percent while a drag is in progress, clamped to
    /// the two-panel range.
    pub fn drag_offset_percent(&self, drag_fraction: f64) -> f64 {
        (self.rest_offset_percent() + drag_fraction * 100.0).clamp(-100.0, 0.0)
    }

    /// Wrapper offset in percent when no drag is in progress.
    pub fn rest_offset_percent(&self) -> f64 {
        match self.panel {
            PanelKind::Lyrics => 0.0,
            PanelKind::Playlist => -100.0,
        }
    }
}
