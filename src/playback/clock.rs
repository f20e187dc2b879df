use super::types::{PlayTicket, RenderTarget};

/// Wrapper around one render-target handle.
///
/// Centralizes the small hygiene rules every call site needs: positions and
/// seeks never go negative, probed durations are only trusted when finite
/// and positive, and volume is expressed as a percent.
#[derive(Debug)]
pub struct PlaybackClock<T> {
    target: T,
}

impl<T: RenderTarget> PlaybackClock<T> {
    pub fn new(target: T) -> Self {
        Self { target }
    }

    /// The underlying handle, for host-side inspection.
    pub fn target(&self) -> &T {
        &self.target
    }

    #[cfg(test)]
    pub(crate) fn target_mut(&mut self) -> &mut T {
        &mut self.target
    }

    pub fn set_source(&mut self, uri: &str) {
        self.target.set_source(uri);
    }

    pub fn play(&mut self, ticket: PlayTicket) {
        self.target.play(ticket);
    }

    pub fn pause(&mut self) {
        self.target.pause();
    }

    pub fn is_paused(&self) -> bool {
        self.target.is_paused()
    }

    pub fn position(&self) -> f64 {
        self.target.current_time().max(0.0)
    }

    pub fn seek_to(&mut self, seconds: f64) {
        self.target.set_current_time(seconds.max(0.0));
    }

    /// Probed duration, filtered to finite positive values.
    ///
    /// Streaming containers report an infinite duration until enough of the
    /// file is parsed; those reports are treated as "still unknown".
    pub fn probed_duration(&self) -> Option<f64> {
        self.target.duration().filter(|d| d.is_finite() && *d > 0.0)
    }

    pub fn set_volume_percent(&mut self, percent: u8) {
        self.target.set_volume(f32::from(percent.min(100)) / 100.0);
    }

    pub fn looping(&self) -> bool {
        self.target.looping()
    }

    pub fn set_looping(&mut self, looping: bool) {
        self.target.set_looping(looping);
    }
}
