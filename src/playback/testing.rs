//! Test doubles for the host-provided traits.

use std::collections::HashMap;

use super::session::{LyricsError, LyricsSource};
use super::types::{PlayTicket, RenderTarget};

/// In-memory render target that records transport calls.
#[derive(Debug)]
pub(crate) struct FakeTarget {
    pub src: Option<String>,
    pub time: f64,
    pub paused: bool,
    /// What `duration()` reports; tests set it before delivering a
    /// `MetadataReady` event.
    pub metadata_duration: Option<f64>,
    pub volume: f32,
    pub looping: bool,
    pub play_tickets: Vec<PlayTicket>,
    pub pause_count: usize,
}

impl FakeTarget {
    pub fn new() -> Self {
        Self {
            src: None,
            time: 0.0,
            paused: true,
            metadata_duration: None,
            volume: 1.0,
            looping: false,
            play_tickets: Vec::new(),
            pause_count: 0,
        }
    }
}

impl RenderTarget for FakeTarget {
    fn set_source(&mut self, uri: &str) {
        self.src = Some(uri.to_string());
        self.time = 0.0;
        self.metadata_duration = None;
        self.paused = true;
    }

    fn play(&mut self, ticket: PlayTicket) {
        self.paused = false;
        self.play_tickets.push(ticket);
    }

    fn pause(&mut self) {
        self.paused = true;
        self.pause_count += 1;
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    fn current_time(&self) -> f64 {
        self.time
    }

    fn set_current_time(&mut self, seconds: f64) {
        self.time = seconds;
    }

    fn duration(&self) -> Option<f64> {
        self.metadata_duration
    }

    fn volume(&self) -> f32 {
        self.volume
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume;
    }

    fn looping(&self) -> bool {
        self.looping
    }

    fn set_looping(&mut self, looping: bool) {
        self.looping = looping;
    }
}

/// Lyric source backed by a map, optionally failing every fetch.
#[derive(Debug, Default)]
pub(crate) struct FakeLyrics {
    pub by_uri: HashMap<String, String>,
    pub fail_all: bool,
}

impl FakeLyrics {
    pub fn single(uri: &str, text: &str) -> Self {
        let mut by_uri = HashMap::new();
        by_uri.insert(uri.to_string(), text.to_string());
        Self { by_uri, fail_all: false }
    }

    pub fn failing() -> Self {
        Self { by_uri: HashMap::new(), fail_all: true }
    }
}

impl LyricsSource for FakeLyrics {
    fn fetch(&mut self, uri: &str) -> Result<String, LyricsError> {
        if self.fail_all {
            return Err(LyricsError {
                uri: uri.to_string(),
                reason: "refused".to_string(),
            });
        }
        self.by_uri.get(uri).cloned().ok_or_else(|| LyricsError {
            uri: uri.to_string(),
            reason: "not found".to_string(),
        })
    }
}
