//! Lyric line table and time-to-line resolution.

use super::parse::parse;

/// A single timed lyric line.
#[derive(Debug, Clone, PartialEq)]
pub struct LyricLine {
    /// Offset from the start of the track, in seconds.
    pub time_seconds: f64,
    /// Trimmed lyric text; may be empty for instrumental gaps.
    pub text: String,
}

impl LyricLine {
    /// The text to render: `placeholder` when the line is empty.
    ///
    /// An empty line still occupies a timed slot, it just shows a glyph.
    pub fn display_text<'a>(&'a self, placeholder: &'a str) -> &'a str {
        if self.text.is_empty() { placeholder } else { &self.text }
    }
}

/// Ordered time → line table for one track.
///
/// An absent, empty or unparsable lyric source yields an empty index; that
/// is a valid state in which `active_line_index` always returns `None`.
#[derive(Debug, Clone, Default)]
pub struct LyricsIndex {
    lines: Vec<LyricLine>,
}

impl LyricsIndex {
    /// The empty index used when a track has no lyric source.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build an index by parsing an LRC-style source.
    pub fn from_text(text: &str) -> Self {
        Self { lines: parse(text) }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// All lines in ascending time order.
    pub fn lines(&self) -> &[LyricLine] {
        &self.lines
    }

    /// Resolve the index of the last line with `time_seconds <= query_time`,
    /// or `None` when no line has started yet.
    ///
    /// Pure with respect to the index contents: the same query time always
    /// resolves to the same answer.
    pub fn active_line_index(&self, query_time: f64) -> Option<usize> {
        self.lines
            .partition_point(|l| l.time_seconds <= query_time)
            .checked_sub(1)
    }
}

/// Change-only wrapper around `LyricsIndex::active_line_index`.
///
/// The UI scrolls and re-highlights only when the resolved line actually
/// moves, so the tracker remembers the last resolution and reports `Some`
/// just for transitions.
#[derive(Debug, Clone, Default)]
pub struct ActiveLineTracker {
    current: Option<usize>,
}

impl ActiveLineTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last resolved line, if any.
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// Resolve the active line at `query_time`, returning the new value only
    /// when it differs from the previous resolution.
    pub fn resolve(&mut self, index: &LyricsIndex, query_time: f64) -> Option<Option<usize>> {
        let next = index.active_line_index(query_time);
        if next != self.current {
            self.current = next;
            Some(next)
        } else {
            None
        }
    }

    /// Forget the previous resolution (a new track was loaded).
    pub fn reset(&mut self) {
        self.current = None;
    }
}
