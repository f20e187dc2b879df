use super::model::LyricLine;

/// Parse an LRC-style lyric source into an ascending line table.
///
/// Each input line is scanned for a `[MM:SS.fff]` tag (two-digit minutes and
/// seconds, two or three fraction digits) followed by free text. Lines that
/// carry no tag are skipped silently; a lyric source with no tagged lines is
/// a valid empty result, not an error.
///
/// Duplicate timestamps keep last-wins semantics: a later line at the same
/// time replaces the earlier text but keeps a single timed slot.
pub fn parse(text: &str) -> Vec<LyricLine> {
    let mut lines: Vec<LyricLine> = Vec::new();

    for raw in text.lines() {
        let Some((time_seconds, lyric)) = parse_tagged_line(raw) else {
            continue;
        };
        let lyric = lyric.trim().to_string();

        match lines.iter_mut().find(|l| l.time_seconds == time_seconds) {
            Some(existing) => existing.text = lyric,
            None => lines.push(LyricLine { time_seconds, text: lyric }),
        }
    }

    lines.sort_by(|a, b| a.time_seconds.total_cmp(&b.time_seconds));
    lines
}

/// Find the first valid timestamp tag in `line` and return the decoded time
/// together with the text that follows the closing bracket.
fn parse_tagged_line(line: &str) -> Option<(f64, &str)> {
    let bytes = line.as_bytes();
    for open in 0..bytes.len() {
        if bytes[open] != b'[' {
            continue;
        }
        if let Some((time, text_start)) = parse_timestamp_at(bytes, open) {
            return Some((time, &line[text_start..]));
        }
    }
    None
}

/// Decode `[MM:SS.fff]` starting at the `[` located at `open`.
///
/// Returns the time in seconds and the byte offset just past `]`. The
/// fraction is normalized as a decimal: "50" and "500" both mean 0.5s.
fn parse_timestamp_at(bytes: &[u8], open: usize) -> Option<(f64, usize)> {
    let b = &bytes[open + 1..];
    // Shortest valid tag body is "MM:SS.ff]".
    if b.len() < 9 {
        return None;
    }
    if !(b[0].is_ascii_digit()
        && b[1].is_ascii_digit()
        && b[2] == b':'
        && b[3].is_ascii_digit()
        && b[4].is_ascii_digit()
        && b[5] == b'.')
    {
        return None;
    }

    let mut frac_end = 6;
    while frac_end < b.len() && b[frac_end].is_ascii_digit() {
        frac_end += 1;
    }
    let frac_digits = frac_end - 6;
    if !(2..=3).contains(&frac_digits) || frac_end >= b.len() || b[frac_end] != b']' {
        return None;
    }

    let minutes = ascii_to_u32(&b[0..2]);
    let seconds = ascii_to_u32(&b[3..5]);
    let fraction = ascii_to_u32(&b[6..frac_end]);
    let denom = if frac_digits == 2 { 100.0 } else { 1000.0 };

    let time = f64::from(minutes) * 60.0 + f64::from(seconds) + f64::from(fraction) / denom;
    // +1 for '[', +1 for ']'.
    Some((time, open + 1 + frac_end + 1))
}

fn ascii_to_u32(digits: &[u8]) -> u32 {
    digits.iter().fold(0, |acc, d| acc * 10 + u32::from(d - b'0'))
}
