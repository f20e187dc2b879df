use super::*;

#[test]
fn parse_decodes_minutes_seconds_and_fraction() {
    let lines = parse("[01:02.50]hello");
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].time_seconds, 62.5);
    assert_eq!(lines[0].text, "hello");
}

#[test]
fn parse_normalizes_two_and_three_digit_fractions_equally() {
    let two = parse("[01:02.50]a");
    let three = parse("[01:02.500]b");
    assert_eq!(two[0].time_seconds, three[0].time_seconds);

    // "05" is five hundredths, not five milliseconds.
    let lines = parse("[00:10.05]x");
    assert_eq!(lines[0].time_seconds, 10.05);
    let lines = parse("[00:10.005]x");
    assert_eq!(lines[0].time_seconds, 10.005);
}

#[test]
fn parse_skips_untagged_and_malformed_lines() {
    let source = "\
just a comment
[ti:Some Title]
[0:12.34]single digit minutes
[00:1.34]single digit seconds
[00:12.3]one fraction digit
[00:12.3456]four fraction digits
[00:12.34]kept
";
    let lines = parse(source);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].text, "kept");
    assert_eq!(lines[0].time_seconds, 12.34);
}

#[test]
fn parse_keeps_empty_text_as_a_timed_slot() {
    let lines = parse("[00:05.00]\n[00:10.00]words");
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].text, "");
    assert_eq!(lines[0].display_text("♪"), "♪");
    assert_eq!(lines[1].display_text("♪"), "words");
}

#[test]
fn parse_trims_text_and_sorts_ascending() {
    let lines = parse("[00:20.00]  later  \n[00:05.00]earlier");
    assert_eq!(lines[0].text, "earlier");
    assert_eq!(lines[1].text, "later");
    assert!(lines[0].time_seconds < lines[1].time_seconds);
}

#[test]
fn parse_duplicate_timestamp_is_last_wins() {
    let lines = parse("[00:05.00]first\n[00:05.00]second");
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].text, "second");
}

#[test]
fn active_line_index_returns_last_started_line() {
    let index = LyricsIndex::from_text("[00:05.00]a\n[00:10.00]b\n[00:15.00]c");

    assert_eq!(index.active_line_index(0.0), None);
    assert_eq!(index.active_line_index(4.999), None);
    assert_eq!(index.active_line_index(5.0), Some(0));
    assert_eq!(index.active_line_index(9.999), Some(0));
    assert_eq!(index.active_line_index(10.0), Some(1));
    assert_eq!(index.active_line_index(1000.0), Some(2));
}

#[test]
fn active_line_index_is_monotonic_when_scrubbing_forward() {
    let index = LyricsIndex::from_text("[00:01.00]a\n[00:02.50]b\n[00:04.00]c\n[00:08.00]d");

    let mut last: Option<usize> = None;
    let mut t = 0.0;
    while t < 10.0 {
        let resolved = index.active_line_index(t);
        assert!(resolved >= last, "went backwards at t={t}");
        last = resolved;
        t += 0.1;
    }
}

#[test]
fn empty_index_always_resolves_none() {
    let index = LyricsIndex::empty();
    assert!(index.is_empty());
    assert_eq!(index.active_line_index(0.0), None);
    assert_eq!(index.active_line_index(123.0), None);

    let unparsable = LyricsIndex::from_text("no timestamps here\nat all");
    assert!(unparsable.is_empty());
    assert_eq!(unparsable.active_line_index(60.0), None);
}

#[test]
fn tracker_signals_only_on_transitions() {
    let index = LyricsIndex::from_text("[00:05.00]a\n[00:10.00]b");
    let mut tracker = ActiveLineTracker::new();

    // Before the first line: no line resolved, and no change signalled.
    assert_eq!(tracker.resolve(&index, 1.0), None);
    assert_eq!(tracker.current(), None);

    assert_eq!(tracker.resolve(&index, 5.0), Some(Some(0)));
    assert_eq!(tracker.resolve(&index, 6.0), None);
    assert_eq!(tracker.resolve(&index, 9.0), None);
    assert_eq!(tracker.resolve(&index, 10.0), Some(Some(1)));

    // Seeking backwards is a transition too.
    assert_eq!(tracker.resolve(&index, 0.0), Some(None));
}

#[test]
fn tracker_reset_forgets_previous_resolution() {
    let index = LyricsIndex::from_text("[00:05.00]a");
    let mut tracker = ActiveLineTracker::new();

    assert_eq!(tracker.resolve(&index, 5.0), Some(Some(0)));
    tracker.reset();
    assert_eq!(tracker.current(), None);
    assert_eq!(tracker.resolve(&index, 5.0), Some(Some(0)));
}
