use super::captions::Cue;

/// Render cues as an SRT document body.
///
/// Each block is the cue index, the timestamp line, the text, and a blank
/// terminator line; the flat line list is joined with `\n`, so the body ends
/// with exactly one newline after the last cue's text.
pub fn render_srt(cues: &[Cue]) -> String {
    let mut lines = Vec::with_capacity(cues.len() * 4);
    for cue in cues {
        lines.push(cue.index.to_string());
        lines.push(format!(
            "{} --> {}",
            format_srt_timestamp(cue.start),
            format_srt_timestamp(cue.end)
        ));
        lines.push(cue.text.clone());
        lines.push(String::new());
    }
    lines.join("\n")
}

/// Format seconds as an SRT timestamp (`HH:MM:SS,mmm`).
///
/// Milliseconds round half away from zero. Negative input is a contract
/// violation, not a formattable value.
pub fn format_srt_timestamp(seconds: f64) -> String {
    assert!(
        seconds >= 0.0,
        "SRT timestamps must be non-negative, got {seconds}"
    );
    let mut millis = (seconds * 1000.0).round() as u64;
    let hours = millis / 3_600_000;
    millis %= 3_600_000;
    let minutes = millis / 60_000;
    millis %= 60_000;
    let secs = millis / 1_000;
    millis %= 1_000;
    format!("{hours:02}:{minutes:02}:{secs:02},{millis:03}")
}
