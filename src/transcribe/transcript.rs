/// Accumulates the plain-text transcript across segments.
///
/// Each segment contributes its trimmed text plus a single trailing space;
/// the separator is appended even when a segment trims to nothing, and the
/// whole result is trimmed once at the end.
#[derive(Debug, Default)]
pub struct TranscriptBuilder {
    text: String,
}

impl TranscriptBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_segment(&mut self, raw_text: &str) {
        self.text.push_str(raw_text.trim());
        self.text.push(' ');
    }

    pub fn finish(self) -> String {
        self.text.trim().to_string()
    }
}
