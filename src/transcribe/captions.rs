//! Dynamic cue segmentation for social-media style subtitles.
//!
//! Recognizer segments keep their own timing, but their text is re-wrapped:
//! words are packed greedily into lines bounded by a character budget, and
//! each packed line becomes one subtitle cue timed by its words.

/// A single recognized word with its own timing within a segment.
#[derive(Debug, Clone)]
pub struct TimedWord {
    pub text: String,
    pub start: f64,
    pub end: f64,
}

/// A contiguous span of recognized speech with word-level timestamps.
#[derive(Debug, Clone)]
pub struct Segment {
    pub start: f64,
    pub end: f64,
    pub text: String,
    pub words: Vec<TimedWord>,
}

/// One timed subtitle entry.
#[derive(Debug, Clone)]
pub struct Cue {
    pub index: usize,
    pub start: f64,
    pub end: f64,
    pub text: String,
}

/// Greedy word packer. Owns the running cue index so numbering stays
/// contiguous across segments; line state never crosses a segment boundary.
#[derive(Debug)]
pub struct CueBuilder {
    max_line_length: usize,
    next_index: usize,
}

impl CueBuilder {
    pub fn new(max_line_length: usize) -> Self {
        Self {
            max_line_length,
            next_index: 1,
        }
    }

    /// Pack one segment's words into cues.
    ///
    /// Single pass, no lookahead: a word that would push the line past the
    /// budget closes the current cue at that word's start time and opens a
    /// fresh line. The trailing line closes at the segment's own end time.
    /// A word longer than the budget on its own is emitted verbatim as one
    /// line; cue text is never empty.
    pub fn cues_for_segment(&mut self, segment: &Segment) -> Vec<Cue> {
        let Some(first) = segment.words.first() else {
            return Vec::new();
        };

        let mut cues = Vec::new();
        let mut line = String::new();
        // The first word's start even if that word is pure whitespace:
        // skipped words never advance timing.
        let mut line_start = first.start;

        for word in &segment.words {
            let text = word.text.trim();
            if text.is_empty() {
                continue;
            }

            let candidate_len = if line.is_empty() {
                text.chars().count()
            } else {
                line.chars().count() + 1 + text.chars().count()
            };

            if !line.is_empty() && candidate_len > self.max_line_length {
                cues.push(self.emit(line_start, word.start, &line));
                line.clear();
                line_start = word.start;
            }

            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(text);
        }

        if !line.is_empty() {
            cues.push(self.emit(line_start, segment.end, &line));
        }

        cues
    }

    fn emit(&mut self, start: f64, end: f64, line: &str) -> Cue {
        let cue = Cue {
            index: self.next_index,
            start,
            end,
            text: line.trim().to_string(),
        };
        self.next_index += 1;
        cue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str, start: f64, end: f64) -> TimedWord {
        TimedWord {
            text: text.to_string(),
            start,
            end,
        }
    }

    fn segment(words: Vec<TimedWord>, end: f64) -> Segment {
        let start = words.first().map(|w| w.start).unwrap_or(0.0);
        let text = words
            .iter()
            .map(|w| w.text.trim())
            .collect::<Vec<_>>()
            .join(" ");
        Segment {
            start,
            end,
            text,
            words,
        }
    }

    #[test]
    fn short_words_share_one_cue() {
        let mut builder = CueBuilder::new(22);
        let cues = builder.cues_for_segment(&segment(
            vec![word("Hello", 0.0, 0.3), word("world", 0.4, 0.8)],
            1.0,
        ));

        assert_eq!(cues.len(), 1);
        assert_eq!(cues[0].index, 1);
        assert_eq!(cues[0].start, 0.0);
        assert_eq!(cues[0].end, 1.0);
        assert_eq!(cues[0].text, "Hello world");
    }

    #[test]
    fn oversized_word_becomes_a_single_verbatim_cue() {
        let mut builder = CueBuilder::new(10);
        let cues = builder.cues_for_segment(&segment(
            vec![word("supercalifragilisticexpialidocious", 0.0, 2.0)],
            2.0,
        ));

        assert_eq!(cues.len(), 1);
        assert_eq!(cues[0].text, "supercalifragilisticexpialidocious");
        assert_eq!(cues[0].start, 0.0);
        assert_eq!(cues[0].end, 2.0);
    }

    #[test]
    fn overflow_cue_ends_at_the_overflowing_words_start() {
        let mut builder = CueBuilder::new(10);
        let cues = builder.cues_for_segment(&segment(
            vec![word("aaaaaaaaaa", 0.0, 0.5), word("bbbbbbbbbbb", 0.6, 1.2)],
            1.2,
        ));

        assert_eq!(cues.len(), 2);
        assert_eq!(cues[0].text, "aaaaaaaaaa");
        assert_eq!(cues[0].end, 0.6);
        assert_eq!(cues[1].text, "bbbbbbbbbbb");
        assert_eq!(cues[1].start, 0.6);
        assert_eq!(cues[1].end, 1.2);
    }

    #[test]
    fn candidate_exactly_at_budget_is_kept() {
        let mut builder = CueBuilder::new(11);
        let cues = builder.cues_for_segment(&segment(
            vec![word("Hello", 0.0, 0.3), word("world", 0.4, 0.8)],
            1.0,
        ));

        assert_eq!(cues.len(), 1);
        assert_eq!(cues[0].text, "Hello world");
    }

    #[test]
    fn indices_continue_across_segments() {
        let mut builder = CueBuilder::new(22);
        let first = builder.cues_for_segment(&segment(vec![word("one", 0.0, 0.5)], 0.5));
        let second = builder.cues_for_segment(&segment(vec![word("two", 1.0, 1.5)], 1.5));

        assert_eq!(first[0].index, 1);
        assert_eq!(second[0].index, 2);
    }

    #[test]
    fn zero_word_segment_produces_no_cues() {
        let mut builder = CueBuilder::new(22);
        let cues = builder.cues_for_segment(&Segment {
            start: 0.0,
            end: 1.0,
            text: "unaligned".to_string(),
            words: Vec::new(),
        });

        assert!(cues.is_empty());
        // The counter must not move either.
        let next = builder.cues_for_segment(&segment(vec![word("hi", 1.0, 1.2)], 1.2));
        assert_eq!(next[0].index, 1);
    }

    #[test]
    fn whitespace_words_are_skipped() {
        let mut builder = CueBuilder::new(22);
        let cues = builder.cues_for_segment(&segment(
            vec![
                word("Hello", 0.0, 0.3),
                word("   ", 0.35, 0.38),
                word("world", 0.4, 0.8),
            ],
            1.0,
        ));

        assert_eq!(cues.len(), 1);
        assert_eq!(cues[0].text, "Hello world");
    }

    #[test]
    fn whitespace_first_word_keeps_its_start_time() {
        // A leading word that trims to nothing still donates the line's start
        // time; skipped words never advance timing.
        let mut builder = CueBuilder::new(22);
        let cues = builder.cues_for_segment(&segment(
            vec![word("  ", 0.5, 0.6), word("Hi", 1.0, 1.3)],
            1.5,
        ));

        assert_eq!(cues.len(), 1);
        assert_eq!(cues[0].start, 0.5);
        assert_eq!(cues[0].text, "Hi");
    }

    #[test]
    fn all_whitespace_segment_produces_no_cues() {
        let mut builder = CueBuilder::new(22);
        let cues = builder.cues_for_segment(&segment(
            vec![word(" ", 0.0, 0.1), word("\t", 0.2, 0.3)],
            0.5,
        ));

        assert!(cues.is_empty());
    }

    #[test]
    fn budget_is_measured_in_chars_not_bytes() {
        let mut builder = CueBuilder::new(11);
        // "héllo wörld" is 11 chars but 13 bytes.
        let cues = builder.cues_for_segment(&segment(
            vec![word("héllo", 0.0, 0.3), word("wörld", 0.4, 0.8)],
            1.0,
        ));

        assert_eq!(cues.len(), 1);
        assert_eq!(cues[0].text, "héllo wörld");
    }

    #[test]
    fn packed_cues_cover_every_word_in_order_within_budget() {
        let words: Vec<TimedWord> = "the quick brown fox jumps over the lazy dog"
            .split(' ')
            .enumerate()
            .map(|(i, w)| word(w, i as f64 * 0.5, i as f64 * 0.5 + 0.4))
            .collect();
        let end = 5.0;
        let max = 12;

        let mut builder = CueBuilder::new(max);
        let cues = builder.cues_for_segment(&segment(words.clone(), end));

        let rejoined = cues
            .iter()
            .map(|c| c.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        let original = words
            .iter()
            .map(|w| w.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        assert_eq!(rejoined, original);

        for (i, cue) in cues.iter().enumerate() {
            assert!(cue.text.chars().count() <= max, "cue over budget: {:?}", cue);
            assert_eq!(cue.index, i + 1);
            assert!(cue.end >= cue.start);
            if let Some(next) = cues.get(i + 1) {
                assert!(cue.end <= next.start);
            }
        }
        assert_eq!(cues.last().unwrap().end, end);
    }

    #[test]
    fn repacking_identical_input_yields_identical_cues() {
        let seg = segment(
            vec![
                word("pack", 0.0, 0.2),
                word("these", 0.3, 0.5),
                word("words", 0.6, 0.9),
            ],
            1.0,
        );

        let first = CueBuilder::new(8).cues_for_segment(&seg);
        let second = CueBuilder::new(8).cues_for_segment(&seg);

        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.index, b.index);
            assert_eq!(a.start, b.start);
            assert_eq!(a.end, b.end);
            assert_eq!(a.text, b.text);
        }
    }
}
