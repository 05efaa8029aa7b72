//! WhisperX invocation and output parsing.
//!
//! The recognizer runs out of process (via uvx) and writes a JSON document
//! with segment- and word-level timestamps plus detected-language metadata.

use std::ffi::OsString;
use std::path::Path;

use anyhow::{Context, Result};
use duct::cmd;
use serde::Deserialize;

use super::captions::{Segment, TimedWord};
use super::cli::TranscribeArgs;

#[derive(Debug, Deserialize)]
pub struct RecognizerOutput {
    #[serde(default)]
    pub segments: Vec<WhisperSegment>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub language_probability: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct WhisperSegment {
    #[serde(default)]
    pub start: f64,
    #[serde(default)]
    pub end: f64,
    #[serde(default)]
    pub text: String,
    // Missing when alignment failed for a segment
    #[serde(default)]
    pub words: Vec<WhisperWord>,
}

#[derive(Debug, Deserialize)]
pub struct WhisperWord {
    pub word: String,
    #[serde(default)]
    pub start: f64,
    #[serde(default)]
    pub end: f64,
    #[serde(default)]
    pub score: f64,
}

impl WhisperSegment {
    pub fn into_segment(self) -> Segment {
        Segment {
            start: self.start,
            end: self.end,
            text: self.text,
            words: self
                .words
                .into_iter()
                .map(|w| TimedWord {
                    text: w.word,
                    start: w.start,
                    end: w.end,
                })
                .collect(),
        }
    }
}

pub fn parse_recognizer_json(json_str: &str) -> Result<RecognizerOutput> {
    serde_json::from_str(json_str).context("Failed to parse WhisperX JSON output")
}

pub fn run_whisperx(audio: &Path, output_dir: &Path, args: &TranscribeArgs) -> Result<()> {
    let whisper_args: Vec<OsString> = vec![
        OsString::from("whisperx"),
        audio.as_os_str().to_os_string(),
        OsString::from("--output_format"),
        OsString::from("json"),
        OsString::from("--output_dir"),
        output_dir.as_os_str().to_os_string(),
        OsString::from("--model"),
        OsString::from(args.model_size.clone()),
        OsString::from("--device"),
        OsString::from(args.device.clone()),
        OsString::from("--compute_type"),
        OsString::from(args.compute_type.clone()),
        OsString::from("--beam_size"),
        OsString::from("5"),
    ];

    cmd("uvx", whisper_args)
        .run()
        .with_context(|| format!("Failed to run WhisperX for {}", audio.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "segments": [
            {"start": 0.0, "end": 2.1, "text": " Hello world.", "words": [
                {"word": "Hello", "start": 0.0, "end": 0.4, "score": 0.98},
                {"word": "world.", "start": 0.5, "end": 0.9, "score": 0.95}
            ]},
            {"start": 2.5, "end": 4.0, "text": " Unaligned tail."}
        ],
        "language": "en",
        "language_probability": 0.99
    }"#;

    #[test]
    fn parses_whisperx_json() {
        let output = parse_recognizer_json(SAMPLE).expect("parse");

        assert_eq!(output.language.as_deref(), Some("en"));
        assert_eq!(output.language_probability, Some(0.99));
        assert_eq!(output.segments.len(), 2);
        assert_eq!(output.segments[0].words.len(), 2);
        assert!(output.segments[1].words.is_empty());
    }

    #[test]
    fn converts_segments_into_timed_words() {
        let output = parse_recognizer_json(SAMPLE).expect("parse");
        let segment = output.segments.into_iter().next().unwrap().into_segment();

        assert_eq!(segment.text, " Hello world.");
        assert_eq!(segment.end, 2.1);
        assert_eq!(segment.words[1].text, "world.");
        assert_eq!(segment.words[1].start, 0.5);
    }

    #[test]
    fn tolerates_missing_language_metadata() {
        let output = parse_recognizer_json(r#"{"segments": []}"#).expect("parse");

        assert!(output.language.is_none());
        assert!(output.language_probability.is_none());
        assert!(output.segments.is_empty());
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(parse_recognizer_json("not json").is_err());
    }
}
