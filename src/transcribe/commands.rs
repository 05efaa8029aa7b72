use std::fs;

use anyhow::{Context, Result};
use tempfile::TempDir;

use crate::common::progress::{create_progress_bar, create_spinner, finish_spinner_with_success};
use crate::ui::is_debug_enabled;
use crate::ui::prelude::{Level, OutputFormat, emit, get_output_format};

use super::audio::extract_audio_to_wav;
use super::captions::CueBuilder;
use super::cli::TranscribeArgs;
use super::srt::render_srt;
use super::transcript::TranscriptBuilder;
use super::utils::canonicalize_existing;
use super::whisper::{parse_recognizer_json, run_whisperx};

pub fn handle_transcribe(args: TranscribeArgs) -> Result<()> {
    if args.max_line_length == 0 {
        anyhow::bail!("--max-line-length must be at least 1");
    }

    let media_path = canonicalize_existing(&args.media)?;

    for tool in ["ffmpeg", "uvx"] {
        if which::which(tool).is_err() {
            anyhow::bail!("{tool} is required but was not found in PATH");
        }
    }

    emit(
        Level::Info,
        "transcribe.start",
        &format!(
            "Transcribing {} (model {}, max line length {})",
            media_path.display(),
            args.model_size,
            args.max_line_length
        ),
        None,
    );

    let workdir =
        TempDir::new().context("Failed to create temporary directory for decoded audio")?;
    let wav_path = workdir.path().join("audio.wav");
    if is_debug_enabled() {
        emit(
            Level::Debug,
            "transcribe.workdir",
            &format!("Decoding audio to {}", wav_path.display()),
            None,
        );
    }

    let text_mode = get_output_format() == OutputFormat::Text;

    let spinner = if text_mode {
        Some(create_spinner("Extracting audio with ffmpeg...".to_string()))
    } else {
        emit(
            Level::Info,
            "transcribe.extract",
            "Extracting audio with ffmpeg...",
            None,
        );
        None
    };
    let extracted = extract_audio_to_wav(&media_path, &wav_path);
    if let Some(pb) = spinner {
        if extracted.is_ok() {
            finish_spinner_with_success(pb, "Audio extracted");
        } else {
            pb.finish_and_clear();
        }
    }
    extracted?;

    emit(
        Level::Info,
        "transcribe.recognize",
        &format!(
            "Running WhisperX (model {}, this may take a while)...",
            args.model_size
        ),
        None,
    );
    run_whisperx(&wav_path, workdir.path(), &args)?;

    let json_path = workdir.path().join("audio.json");
    if !json_path.exists() {
        anyhow::bail!(
            "WhisperX did not produce the expected transcript at {}",
            json_path.display()
        );
    }
    let json = fs::read_to_string(&json_path)
        .with_context(|| format!("Failed to read {}", json_path.display()))?;
    let recognized = parse_recognizer_json(&json)?;

    if let Some(language) = &recognized.language {
        let detail = match recognized.language_probability {
            Some(p) => format!("Detected language: {language} (probability {p:.2})"),
            None => format!("Detected language: {language}"),
        };
        emit(Level::Info, "transcribe.language", &detail, None);
    }

    let mut transcript = TranscriptBuilder::new();
    let mut captions = CueBuilder::new(args.max_line_length);
    let mut cues = Vec::new();

    let bar = text_mode.then(|| {
        create_progress_bar(
            recognized.segments.len() as u64,
            "Processing segments".to_string(),
        )
    });
    for whisper_segment in recognized.segments {
        let segment = whisper_segment.into_segment();
        transcript.push_segment(&segment.text);
        cues.extend(captions.cues_for_segment(&segment));
        if let Some(pb) = &bar {
            pb.inc(1);
        }
    }
    if let Some(pb) = bar {
        pb.finish_and_clear();
    }

    // Both artifacts are rendered fully before either file is touched, so a
    // failed stage never leaves partial outputs behind.
    let transcript_text = transcript.finish();
    let srt_body = render_srt(&cues);

    let txt_path = media_path.with_extension("txt");
    let srt_path = media_path.with_extension("srt");

    fs::write(&txt_path, &transcript_text)
        .with_context(|| format!("Failed to write transcript to {}", txt_path.display()))?;
    fs::write(&srt_path, &srt_body)
        .with_context(|| format!("Failed to write subtitles to {}", srt_path.display()))?;

    emit(
        Level::Success,
        "transcribe.txt",
        &format!("Transcript saved to {}", txt_path.display()),
        None,
    );
    emit(
        Level::Success,
        "transcribe.srt",
        &format!("Subtitles saved to {} ({} cues)", srt_path.display(), cues.len()),
        None,
    );

    Ok(())
}
