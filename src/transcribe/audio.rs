use anyhow::{Context, Result};
use std::path::Path;
use std::process::{Command, Stdio};

/// Extract a recognizer-ready audio track: mono, 16 kHz, signed 16-bit PCM.
pub fn extract_audio_to_wav(input: &Path, output: &Path) -> Result<()> {
    let status = Command::new("ffmpeg")
        .args([
            "-y",
            "-i",
            &input.to_string_lossy(),
            "-vn",
            "-acodec",
            "pcm_s16le",
            "-ar",
            "16000",
            "-ac",
            "1",
            &output.to_string_lossy(),
        ])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .with_context(|| {
            format!(
                "Failed to run ffmpeg to extract audio from {}",
                input.display()
            )
        })?;

    if !status.success() {
        anyhow::bail!("ffmpeg failed to extract audio from {}", input.display());
    }

    Ok(())
}
