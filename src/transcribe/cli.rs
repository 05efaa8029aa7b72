use clap::{Args, ValueHint};
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct TranscribeArgs {
    /// Source video or audio file to transcribe
    #[arg(value_hint = ValueHint::FilePath)]
    pub media: PathBuf,

    /// Whisper model to use (e.g. tiny, base, small, medium, large-v3)
    #[arg(long, default_value = "medium")]
    pub model_size: String,

    /// Maximum characters per subtitle line
    #[arg(long, default_value_t = 22)]
    pub max_line_length: usize,

    /// Target device for the recognizer (e.g. cpu, cuda)
    #[arg(long, default_value = "cpu")]
    pub device: String,

    /// Recognizer compute type (e.g. int8, float16)
    #[arg(long, default_value = "int8")]
    pub compute_type: String,
}
