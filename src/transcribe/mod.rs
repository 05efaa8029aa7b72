pub mod cli;
pub mod commands;
mod audio;
mod captions;
mod srt;
mod transcript;
mod utils;
mod whisper;

pub use cli::TranscribeArgs;
pub use commands::handle_transcribe;
