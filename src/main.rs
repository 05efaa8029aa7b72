mod common;
mod transcribe;
mod ui;

use clap::{Parser, Subcommand};

use crate::transcribe::TranscribeArgs;
use crate::ui::prelude::{Level, OutputFormat, emit};

/// Clipscribe main parser
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Activate debug mode
    #[arg(short, long, global = true)]
    debug: bool,

    /// Emit machine-readable JSON events instead of styled text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Transcribe a media file into a .txt transcript and a dynamic .srt
    Transcribe(TranscribeArgs),
}

fn main() {
    let cli = Cli::parse();

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    ui::init(format, format == OutputFormat::Text);
    ui::set_debug_mode(cli.debug);

    let result = match cli.command {
        Commands::Transcribe(args) => transcribe::handle_transcribe(args),
    };

    if let Err(err) = result {
        emit(Level::Error, "clipscribe.failed", &format!("{err:#}"), None);
        std::process::exit(1);
    }
}
