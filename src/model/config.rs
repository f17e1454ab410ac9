use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_FONT_PATH: &str = "fonts/moeda.ttf";

#[derive(Parser, Debug)]
#[command(
    name = "text2midi",
    version,
    about = "Convert a string to MIDI art!",
    after_help = "Try something like: text2midi \"Hello, World!\" hello_world.mid"
)]
pub struct Args {
    /// Message to be written out in MIDI.
    pub text: String,

    /// Path to the output MIDI file.
    pub out_file: PathBuf,

    /// Path to the TrueType font used to render the message.
    /// No font ships with the binary, so point this at a TTF/OTF file if the default path does not exist.
    #[arg(short, long, default_value = DEFAULT_FONT_PATH)]
    pub font: PathBuf,

    /// How glyph edges are rasterized: binary|antialiased.
    /// Only antialiased edges carry nonzero velocities.
    #[arg(short, long, default_value = "binary")]
    pub render_mode: String,

    /// Dry run (log the first dry_run_max events, print all of them as JSON and exit without writing).
    #[arg(short, long, default_value_t = false)]
    pub dry_run: bool,

    /// Maximum events to log in dry run.
    #[arg(long, default_value_t = 80)]
    pub dry_run_max: usize,
}
