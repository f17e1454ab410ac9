use crate::error::Result;
use crate::font::{GlyphSource, TrueTypeFont};
use crate::midi_writer::write_midi;
use crate::model::config::DEFAULT_FONT_PATH;
use crate::model::event::MidiEvent;
use crate::rasterizer::{FONT_SIZE_PX, RenderMode, rasterize};
use crate::sequencer::sequence;
use crate::velocity::to_velocities;
use log::{debug, info};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct Options {
    pub font_path: PathBuf,
    pub render_mode: RenderMode,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            font_path: PathBuf::from(DEFAULT_FONT_PATH),
            render_mode: RenderMode::default(),
        }
    }
}

/// Text to MIDI events, without touching the filesystem.
pub fn render_events(text: &str, font: &dyn GlyphSource, mode: RenderMode) -> Result<Vec<MidiEvent>> {
    let image = rasterize(text, font, mode)?;
    let velocities = to_velocities(&image);

    let audible = velocities.cells().iter().filter(|&&v| v > 0).count();
    debug!(
        "{} of {} pixels are audible ({:?} rendering)",
        audible,
        velocities.cells().len(),
        mode
    );

    sequence(&velocities)
}

/// Load the font, render `text` and save it as a MIDI file at `out_file`.
pub fn generate_midi<P: AsRef<Path>>(text: &str, out_file: P, options: &Options) -> Result<()> {
    info!("Loading font: '{}'...", options.font_path.display());
    let font = TrueTypeFont::load(&options.font_path, FONT_SIZE_PX)?;

    let events = render_events(text, &font, options.render_mode)?;
    write_midi(&events, out_file)
}
