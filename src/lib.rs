mod error;
mod font;
mod midi_writer;
mod model;
mod pipeline;
mod rasterizer;
mod sequencer;
mod util;
mod velocity;

pub use error::*;
pub use font::*;
pub use midi_writer::*;
pub use model::config::*;
pub use model::event::*;
pub use model::grid::*;
pub use pipeline::*;
pub use rasterizer::*;
pub use sequencer::*;
pub use util::*;
pub use velocity::*;
