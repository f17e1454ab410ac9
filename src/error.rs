use crate::model::event::MidiEvent;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Font resource not found: {}", .0.display())]
    ResourceNotFound(PathBuf),

    #[error("Failed to load font {}: {reason}", path.display())]
    InvalidFont { path: PathBuf, reason: String },

    #[error("Invalid input text: {0}")]
    InvalidInput(String),

    #[error("Invalid velocity {velocity} at row {row}, column {column}")]
    InvalidVelocity {
        row: usize,
        column: usize,
        velocity: i8,
    },

    #[error("Row {row} maps to out-of-range MIDI note {note}")]
    NoteOutOfRange { row: usize, note: i32 },

    #[error("Event {0:?} does not fit in a MIDI message")]
    UnencodableEvent(MidiEvent),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
