use serde::Serialize;

/// A single channel voice event with a delta time relative to the previous event in the track.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MidiEvent {
    NoteOn { note: u8, velocity: u8, delta: u32 },
    NoteOff { note: u8, velocity: u8, delta: u32 },
}

impl MidiEvent {
    pub fn note(&self) -> u8 {
        match *self {
            MidiEvent::NoteOn { note, .. } | MidiEvent::NoteOff { note, .. } => note,
        }
    }

    pub fn velocity(&self) -> u8 {
        match *self {
            MidiEvent::NoteOn { velocity, .. } | MidiEvent::NoteOff { velocity, .. } => velocity,
        }
    }

    pub fn delta(&self) -> u32 {
        match *self {
            MidiEvent::NoteOn { delta, .. } | MidiEvent::NoteOff { delta, .. } => delta,
        }
    }

    pub fn is_note_on(&self) -> bool {
        matches!(self, MidiEvent::NoteOn { .. })
    }
}
