use crate::error::{Error, Result};
use crate::model::event::MidiEvent;
use crate::model::grid::VelocityGrid;
use log::debug;

/// Lead-in event emitted before any pixel data.
pub const PROLOGUE: MidiEvent = MidiEvent::NoteOff {
    note: 30,
    velocity: 127,
    delta: 32,
};

/// Note played by the top row of the canvas. Each row below drops by `SEMITONES_PER_ROW`.
pub const ANCHOR_NOTE: i32 = 60;
pub const SEMITONES_PER_ROW: i32 = 2;

/// Ticks between the first note of one column and the notes of the previous column.
pub const COLUMN_GAP: u32 = 20;
pub const RELEASE_VELOCITY: u8 = 127;

/// MIDI note for a canvas row, if it is a valid note number.
pub fn note_for_row(row: usize) -> Option<u8> {
    let note = ANCHOR_NOTE - SEMITONES_PER_ROW * i32::try_from(row).ok()?;
    u8::try_from(note).ok().filter(|n| *n <= 127)
}

/// Walk the grid column by column, top to bottom, emitting a note on/off pair for every
/// audible cell. The first note in a column waits `COLUMN_GAP` ticks, the rest of the column
/// stacks on top of it.
pub fn sequence(grid: &VelocityGrid) -> Result<Vec<MidiEvent>> {
    let mut events = vec![PROLOGUE];

    for column in 0..grid.width() {
        let mut new_column = true;

        for (row, velocity) in grid.column(column).enumerate() {
            if velocity < 0 {
                return Err(Error::InvalidVelocity {
                    row,
                    column,
                    velocity,
                });
            }

            if velocity == 0 {
                continue;
            }

            let Some(note) = note_for_row(row) else {
                return Err(Error::NoteOutOfRange {
                    row,
                    note: ANCHOR_NOTE - SEMITONES_PER_ROW * row as i32,
                });
            };

            events.push(MidiEvent::NoteOn {
                note,
                velocity: velocity as u8,
                delta: if new_column { COLUMN_GAP } else { 0 },
            });
            events.push(MidiEvent::NoteOff {
                note,
                velocity: RELEASE_VELOCITY,
                delta: 0,
            });

            new_column = false;
        }
    }

    debug!(
        "Sequenced {} note pairs from a {}x{} grid",
        (events.len() - 1) / 2,
        grid.width(),
        grid.height()
    );

    Ok(events)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::grid::Grid;

    fn single_cell(width: usize, height: usize, row: usize, column: usize, v: i8) -> VelocityGrid {
        let mut grid = Grid::filled(width, height, 0i8);
        grid.set(row, column, v);
        grid
    }

    #[test]
    fn prologue_always_first() {
        env_logger::try_init().unwrap_or(());

        let empty = Grid::filled(0, 0, 0i8);
        assert_eq!(sequence(&empty).unwrap(), vec![PROLOGUE]);

        let silent = Grid::filled(20, 20, 0i8);
        assert_eq!(sequence(&silent).unwrap(), vec![PROLOGUE]);

        let loud = Grid::filled(3, 3, 100i8);
        assert_eq!(sequence(&loud).unwrap()[0], PROLOGUE);
    }

    #[test]
    fn single_cell_emits_one_pair() {
        env_logger::try_init().unwrap_or(());

        let events = sequence(&single_cell(10, 20, 7, 4, 42)).unwrap();
        assert_eq!(
            events,
            vec![
                PROLOGUE,
                MidiEvent::NoteOn {
                    note: 46,
                    velocity: 42,
                    delta: 20
                },
                MidiEvent::NoteOff {
                    note: 46,
                    velocity: 127,
                    delta: 0
                },
            ]
        );
    }

    #[test]
    fn column_notes_stack() {
        env_logger::try_init().unwrap_or(());

        let grid = Grid::from_rows(vec![
            vec![0i8, 10, 0],
            vec![0, 0, 30],
            vec![0, 20, 40],
        ])
        .unwrap();

        let events = sequence(&grid).unwrap();
        let note_ons: Vec<_> = events
            .iter()
            .filter(|e| e.is_note_on())
            .map(|e| (e.note(), e.velocity(), e.delta()))
            .collect();

        assert_eq!(
            note_ons,
            vec![(60, 10, 20), (56, 20, 0), (58, 30, 20), (56, 40, 0)]
        );
        assert!(
            events[1..]
                .chunks(2)
                .all(|pair| pair[1].note() == pair[0].note() && pair[1].delta() == 0)
        );
    }

    #[test]
    fn negative_velocity_is_rejected() {
        let result = sequence(&single_cell(4, 4, 2, 3, -5));
        assert!(matches!(
            result,
            Err(Error::InvalidVelocity {
                row: 2,
                column: 3,
                velocity: -5
            })
        ));
    }

    #[test]
    fn rows_past_note_zero_are_rejected() {
        assert_eq!(note_for_row(0), Some(60));
        assert_eq!(note_for_row(30), Some(0));
        assert_eq!(note_for_row(31), None);

        // Silent rows out there are fine.
        assert!(sequence(&Grid::filled(2, 40, 0i8)).is_ok());

        let result = sequence(&single_cell(2, 40, 35, 0, 1));
        assert!(matches!(
            result,
            Err(Error::NoteOutOfRange { row: 35, note: -10 })
        ));
    }
}
