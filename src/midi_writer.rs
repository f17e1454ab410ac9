use crate::error::{Error, Result};
use crate::model::event::MidiEvent;
use log::{debug, info};
use midly::num::{u4, u7, u15, u28};
use midly::{Format, Header, MetaMessage, MidiMessage, Smf, Timing, TrackEvent, TrackEventKind};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

pub const TICKS_PER_QUARTER: u16 = 480;
const CHANNEL: u8 = 0;

/// Build a single-track SMF from the event list. An `EndOfTrack` meta event is appended.
pub fn events_to_smf(events: &[MidiEvent]) -> Result<Smf<'static>> {
    let mut smf = Smf::new(Header::new(
        Format::SingleTrack,
        Timing::Metrical(u15::new(TICKS_PER_QUARTER)),
    ));

    let mut track = Vec::with_capacity(events.len() + 1);
    for event in events {
        track.push(to_track_event(event)?);
    }
    track.push(TrackEvent {
        delta: u28::new(0),
        kind: TrackEventKind::Meta(MetaMessage::EndOfTrack),
    });

    smf.tracks.push(track);
    Ok(smf)
}

fn to_track_event(event: &MidiEvent) -> Result<TrackEvent<'static>> {
    let invalid = || Error::UnencodableEvent(*event);

    let key = u7::try_from(event.note()).ok_or_else(invalid)?;
    let vel = u7::try_from(event.velocity()).ok_or_else(invalid)?;
    let delta = u28::try_from(event.delta()).ok_or_else(invalid)?;

    let message = match event {
        MidiEvent::NoteOn { .. } => MidiMessage::NoteOn { key, vel },
        MidiEvent::NoteOff { .. } => MidiMessage::NoteOff { key, vel },
    };

    Ok(TrackEvent {
        delta,
        kind: TrackEventKind::Midi {
            channel: u4::new(CHANNEL),
            message,
        },
    })
}

/// Encode the event list as Standard MIDI File bytes.
pub fn encode_midi(events: &[MidiEvent]) -> Result<Vec<u8>> {
    let smf = events_to_smf(events)?;
    let mut bytes = Vec::new();
    smf.write_std(&mut bytes)?;
    Ok(bytes)
}

/// Write the event list to `path`, replacing any existing file.
///
/// Bytes go to a temporary file next to the target which is only renamed into place once
/// fully written, so a failed write never leaves a partial file at `path`.
pub fn write_midi<P: AsRef<Path>>(events: &[MidiEvent], path: P) -> Result<()> {
    let path = path.as_ref();
    let bytes = encode_midi(events)?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(&bytes)?;
    tmp.flush()?;
    tmp.as_file().sync_all()?;
    debug!("Wrote {} bytes to {}", bytes.len(), tmp.path().display());

    tmp.persist(path).map_err(|e| e.error)?;
    info!("Saved {} events to '{}'..!", events.len(), path.display());

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::sequencer::PROLOGUE;

    fn sample_events() -> Vec<MidiEvent> {
        vec![
            PROLOGUE,
            MidiEvent::NoteOn {
                note: 58,
                velocity: 89,
                delta: 20,
            },
            MidiEvent::NoteOff {
                note: 58,
                velocity: 127,
                delta: 0,
            },
        ]
    }

    #[test]
    fn encoded_file_parses_back() {
        env_logger::try_init().unwrap_or(());

        let bytes = encode_midi(&sample_events()).unwrap();
        let smf = Smf::parse(&bytes).unwrap();

        assert_eq!(smf.header.format, Format::SingleTrack);
        assert_eq!(
            smf.header.timing,
            Timing::Metrical(u15::new(TICKS_PER_QUARTER))
        );
        assert_eq!(smf.tracks.len(), 1);

        let track = &smf.tracks[0];
        assert_eq!(track.len(), 4);
        assert_eq!(track[0].delta.as_int(), 32);
        assert_eq!(
            track[0].kind,
            TrackEventKind::Midi {
                channel: u4::new(0),
                message: MidiMessage::NoteOff {
                    key: u7::new(30),
                    vel: u7::new(127)
                }
            }
        );
        assert_eq!(track[1].delta.as_int(), 20);
        assert_eq!(
            track[1].kind,
            TrackEventKind::Midi {
                channel: u4::new(0),
                message: MidiMessage::NoteOn {
                    key: u7::new(58),
                    vel: u7::new(89)
                }
            }
        );
        assert_eq!(track[3].kind, TrackEventKind::Meta(MetaMessage::EndOfTrack));
    }

    #[test]
    fn out_of_range_event_is_rejected() {
        let bad = MidiEvent::NoteOn {
            note: 200,
            velocity: 1,
            delta: 0,
        };
        assert!(matches!(
            encode_midi(&[bad]),
            Err(Error::UnencodableEvent(_))
        ));
    }

    #[test]
    fn write_replaces_existing_file() {
        env_logger::try_init().unwrap_or(());

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.mid");
        std::fs::write(&path, b"stale").unwrap();

        write_midi(&sample_events(), &path).unwrap();

        let written = std::fs::read(&path).unwrap();
        assert_eq!(written, encode_midi(&sample_events()).unwrap());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn failed_write_leaves_nothing_behind() {
        env_logger::try_init().unwrap_or(());

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.mid");

        let result = write_midi(&sample_events(), &path);
        assert!(matches!(result, Err(Error::Io(_))));
        assert!(!path.exists());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
