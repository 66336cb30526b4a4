use super::*;
use std::io;

struct Closed;

impl Write for Closed {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn bell_rings_on_a_terminal() {
    let mut out = Vec::new();
    assert!(ring_bell(&mut out, true).is_ok());
    assert_eq!(out, b"\x07");
}

#[test]
fn bell_is_unavailable_off_a_terminal() {
    let mut out = Vec::new();
    let err = ring_bell(&mut out, false).unwrap_err();
    assert!(matches!(err, AudioError::Unavailable));
    assert!(out.is_empty());
}

#[test]
fn failed_bell_write_is_a_playback_error() {
    let err = ring_bell(&mut Closed, true).unwrap_err();
    match err {
        AudioError::Playback(msg) => assert!(msg.contains("closed"), "{msg}"),
        other => panic!("expected playback error, got {other:?}"),
    }
}

#[test]
fn cue_follows_mode() {
    assert_eq!(Cue::for_mode(Mode::Day), Cue::Day);
    assert_eq!(Cue::for_mode(Mode::Night), Cue::Night);
    assert_eq!(Cue::Day.file_name(), "day.wav");
    assert_eq!(Cue::Night.file_name(), "night.wav");
}

#[test]
fn candidates_are_named_after_the_cue() {
    let candidates = sound_candidates("night.wav");
    assert!(!candidates.is_empty());
    assert!(candidates
        .iter()
        .all(|p| p.file_name().and_then(|n| n.to_str()) == Some("night.wav")));
}
