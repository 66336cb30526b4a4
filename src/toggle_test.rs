use super::*;
use crate::audio::AudioError;
use crate::types::Key;
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
struct Recorder {
    cues: Arc<Mutex<Vec<Cue>>>,
}

impl CuePlayer for Recorder {
    fn play(&self, cue: Cue) -> Result<(), AudioError> {
        self.cues.lock().unwrap().push(cue);
        Ok(())
    }
}

struct Broken;

impl CuePlayer for Broken {
    fn play(&self, _cue: Cue) -> Result<(), AudioError> {
        Err(AudioError::Unavailable)
    }
}

fn drain(rx: &mut mpsc::UnboundedReceiver<ModeChange>) -> Vec<ModeChange> {
    let mut out = Vec::new();
    while let Ok(change) = rx.try_recv() {
        out.push(change);
    }
    out
}

// =============================================================================
// TRANSITIONS
// =============================================================================

#[test]
fn starts_at_day_by_default() {
    let toggle = Toggle::new();
    assert_eq!(toggle.mode(), Mode::Day);
    assert!(!toggle.is_night());
}

#[test]
fn host_can_start_at_night() {
    let mut toggle = Toggle::with_mode(Mode::Night);
    assert!(toggle.is_night());
    assert_eq!(toggle.activate(), Mode::Day);
}

#[test]
fn activation_alternates_strictly() {
    let mut toggle = Toggle::new();
    for n in 1..=51u64 {
        let mode = toggle.activate();
        assert_eq!(mode.is_night(), n % 2 == 1, "after {n} activations");
        assert_eq!(toggle.transitions(), n);
    }
}

#[test]
fn pointer_and_keys_reach_the_same_state() {
    for start in [Mode::Day, Mode::Night] {
        let inputs = [
            Input::Pointer,
            Input::Key(Key::Enter),
            Input::Key(Key::Char(' ')),
        ];
        let results: Vec<_> = inputs
            .iter()
            .map(|&input| {
                let mut toggle = Toggle::with_mode(start);
                let mut rx = toggle.subscribe();
                let mode = toggle.handle(input);
                (mode, drain(&mut rx))
            })
            .collect();

        let expected = start.toggled();
        for (mode, changes) in &results {
            assert_eq!(*mode, Some(expected));
            assert_eq!(
                changes,
                &[ModeChange {
                    mode: expected,
                    sequence: 1
                }]
            );
        }
    }
}

#[test]
fn other_keys_are_ignored() {
    let recorder = Recorder::default();
    let mut toggle = Toggle::new().with_player(recorder.clone());
    let mut rx = toggle.subscribe();

    for key in [Key::Char('x'), Key::Char('\t'), Key::Other] {
        assert_eq!(toggle.handle(Input::Key(key)), None);
    }

    assert_eq!(toggle.mode(), Mode::Day);
    assert_eq!(toggle.transitions(), 0);
    assert!(drain(&mut rx).is_empty());
    assert!(recorder.cues.lock().unwrap().is_empty());
}

// =============================================================================
// SIDE EFFECTS
// =============================================================================

#[test]
fn cue_follows_new_mode() {
    let recorder = Recorder::default();
    let mut toggle = Toggle::new().with_player(recorder.clone());
    toggle.activate();
    toggle.activate();
    toggle.handle(Input::Key(Key::Enter));
    assert_eq!(
        *recorder.cues.lock().unwrap(),
        vec![Cue::Night, Cue::Day, Cue::Night]
    );
}

#[test]
fn broken_audio_does_not_block_transition() {
    let mut toggle = Toggle::new().with_player(Broken);
    let mut rx = toggle.subscribe();

    assert_eq!(toggle.activate(), Mode::Night);
    assert_eq!(toggle.activate(), Mode::Day);

    let modes: Vec<bool> = drain(&mut rx).iter().map(ModeChange::is_night).collect();
    assert_eq!(modes, vec![true, false]);
}

#[test]
fn every_subscriber_is_notified() {
    let mut toggle = Toggle::new();
    let mut a = toggle.subscribe();
    let mut b = toggle.subscribe();

    toggle.activate();

    assert_eq!(drain(&mut a).len(), 1);
    assert_eq!(drain(&mut b).len(), 1);
}

#[test]
fn dropped_subscribers_are_pruned() {
    let mut toggle = Toggle::new();
    let rx = toggle.subscribe();
    let mut kept = toggle.subscribe();
    drop(rx);

    toggle.activate();

    assert_eq!(toggle.subscriber_count(), 1);
    assert_eq!(drain(&mut kept).len(), 1);
}

#[test]
fn late_subscriber_sees_only_later_changes() {
    let mut toggle = Toggle::new();
    toggle.activate();
    let mut rx = toggle.subscribe();
    toggle.activate();

    let changes = drain(&mut rx);
    assert_eq!(
        changes,
        vec![ModeChange {
            mode: Mode::Day,
            sequence: 2
        }]
    );
}

#[tokio::test]
async fn changes_arrive_in_order() {
    let mut toggle = Toggle::new();
    let mut rx = toggle.subscribe();

    for _ in 0..4 {
        toggle.activate();
    }
    drop(toggle);

    let mut seen = Vec::new();
    while let Some(change) = rx.recv().await {
        seen.push((change.sequence, change.mode));
    }
    assert_eq!(
        seen,
        vec![
            (1, Mode::Night),
            (2, Mode::Day),
            (3, Mode::Night),
            (4, Mode::Day)
        ]
    );
}
