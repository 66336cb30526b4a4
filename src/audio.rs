use crate::types::Mode;
use std::io::Write;
use std::path::{Path, PathBuf};

/// The sound requested after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Day,
    Night,
}

impl Cue {
    pub fn for_mode(mode: Mode) -> Self {
        match mode {
            Mode::Day => Cue::Day,
            Mode::Night => Cue::Night,
        }
    }

    fn file_name(self) -> &'static str {
        match self {
            Cue::Day => "day.wav",
            Cue::Night => "night.wav",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AudioError {
    #[error("audio output unavailable")]
    Unavailable,
    #[error("cue playback failed: {0}")]
    Playback(String),
}

/// Plays transition cues. Implementations must return promptly; playback itself is
/// fire-and-forget.
pub trait CuePlayer {
    fn play(&self, cue: Cue) -> Result<(), AudioError>;
}

/// Never makes a sound.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl CuePlayer for Silent {
    fn play(&self, _cue: Cue) -> Result<(), AudioError> {
        Ok(())
    }
}

/// Plays `day.wav` / `night.wav` from beside the executable or the working directory,
/// falling back to the terminal bell.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCue;

impl CuePlayer for SystemCue {
    fn play(&self, cue: Cue) -> Result<(), AudioError> {
        let file_name = cue.file_name();
        let played = sound_candidates(file_name)
            .iter()
            .any(|candidate| candidate.exists() && play_sound_path(candidate));

        if played {
            return Ok(());
        }
        tracing::trace!(file_name, "cue file not found, ringing bell");
        fallback_beep()
    }
}

fn sound_candidates(file_name: &str) -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            candidates.push(dir.join(file_name));
            candidates.push(dir.join("sounds").join(file_name));
            if let Some(parent) = dir.parent() {
                candidates.push(parent.join(file_name));
            }
        }
    }

    if let Ok(cwd) = std::env::current_dir() {
        candidates.push(cwd.join(file_name));
        candidates.push(cwd.join("sounds").join(file_name));
    }

    candidates
}

#[cfg(windows)]
fn play_sound_path(path: &Path) -> bool {
    use windows_sys::Win32::Media::Audio::{PlaySoundW, SND_ASYNC, SND_FILENAME, SND_NODEFAULT};

    let mut wide: Vec<u16> = path.as_os_str().to_string_lossy().encode_utf16().collect();
    wide.push(0);

    // SND_ASYNC returns as soon as playback is queued.
    unsafe {
        PlaySoundW(
            wide.as_ptr(),
            std::ptr::null_mut(),
            SND_FILENAME | SND_ASYNC | SND_NODEFAULT,
        ) != 0
    }
}

#[cfg(not(windows))]
fn play_sound_path(_path: &Path) -> bool {
    false
}

fn fallback_beep() -> Result<(), AudioError> {
    use std::io::IsTerminal;

    let stderr = std::io::stderr();
    let is_terminal = stderr.is_terminal();
    ring_bell(&mut stderr.lock(), is_terminal)
}

/// Write BEL to `out`, or fail with `Unavailable` when it is not a terminal.
fn ring_bell(out: &mut impl Write, is_terminal: bool) -> Result<(), AudioError> {
    if !is_terminal {
        return Err(AudioError::Unavailable);
    }
    out.write_all(b"\x07")
        .and_then(|()| out.flush())
        .map_err(|e| AudioError::Playback(e.to_string()))
}

#[cfg(test)]
#[path = "audio_test.rs"]
mod tests;
