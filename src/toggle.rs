//! The two-state day/night switch.
//!
//! Every activation flips the mode, asks the cue player for a sound and then
//! tells each subscriber the new mode. A broken audio device never blocks
//! the flip.

use crate::audio::{Cue, CuePlayer, Silent};
use crate::types::{Input, Mode};
use tokio::sync::mpsc;

/// Sent to subscribers after every transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeChange {
    pub mode: Mode,
    /// Number of transitions so far, starting at 1.
    pub sequence: u64,
}

impl ModeChange {
    pub fn is_night(&self) -> bool {
        self.mode.is_night()
    }
}

pub struct Toggle {
    mode: Mode,
    transitions: u64,
    player: Box<dyn CuePlayer + Send>,
    subscribers: Vec<mpsc::UnboundedSender<ModeChange>>,
}

impl Toggle {
    /// A silent toggle starting at `Day`.
    pub fn new() -> Self {
        Self::with_mode(Mode::Day)
    }

    pub fn with_mode(mode: Mode) -> Self {
        Self {
            mode,
            transitions: 0,
            player: Box::new(Silent),
            subscribers: Vec::new(),
        }
    }

    pub fn with_player(mut self, player: impl CuePlayer + Send + 'static) -> Self {
        self.player = Box::new(player);
        self
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_night(&self) -> bool {
        self.mode.is_night()
    }

    pub fn transitions(&self) -> u64 {
        self.transitions
    }

    /// Register a listener. It receives every later transition in order.
    pub fn subscribe(&mut self) -> mpsc::UnboundedReceiver<ModeChange> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers.push(tx);
        rx
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Route a user interaction. Returns the new mode when the input activated the switch.
    pub fn handle(&mut self, input: Input) -> Option<Mode> {
        if !input.activates() {
            tracing::trace!(?input, "ignored non-activating input");
            return None;
        }
        Some(self.activate())
    }

    /// Flip the mode unconditionally.
    pub fn activate(&mut self) -> Mode {
        self.mode = self.mode.toggled();
        self.transitions += 1;
        tracing::debug!(mode = %self.mode, transitions = self.transitions, "toggle activated");

        if let Err(e) = self.player.play(Cue::for_mode(self.mode)) {
            tracing::debug!(error = %e, "transition cue dropped");
        }

        let change = ModeChange {
            mode: self.mode,
            sequence: self.transitions,
        };
        self.subscribers.retain(|tx| tx.send(change).is_ok());

        self.mode
    }
}

impl Default for Toggle {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Toggle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Toggle")
            .field("mode", &self.mode)
            .field("transitions", &self.transitions)
            .field("subscribers", &self.subscribers.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "toggle_test.rs"]
mod tests;
