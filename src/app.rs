use daybreak::audio::{Silent, SystemCue};
use daybreak::config::{self, Config};
use daybreak::presentation::{TrackGeometry, TRANSITION};
use daybreak::{Input, Mode, ModeChange, StarCache, Toggle};
use rand::Rng;
use ratatui::layout::Rect;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

const MAX_LOG_LINES: usize = 10_000;
const LOG_TRIM: usize = 1_000;

/// A line in the transition log.
#[derive(Debug, Clone)]
pub struct LogLine {
    pub time: String,
    pub text: String,
    pub mode: Option<Mode>,
}

impl LogLine {
    fn now(text: String, mode: Option<Mode>) -> Self {
        Self {
            time: chrono::Local::now().format("%H:%M:%S").to_string(),
            text,
            mode,
        }
    }
}

/// Visual progress from one mode to the other.
#[derive(Debug, Clone, Copy)]
pub struct Transition {
    pub from: Mode,
    pub to: Mode,
    pub started: Instant,
}

impl Transition {
    /// A finished transition resting at `mode`.
    pub fn settled(mode: Mode, now: Instant) -> Self {
        Self {
            from: mode,
            to: mode,
            started: now.checked_sub(TRANSITION).unwrap_or(now),
        }
    }

    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.started)
    }

    /// Linear progress in [0, 1] over `duration`.
    pub fn progress(&self, now: Instant, duration: Duration) -> f64 {
        if self.from == self.to || duration.is_zero() {
            return 1.0;
        }
        (self.elapsed(now).as_secs_f64() / duration.as_secs_f64()).min(1.0)
    }

    /// Head towards `to`. A reversal mid-flight continues from the current frame.
    pub fn retarget(&mut self, to: Mode, now: Instant) {
        if to == self.to {
            return;
        }
        let done = self.progress(now, TRANSITION);
        let remaining = TRANSITION.mul_f64(1.0 - done);
        self.from = self.to;
        self.to = to;
        self.started = now.checked_sub(remaining).unwrap_or(now);
    }
}

/// Top-level application state.
pub struct App {
    pub config: Config,
    pub geometry: TrackGeometry,
    pub toggle: Toggle,
    pub stars: StarCache,
    pub changes: mpsc::UnboundedReceiver<ModeChange>,
    pub transition: Transition,
    pub logs: Vec<LogLine>,
    pub should_quit: bool,
    pub tick: u64,
    pub started: Instant,
    /// Terminal area of the last frame, for mouse hit testing.
    pub viewport: Rect,
    /// Brief status message shown in footer (e.g. "Seed 42"), auto-clears.
    pub flash_message: Option<String>,
    pub flash_until: u64,
}

impl App {
    pub fn new() -> Self {
        Self::with_config(config::load_config())
    }

    pub fn with_config(config: Config) -> Self {
        let mode = config.initial_mode();
        let mut toggle = Toggle::with_mode(mode);
        toggle = if config.sound {
            toggle.with_player(SystemCue)
        } else {
            toggle.with_player(Silent)
        };
        let changes = toggle.subscribe();
        let stars = StarCache::new(config.seed);
        let now = Instant::now();

        tracing::info!(seed = config.seed, %mode, stars = stars.field().len(), "toggle mounted");

        Self {
            logs: vec![LogLine::now(
                format!("Mounted at {} with seed {}", mode, config.seed),
                Some(mode),
            )],
            config,
            geometry: TrackGeometry::default(),
            toggle,
            stars,
            changes,
            transition: Transition::settled(mode, now),
            should_quit: false,
            tick: 0,
            started: now,
            viewport: Rect::default(),
            flash_message: None,
            flash_until: 0,
        }
    }

    pub fn mode(&self) -> Mode {
        self.toggle.mode()
    }

    /// Seconds since mount, for looping animations.
    pub fn clock(&self) -> f64 {
        self.started.elapsed().as_secs_f64()
    }

    /// Route an interaction to the switch and apply the resulting change, if any.
    pub fn handle_toggle(&mut self, input: Input) {
        if self.toggle.handle(input).is_some() {
            self.poll_changes();
        }
    }

    /// Drain pending mode changes into the animation and the log.
    pub fn poll_changes(&mut self) {
        while let Ok(change) = self.changes.try_recv() {
            self.transition.retarget(change.mode, Instant::now());
            self.push_log(
                format!("#{} switched to {}", change.sequence, change.mode),
                Some(change.mode),
            );
        }
    }

    pub fn set_seed(&mut self, seed: i64) {
        if self.stars.set_seed(seed) {
            self.config.seed = seed;
            let count = self.stars.field().len();
            self.push_log(format!("Seed {} ({} stars)", seed, count), None);
            self.flash(format!("Seed {}", seed));
        }
    }

    pub fn step_seed(&mut self, delta: i64) {
        self.set_seed(self.stars.seed().saturating_add(delta));
    }

    pub fn randomize_seed(&mut self) {
        let seed = rand::thread_rng().gen_range(0..100_000);
        self.set_seed(seed);
    }

    pub fn push_log(&mut self, text: String, mode: Option<Mode>) {
        self.logs.push(LogLine::now(text, mode));
        if self.logs.len() > MAX_LOG_LINES {
            self.logs.drain(0..LOG_TRIM);
        }
    }

    fn flash(&mut self, message: String) {
        self.flash_message = Some(message);
        self.flash_until = self.tick + 60;
    }
}

#[cfg(test)]
#[path = "app_test.rs"]
mod tests;
