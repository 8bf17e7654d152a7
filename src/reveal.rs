use crate::{timer::OneShot, types::RunState};

use std::collections::HashMap;
use std::env;
use std::time::{Duration, Instant};

/// Floor for the per-glyph delay, to avoid runaway timer churn.
pub const MIN_GLYPH_DELAY_MS: u64 = 8;

pub trait Motion {
    fn prefers_reduced_motion(&self) -> bool;
}

/// Terminal stand-in for the desktop reduced-motion preference: the
/// REDUCE_MOTION environment variable, set and not "0".
pub struct EnvMotion;

impl Motion for EnvMotion {
    fn prefers_reduced_motion(&self) -> bool {
        env::var("REDUCE_MOTION").is_ok_and(|v| !v.is_empty() && v != "0")
    }
}

#[derive(Clone, Debug)]
pub struct RevealConfig {
    pub base_delay_ms: u64,
    pub start_delay_ms: u64,
    pub caret: bool,
    pub pauses: HashMap<char, u64>,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            base_delay_ms: 24,
            start_delay_ms: 300,
            caret: true,
            pauses: HashMap::from([
                (',', 120),
                ('.', 220),
                ('!', 220),
                ('?', 220),
                ('—', 160),
            ]),
        }
    }
}

impl RevealConfig {
    fn glyph_delay(&self, prev: char) -> Duration {
        let extra = self.pauses.get(&prev).copied().unwrap_or(0);

        Duration::from_millis(self.base_delay_ms.max(MIN_GLYPH_DELAY_MS) + extra)
    }
}

/// Reveals a text one code point at a time, pacing each step off a single
/// pending deadline. Glyphs are code points so emoji never get split.
pub struct TextReveal {
    text: String,
    glyphs: Vec<char>,
    revealed: usize,
    byte_cursor: usize,
    state: RunState,
    config: RevealConfig,
    timer: OneShot,
    reduced_motion: bool,
}

impl TextReveal {
    pub fn new(motion: &dyn Motion) -> Self {
        Self {
            text: String::new(),
            glyphs: Vec::new(),
            revealed: 0,
            byte_cursor: 0,
            state: RunState::Complete,
            config: RevealConfig::default(),
            timer: OneShot::default(),
            reduced_motion: motion.prefers_reduced_motion(),
        }
    }

    pub fn start(&mut self, text: &str, config: RevealConfig, now: Instant) {
        self.timer.cancel();
        self.text = text.to_string();
        self.glyphs = text.chars().collect();
        self.revealed = 0;
        self.byte_cursor = 0;
        self.config = config;

        if self.glyphs.is_empty() {
            self.state = RunState::Complete;

            return;
        }

        // Accessibility contract: bypass all timing and pause logic.
        // Deliberately not reachable through RevealConfig.
        if self.reduced_motion {
            self.revealed = self.glyphs.len();
            self.byte_cursor = self.text.len();
            self.state = RunState::Complete;

            return;
        }

        self.state = RunState::Animating;
        self.timer
            .schedule(now, Duration::from_millis(self.config.start_delay_ms));
    }

    pub fn cancel(&mut self) {
        self.timer.cancel();
    }

    /// Fires the step due at `now`, if any. Steps land in strictly
    /// increasing reveal order since the engine owns a single deadline and
    /// each step arms at most the next one.
    pub fn tick(&mut self, now: Instant) {
        if self.timer.fire(now) {
            self.step(now);
        }
    }

    fn step(&mut self, now: Instant) {
        if self.state == RunState::Complete {
            return;
        }

        let glyph = self.glyphs[self.revealed];
        self.byte_cursor += glyph.len_utf8();
        self.revealed += 1;

        if self.revealed == self.glyphs.len() {
            self.state = RunState::Complete;

            return;
        }

        self.timer.schedule(now, self.config.glyph_delay(glyph));
    }

    pub fn prefix(&self) -> &str {
        &self.text[..self.byte_cursor]
    }

    pub fn is_complete(&self) -> bool {
        self.state == RunState::Complete
    }

    pub fn revealed(&self) -> usize {
        self.revealed
    }

    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }

    pub fn next_due(&self) -> Option<Instant> {
        self.timer.due()
    }

    pub fn show_caret(&self) -> bool {
        self.config.caret && !self.is_complete()
    }
}
