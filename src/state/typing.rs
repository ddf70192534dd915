//! Hero subtitle typing animation.

use super::schedule::Schedule;
use super::StateError;
use std::time::{Duration, Instant};

/// Direction the animation is currently moving in.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TypingMode {
    Typing,
    Deleting,
}

/// Types each phrase one character at a time, pauses, deletes it and moves
/// on to the next phrase, forever.
///
#[derive(Debug, Clone)]
pub struct TypingAnimation {
    phrases: Vec<String>,
    speed: Duration,
    delete_speed: Duration,
    pause: Duration,
    phrase_index: usize,
    char_count: usize,
    mode: TypingMode,
    text: String,
    schedule: Schedule,
}

impl TypingAnimation {
    pub fn new(
        phrases: Vec<String>,
        speed: Duration,
        delete_speed: Duration,
        pause: Duration,
    ) -> Result<Self, StateError> {
        if phrases.is_empty() {
            return Err(StateError::NoPhrases);
        }
        Ok(TypingAnimation {
            phrases,
            speed,
            delete_speed,
            pause,
            phrase_index: 0,
            char_count: 0,
            mode: TypingMode::Typing,
            text: String::new(),
            schedule: Schedule::idle(),
        })
    }

    /// Schedule the first step immediately.
    ///
    pub fn start(&mut self, now: Instant) -> &mut Self {
        self.schedule.arm_at(now);
        self
    }

    /// Stop the animation; the current text stays on screen.
    ///
    pub fn stop(&mut self) -> &mut Self {
        self.schedule.stop();
        self
    }

    pub fn is_running(&self) -> bool {
        self.schedule.is_armed()
    }

    /// Apply one character change and return the delay before the next one.
    ///
    pub fn step(&mut self) -> Duration {
        let length = self.current_phrase().chars().count();

        match self.mode {
            TypingMode::Deleting => self.char_count = self.char_count.saturating_sub(1),
            TypingMode::Typing => self.char_count = (self.char_count + 1).min(length),
        }
        self.text = self.current_phrase().chars().take(self.char_count).collect();

        let mut delay = match self.mode {
            TypingMode::Deleting => self.delete_speed,
            TypingMode::Typing => self.speed,
        };

        if self.mode == TypingMode::Typing && self.char_count == length {
            delay = self.pause;
            self.mode = TypingMode::Deleting;
        } else if self.mode == TypingMode::Deleting && self.char_count == 0 {
            self.mode = TypingMode::Typing;
            self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
        }

        delay
    }

    /// Run every step that has come due by `now`. Returns true if the text
    /// changed.
    ///
    pub fn advance(&mut self, now: Instant) -> bool {
        let mut changed = false;
        while let Some(due) = self.schedule.fire(now) {
            let delay = self.step();
            self.schedule.arm(due, delay);
            changed = true;
        }
        changed
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn current_phrase(&self) -> &str {
        &self.phrases[self.phrase_index]
    }

    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    pub fn char_count(&self) -> usize {
        self.char_count
    }

    pub fn mode(&self) -> TypingMode {
        self.mode
    }
}
