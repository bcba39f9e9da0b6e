use std::time::Duration;

/// delay before the first character appears, so startup rendering settles
pub const BOOT_DELAY: Duration = Duration::from_millis(1000);

const TYPE_DELAY: Duration = Duration::from_millis(100);
const DELETE_DELAY: Duration = Duration::from_millis(50);
const HOLD_DELAY: Duration = Duration::from_millis(2000);
const REST_DELAY: Duration = Duration::from_millis(500);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Typing,
    Deleting,
}

/// cycles a fixed phrase list character by character, forever
///
/// Each call to [`step`](Animator::step) performs one tick (append or
/// remove a single character) and returns the delay until the next tick
/// should run. The caller owns the clock; the animator itself never
/// sleeps.
#[derive(Debug)]
pub struct Animator {
    phrases: Vec<String>,
    index: usize,
    shown: usize,
    phase: Phase,
}

impl Animator {
    /// Returns `None` when there is nothing to animate.
    pub fn new(phrases: Vec<String>) -> Option<Self> {
        if phrases.is_empty() || phrases.iter().all(|p| p.is_empty()) {
            return None;
        }
        Some(Self {
            phrases,
            index: 0,
            shown: 0,
            phase: Phase::Typing,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current_phrase(&self) -> &str {
        &self.phrases[self.index]
    }

    /// The currently visible text: the first `shown` chars of the
    /// current phrase.
    pub fn display(&self) -> &str {
        let phrase = self.current_phrase();
        match phrase.char_indices().nth(self.shown) {
            Some((byte_idx, _)) => &phrase[..byte_idx],
            None => phrase,
        }
    }

    /// Advance one tick and report the delay until the next one.
    pub fn step(&mut self) -> Duration {
        match self.phase {
            Phase::Typing => {
                let len = self.current_phrase().chars().count();
                self.shown = (self.shown + 1).min(len);
                if self.shown == len {
                    self.phase = Phase::Deleting;
                    HOLD_DELAY
                } else {
                    TYPE_DELAY
                }
            }
            Phase::Deleting => {
                self.shown = self.shown.saturating_sub(1);
                if self.shown == 0 {
                    self.phase = Phase::Typing;
                    self.index = (self.index + 1) % self.phrases.len();
                    REST_DELAY
                } else {
                    DELETE_DELAY
                }
            }
        }
    }
}
