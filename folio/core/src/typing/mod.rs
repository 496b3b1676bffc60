//! Typing Loop - the animated name display
//!
//! A finite-state machine that types a target string out one character at a
//! time, holds it, erases it, holds the empty line, and starts again. It never
//! terminates.
//!
//! ```text
//!   Waiting ──start_delay──▶ Typing ──type_speed──▶ Typing (+1 char)
//!                              │
//!                   (full) pause_after_type
//!                              ▼
//!                           Paused ──immediately──▶ Deleting ──delete_speed──▶ Deleting (-1 char)
//!                                                      │
//!                                          (empty) pause_after_delete
//!                                                      ▼
//!                                                   Typing
//! ```
//!
//! [`TypingLoop`] is the pure machine: it tells the caller what the next
//! timed step is ([`TypingLoop::next_step`]) and applies it when the timer
//! fires ([`TypingLoop::apply`]). [`TypingDriver`] owns the single timer that
//! drives it on the tokio runtime.

mod driver;

pub use driver::TypingDriver;

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Phase of the typing loop
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnimationState {
    /// Mounted, waiting for the start delay
    Waiting,
    /// Revealing characters (or holding the full text before the pause)
    Typing,
    /// Pass-through between typing and deleting
    Paused,
    /// Erasing characters (or holding the empty line before restarting)
    Deleting,
}

impl AnimationState {
    /// Whether characters are being added or removed in this phase
    #[must_use]
    pub fn is_mutating(self) -> bool {
        matches!(self, Self::Typing | Self::Deleting)
    }
}

/// Timing parameters for the loop
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypingTimings {
    /// Delay before each appended character
    #[serde(with = "millis")]
    pub type_speed: Duration,
    /// Delay before each removed character
    #[serde(with = "millis")]
    pub delete_speed: Duration,
    /// Hold time once the full text is shown
    #[serde(with = "millis")]
    pub pause_after_type: Duration,
    /// Hold time once the line is empty
    #[serde(with = "millis")]
    pub pause_after_delete: Duration,
    /// Delay between mount and the first typing step
    #[serde(with = "millis")]
    pub start_delay: Duration,
}

impl Default for TypingTimings {
    fn default() -> Self {
        Self {
            type_speed: Duration::from_millis(90),
            delete_speed: Duration::from_millis(50),
            pause_after_type: Duration::from_millis(2000),
            pause_after_delete: Duration::from_millis(800),
            start_delay: Duration::from_millis(500),
        }
    }
}

impl TypingTimings {
    /// Same delay for every step; handy for tests and demos
    #[must_use]
    pub fn uniform(step: Duration, pause: Duration) -> Self {
        Self {
            type_speed: step,
            delete_speed: step,
            pause_after_type: pause,
            pause_after_delete: pause,
            start_delay: Duration::ZERO,
        }
    }
}

/// Mutation applied when a scheduled step fires
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// `Waiting` -> `Typing`
    Begin,
    /// Reveal one more character
    Append,
    /// `Typing` (full) -> `Paused`
    Pause,
    /// Remove the last character
    Erase,
    /// `Deleting` (empty) -> `Typing`
    Restart,
}

/// The next timed step: wait `delay`, then apply `action`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    pub delay: Duration,
    pub action: Action,
}

/// What the rendering layer needs from the loop
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypingSnapshot {
    /// Currently visible prefix of the target
    pub text: String,
    /// True while characters are being added or removed
    pub mutating: bool,
    /// Phase the loop is in
    pub state: AnimationState,
}

/// The typing state machine
///
/// The display buffer is stored as a character count into the target, so it
/// is a prefix by construction.
#[derive(Clone, Debug)]
pub struct TypingLoop {
    target: Vec<char>,
    shown: usize,
    state: AnimationState,
    timings: TypingTimings,
}

impl TypingLoop {
    /// Create a loop in `Waiting` with nothing shown
    pub fn new(target: impl AsRef<str>, timings: TypingTimings) -> Self {
        Self {
            target: target.as_ref().chars().collect(),
            shown: 0,
            state: AnimationState::Waiting,
            timings,
        }
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    pub fn timings(&self) -> TypingTimings {
        self.timings
    }

    pub fn target(&self) -> String {
        self.target.iter().collect()
    }

    /// Number of characters currently shown
    pub fn len(&self) -> usize {
        self.shown
    }

    pub fn is_empty(&self) -> bool {
        self.shown == 0
    }

    /// The visible prefix
    pub fn displayed(&self) -> String {
        self.target[..self.shown].iter().collect()
    }

    /// Whether a character is being added or removed (drives caret blinking)
    pub fn is_mutating(&self) -> bool {
        self.state.is_mutating()
    }

    pub fn snapshot(&self) -> TypingSnapshot {
        TypingSnapshot {
            text: self.displayed(),
            mutating: self.is_mutating(),
            state: self.state,
        }
    }

    /// Resolve pass-through states
    ///
    /// `Paused` holds for no time at all and moves to `Deleting` in the same
    /// tick it was entered. Returns `true` if a transition happened.
    pub fn settle(&mut self) -> bool {
        if self.state == AnimationState::Paused {
            self.state = AnimationState::Deleting;
            true
        } else {
            false
        }
    }

    /// The single timed step to schedule from the current state
    ///
    /// Call [`settle`](Self::settle) first; from `Paused` this reports the
    /// step that follows the pass-through.
    pub fn next_step(&self) -> Step {
        let t = &self.timings;
        match self.state {
            AnimationState::Waiting => Step {
                delay: t.start_delay,
                action: Action::Begin,
            },
            AnimationState::Typing if self.shown < self.target.len() => Step {
                delay: t.type_speed,
                action: Action::Append,
            },
            AnimationState::Typing => Step {
                delay: t.pause_after_type,
                action: Action::Pause,
            },
            AnimationState::Paused | AnimationState::Deleting if self.shown > 0 => Step {
                delay: t.delete_speed,
                action: Action::Erase,
            },
            AnimationState::Paused | AnimationState::Deleting => Step {
                delay: t.pause_after_delete,
                action: Action::Restart,
            },
        }
    }

    /// Apply a fired step
    ///
    /// Actions that do not match the current state are ignored, so a stale
    /// step can never move the machine out of sequence.
    pub fn apply(&mut self, action: Action) {
        match (self.state, action) {
            (AnimationState::Waiting, Action::Begin) => {
                self.state = AnimationState::Typing;
            }
            (AnimationState::Typing, Action::Append) if self.shown < self.target.len() => {
                self.shown += 1;
            }
            (AnimationState::Typing, Action::Pause) if self.shown == self.target.len() => {
                self.state = AnimationState::Paused;
            }
            (AnimationState::Deleting, Action::Erase) if self.shown > 0 => {
                self.shown -= 1;
            }
            (AnimationState::Deleting, Action::Restart) if self.shown == 0 => {
                self.state = AnimationState::Typing;
            }
            (state, action) => {
                tracing::trace!(?state, ?action, "Ignoring out-of-sequence typing step");
            }
        }
    }

    /// Fire the next step immediately (settling first); returns its delay
    ///
    /// Used to replay the loop without a clock.
    pub fn advance(&mut self) -> Step {
        self.settle();
        let step = self.next_step();
        self.apply(step.action);
        self.settle();
        step
    }

    /// Replace the target text and restart from `Waiting`
    pub fn retarget(&mut self, target: impl AsRef<str>) {
        self.target = target.as_ref().chars().collect();
        self.shown = 0;
        self.state = AnimationState::Waiting;
    }

    /// Replace the timings; takes effect from the next scheduled step
    pub fn set_timings(&mut self, timings: TypingTimings) {
        self.timings = timings;
    }
}

/// Serialize durations as integer milliseconds
mod millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        u64::deserialize(d).map(Duration::from_millis)
    }
}
