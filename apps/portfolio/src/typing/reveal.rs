//! Typing-reveal state machine.
//!
//! Holds the target text, the revealed prefix, and the index of the next
//! character. Timing lives in [`super::ticker`]; this type only knows how to
//! advance by one character per timer fire.
//!
//! States: `Idle` (position 0) -> `Revealing` -> `Done` (position == len).
//! `Done` has no outgoing transitions. Empty text starts in `Done`.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RevealPhase {
    Idle,
    Revealing,
    Done,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingReveal {
    text: Vec<char>,
    revealed: String,
    position: usize,
}

impl TypingReveal {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.chars().collect(),
            revealed: String::with_capacity(text.len()),
            position: 0,
        }
    }

    /// Advances by one character. Returns the character appended, or `None`
    /// once the terminal state is reached (no mutation happens then).
    pub fn fire(&mut self) -> Option<char> {
        let next = *self.text.get(self.position)?;
        self.revealed.push(next);
        self.position += 1;
        Some(next)
    }

    /// Replaces the target text and restarts from `Idle`.
    ///
    /// The position is reset rather than carried over, so the prefix always
    /// belongs to the current text.
    pub fn set_text(&mut self, text: &str) {
        self.text = text.chars().collect();
        self.revealed.clear();
        self.position = 0;
    }

    pub fn phase(&self) -> RevealPhase {
        if self.position >= self.text.len() {
            RevealPhase::Done
        } else if self.position == 0 {
            RevealPhase::Idle
        } else {
            RevealPhase::Revealing
        }
    }

    pub fn is_done(&self) -> bool {
        self.phase() == RevealPhase::Done
    }

    pub fn revealed(&self) -> &str {
        &self.revealed
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Length of the target text in characters.
    pub fn len(&self) -> usize {
        self.text.len()
    }
}
