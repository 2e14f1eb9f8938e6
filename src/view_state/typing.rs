use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Character-by-character reveal of a string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypingState {
    pub full_text: String,
    pub revealed_length: usize,
}

impl TypingState {
    pub fn total_length(&self) -> usize {
        self.full_text.chars().count()
    }

    pub fn revealed_text(&self) -> &str {
        let end = self
            .full_text
            .char_indices()
            .nth(self.revealed_length)
            .map(|(i, _)| i)
            .unwrap_or(self.full_text.len());
        &self.full_text[..end]
    }

    pub fn is_complete(&self) -> bool {
        self.revealed_length >= self.total_length()
    }
}

#[derive(Debug, Clone)]
struct Run {
    interval: Duration,
    carry: Duration,
    total: usize,
}

#[derive(Debug, Clone, Default)]
pub struct Typewriter {
    state: TypingState,
    run: Option<Run>,
    started: bool,
}

impl Typewriter {
    /// Starts revealing `text`, discarding any reveal in progress.
    pub fn start(&mut self, text: &str, interval: Duration) {
        let total = text.chars().count();
        self.state = TypingState {
            full_text: text.to_string(),
            revealed_length: 0,
        };
        self.run = None;
        self.started = true;
        if interval.is_zero() {
            self.state.revealed_length = total;
        } else if total > 0 {
            self.run = Some(Run {
                interval,
                carry: Duration::ZERO,
                total,
            });
        }
    }

    /// Reveals one character per elapsed interval. Returns true if more text became visible.
    pub fn advance(&mut self, dt: Duration) -> bool {
        let Some(run) = self.run.as_mut() else {
            return false;
        };
        run.carry += dt;
        let mut revealed = 0;
        while run.carry >= run.interval && self.state.revealed_length < run.total {
            run.carry -= run.interval;
            self.state.revealed_length += 1;
            revealed += 1;
        }
        if self.state.revealed_length >= run.total {
            self.run = None;
        }
        revealed > 0
    }

    pub fn is_typing(&self) -> bool {
        self.run.is_some()
    }

    /// True once a started text is fully revealed. A typewriter that never started is not complete.
    pub fn is_complete(&self) -> bool {
        self.started && self.state.is_complete()
    }

    pub fn state(&self) -> &TypingState {
        &self.state
    }
}
