use log::warn;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_GUESS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    /// Flip as many times as possible in one throw.
    MaxFlips,
    /// Land face-up as many times in a row as possible.
    StayFaceUp,
    /// Announce the number of flips before throwing.
    GuessCount,
}

/// State of one counting session. Owned by the caller and handed to the evaluator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    mode: GameMode,
    target_guess: Option<u32>,
    streak: u32,
}

impl GameSession {
    pub fn new(mode: GameMode) -> Self {
        Self {
            mode,
            target_guess: None,
            streak: 0,
        }
    }

    /// GuessCount session with the given guess.
    pub fn guessing(guess: u32) -> Self {
        Self {
            mode: GameMode::GuessCount,
            target_guess: Some(guess),
            streak: 0,
        }
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn target_guess(&self) -> Option<u32> {
        self.target_guess
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    /// Switches mode. The session starts over.
    pub fn set_mode(&mut self, mode: GameMode) {
        if mode != self.mode {
            self.mode = mode;
            self.reset();
        }
    }

    pub fn set_guess(&mut self, guess: u32) {
        self.target_guess = Some(guess);
    }

    pub(crate) fn extend_streak(&mut self) -> u32 {
        self.streak += 1;
        self.streak
    }

    /// Clears the streak and the guess.
    pub fn reset(&mut self) {
        self.streak = 0;
        self.target_guess = None;
    }
}

/// Parses the guess typed by the user. Anything that is not a non-negative integer
/// falls back to 0 instead of failing.
pub fn parse_guess(input: &str) -> u32 {
    match input.trim().parse::<u32>() {
        Ok(guess) => guess,
        Err(e) => {
            warn!("Invalid guess {:?} ({}), using {}", input, e, DEFAULT_GUESS);
            DEFAULT_GUESS
        }
    }
}
