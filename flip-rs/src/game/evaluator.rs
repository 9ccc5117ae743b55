use serde::{Deserialize, Serialize};

use super::greeting::{flip_label, Greeting, GreetingTiers};
use super::session::{GameMode, GameSession};
use crate::constants::DEFAULT_GUESS;
use crate::detector::{replay, DetectorConfig};
use crate::sampler::SampleSequence;

/// What an attempt amounted to, independent of the game mode.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RotationSummary {
    pub rotations: u32,
    pub face_up: bool,
    pub samples: usize,
    /// Highest angular rate seen during the attempt, in rad/s.
    pub peak_rate: f64,
}

impl RotationSummary {
    /// Replays a whole sequence. Angular rates are not part of a sequence, so `peak_rate` is 0.
    pub fn from_sequence(sequence: &[f64], config: &DetectorConfig) -> Self {
        let detector = replay(sequence, config);
        Self {
            rotations: detector.rotations(),
            face_up: detector.is_face_up(),
            samples: sequence.len(),
            peak_rate: 0.0,
        }
    }
}

/// Which sound the audio collaborator should play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AudioCue {
    Success,
    Failure,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Outcome {
    MaxFlips {
        rotations: u32,
        greeting: Greeting,
        peak_rate: f64,
    },
    StayFaceUp {
        face_up: bool,
        /// Streak including this attempt when face-up; final streak otherwise.
        streak: u32,
        /// True when sampling stops with this outcome.
        finished: bool,
        peak_rate: f64,
    },
    GuessCount {
        guess: u32,
        rotations: u32,
        won: bool,
        peak_rate: f64,
    },
}

impl Outcome {
    pub fn audio_cue(&self) -> AudioCue {
        let success = match self {
            Outcome::MaxFlips { rotations, .. } => *rotations > 0,
            Outcome::StayFaceUp { face_up, .. } => *face_up,
            Outcome::GuessCount { won, .. } => *won,
        };
        if success {
            AudioCue::Success
        } else {
            AudioCue::Failure
        }
    }

    /// True if no more attempts follow in this session.
    pub fn ends_session(&self) -> bool {
        match self {
            Outcome::StayFaceUp { finished, .. } => *finished,
            _ => true,
        }
    }

    pub fn rotations(&self) -> Option<u32> {
        match self {
            Outcome::MaxFlips { rotations, .. } | Outcome::GuessCount { rotations, .. } => {
                Some(*rotations)
            }
            Outcome::StayFaceUp { .. } => None,
        }
    }

    /// Text for the count label, e.g. "4 flips" or "Streak: 3".
    pub fn label(&self) -> String {
        match self {
            Outcome::MaxFlips { rotations, .. } | Outcome::GuessCount { rotations, .. } => {
                flip_label(*rotations)
            }
            Outcome::StayFaceUp { streak, .. } => format!("Streak: {}", streak),
        }
    }

    /// Text for the alert shown with the result.
    pub fn message(&self) -> String {
        match self {
            Outcome::MaxFlips { greeting, .. } => greeting.message().to_string(),
            Outcome::StayFaceUp {
                face_up: true,
                finished: false,
                ..
            } => "Still face up!".to_string(),
            Outcome::StayFaceUp { streak, .. } => format!("Game over! Final streak: {}", streak),
            Outcome::GuessCount { won: true, .. } => "You guessed it!".to_string(),
            Outcome::GuessCount { rotations, .. } => {
                format!("Nope, it was {}.", flip_label(*rotations))
            }
        }
    }
}

/// Evaluates a finished attempt and clears the sequence for the next one.
pub fn evaluate(
    session: &mut GameSession,
    sequence: &mut SampleSequence,
    config: &DetectorConfig,
    tiers: &GreetingTiers,
) -> Outcome {
    let summary = RotationSummary::from_sequence(sequence.as_slice(), config);
    sequence.clear();
    resolve(session, summary, tiers)
}

/// Turns the summary of one completed attempt into an outcome for the session's mode.
pub fn resolve(session: &mut GameSession, summary: RotationSummary, tiers: &GreetingTiers) -> Outcome {
    let peak_rate = summary.peak_rate;
    match session.mode() {
        GameMode::MaxFlips => Outcome::MaxFlips {
            rotations: summary.rotations,
            greeting: tiers.greeting_for(summary.rotations),
            peak_rate,
        },
        GameMode::StayFaceUp if summary.face_up => Outcome::StayFaceUp {
            face_up: true,
            streak: session.extend_streak(),
            finished: false,
            peak_rate,
        },
        GameMode::StayFaceUp => {
            let streak = session.streak();
            session.reset();
            Outcome::StayFaceUp {
                face_up: false,
                streak,
                finished: true,
                peak_rate,
            }
        }
        GameMode::GuessCount => {
            let guess = session.target_guess().unwrap_or(DEFAULT_GUESS);
            Outcome::GuessCount {
                guess,
                rotations: summary.rotations,
                won: guess == summary.rotations,
                peak_rate,
            }
        }
    }
}

/// Result reported when the session is stopped explicitly. A StayFaceUp session is
/// closed with the pending attempt counted if it completed a flip and ended face-up.
pub fn conclude(session: &mut GameSession, summary: RotationSummary, tiers: &GreetingTiers) -> Outcome {
    let outcome = match session.mode() {
        GameMode::StayFaceUp => {
            let streak = if summary.rotations > 0 && summary.face_up {
                session.extend_streak()
            } else {
                session.streak()
            };
            Outcome::StayFaceUp {
                face_up: summary.face_up,
                streak,
                finished: true,
                peak_rate: summary.peak_rate,
            }
        }
        _ => resolve(session, summary, tiers),
    };
    session.reset();
    outcome
}
