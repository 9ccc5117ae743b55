//! Game modes and the evaluation of finished attempts.
mod evaluator;
mod greeting;
mod session;

pub use evaluator::{conclude, evaluate, resolve, AudioCue, Outcome, RotationSummary};
pub use greeting::{flip_label, Greeting, GreetingTier, GreetingTiers};
pub use session::{parse_guess, GameMode, GameSession};
