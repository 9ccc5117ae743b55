//! # Crate flip-rs
//!
//! ## flip-rs
//!
//! The `flip-rs` crate counts phone flips from a stream of roll angles. A flip is a full
//! turn around the roll axis: the phone passes through the checkpoint (upside down, roll
//! near π) and comes back to the finish line (face-up, roll near 0).
//!
//! Features include:
//! - Zone classification with configurable window half-widths.
//! - A rotation detector with hysteresis, usable sample by sample or over a recorded sequence.
//! - Pluggable rules for the arming of the detector and for the face-up test.
//! - Three game modes: most flips, face-up streak, and guessing the count.
//! - A counting session that consumes a live [`common::MotionSource`] and stops by itself once
//!   the phone comes to rest.
//!
//! ### Example
//!
//! ```
//! use flip_rs::{count_rotations, is_face_up, DetectorConfig};
//! use std::f64::consts::PI;
//!
//! let config = DetectorConfig::default();
//! assert_eq!(count_rotations(&[0.0, PI, 0.0], &config), 1);
//! assert_eq!(count_rotations(&[PI, 0.0, PI, 0.0], &config), 2);
//! assert!(is_face_up(&[0.0, PI, 0.0], &config));
//! ```

pub mod config;
pub mod constants;
pub mod counter;
pub mod detector;
pub mod errors;
pub mod game;
pub mod sampler;
pub mod settle;
pub mod zone;

pub use config::CounterConfig;
pub use counter::{CounterEvent, FlipCounter};
pub use detector::{
    count_rotations, is_face_up, ArmingPolicy, DetectorConfig, DetectorState, FaceUpPolicy,
    Rotation, RotationDetector,
};
pub use errors::FlipError;
pub use game::{AudioCue, GameMode, GameSession, Greeting, GreetingTiers, Outcome};
pub use sampler::{OrientationSampler, SampleSequence};
pub use settle::SettleConfig;
pub use zone::{classify, Zone, ZoneWindows};
