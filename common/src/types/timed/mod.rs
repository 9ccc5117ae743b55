pub mod sample_motion;

pub use crate::types::timed::sample_motion::MotionSample;
