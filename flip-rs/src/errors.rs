//! Module errors
use std::fmt;

use motion_rs::MotionError;

/// Represents the different types of errors that can occur while counting flips.
#[derive(Debug, Clone, PartialEq)]
pub enum FlipError {
    /// The device has no usable motion hardware. Reported once, when a session starts.
    SensorUnavailable(String),

    /// Error indicating that windows, thresholds or tiers are inconsistent.
    InvalidConfig(String),

    /// Error indicating that a listener could not be attached or removed.
    Listener(String),

    Other(String),
}

impl fmt::Display for FlipError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlipError::SensorUnavailable(msg) => write!(f, "Sensor unavailable: {}", msg),
            FlipError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            FlipError::Listener(msg) => write!(f, "Listener error: {}", msg),
            FlipError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for FlipError {}

impl From<MotionError> for FlipError {
    fn from(value: MotionError) -> Self {
        match value {
            MotionError::SensorUnavailable(msg) => FlipError::SensorUnavailable(msg),
            MotionError::InvalidConfig(msg) => FlipError::InvalidConfig(msg),
            MotionError::ListenerNotFound(msg) => FlipError::Listener(msg),
            MotionError::Other(msg) => FlipError::Other(msg),
        }
    }
}
