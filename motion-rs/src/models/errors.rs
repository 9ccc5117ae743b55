//! Module errors
use std::fmt;

/// Represents the different types of errors that can occur while reading the motion sensor.
#[derive(Debug, Clone, PartialEq)]
pub enum MotionError {
    /// The device has no usable motion hardware.
    SensorUnavailable(String),

    /// Error indicating that the listener was not found.
    ListenerNotFound(String),

    /// Error indicating that the source was configured with invalid parameters.
    InvalidConfig(String),

    Other(String),
}

impl fmt::Display for MotionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotionError::SensorUnavailable(msg) => write!(f, "Sensor unavailable: {}", msg),
            MotionError::ListenerNotFound(msg) => write!(f, "Listener not found: {}", msg),
            MotionError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            MotionError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for MotionError {}
