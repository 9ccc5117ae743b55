use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

/// A single reading from the device motion sensor: the roll angle in radians
/// and, when the gyroscope is read as well, the magnitude of the angular rate.
///
/// # Examples
///
/// ```
/// use common::MotionSample;
///
/// let sample = MotionSample::new(0.05, 1.2).with_rotation_rate(4.0);
///
/// assert_eq!(sample.get_timestamp(), 0.05);
/// assert_eq!(sample.get_roll(), 1.2);
/// assert_eq!(sample.get_rotation_rate(), Some(4.0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MotionSample {
    timestamp: f64,
    roll: f64,
    rotation_rate: Option<f64>,
}

impl MotionSample {
    /// Creates a roll-only sample.
    pub fn new(timestamp: f64, roll: f64) -> Self {
        Self {
            timestamp,
            roll,
            rotation_rate: None,
        }
    }

    /// Attaches an angular-rate magnitude in rad/s.
    pub fn with_rotation_rate(mut self, rotation_rate: f64) -> Self {
        self.rotation_rate = Some(rotation_rate.abs());
        self
    }

    /// Builds a sample from the device attitude and the raw gyroscope vector.
    pub fn from_attitude(
        timestamp: f64,
        attitude: &UnitQuaternion<f64>,
        rotation_rate: &Vector3<f64>,
    ) -> Self {
        let (roll, _pitch, _yaw) = attitude.euler_angles();
        Self {
            timestamp,
            roll,
            rotation_rate: Some(rotation_rate.norm()),
        }
    }

    pub fn get_timestamp(&self) -> f64 {
        self.timestamp
    }

    pub fn get_roll(&self) -> f64 {
        self.roll
    }

    pub fn get_rotation_rate(&self) -> Option<f64> {
        self.rotation_rate
    }
}

/// Converts `[timestamp, roll]` or `[timestamp, roll, rotation_rate]`.
impl TryFrom<Vec<f64>> for MotionSample {
    type Error = String;

    fn try_from(value: Vec<f64>) -> Result<Self, Self::Error> {
        match value.as_slice() {
            [timestamp, roll] => Ok(Self::new(*timestamp, *roll)),
            [timestamp, roll, rate] => Ok(Self::new(*timestamp, *roll).with_rotation_rate(*rate)),
            _ => Err(format!(
                "Invalid motion sample: expected 2 or 3 values, got {}",
                value.len()
            )),
        }
    }
}
