//! Angular zones used to track a flip.
//!
//! The roll axis is split into a finish line around 0 (phone face-up) and a
//! checkpoint around π (phone face-down). Everything else is [`Zone::Neither`].
use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, TAU};

use crate::constants::{DEFAULT_CHECKPOINT_HALF_WIDTH, DEFAULT_FINISH_HALF_WIDTH};
use crate::errors::FlipError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    FinishLine,
    Checkpoint,
    Neither,
}

/// Half-widths, in radians, of the finish-line and checkpoint windows.
///
/// # Examples
///
/// ```
/// use flip_rs::zone::{Zone, ZoneWindows};
/// use std::f64::consts::PI;
///
/// let windows = ZoneWindows::new(0.2, 0.2).unwrap();
/// assert_eq!(windows.classify(0.1), Zone::FinishLine);
/// assert_eq!(windows.classify(-PI + 0.1), Zone::Checkpoint);
/// assert_eq!(windows.classify(1.0), Zone::Neither);
///
/// // Overlapping windows are rejected
/// assert!(ZoneWindows::new(2.0, 2.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawZoneWindows")]
pub struct ZoneWindows {
    finish_half_width: f64,
    checkpoint_half_width: f64,
}

// Unchecked shape of the windows as read from a configuration.
#[derive(Deserialize)]
struct RawZoneWindows {
    finish_half_width: f64,
    checkpoint_half_width: f64,
}

impl TryFrom<RawZoneWindows> for ZoneWindows {
    type Error = FlipError;

    fn try_from(value: RawZoneWindows) -> Result<Self, Self::Error> {
        ZoneWindows::new(value.finish_half_width, value.checkpoint_half_width)
    }
}

impl Default for ZoneWindows {
    fn default() -> Self {
        Self {
            finish_half_width: DEFAULT_FINISH_HALF_WIDTH,
            checkpoint_half_width: DEFAULT_CHECKPOINT_HALF_WIDTH,
        }
    }
}

impl ZoneWindows {
    /// Returns InvalidConfig if a half-width is not a positive number or if the windows overlap.
    pub fn new(finish_half_width: f64, checkpoint_half_width: f64) -> Result<Self, FlipError> {
        let windows = Self {
            finish_half_width,
            checkpoint_half_width,
        };
        windows.validate()?;
        Ok(windows)
    }

    /// Same half-width on both windows.
    pub fn symmetric(half_width: f64) -> Result<Self, FlipError> {
        Self::new(half_width, half_width)
    }

    pub fn validate(&self) -> Result<(), FlipError> {
        for (name, width) in [
            ("finish", self.finish_half_width),
            ("checkpoint", self.checkpoint_half_width),
        ] {
            if !width.is_finite() || width <= 0.0 {
                return Err(FlipError::InvalidConfig(format!(
                    "{} half-width must be a positive number, got {}",
                    name, width
                )));
            }
        }
        if self.finish_half_width + self.checkpoint_half_width >= PI {
            return Err(FlipError::InvalidConfig(format!(
                "finish ({}) and checkpoint ({}) windows overlap",
                self.finish_half_width, self.checkpoint_half_width
            )));
        }
        Ok(())
    }

    pub fn finish_half_width(&self) -> f64 {
        self.finish_half_width
    }

    pub fn checkpoint_half_width(&self) -> f64 {
        self.checkpoint_half_width
    }

    pub fn classify(&self, angle: f64) -> Zone {
        classify(angle, self)
    }
}

/// Classifies a roll angle. Angles outside (-π, π] are wrapped first.
pub fn classify(angle: f64, windows: &ZoneWindows) -> Zone {
    if !angle.is_finite() {
        return Zone::Neither;
    }
    let distance_from_zero = wrap_angle(angle).abs();
    if distance_from_zero < windows.finish_half_width {
        Zone::FinishLine
    } else if PI - distance_from_zero < windows.checkpoint_half_width {
        Zone::Checkpoint
    } else {
        Zone::Neither
    }
}

fn wrap_angle(angle: f64) -> f64 {
    if (-PI..=PI).contains(&angle) {
        return angle;
    }
    (angle + PI).rem_euclid(TAU) - PI
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strictness_levels() -> Vec<ZoneWindows> {
        [0.2, 0.23, 0.27, 0.49]
            .iter()
            .map(|&w| ZoneWindows::symmetric(w).unwrap())
            .collect()
    }

    #[test]
    fn test_finish_line_window() {
        for windows in strictness_levels() {
            let w = windows.finish_half_width();
            for i in 0..20 {
                let a = w * (i as f64 / 20.0) * 0.999;
                assert_eq!(windows.classify(a), Zone::FinishLine, "angle {}", a);
                assert_eq!(windows.classify(-a), Zone::FinishLine, "angle {}", -a);
            }
            assert_eq!(windows.classify(w + 1e-6), Zone::Neither);
        }
    }

    #[test]
    fn test_checkpoint_window() {
        for windows in strictness_levels() {
            let w = windows.checkpoint_half_width();
            for i in 0..20 {
                let offset = w * (i as f64 / 20.0) * 0.999;
                assert_eq!(windows.classify(PI - offset), Zone::Checkpoint);
                assert_eq!(windows.classify(-PI + offset), Zone::Checkpoint);
            }
            assert_eq!(windows.classify(PI - w - 1e-6), Zone::Neither);
        }
    }

    #[test]
    fn test_asymmetric_windows() {
        let windows = ZoneWindows::new(0.49, 0.2).unwrap();
        assert_eq!(windows.classify(0.4), Zone::FinishLine);
        assert_eq!(windows.classify(PI - 0.4), Zone::Neither);
        assert_eq!(windows.classify(PI - 0.1), Zone::Checkpoint);
    }

    #[test]
    fn test_angles_out_of_range_are_wrapped() {
        let windows = ZoneWindows::default();
        assert_eq!(windows.classify(TAU + 0.05), Zone::FinishLine);
        assert_eq!(windows.classify(3.0 * PI), Zone::Checkpoint);
        assert_eq!(windows.classify(-TAU - 0.05), Zone::FinishLine);
    }

    #[test]
    fn test_non_finite_angles() {
        let windows = ZoneWindows::default();
        assert_eq!(windows.classify(f64::NAN), Zone::Neither);
        assert_eq!(windows.classify(f64::INFINITY), Zone::Neither);
    }

    #[test]
    fn test_invalid_windows() {
        assert!(ZoneWindows::new(0.0, 0.2).is_err());
        assert!(ZoneWindows::new(0.2, -0.1).is_err());
        assert!(ZoneWindows::new(f64::NAN, 0.2).is_err());
        assert!(ZoneWindows::new(1.6, 1.6).is_err());
        assert!(ZoneWindows::new(1.5, 1.5).is_ok());
    }

    #[test]
    fn test_deserialize_validates_windows() {
        let windows: ZoneWindows =
            serde_json::from_str(r#"{ "finish_half_width": 0.2, "checkpoint_half_width": 0.49 }"#)
                .unwrap();
        assert_eq!(windows, ZoneWindows::new(0.2, 0.49).unwrap());

        let overlapping = r#"{ "finish_half_width": 2.0, "checkpoint_half_width": 2.0 }"#;
        assert!(serde_json::from_str::<ZoneWindows>(overlapping).is_err());
        let negative = r#"{ "finish_half_width": -0.2, "checkpoint_half_width": 0.2 }"#;
        assert!(serde_json::from_str::<ZoneWindows>(negative).is_err());
    }
}
