//! "Motion has settled" heuristic used to close an attempt without a stop request.
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_MOTION_RATE, DEFAULT_SETTLE_RATE};
use crate::errors::FlipError;

/// Angular-rate thresholds in rad/s.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SettleConfig {
    /// Rate that must be exceeded before the attempt counts as started.
    pub motion_rate: f64,
    /// Rate under which a started attempt is over.
    pub settle_rate: f64,
}

impl Default for SettleConfig {
    fn default() -> Self {
        Self {
            motion_rate: DEFAULT_MOTION_RATE,
            settle_rate: DEFAULT_SETTLE_RATE,
        }
    }
}

impl SettleConfig {
    pub fn validate(&self) -> Result<(), FlipError> {
        if !(self.settle_rate > 0.0 && self.settle_rate.is_finite()) {
            return Err(FlipError::InvalidConfig(format!(
                "settle rate must be a positive number, got {}",
                self.settle_rate
            )));
        }
        if !(self.motion_rate > self.settle_rate && self.motion_rate.is_finite()) {
            return Err(FlipError::InvalidConfig(format!(
                "motion rate ({}) must be above settle rate ({})",
                self.motion_rate, self.settle_rate
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct SettleDetector {
    config: SettleConfig,
    has_moved: bool,
}

impl SettleDetector {
    pub fn new(config: SettleConfig) -> Self {
        Self {
            config,
            has_moved: false,
        }
    }

    /// Feeds one angular-rate magnitude. Returns true on the sample where the phone
    /// comes to rest after having moved fast enough.
    pub fn update(&mut self, rotation_rate: f64) -> bool {
        let rate = rotation_rate.abs();
        if rate > self.config.motion_rate {
            self.has_moved = true;
            return false;
        }
        self.has_moved && rate < self.config.settle_rate
    }

    pub fn has_moved(&self) -> bool {
        self.has_moved
    }

    pub fn reset(&mut self) {
        self.has_moved = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rest_without_motion_never_settles() {
        let mut detector = SettleDetector::new(SettleConfig::default());
        for _ in 0..10 {
            assert!(!detector.update(0.0));
        }
        assert!(!detector.has_moved());
    }

    #[test]
    fn test_settles_after_motion() {
        let mut detector = SettleDetector::new(SettleConfig::default());
        let rates = [0.0, 1.0, 5.0, 10.0, 6.0, 1.0, 0.5];
        assert!(rates.iter().all(|&r| !detector.update(r)));
        assert!(detector.has_moved());
        assert!(detector.update(0.1));
    }

    #[test]
    fn test_reset() {
        let mut detector = SettleDetector::new(SettleConfig::default());
        detector.update(10.0);
        detector.reset();
        assert!(!detector.update(0.0));
    }

    #[test]
    fn test_validate() {
        assert!(SettleConfig::default().validate().is_ok());
        let inverted = SettleConfig {
            motion_rate: 0.1,
            settle_rate: 1.0,
        };
        assert!(inverted.validate().is_err());
        let zero = SettleConfig {
            motion_rate: 1.0,
            settle_rate: 0.0,
        };
        assert!(zero.validate().is_err());
    }
}
