use serde::{Deserialize, Serialize};

use crate::detector::DetectorConfig;
use crate::errors::FlipError;
use crate::game::GreetingTiers;
use crate::settle::SettleConfig;

/// Everything a [`FlipCounter`](crate::FlipCounter) needs to know. The sampling period
/// belongs to the motion source and is chosen when it starts.
///
/// # Examples
///
/// ```
/// use flip_rs::{CounterConfig, FaceUpPolicy};
///
/// let config = CounterConfig::from_json(r#"{
///     "detector": {
///         "windows": { "finish_half_width": 0.2, "checkpoint_half_width": 0.49 },
///         "face_up": "LastCommittedZone"
///     },
///     "settle": null
/// }"#).unwrap();
///
/// assert_eq!(config.detector.face_up, FaceUpPolicy::LastCommittedZone);
/// assert!(config.settle.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    pub detector: DetectorConfig,
    /// Auto-stop thresholds. `None` disables the motion-settled heuristic.
    pub settle: Option<SettleConfig>,
    pub tiers: GreetingTiers,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            detector: DetectorConfig::default(),
            settle: Some(SettleConfig::default()),
            tiers: GreetingTiers::default(),
        }
    }
}

impl CounterConfig {
    /// Parses and validates a JSON configuration. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, FlipError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| FlipError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), FlipError> {
        self.detector.windows.validate()?;
        if let Some(settle) = &self.settle {
            settle.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detector::ArmingPolicy;
    use crate::game::Greeting;

    #[test]
    fn test_default_is_valid() {
        assert!(CounterConfig::default().validate().is_ok());
    }

    #[test]
    fn test_empty_json_gives_defaults() {
        assert_eq!(CounterConfig::from_json("{}").unwrap(), CounterConfig::default());
    }

    #[test]
    fn test_full_json() {
        let config = CounterConfig::from_json(
            r#"{
                "detector": { "arming": "AfterFinishLine" },
                "settle": { "motion_rate": 5.0, "settle_rate": 0.5 },
                "tiers": [
                    { "from": 0, "greeting": "Meh" },
                    { "from": 2, "greeting": "Wow" }
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(config.detector.arming, ArmingPolicy::AfterFinishLine);
        assert_eq!(config.settle.unwrap().motion_rate, 5.0);
        assert_eq!(config.tiers.greeting_for(3), Greeting::Wow);
    }

    #[test]
    fn test_invalid_json() {
        let overlapping = r#"{ "detector": { "windows": { "finish_half_width": 2.0, "checkpoint_half_width": 2.0 } } }"#;
        assert!(matches!(
            CounterConfig::from_json(overlapping),
            Err(FlipError::InvalidConfig(_))
        ));
        assert!(CounterConfig::from_json(r#"{ "settle": { "motion_rate": 0.1, "settle_rate": 0.3 } }"#).is_err());
        assert!(CounterConfig::from_json(r#"{ "tiers": [] }"#).is_err());
        assert!(CounterConfig::from_json("not json").is_err());
    }

    #[test]
    fn test_round_trip() {
        let config = CounterConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(CounterConfig::from_json(&json).unwrap(), config);
    }
}
