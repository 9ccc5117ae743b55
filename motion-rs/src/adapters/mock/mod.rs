// Emulates the device motion sensor by replaying a scripted trajectory

pub(crate) mod gaussian;

use async_trait::async_trait;
use log::{debug, info};
use nalgebra::{UnitQuaternion, Vector3};
use rand::{rngs::StdRng, SeedableRng};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;

use crate::constants::{GAUSSIAN_MEAN, GAUSSIAN_RATE_STDEV, GAUSSIAN_ROLL_STDEV};
use crate::models::errors::MotionError;
use crate::models::script::{MotionScript, ScriptedPose};
use crate::ports::MotionPort;
use common::MotionSample;
use gaussian::GaussianNoise;
use publisher::{Publishable, Publisher};

struct SensorNoise {
    roll: GaussianNoise,
    rate: GaussianNoise,
}

/// Configures mock data acquisition
pub struct MotionMock {
    tag: String,
    script: MotionScript,
    noise: Option<SensorNoise>,
    seed: Option<u64>,
    available: bool,
}

impl MotionMock {
    /// Creates a mock that replays `script` and then holds its final pose.
    /// Returns InvalidConfig if the script is empty.
    pub fn new(tag: &str, script: MotionScript, add_sensor_noise: bool) -> Result<Self, MotionError> {
        if script.is_empty() {
            return Err(MotionError::InvalidConfig(
                "Motion script has no poses".to_string(),
            ));
        }
        let noise = if add_sensor_noise {
            Some(SensorNoise {
                roll: GaussianNoise::new(GAUSSIAN_MEAN, GAUSSIAN_ROLL_STDEV)
                    .map_err(|e| MotionError::InvalidConfig(e.to_string()))?,
                rate: GaussianNoise::new(GAUSSIAN_MEAN, GAUSSIAN_RATE_STDEV)
                    .map_err(|e| MotionError::InvalidConfig(e.to_string()))?,
            })
        } else {
            None
        };
        Ok(Self {
            tag: tag.to_string(),
            script,
            noise,
            seed: None,
            available: true,
        })
    }

    /// Creates a mock of a device without motion hardware.
    pub fn unavailable(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            script: MotionScript::new(1).hold(1),
            noise: None,
            seed: None,
            available: false,
        }
    }

    /// Makes the sensor noise reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    fn sample_from_pose(&self, rng: &mut StdRng, timestamp: f64, pose: ScriptedPose) -> MotionSample {
        let (roll, rate) = match &self.noise {
            Some(noise) => (
                noise.roll.add_noise(rng, pose.roll),
                noise.rate.add_noise(rng, pose.rotation_rate),
            ),
            None => (pose.roll, pose.rotation_rate),
        };
        // Go through the attitude representation the device reports so roll gets wrapped
        // into (-π, π] the same way.
        let attitude = UnitQuaternion::from_euler_angles(roll, 0.0, 0.0);
        MotionSample::from_attitude(timestamp, &attitude, &Vector3::new(rate, 0.0, 0.0))
    }
}

#[async_trait]
impl MotionPort for MotionMock {
    /// Replays the script, one pose per `period`, until the abort signal is notified.
    async fn start(
        &self,
        period: Duration,
        abort_signal: Option<Arc<Notify>>,
        publisher: Option<Publisher<MotionSample>>,
    ) -> Result<(), MotionError> {
        if !self.available {
            return Err(MotionError::SensorUnavailable(format!(
                "{} has no motion hardware",
                self.tag
            )));
        }
        let abort_signal = abort_signal.unwrap_or(Arc::new(Notify::new()));
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let period_secs = period.as_secs_f64();
        let mut tick = 0usize;
        info!("Motion mock {} started, period {:?}", self.tag, period);

        loop {
            tokio::select! {
                _ = abort_signal.notified() => {
                    break;
                }
                _ = tokio::time::sleep(period) => {
                    // the script is never empty, so there is always a pose to hold
                    if let Some(pose) = self.script.pose_at(tick) {
                        let sample = self.sample_from_pose(&mut rng, tick as f64 * period_secs, pose);
                        if let Some(publisher) = publisher.as_ref() {
                            publisher.notify_listeners(Arc::new(sample));
                        }
                    }
                    tick += 1;
                }
            }
        }

        debug!("Motion mock {} stopped after {} ticks", self.tag, tick);
        Ok(())
    }

    fn get_tag(&self) -> &str {
        self.tag.as_str()
    }

    fn is_available(&self) -> bool {
        self.available
    }
}
