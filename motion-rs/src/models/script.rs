use std::f64::consts::{PI, TAU};

use common::MotionSample;

/// Device pose replayed by the mock adapter on one sensor tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScriptedPose {
    /// Roll angle in radians. Not wrapped, so a full flip ends at `2π`.
    pub roll: f64,
    /// Rotation speed around the roll axis in rad/s.
    pub rotation_rate: f64,
}

/// Sequence of poses describing how the phone moves, one pose per tick.
///
/// # Examples
///
/// ```
/// use motion_rs::MotionScript;
///
/// // Rest face-up, flip twice, then rest again.
/// let script = MotionScript::new(50).hold(10).flips(2, 20).hold(10);
/// assert_eq!(script.len(), 60);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MotionScript {
    poses: Vec<ScriptedPose>,
    period_secs: f64,
    roll: f64,
}

impl MotionScript {
    /// Creates an empty script starting face-up at roll 0.
    pub fn new(period_millis: u64) -> Self {
        Self {
            poses: Vec::new(),
            period_secs: period_millis.max(1) as f64 / 1000.0,
            roll: 0.0,
        }
    }

    /// Builds a script from recorded samples. Missing rates are replayed as 0.
    pub fn from_samples(period_millis: u64, samples: &[MotionSample]) -> Self {
        let mut script = Self::new(period_millis);
        for sample in samples {
            script.roll = sample.get_roll();
            script.poses.push(ScriptedPose {
                roll: sample.get_roll(),
                rotation_rate: sample.get_rotation_rate().unwrap_or(0.0),
            });
        }
        script
    }

    /// Keeps the current roll for `ticks` samples.
    pub fn hold(mut self, ticks: usize) -> Self {
        for _ in 0..ticks {
            self.poses.push(ScriptedPose {
                roll: self.roll,
                rotation_rate: 0.0,
            });
        }
        self
    }

    /// Turns the phone by `turn` radians over `ticks` samples at constant speed.
    pub fn rotate(mut self, turn: f64, ticks: usize) -> Self {
        if ticks == 0 {
            return self;
        }
        let step = turn / ticks as f64;
        let rotation_rate = step.abs() / self.period_secs;
        for _ in 0..ticks {
            self.roll += step;
            self.poses.push(ScriptedPose {
                roll: self.roll,
                rotation_rate,
            });
        }
        self
    }

    /// Performs `count` full flips, `ticks_per_flip` samples each.
    pub fn flips(self, count: usize, ticks_per_flip: usize) -> Self {
        self.rotate(TAU * count as f64, ticks_per_flip * count)
    }

    /// Performs `count` full flips and a final half turn so the phone lands face-down.
    pub fn flips_landing_face_down(self, count: usize, ticks_per_flip: usize) -> Self {
        self.flips(count, ticks_per_flip)
            .rotate(PI, ticks_per_flip / 2)
    }

    pub fn poses(&self) -> &[ScriptedPose] {
        &self.poses
    }

    /// Returns the pose for `tick`, holding the last pose once the script is exhausted.
    pub fn pose_at(&self, tick: usize) -> Option<ScriptedPose> {
        self.poses.get(tick).or_else(|| self.poses.last()).map(|pose| ScriptedPose {
            roll: pose.roll,
            rotation_rate: if tick < self.poses.len() {
                pose.rotation_rate
            } else {
                0.0
            },
        })
    }

    pub fn len(&self) -> usize {
        self.poses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.poses.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hold_keeps_roll() {
        let script = MotionScript::new(50).hold(3);
        assert_eq!(script.len(), 3);
        assert!(script
            .poses()
            .iter()
            .all(|pose| pose.roll == 0.0 && pose.rotation_rate == 0.0));
    }

    #[test]
    fn test_flip_ends_at_full_turn() {
        let script = MotionScript::new(50).flips(1, 20);
        let last = script.poses().last().unwrap();
        assert!((last.roll - TAU).abs() < 1e-9);
        // 2π over 20 ticks of 50 ms
        assert!((last.rotation_rate - TAU).abs() < 1e-9);
    }

    #[test]
    fn test_landing_face_down() {
        let script = MotionScript::new(50).flips_landing_face_down(1, 20);
        let last = script.poses().last().unwrap();
        assert!((last.roll - 3.0 * PI).abs() < 1e-9);
        assert_eq!(script.len(), 30);
    }

    #[test]
    fn test_pose_at_holds_last_pose() {
        let script = MotionScript::new(50).rotate(PI, 4);
        let past_end = script.pose_at(100).unwrap();
        assert!((past_end.roll - PI).abs() < 1e-9);
        assert_eq!(past_end.rotation_rate, 0.0);
        assert!(MotionScript::new(50).pose_at(0).is_none());
    }

    #[test]
    fn test_zero_tick_rotation_is_ignored() {
        let script = MotionScript::new(50).rotate(PI, 0);
        assert!(script.is_empty());
    }

    #[test]
    fn test_from_samples() {
        let samples = vec![
            MotionSample::new(0.0, 0.1).with_rotation_rate(1.0),
            MotionSample::new(0.05, 0.2),
        ];
        let script = MotionScript::from_samples(50, &samples);
        assert_eq!(
            script.poses(),
            &[
                ScriptedPose {
                    roll: 0.1,
                    rotation_rate: 1.0
                },
                ScriptedPose {
                    roll: 0.2,
                    rotation_rate: 0.0
                }
            ]
        );
    }
}
