//! Rotation-detection state machine.
//!
//! A flip is counted when the phone goes through the checkpoint (upside down) and then
//! reaches the finish line (face-up again). The detector only changes state on strict
//! alternation between the two zones, so a sample jittering on the edge of a window
//! never counts twice.
use serde::{Deserialize, Serialize};

use crate::zone::{Zone, ZoneWindows};

/// Decides which checkpoint observations arm the detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ArmingPolicy {
    /// Any checkpoint sample arms, including one seen before the finish line.
    #[default]
    AnyCheckpoint,
    /// The finish line must be seen before a checkpoint can arm. A phone that
    /// starts face-down has to reach the finish line once before counting.
    AfterFinishLine,
}

/// Rule used to tell whether the phone ended face-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FaceUpPolicy {
    /// The last sample is in the finish-line window.
    #[default]
    LastSample,
    /// The last zone the phone was in, ignoring samples outside both windows,
    /// is the finish line.
    LastCommittedZone,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    pub windows: ZoneWindows,
    pub arming: ArmingPolicy,
    pub face_up: FaceUpPolicy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectorState {
    AwaitingCheckpoint,
    AwaitingFinishLine,
}

/// Emitted when a flip completes. `count` is the number of flips so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rotation {
    pub count: u32,
}

#[derive(Debug, Clone)]
pub struct RotationDetector {
    config: DetectorConfig,
    passed_checkpoint: bool,
    passed_finish_line: bool,
    rotations: u32,
    last_zone: Option<Zone>,
    committed_zone: Option<Zone>,
}

impl RotationDetector {
    pub fn new(config: DetectorConfig) -> Self {
        Self {
            config,
            passed_checkpoint: false,
            passed_finish_line: false,
            rotations: 0,
            last_zone: None,
            committed_zone: None,
        }
    }

    /// Feeds one roll sample. Returns the completed rotation, if this sample finished one.
    pub fn step(&mut self, angle: f64) -> Option<Rotation> {
        let zone = self.config.windows.classify(angle);
        self.last_zone = Some(zone);
        match zone {
            Zone::Checkpoint => {
                self.committed_zone = Some(Zone::Checkpoint);
                let may_arm = match self.config.arming {
                    ArmingPolicy::AnyCheckpoint => true,
                    ArmingPolicy::AfterFinishLine => self.passed_finish_line,
                };
                if !self.passed_checkpoint && may_arm {
                    self.passed_checkpoint = true;
                    self.passed_finish_line = false;
                }
                None
            }
            Zone::FinishLine => {
                self.committed_zone = Some(Zone::FinishLine);
                self.passed_finish_line = true;
                if self.passed_checkpoint {
                    self.passed_checkpoint = false;
                    self.rotations += 1;
                    return Some(Rotation {
                        count: self.rotations,
                    });
                }
                None
            }
            Zone::Neither => None,
        }
    }

    pub fn rotations(&self) -> u32 {
        self.rotations
    }

    pub fn state(&self) -> DetectorState {
        if self.passed_checkpoint {
            DetectorState::AwaitingFinishLine
        } else {
            DetectorState::AwaitingCheckpoint
        }
    }

    /// Applies the configured [`FaceUpPolicy`]. False until a sample was seen.
    pub fn is_face_up(&self) -> bool {
        let zone = match self.config.face_up {
            FaceUpPolicy::LastSample => self.last_zone,
            FaceUpPolicy::LastCommittedZone => self.committed_zone,
        };
        zone == Some(Zone::FinishLine)
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Back to `AwaitingCheckpoint` with no rotations.
    pub fn reset(&mut self) {
        *self = Self::new(self.config);
    }
}

/// Replays `sequence` through a fresh detector and returns the number of rotations.
pub fn count_rotations(sequence: &[f64], config: &DetectorConfig) -> u32 {
    replay(sequence, config).rotations()
}

/// Replays `sequence` and tells whether it ends face-up according to `config.face_up`.
pub fn is_face_up(sequence: &[f64], config: &DetectorConfig) -> bool {
    replay(sequence, config).is_face_up()
}

pub(crate) fn replay(sequence: &[f64], config: &DetectorConfig) -> RotationDetector {
    let mut detector = RotationDetector::new(*config);
    for &angle in sequence {
        detector.step(angle);
    }
    detector
}
