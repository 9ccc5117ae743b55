use common::MotionSample;

use crate::detector::{DetectorConfig, Rotation, RotationDetector};
use crate::game::RotationSummary;
use crate::settle::{SettleConfig, SettleDetector};

/// Roll angles of the attempt in progress, in arrival order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleSequence {
    samples: Vec<f64>,
}

impl SampleSequence {
    pub fn new() -> Self {
        Self {
            samples: Vec::new(),
        }
    }

    pub fn push(&mut self, roll: f64) {
        self.samples.push(roll);
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }
}

impl From<Vec<f64>> for SampleSequence {
    fn from(samples: Vec<f64>) -> Self {
        Self { samples }
    }
}

/// Result of feeding one sample to the sampler.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SampleUpdate {
    pub rotation: Option<Rotation>,
    /// The phone came to rest after moving: the attempt is over.
    pub settled: bool,
}

/// Records the current attempt and keeps the detectors up to date, one sample at a time.
#[derive(Debug, Clone)]
pub struct OrientationSampler {
    sequence: SampleSequence,
    detector: RotationDetector,
    settle: Option<SettleDetector>,
    peak_rate: f64,
}

impl OrientationSampler {
    /// Without a settle configuration attempts only end on request.
    pub fn new(config: DetectorConfig, settle: Option<SettleConfig>) -> Self {
        Self {
            sequence: SampleSequence::new(),
            detector: RotationDetector::new(config),
            settle: settle.map(SettleDetector::new),
            peak_rate: 0.0,
        }
    }

    pub fn push(&mut self, sample: &MotionSample) -> SampleUpdate {
        let roll = sample.get_roll();
        self.sequence.push(roll);
        let rotation = self.detector.step(roll);

        let mut settled = false;
        if let Some(rate) = sample.get_rotation_rate() {
            self.peak_rate = self.peak_rate.max(rate);
            if let Some(settle) = self.settle.as_mut() {
                settled = settle.update(rate);
            }
        }
        SampleUpdate { rotation, settled }
    }

    pub fn sequence(&self) -> &SampleSequence {
        &self.sequence
    }

    pub fn rotations(&self) -> u32 {
        self.detector.rotations()
    }

    pub fn summary(&self) -> RotationSummary {
        RotationSummary {
            rotations: self.detector.rotations(),
            face_up: self.detector.is_face_up(),
            samples: self.sequence.len(),
            peak_rate: self.peak_rate,
        }
    }

    /// Closes the attempt: returns its summary and starts over with an empty sequence.
    pub fn finish(&mut self) -> RotationSummary {
        let summary = self.summary();
        self.sequence.clear();
        self.detector.reset();
        if let Some(settle) = self.settle.as_mut() {
            settle.reset();
        }
        self.peak_rate = 0.0;
        summary
    }
}
