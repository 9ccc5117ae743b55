//! Builders for roll-angle sequences used by the detector tests.
use std::f64::consts::{PI, TAU};

/// Wraps an angle into (-π, π].
pub fn wrap_angle(angle: f64) -> f64 {
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    if wrapped == -PI {
        PI
    } else {
        wrapped
    }
}

/// Rolls visited while turning from `start` by `turn` radians in `steps` equal increments.
/// The start angle itself is not included.
pub fn rotation(start: f64, turn: f64, steps: usize) -> Vec<f64> {
    let step = turn / steps.max(1) as f64;
    (1..=steps)
        .map(|i| wrap_angle(start + step * i as f64))
        .collect()
}

/// A phone resting face-up, then performing `count` flips of `steps_per_flip` samples.
pub fn flips(count: usize, steps_per_flip: usize) -> Vec<f64> {
    let mut rolls = vec![0.0];
    rolls.extend(rotation(0.0, TAU * count as f64, steps_per_flip * count));
    rolls
}

/// `n` samples alternating around `center` by +/- `amplitude`.
pub fn jitter(center: f64, amplitude: f64, n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| {
            let sign = if i % 2 == 0 { 1.0 } else { -1.0 };
            wrap_angle(center + sign * amplitude)
        })
        .collect()
}
