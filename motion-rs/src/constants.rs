/// Standard deviation of the Gaussian noise added to the roll angle, in radians.
pub const GAUSSIAN_ROLL_STDEV: f64 = 0.02;
/// Standard deviation of the Gaussian noise added to the gyroscope axes, in rad/s.
pub const GAUSSIAN_RATE_STDEV: f64 = 0.05;
pub const GAUSSIAN_MEAN: f64 = 0f64;
