/// Default period between two motion samples.
pub const DEFAULT_SAMPLING_PERIOD_MILLIS: u64 = 50;
/// Fastest sampling period the motion sources are expected to deliver.
pub const MIN_SAMPLING_PERIOD_MILLIS: u64 = 10;
/// Slowest sampling period the motion sources are expected to deliver.
pub const MAX_SAMPLING_PERIOD_MILLIS: u64 = 50;
