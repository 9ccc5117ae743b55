/// Half-width in radians of the finish-line window centred on 0.
pub const DEFAULT_FINISH_HALF_WIDTH: f64 = 0.27;
/// Half-width in radians of the checkpoint window centred on π.
pub const DEFAULT_CHECKPOINT_HALF_WIDTH: f64 = 0.27;

/// Angular rate in rad/s the phone has to exceed before an attempt can settle.
pub const DEFAULT_MOTION_RATE: f64 = 3.0;
/// Angular rate in rad/s under which a moving phone is considered at rest.
pub const DEFAULT_SETTLE_RATE: f64 = 0.3;

/// Lower bounds of the greeting tiers: no flip, meh, good, wow.
pub const DEFAULT_TIER_BOUNDS: [u32; 4] = [0, 1, 3, 5];

/// Guess used when the input cannot be parsed.
pub const DEFAULT_GUESS: u32 = 0;
