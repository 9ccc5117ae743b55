//! Fixtures shared by the tests of the workspace crates.

pub mod csv_loader;
pub mod rolls;
pub mod sink_mock;

/// Recorded trace of two full flips ending face-up.
pub const TWO_FLIPS_FACE_UP: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/test_data/two_flips_face_up.csv"
);
/// Recorded trace of one full flip and a half turn ending face-down.
pub const ONE_FLIP_FACE_DOWN: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/test_data/one_flip_face_down.csv"
);
