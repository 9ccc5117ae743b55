//! General functionality shared by the `flipphone` crates

pub mod constants;

#[doc(hidden)]
pub mod traits;
#[doc(hidden)]
pub mod types;

// Re-export traits
#[doc(inline)]
pub use traits::{MotionSource, Notifiable};

// Re-export types
#[doc(inline)]
pub use types::timed::MotionSample;
pub use types::Callback;
