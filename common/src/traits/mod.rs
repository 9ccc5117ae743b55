pub mod motion;
pub mod publisher;

pub use crate::traits::motion::MotionSource;
pub use crate::traits::publisher::Notifiable;
