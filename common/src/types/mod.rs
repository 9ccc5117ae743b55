pub mod callback;
pub mod timed;

pub use callback::Callback;
