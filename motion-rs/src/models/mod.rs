pub mod errors;
pub mod script;
pub(crate) mod shutdown;
