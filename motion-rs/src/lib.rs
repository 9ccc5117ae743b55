//! # Crate motion-rs
//!
//! ## motion-rs
//!
//! The `motion-rs` crate wraps a device motion sensor behind the [`ports::MotionPort`] trait and
//! publishes one [`common::MotionSample`] (roll angle plus angular-rate magnitude) per sensor tick.
//!
//! Features include:
//! - A scripted mock adapter that replays roll trajectories, optionally with Gaussian noise.
//! - Selection of the sampling period (10 to 50 ms on real devices).
//! - Registration of listeners through [`common::MotionSource`].
//! - Stop on request, after a fixed time, or on Ctrl+C.

pub(crate) mod adapters;
pub mod constants;
pub mod models;
pub mod ports;
pub mod services;

pub use adapters::mock::MotionMock;
pub use models::errors::MotionError;
pub use models::script::{MotionScript, ScriptedPose};
pub use services::{run_mock_service, spawn_service, MotionService};
