use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;

use async_trait::async_trait;

use common::MotionSample;
use publisher::Publisher;

use crate::models::errors::MotionError;

#[async_trait]
pub trait MotionPort {
    /// Starts the data acquisition process. The process runs until `abort_signal` is notified.
    /// Returns SensorUnavailable if the device has no motion hardware.
    async fn start(
        &self,
        period: Duration,
        abort_signal: Option<Arc<Notify>>,
        publisher: Option<Publisher<MotionSample>>,
    ) -> Result<(), MotionError>;

    fn get_tag(&self) -> &str;
    fn is_available(&self) -> bool;
}
