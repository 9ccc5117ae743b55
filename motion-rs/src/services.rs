use log::error;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;
use uuid::Uuid;

use crate::adapters::mock::MotionMock;
use crate::models::errors::MotionError;
use crate::models::script::MotionScript;
use crate::models::shutdown;
use crate::ports::MotionPort;
use common::constants::{MAX_SAMPLING_PERIOD_MILLIS, MIN_SAMPLING_PERIOD_MILLIS};
use common::traits::{MotionSource, Notifiable};
use common::MotionSample;
use publisher::{Publishable, Publisher};

/// Generic motion service. Owns the listeners and the stop signal of a [`MotionPort`].
pub struct MotionService<C>
where
    C: MotionPort,
{
    client: C,
    publisher: Publisher<MotionSample>,
    abort_signal: Arc<Notify>,
}

impl<C> MotionService<C>
where
    C: MotionPort,
{
    pub fn new(client: C) -> Self {
        MotionService {
            client,
            publisher: Publisher::new(),
            abort_signal: Arc::new(Notify::new()),
        }
    }

    /// Starts the data acquisition process. The process stops after `run_for_millis`,
    /// on [`MotionService::stop`], or with a SIGINT signal when no run time is given.
    /// Returns SensorUnavailable if the device has no motion hardware, and InvalidConfig
    /// if `period` is outside the range motion sensors deliver.
    pub async fn start(
        &self,
        period: Duration,
        run_for_millis: Option<u64>,
    ) -> Result<(), MotionError> {
        if !self.client.is_available() {
            return Err(MotionError::SensorUnavailable(format!(
                "{} has no motion hardware",
                self.client.get_tag()
            )));
        }
        let period_millis = period.as_millis();
        if !(MIN_SAMPLING_PERIOD_MILLIS as u128..=MAX_SAMPLING_PERIOD_MILLIS as u128)
            .contains(&period_millis)
        {
            return Err(MotionError::InvalidConfig(format!(
                "sampling period must be between {} and {} ms, got {}",
                MIN_SAMPLING_PERIOD_MILLIS, MAX_SAMPLING_PERIOD_MILLIS, period_millis
            )));
        }
        let shutdown_handle = shutdown::listen_for_shutdown(self.abort_signal.clone(), run_for_millis);
        let result = self
            .client
            .start(
                period,
                Some(self.abort_signal.clone()),
                Some(self.publisher.clone()),
            )
            .await;
        shutdown_handle.abort();
        result
    }

    /// Requests the acquisition loop to stop.
    pub fn stop(&self) {
        self.abort_signal.notify_one();
    }
}

impl<C> MotionSource for MotionService<C>
where
    C: MotionPort + Send + Sync,
{
    fn get_tag(&self) -> &str {
        self.client.get_tag()
    }

    fn is_available(&self) -> bool {
        self.client.is_available()
    }

    fn register_listener(&self, listener: &mut dyn Notifiable<MotionSample>) -> Uuid {
        self.publisher.register_listener(listener)
    }

    fn unregister_listener(&self, id: Uuid) -> Result<(), String> {
        self.publisher
            .unregister_listener(id)
            .map_err(|e| format!("{:?}", e))
    }
}

/// Starts a mock motion service that replays `script`.
///
/// Returns a tuple containing:
/// - A `tokio::task::JoinHandle<()>` representing the spawned acquisition task.
/// - An `Arc<MotionService<MotionMock>>` instance, allowing listeners to be attached.
///
/// An error InvalidConfig is returned if the script is empty.
pub fn run_mock_service(
    tag: &str,
    script: MotionScript,
    period_millis: u64,
    add_sensor_noise: bool,
    run_for_millis: Option<u64>,
) -> Result<(tokio::task::JoinHandle<()>, Arc<MotionService<MotionMock>>), MotionError> {
    let mock = MotionMock::new(tag, script, add_sensor_noise)?;
    Ok(spawn_service(mock, period_millis, run_for_millis))
}

/// Spawns the acquisition task of an already configured client.
pub fn spawn_service<C>(
    client: C,
    period_millis: u64,
    run_for_millis: Option<u64>,
) -> (tokio::task::JoinHandle<()>, Arc<MotionService<C>>)
where
    C: MotionPort + Send + Sync + 'static,
{
    let service = Arc::new(MotionService::new(client));
    let handle = tokio::spawn({
        let service = service.clone();
        async move {
            if let Err(e) = service
                .start(Duration::from_millis(period_millis), run_for_millis)
                .await
            {
                error!("Error in motion loop: {}", e);
            }
        }
    });
    (handle, service)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_motion_service_new() {
        let mock = MotionMock::new("Test", MotionScript::new(10).hold(1), false).unwrap();
        let service = MotionService::new(mock);
        assert_eq!(service.get_tag(), "Test");
        assert!(service.is_available());
    }

    #[tokio::test]
    async fn test_unavailable_service_fails_to_start() {
        let service = MotionService::new(MotionMock::unavailable("Test"));
        let result = service.start(Duration::from_millis(10), Some(100)).await;
        assert!(matches!(result, Err(MotionError::SensorUnavailable(_))));
    }

    #[tokio::test]
    async fn test_sampling_period_out_of_range() {
        let script = MotionScript::new(10).hold(1);
        let service = MotionService::new(MotionMock::new("Test", script, false).unwrap());
        for period in [5, 51, 1000] {
            let result = service.start(Duration::from_millis(period), Some(100)).await;
            assert!(matches!(result, Err(MotionError::InvalidConfig(_))));
        }
    }

    #[tokio::test]
    async fn test_run_mock_service_stops_after_run_time() {
        let (handle, _service) =
            run_mock_service("Test", MotionScript::new(10).hold(5), 10, false, Some(200)).unwrap();
        tokio::time::timeout(Duration::from_secs(2), handle)
            .await
            .expect("service did not stop")
            .unwrap();
    }

    #[tokio::test]
    async fn test_stop_service() {
        let (handle, service) =
            run_mock_service("Test", MotionScript::new(10).hold(5), 10, false, None).unwrap();
        tokio::time::sleep(Duration::from_millis(50)).await;
        service.stop();
        tokio::time::timeout(Duration::from_secs(2), handle)
            .await
            .expect("service did not stop")
            .unwrap();
    }

    #[test]
    fn test_unregister_unknown_listener() {
        let service = MotionService::new(MotionMock::unavailable("Test"));
        assert!(service.unregister_listener(Uuid::new_v4()).is_err());
    }
}
