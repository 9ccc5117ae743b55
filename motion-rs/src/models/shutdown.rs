use log::{error, info};
use std::sync::Arc;
use tokio::signal;
use tokio::sync::Notify;

pub(crate) struct ShutdownSignal {
    notify: Arc<Notify>,
}

impl ShutdownSignal {
    fn new(notify: Arc<Notify>) -> Self {
        Self { notify }
    }

    /// Waits for the time to live to expire, or for Ctrl+C when there is none,
    /// then stores a stop permit for the acquisition loop.
    async fn listen_for_shutdown(&self, run_for_millis: Option<u64>) {
        if let Some(time_to_live_millis) = run_for_millis {
            tokio::time::sleep(std::time::Duration::from_millis(time_to_live_millis)).await;
            info!("Run time of {} ms elapsed. Sending stop signal...", time_to_live_millis);
        } else {
            if let Err(e) = signal::ctrl_c().await {
                error!("Error while waiting for Ctrl+C: {}", e);
                return;
            }
            info!("Ctrl+C received. Sending stop signal...");
        }
        self.notify.notify_one();
    }
}

pub(crate) fn listen_for_shutdown(
    notify: Arc<Notify>,
    run_for_millis: Option<u64>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let shutdown_signal = ShutdownSignal::new(notify);
        shutdown_signal.listen_for_shutdown(run_for_millis).await;
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::{timeout, Duration};

    #[tokio::test]
    async fn test_shutdown_signal_with_timeout() {
        let notify = Arc::new(Notify::new());
        let handle = listen_for_shutdown(notify.clone(), Some(200));

        // Wait for the notify to be called
        let result = timeout(Duration::from_millis(500), notify.notified()).await;
        assert!(result.is_ok(), "Shutdown signal was not received in time");

        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_shutdown_permit_is_kept_until_awaited() {
        let notify = Arc::new(Notify::new());
        listen_for_shutdown(notify.clone(), Some(10)).await.unwrap();

        // The signal fired before anyone waited on it
        let result = timeout(Duration::from_millis(100), notify.notified()).await;
        assert!(result.is_ok());
    }
}
