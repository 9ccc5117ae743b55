use std::sync::{Arc, Mutex};
use std::time::Duration;
use uuid::Uuid;

use publisher::Listener;

/// Collects everything a publisher sends to it.
#[derive(Clone)]
pub struct SinkMock<T> {
    received: Arc<Mutex<Vec<T>>>,
}

impl<T> Default for SinkMock<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SinkMock<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self {
            received: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Returns a listener that appends every notification to this sink.
    pub fn listener(&self) -> Listener<T> {
        let received = self.received.clone();
        Listener::new(move |_id: Uuid, value: Arc<T>| {
            if let Ok(mut received) = received.lock() {
                received.push((*value).clone());
            }
        })
    }

    pub fn received(&self) -> Vec<T> {
        self.received
            .lock()
            .map(|received| received.clone())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.received.lock().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Polls until at least `count` items arrived or `timeout` expires.
    /// Returns whether the count was reached.
    pub async fn wait_for(&self, count: usize, timeout: Duration) -> bool {
        let poll = async {
            while self.len() < count {
                tokio::time::sleep(Duration::from_millis(5)).await;
            }
        };
        tokio::time::timeout(timeout, poll).await.is_ok()
    }
}
