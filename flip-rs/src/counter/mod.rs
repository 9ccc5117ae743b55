//! Counting sessions driven by a live motion source.
//!
//! The motion source pushes every sample into a queue through a listener; a single task
//! drains the queue, steps the detector and publishes [`CounterEvent`]s.
mod task;

use log::{debug, info, warn};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot, Mutex};
use uuid::Uuid;

use common::traits::{MotionSource, Notifiable};
use common::MotionSample;
use publisher::{Listener, Publishable, Publisher};

use crate::config::CounterConfig;
use crate::errors::FlipError;
use crate::game::{GameSession, Outcome};
use crate::sampler::OrientationSampler;
use task::{Command, CounterTask};

/// Published by the counter while a session runs.
#[derive(Debug, Clone, PartialEq)]
pub enum CounterEvent {
    /// A flip completed during the current attempt; carries the running count.
    Rotation(u32),
    /// An attempt or the whole session produced a result.
    Outcome(Outcome),
}

struct RunningSession {
    listener_id: Uuid,
    commands: mpsc::UnboundedSender<Command>,
    active: Arc<AtomicBool>,
    handle: tokio::task::JoinHandle<()>,
}

pub struct FlipCounter<S>
where
    S: MotionSource,
{
    source: Arc<S>,
    config: CounterConfig,
    events: Publisher<CounterEvent>,
    running: Mutex<Option<RunningSession>>,
}

impl<S> FlipCounter<S>
where
    S: MotionSource + 'static,
{
    /// Returns InvalidConfig if `config` does not validate.
    pub fn new(source: Arc<S>, config: CounterConfig) -> Result<Self, FlipError> {
        config.validate()?;
        Ok(Self {
            source,
            config,
            events: Publisher::new(),
            running: Mutex::new(None),
        })
    }

    pub fn config(&self) -> &CounterConfig {
        &self.config
    }

    /// Registers a listener for rotations and outcomes (display, audio...).
    pub fn register_listener(&self, listener: &mut dyn Notifiable<CounterEvent>) -> Uuid {
        self.events.register_listener(listener)
    }

    pub fn unregister_listener(&self, id: Uuid) -> Result<(), FlipError> {
        self.events
            .unregister_listener(id)
            .map_err(|e| FlipError::Listener(format!("{:?}", e)))
    }

    pub async fn is_counting(&self) -> bool {
        self.running
            .lock()
            .await
            .as_ref()
            .is_some_and(|running| running.active.load(Ordering::SeqCst))
    }

    /// Starts counting with `session`. Does nothing if a session is already counting.
    /// Returns SensorUnavailable if the motion source has no hardware.
    pub async fn start(&self, session: GameSession) -> Result<(), FlipError> {
        let mut running = self.running.lock().await;
        if let Some(current) = running.as_ref() {
            if current.active.load(Ordering::SeqCst) {
                debug!("Already counting, start ignored");
                return Ok(());
            }
        }
        // A session that ended on its own still holds its listener
        if let Some(previous) = running.take() {
            self.release(previous).await;
        }

        if !self.source.is_available() {
            warn!("Cannot count flips: no motion sensor on {}", self.source.get_tag());
            return Err(FlipError::SensorUnavailable(self.source.get_tag().to_string()));
        }

        let (commands, queue) = mpsc::unbounded_channel();
        let mut listener = Listener::new({
            let commands = commands.clone();
            move |_id: Uuid, sample: Arc<MotionSample>| {
                // Fails only once the session is over, when samples are no longer wanted
                let _ = commands.send(Command::Sample(*sample));
            }
        });
        let listener_id = self.source.register_listener(&mut listener);

        let active = Arc::new(AtomicBool::new(true));
        let task = CounterTask::new(
            session.clone(),
            OrientationSampler::new(self.config.detector, self.config.settle),
            self.config.tiers.clone(),
            self.events.clone(),
            active.clone(),
        );
        let handle = tokio::spawn(task.run(queue));
        info!("Counting started in {:?} mode", session.mode());

        *running = Some(RunningSession {
            listener_id,
            commands,
            active,
            handle,
        });
        Ok(())
    }

    /// Closes the current attempt without stopping, as the settle heuristic would.
    /// Returns None when not counting.
    pub async fn complete_attempt(&self) -> Result<Option<Outcome>, FlipError> {
        let running = self.running.lock().await;
        let Some(current) = running.as_ref() else {
            return Ok(None);
        };
        let (reply, outcome) = oneshot::channel();
        if current.commands.send(Command::CompleteAttempt(reply)).is_err() {
            return Ok(None);
        }
        Ok(outcome.await.ok().flatten())
    }

    /// Stops counting and evaluates what was sampled since the last result.
    /// Returns None if there was nothing to stop, including a session that already
    /// reported its final outcome.
    pub async fn stop(&self) -> Result<Option<Outcome>, FlipError> {
        let mut running = self.running.lock().await;
        let Some(current) = running.take() else {
            debug!("Not counting, stop ignored");
            return Ok(None);
        };

        // Samples already queued are still processed before the stop command
        if let Err(e) = self.source.unregister_listener(current.listener_id) {
            warn!("Could not detach from motion source: {}", e);
        }
        let (reply, outcome) = oneshot::channel();
        let outcome = if current.commands.send(Command::Stop(reply)).is_ok() {
            outcome.await.ok().flatten()
        } else {
            None
        };
        current
            .handle
            .await
            .map_err(|e| FlipError::Other(e.to_string()))?;
        info!("Counting stopped");
        Ok(outcome)
    }

    async fn release(&self, session: RunningSession) {
        if let Err(e) = self.source.unregister_listener(session.listener_id) {
            debug!("Listener of finished session already gone: {}", e);
        }
        drop(session.commands);
        if let Err(e) = session.handle.await {
            warn!("Counter task failed: {}", e);
        }
    }
}

impl<S> Drop for FlipCounter<S>
where
    S: MotionSource,
{
    fn drop(&mut self) {
        // The source outlives the counter: detach so nothing feeds the task anymore
        if let Some(running) = self.running.get_mut().take() {
            if let Err(e) = self.source.unregister_listener(running.listener_id) {
                debug!("Listener of dropped counter already gone: {}", e);
            }
            running.handle.abort();
        }
    }
}
