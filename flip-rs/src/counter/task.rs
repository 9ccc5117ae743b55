use log::{debug, info};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};

use common::MotionSample;
use publisher::{Publishable, Publisher};

use super::CounterEvent;
use crate::game::{conclude, resolve, GameSession, GreetingTiers, Outcome};
use crate::sampler::OrientationSampler;

pub(crate) enum Command {
    Sample(MotionSample),
    CompleteAttempt(oneshot::Sender<Option<Outcome>>),
    Stop(oneshot::Sender<Option<Outcome>>),
}

/// Consumer side of the sample queue. Owns the attempt and the session while counting.
pub(crate) struct CounterTask {
    session: GameSession,
    sampler: OrientationSampler,
    tiers: GreetingTiers,
    events: Publisher<CounterEvent>,
    active: Arc<AtomicBool>,
}

impl CounterTask {
    pub(crate) fn new(
        session: GameSession,
        sampler: OrientationSampler,
        tiers: GreetingTiers,
        events: Publisher<CounterEvent>,
        active: Arc<AtomicBool>,
    ) -> Self {
        Self {
            session,
            sampler,
            tiers,
            events,
            active,
        }
    }

    pub(crate) async fn run(mut self, mut commands: mpsc::UnboundedReceiver<Command>) {
        while let Some(command) = commands.recv().await {
            match command {
                Command::Sample(sample) => {
                    let update = self.sampler.push(&sample);
                    if let Some(rotation) = update.rotation {
                        debug!("Rotation {} completed", rotation.count);
                        self.events
                            .notify_listeners(Arc::new(CounterEvent::Rotation(rotation.count)));
                    }
                    if update.settled {
                        info!("Motion settled, closing attempt");
                        if self.complete_attempt().ends_session() {
                            break;
                        }
                    }
                }
                Command::CompleteAttempt(reply) => {
                    let outcome = self.complete_attempt();
                    let ends_session = outcome.ends_session();
                    let _ = reply.send(Some(outcome));
                    if ends_session {
                        break;
                    }
                }
                Command::Stop(reply) => {
                    let summary = self.sampler.finish();
                    let outcome = conclude(&mut self.session, summary, &self.tiers);
                    self.publish_final(outcome.clone());
                    let _ = reply.send(Some(outcome));
                    return;
                }
            }
        }
        // Ended by an outcome or by the counter going away
        self.active.store(false, Ordering::SeqCst);
    }

    fn complete_attempt(&mut self) -> Outcome {
        let summary = self.sampler.finish();
        let outcome = resolve(&mut self.session, summary, &self.tiers);
        if outcome.ends_session() {
            self.publish_final(outcome.clone());
        } else {
            self.events
                .notify_listeners(Arc::new(CounterEvent::Outcome(outcome.clone())));
        }
        outcome
    }

    fn publish_final(&self, outcome: Outcome) {
        // Not counting anymore by the time listeners hear about the outcome.
        self.active.store(false, Ordering::SeqCst);
        info!("Session finished: {} ({})", outcome.message(), outcome.label());
        self.events
            .notify_listeners(Arc::new(CounterEvent::Outcome(outcome)));
    }
}
