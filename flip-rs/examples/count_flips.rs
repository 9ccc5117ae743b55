use std::sync::Arc;
use uuid::Uuid;

use common::constants::DEFAULT_SAMPLING_PERIOD_MILLIS;
use flip_rs::{CounterConfig, CounterEvent, FlipCounter, GameMode, GameSession};
use motion_rs::{run_mock_service, MotionScript};
use publisher::Listener;

#[tokio::main]
async fn main() {
    env_logger::init();

    let config = CounterConfig::default();
    let period_millis = DEFAULT_SAMPLING_PERIOD_MILLIS;

    // Three flips in a row, landing face-up
    let script = MotionScript::new(period_millis)
        .hold(10)
        .flips(3, 14)
        .hold(20);
    let (handle, motion) = run_mock_service("Phone", script, period_millis, true, None).unwrap();

    let counter = FlipCounter::new(motion.clone(), config).unwrap();
    let mut display = Listener::new(|_id: Uuid, event: Arc<CounterEvent>| match &*event {
        CounterEvent::Rotation(count) => println!("{} ...", count),
        CounterEvent::Outcome(outcome) => println!(
            "{} {} [{:?}]",
            outcome.label(),
            outcome.message(),
            outcome.audio_cue()
        ),
    });
    counter.register_listener(&mut display);

    counter
        .start(GameSession::new(GameMode::MaxFlips))
        .await
        .unwrap();
    while counter.is_counting().await {
        tokio::time::sleep(std::time::Duration::from_millis(100)).await;
    }

    motion.stop();
    handle.await.unwrap();
}
