use std::sync::Arc;
use uuid::Uuid;

use common::{MotionSample, MotionSource};
use motion_rs::{run_mock_service, MotionScript};
use publisher::Listener;

#[tokio::main]
async fn main() {
    env_logger::init();

    let period_millis = 50;
    let script = MotionScript::new(period_millis)
        .hold(10)
        .flips(2, 16)
        .hold(10);

    // Start mock service, stopped after 4 seconds
    let (handle, service) =
        run_mock_service("Phone", script, period_millis, true, Some(4000)).unwrap();

    let mut listener = Listener::new(|_id: Uuid, sample: Arc<MotionSample>| {
        println!(
            "t={:.2}s roll={:+.3} rad rate={:.2} rad/s",
            sample.get_timestamp(),
            sample.get_roll(),
            sample.get_rotation_rate().unwrap_or_default()
        );
    });
    service.register_listener(&mut listener);

    handle.await.unwrap();
}
