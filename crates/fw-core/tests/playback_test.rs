use std::time::{Duration, Instant};

use fw_core::catalog;
use fw_core::playback::{PlaybackController, PlaybackEvent, PlaybackTiming};

fn timing() -> PlaybackTiming {
    PlaybackTiming::new(Duration::from_millis(200), Duration::from_millis(400))
}

#[test]
fn full_run_over_scripted_conversation() {
    let messages = catalog::agent_conversation();
    let n = messages.len();
    let mut pb = PlaybackController::new(timing());
    let now = Instant::now();
    pb.start("test fraud scenario", messages.clone(), now).unwrap();

    // Step tick by tick: each interval reveals exactly the next message.
    for step in 1..n {
        let events = pb.poll(now + Duration::from_millis(200 * step as u64));
        assert_eq!(events, vec![PlaybackEvent::Revealed(step + 1)]);
        assert_eq!(pb.revealed_messages(), &messages[..step + 1]);
    }
    assert_eq!(pb.revealed(), n);
    assert!(!pb.is_complete());

    // Settle delay, then the single completion signal.
    let events = pb.poll(now + Duration::from_millis(200 * (n as u64 - 1) + 400));
    assert_eq!(events, vec![PlaybackEvent::Completed]);
    assert!(pb.is_complete());
}

#[test]
fn three_message_sequence_completes_after_total_duration() {
    // Tick rate T with a 3-message sequence: completion fires exactly once
    // after 2xT + settle (the first message shows at start).
    let t = Duration::from_millis(150);
    let settle = Duration::from_millis(500);
    let messages: Vec<_> = catalog::agent_conversation().into_iter().take(3).collect();
    let mut pb = PlaybackController::new(PlaybackTiming::new(t, settle));
    let now = Instant::now();
    pb.start("wire transfers from new devices", messages, now).unwrap();

    let before = pb.poll(now + t * 2 + settle - Duration::from_millis(1));
    assert!(!before.contains(&PlaybackEvent::Completed));

    let at = pb.poll(now + t * 2 + settle);
    assert_eq!(
        at.iter().filter(|e| **e == PlaybackEvent::Completed).count(),
        1
    );
    assert!(pb.poll(now + Duration::from_secs(30)).is_empty());
}

#[test]
fn cancelled_run_never_resumes() {
    let messages = catalog::agent_conversation();
    let mut pb = PlaybackController::new(timing());
    let now = Instant::now();
    pb.start("structured withdrawals", messages, now).unwrap();

    pb.poll(now + Duration::from_millis(400));
    let frozen = pb.revealed();
    assert!(frozen > 1 && frozen < 6);

    pb.cancel();
    for minutes in 1..5 {
        assert!(pb.poll(now + Duration::from_secs(minutes * 60)).is_empty());
    }
    assert_eq!(pb.revealed(), frozen);
    assert!(!pb.is_complete());
}

#[test]
fn overlapping_starts_keep_single_cadence() {
    let messages = catalog::agent_conversation();
    let mut pb = PlaybackController::new(timing());
    let t0 = Instant::now();
    pb.start("first run", messages.clone(), t0).unwrap();
    pb.poll(t0 + Duration::from_millis(200));

    let t1 = t0 + Duration::from_millis(300);
    pb.start("second run", messages.clone(), t1).unwrap();

    // One reveal per interval from the new origin; never more.
    for step in 1..messages.len() {
        let events = pb.poll(t1 + Duration::from_millis(200 * step as u64));
        assert_eq!(events.len(), 1, "step {step}");
    }
    assert_eq!(pb.revealed(), messages.len());
}
