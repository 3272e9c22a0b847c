//! End-to-end flight behavior against a synthetic clock

use std::time::Duration;

use cirrus_core::{FlightStatus, FlightTime};
use cirrus_engine::FlightController;

const TICK: Duration = Duration::from_millis(16);

/// Run the animation loop from `from` to `to` at a 16ms cadence
fn run_until(ctl: &mut FlightController, from: FlightTime, to: FlightTime) -> FlightTime {
    let mut now = from;
    while now < to {
        now = now + TICK;
        ctl.tick(now);
    }
    now
}

#[test]
fn full_flight_reaches_cruise_and_lands() {
    let mut ctl = FlightController::with_seed(99);
    let start = FlightTime::ZERO;

    ctl.ingest("VISUAL:{\"time\":1,\"state\":\"Tonic Expansion Tonic\"}", start);
    assert_eq!(ctl.status(), FlightStatus::Takeoff);

    let now = run_until(&mut ctl, start, FlightTime::from_millis(7000));
    assert_eq!(ctl.status(), FlightStatus::Cruising);
    assert_eq!(ctl.target().altitude, 1.0);

    // Altitude is still climbing: the channel reads as a slow ascent
    assert!(ctl.vibe().altitude > 0.0);
    assert!(ctl.vibe().altitude < 1.0);

    ctl.ingest("VISUAL:{\"time\":180,\"state\":\"Authentic Cadence\"}", now);
    assert_eq!(ctl.status(), FlightStatus::Landing);

    let now = run_until(&mut ctl, now, now + Duration::from_millis(7000));
    assert_eq!(ctl.status(), FlightStatus::Arrived);
    assert_eq!(ctl.target().altitude, 0.0);
    assert_eq!(ctl.target().speed, 5.0);

    // Long after arrival the live vector settles onto the target
    run_until(&mut ctl, now, now + Duration::from_millis(60_000));
    assert!(ctl.vibe().altitude < 0.05);
    assert!((ctl.vibe().speed - 5.0).abs() < 0.5);
}

#[test]
fn stopping_mid_climb_never_reaches_cruise() {
    let mut ctl = FlightController::with_seed(7);
    let start = FlightTime::ZERO;

    ctl.ingest("VISUAL:{\"time\":1}", start);
    let now = run_until(&mut ctl, start, FlightTime::from_millis(4000));
    assert_eq!(ctl.target().altitude, 0.5);

    ctl.stop_performance();
    run_until(&mut ctl, now, now + Duration::from_millis(10_000));

    // The cruise stage elapsed while cancelled; it never applied
    assert_eq!(ctl.status(), FlightStatus::Boarding);
    assert_eq!(ctl.target().altitude, 0.0);
}

#[test]
fn live_channels_stay_in_bounds_through_a_storm() {
    let mut ctl = FlightController::with_seed(3);
    let mut now = FlightTime::ZERO;

    ctl.ingest("VISUAL:{\"time\":1,\"state\":\"Cadence Dominant\"}", now);
    let mut saw_flash = false;
    for _ in 0..5000 {
        now = now + TICK;
        ctl.tick(now);
        let vibe = ctl.vibe();
        assert!((0.0..=1.0).contains(&vibe.fog));
        assert!((0.0..=1.0).contains(&vibe.rain));
        assert!((0.0..=1.0).contains(&vibe.altitude));
        assert!(vibe.speed >= 0.0);
        assert!(vibe.shake >= 0.0);
        assert!((0.0..=255.0).contains(&vibe.light));
        saw_flash |= vibe.light > 0.0;
    }

    // A 5000-tick storm virtually always produces at least one flash
    assert!(saw_flash);
    assert!(ctl.vibe().fog > 0.99);
}
