//! End-to-end flight simulation
//!
//! Runs the full controller over a scripted performance delivered through
//! the chaos model, ticking the animation loop at a fixed frame cadence,
//! and reports what a watching renderer would have observed.

use std::time::Duration;

use cirrus_core::{FlightStatus, FlightTime, VibeVector};
use cirrus_engine::FlightController;

use crate::{ChaosConfig, PerformanceScript, StreamChaos};

/// Animation frame interval (62.5 fps, matching the p5 draw loop)
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// What the simulation observed over a whole flight
#[derive(Debug, Clone)]
pub struct SimulationReport {
    /// Every distinct status, in the order it appeared
    pub statuses: Vec<FlightStatus>,
    /// Live vector at the end of the run
    pub final_vibe: VibeVector,
    /// Frames decoded from the stream
    pub frames_emitted: u64,
    /// Frames discarded as malformed
    pub frames_discarded: u64,
    /// Did every live channel stay in bounds on every frame?
    pub channels_in_bounds: bool,
}

impl SimulationReport {
    /// Did the flight pass through the expected statuses, in order?
    pub fn followed_flight_plan(&self) -> bool {
        let expected = [
            FlightStatus::Boarding,
            FlightStatus::Takeoff,
            FlightStatus::Cruising,
            FlightStatus::Landing,
            FlightStatus::Arrived,
        ];

        let mut it = self.statuses.iter();
        expected
            .iter()
            .all(|want| it.any(|status| status == want))
    }
}

/// One simulated flight: script + chaos + controller
pub struct FlightSimulation {
    script: PerformanceScript,
    chaos: ChaosConfig,
    seed: u64,
}

impl FlightSimulation {
    pub fn new(script: PerformanceScript, chaos: ChaosConfig, seed: u64) -> Self {
        FlightSimulation {
            script,
            chaos,
            seed,
        }
    }

    /// A clean full flight
    pub fn clean(seed: u64) -> Self {
        Self::new(PerformanceScript::full_flight(), ChaosConfig::none(), seed)
    }

    /// Run to completion: one second of script per simulated second,
    /// animation ticks every 16 ms in between
    pub fn run(&self) -> SimulationReport {
        let mut controller = FlightController::with_seed(self.seed);
        let mut chaos = StreamChaos::new(self.chaos, self.seed);

        // Pre-corrupt the whole stream, then deliver it second by second
        let lines = self.script.lines();
        let chunks = chaos.chunks(&lines);
        let per_second = chunks.len().div_ceil(self.script.duration_secs() as usize);

        let mut statuses = vec![controller.status()];
        let mut channels_in_bounds = true;
        let mut now = FlightTime::ZERO;

        for second in chunks.chunks(per_second.max(1)) {
            for chunk in second {
                controller.ingest(chunk, now);
            }

            let second_ends = now + Duration::from_secs(1);
            while now < second_ends {
                now = now + FRAME_INTERVAL;
                controller.tick(now);

                if statuses.last() != Some(&controller.status()) {
                    statuses.push(controller.status());
                }
                channels_in_bounds &= in_bounds(controller.vibe());
            }
        }

        // Let the approach finish after the stream goes quiet
        let quiet_until = now + Duration::from_secs(10);
        while now < quiet_until {
            now = now + FRAME_INTERVAL;
            controller.tick(now);
            if statuses.last() != Some(&controller.status()) {
                statuses.push(controller.status());
            }
            channels_in_bounds &= in_bounds(controller.vibe());
        }

        SimulationReport {
            statuses,
            final_vibe: *controller.vibe(),
            frames_emitted: controller.frames_emitted(),
            frames_discarded: controller.frames_discarded(),
            channels_in_bounds,
        }
    }
}

fn in_bounds(vibe: &VibeVector) -> bool {
    (0.0..=1.0).contains(&vibe.fog)
        && (0.0..=1.0).contains(&vibe.rain)
        && (0.0..=1.0).contains(&vibe.altitude)
        && vibe.speed >= 0.0
        && vibe.shake >= 0.0
        && (0.0..=255.0).contains(&vibe.light)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_flight_follows_the_plan() {
        let report = FlightSimulation::clean(11).run();

        assert!(
            report.followed_flight_plan(),
            "statuses: {:?}",
            report.statuses
        );
        assert_eq!(report.frames_discarded, 0);
        assert!(report.channels_in_bounds);

        // Landed and slowing toward taxi speed
        assert!(report.final_vibe.altitude < 0.2);
    }

    #[test]
    fn test_light_chaos_still_lands() {
        let report = FlightSimulation::new(
            PerformanceScript::full_flight(),
            ChaosConfig::light(),
            21,
        )
        .run();

        assert!(
            report.followed_flight_plan(),
            "statuses: {:?}",
            report.statuses
        );
        assert!(report.channels_in_bounds);
    }

    #[test]
    fn test_heavy_chaos_degrades_without_crashing() {
        let report = FlightSimulation::new(
            PerformanceScript::full_flight(),
            ChaosConfig::heavy(),
            31,
        )
        .run();

        // Frames were lost but the loop never left its bounds
        assert!(report.frames_discarded > 0);
        assert!(report.channels_in_bounds);
    }
}
