//! Scripted performance - deterministic stream text for a whole flight
//!
//! Mirrors what the instrument sends over serial: one state update per
//! second interleaved with ordinary log output. Phase cuts at 90 s and
//! 150 s, landing threshold at 180 s, performance over at 200 s.

use cirrus_core::STATE_EFFECTS;
use serde_json::json;

/// Second at which the morning phase ends
pub const PHASE_SUNSET_SECS: u32 = 90;

/// Second at which the sunset phase ends
pub const PHASE_NIGHT_SECS: u32 = 150;

/// Total scripted performance length
pub const PERFORMANCE_SECS: u32 = 200;

/// How long each performance state holds before the next one
const STATE_HOLD_SECS: u32 = 8;

/// A deterministic scripted performance
#[derive(Debug, Clone)]
pub struct PerformanceScript {
    duration_secs: u32,
}

impl PerformanceScript {
    /// The full 200-second flight
    pub fn full_flight() -> Self {
        PerformanceScript {
            duration_secs: PERFORMANCE_SECS,
        }
    }

    pub fn with_duration(duration_secs: u32) -> Self {
        PerformanceScript { duration_secs }
    }

    pub fn duration_secs(&self) -> u32 {
        self.duration_secs
    }

    /// Wire phase number for an elapsed second
    pub fn phase_at(secs: u32) -> u8 {
        if secs < PHASE_SUNSET_SECS {
            1
        } else if secs < PHASE_NIGHT_SECS {
            2
        } else {
            3
        }
    }

    /// Performance state name for an elapsed second
    pub fn state_at(secs: u32) -> &'static str {
        let index = (secs / STATE_HOLD_SECS) as usize % STATE_EFFECTS.len();
        STATE_EFFECTS[index].0
    }

    /// The frame line the instrument emits at an elapsed second
    pub fn frame_at(secs: u32) -> String {
        let interior = json!({
            "time": secs,
            "phase": Self::phase_at(secs),
            "chord": chord_at(secs),
            "state": Self::state_at(secs),
            "weather": "scripted",
            "vibe": "scripted",
            "drums": secs % 4 == 0,
            "sample": secs % 16 == 0,
        });
        format!("VISUAL:{interior}\n")
    }

    /// Every line of stream text for the flight, log noise included
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        lines.push("boot: cabin visualizer bridge v2\n".to_string());

        for secs in 1..=self.duration_secs {
            if secs % 10 == 0 {
                lines.push(format!("dbg: heap ok, t={secs}\n"));
            }
            lines.push(Self::frame_at(secs));
        }

        lines
    }
}

fn chord_at(secs: u32) -> &'static str {
    const CHORDS: &[&str] = &["Cmaj7", "Am9", "Fmaj7", "G13", "Em7", "Dm7"];
    CHORDS[(secs / 4) as usize % CHORDS.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use cirrus_wire::FrameExtractor;

    #[test]
    fn test_phase_cuts() {
        assert_eq!(PerformanceScript::phase_at(1), 1);
        assert_eq!(PerformanceScript::phase_at(89), 1);
        assert_eq!(PerformanceScript::phase_at(90), 2);
        assert_eq!(PerformanceScript::phase_at(149), 2);
        assert_eq!(PerformanceScript::phase_at(150), 3);
        assert_eq!(PerformanceScript::phase_at(199), 3);
    }

    #[test]
    fn test_states_come_from_the_catalog() {
        for secs in 0..PERFORMANCE_SECS {
            let state = PerformanceScript::state_at(secs);
            assert!(STATE_EFFECTS.iter().any(|(name, _)| *name == state));
        }
    }

    #[test]
    fn test_every_scripted_frame_decodes() {
        let mut extractor = FrameExtractor::new();
        let script = PerformanceScript::full_flight();

        let mut events = 0;
        for line in script.lines() {
            events += extractor.ingest(&line).len();
        }

        assert_eq!(events as u32, PERFORMANCE_SECS);
        assert_eq!(extractor.frames_discarded(), 0);
    }
}
