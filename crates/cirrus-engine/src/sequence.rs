//! Sequence scheduler - timed target overrides
//!
//! A sequence is an ordered list of stages; each stage fires at a fixed
//! delay from sequence start (not from the previous stage) and overwrites
//! part of the target vector. Stages are plain `(fire_at, patch)` records
//! evaluated against the flight clock each tick - no host timers - so a
//! cancelled sequence simply never has its pending stages applied.

use std::time::Duration;

use cirrus_core::{FlightStatus, FlightTime, TargetPatch, TargetVector};

/// One stage of a timed sequence
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SequenceStage {
    /// Delay from sequence start
    pub delay: Duration,
    /// Target channels this stage overwrites
    pub overrides: TargetPatch,
    /// Status label change, surfaced to the cabin display
    pub status: Option<FlightStatus>,
}

/// Handle for cancelling a started sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SequenceId(u64);

/// A stage armed against the flight clock
#[derive(Debug, Clone, Copy)]
struct ArmedStage {
    sequence: SequenceId,
    fire_at: FlightTime,
    overrides: TargetPatch,
    status: Option<FlightStatus>,
}

/// Schedules and fires sequence stages against the flight clock
///
/// Starting a new sequence does NOT cancel a previous one; callers that want
/// exclusivity must cancel explicitly, otherwise stale stages from an old
/// sequence may still fire and overwrite the target (last writer wins).
#[derive(Debug, Default)]
pub struct SequenceScheduler {
    pending: Vec<ArmedStage>,
    next_id: u64,
}

impl SequenceScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm every stage of a sequence relative to `now`
    ///
    /// Stages with zero delay fire on the next `poll`, which callers invoke
    /// immediately after starting when the first stage must apply at once.
    pub fn start(&mut self, stages: &[SequenceStage], now: FlightTime) -> SequenceId {
        self.next_id += 1;
        let id = SequenceId(self.next_id);

        for stage in stages {
            self.pending.push(ArmedStage {
                sequence: id,
                fire_at: now + stage.delay,
                overrides: stage.overrides,
                status: stage.status,
            });
        }

        tracing::debug!(sequence = id.0, stages = stages.len(), "sequence armed");
        id
    }

    /// Apply every stage due at `now`, in firing order
    ///
    /// Returns the last status label change among the fired stages, if any.
    pub fn poll(&mut self, now: FlightTime, target: &mut TargetVector) -> Option<FlightStatus> {
        if self.pending.is_empty() {
            return None;
        }

        let mut due: Vec<ArmedStage> = Vec::new();
        self.pending.retain(|stage| {
            if stage.fire_at <= now {
                due.push(*stage);
                false
            } else {
                true
            }
        });

        due.sort_by_key(|stage| stage.fire_at);

        let mut status = None;
        for stage in due {
            stage.overrides.apply(target);
            if stage.status.is_some() {
                status = stage.status;
            }
        }
        status
    }

    /// Drop every pending stage of one sequence
    pub fn cancel(&mut self, id: SequenceId) {
        self.pending.retain(|stage| stage.sequence != id);
    }

    /// Drop every pending stage of every sequence
    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }

    /// Stages still waiting to fire
    pub fn pending_stages(&self) -> usize {
        self.pending.len()
    }
}

/// Built-in takeoff sequence: ground roll, climb, cruise
pub fn takeoff_sequence() -> Vec<SequenceStage> {
    vec![
        SequenceStage {
            delay: Duration::ZERO,
            overrides: TargetPatch {
                altitude: Some(0.0),
                speed: Some(15.0),
                shake: Some(3.0),
                fog: Some(0.0),
                rain: Some(0.0),
                ..Default::default()
            },
            status: Some(FlightStatus::Takeoff),
        },
        SequenceStage {
            delay: Duration::from_millis(3000),
            overrides: TargetPatch {
                altitude: Some(0.5),
                speed: Some(12.0),
                shake: Some(2.0),
                ..Default::default()
            },
            status: None,
        },
        SequenceStage {
            delay: Duration::from_millis(6000),
            overrides: TargetPatch {
                altitude: Some(1.0),
                shake: Some(0.5),
                ..Default::default()
            },
            status: Some(FlightStatus::Cruising),
        },
    ]
}

/// Built-in landing sequence: descent, approach, touchdown
pub fn landing_sequence() -> Vec<SequenceStage> {
    vec![
        SequenceStage {
            delay: Duration::ZERO,
            overrides: TargetPatch {
                altitude: Some(0.5),
                shake: Some(1.0),
                ..Default::default()
            },
            status: Some(FlightStatus::Landing),
        },
        SequenceStage {
            delay: Duration::from_millis(3000),
            overrides: TargetPatch {
                altitude: Some(0.2),
                shake: Some(2.0),
                ..Default::default()
            },
            status: None,
        },
        SequenceStage {
            delay: Duration::from_millis(6000),
            overrides: TargetPatch {
                altitude: Some(0.0),
                speed: Some(5.0),
                shake: Some(0.0),
                ..Default::default()
            },
            status: Some(FlightStatus::Arrived),
        },
    ]
}
