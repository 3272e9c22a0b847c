//! Flight controller - the single owner of all animation state
//!
//! One controller instance holds the live vector, the target vector, the
//! scheduler and the RNG; events and ticks mutate it through `&mut self`.
//! Targets are written by three uncoordinated sources (state updates,
//! sequence stages, debug overrides) on the same single-threaded loop:
//! whichever writes last wins, by design.

use rand::rngs::StdRng;
use rand::SeedableRng;

use cirrus_core::{
    target_for_state, ConnectionState, FlightStatus, FlightTime, Phase, TargetVector, VibeVector,
};
use cirrus_wire::{FrameExtractor, StateUpdate};

use crate::{landing_sequence, takeoff_sequence, Interpolator, SequenceScheduler};

/// Elapsed performance seconds at which landing begins
pub const LANDING_TRIGGER_SECS: u32 = 180;

/// Last-received performance info, kept for the cabin displays
#[derive(Debug, Clone, Default)]
pub struct PerformanceInfo {
    pub time: u32,
    pub chord: String,
    pub state: String,
    pub weather: String,
    pub vibe: String,
    pub drums: bool,
    pub sample: bool,
}

impl PerformanceInfo {
    /// Elapsed time as m:ss for the seat-back screen
    pub fn clock_label(&self) -> String {
        format!("{}:{:02}", self.time / 60, self.time % 60)
    }
}

/// Read-only per-frame view for the renderer
#[derive(Debug, Clone)]
pub struct RenderFrame {
    pub vibe: VibeVector,
    pub phase: Phase,
    pub status: FlightStatus,
    pub connection: ConnectionState,
}

/// The controller: ingests the stream, runs sequences, ticks the animation
pub struct FlightController {
    vibe: VibeVector,
    target: TargetVector,
    status: FlightStatus,
    phase: Phase,
    info: PerformanceInfo,
    connection: ConnectionState,
    running: bool,
    landing_fired: bool,
    extractor: FrameExtractor,
    scheduler: SequenceScheduler,
    interpolator: Interpolator,
    rng: StdRng,
}

impl FlightController {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Deterministic controller for tests: lightning timing is seeded
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        FlightController {
            vibe: VibeVector::zero(),
            target: TargetVector::default(),
            status: FlightStatus::Boarding,
            phase: Phase::Morning,
            info: PerformanceInfo::default(),
            connection: ConnectionState::Disconnected,
            running: false,
            landing_fired: false,
            extractor: FrameExtractor::new(),
            scheduler: SequenceScheduler::new(),
            interpolator: Interpolator::new(),
            rng,
        }
    }

    /// Feed raw stream text; every recovered frame becomes a state update
    pub fn ingest(&mut self, chunk: &str, now: FlightTime) {
        for update in self.extractor.ingest(chunk) {
            self.handle_update(update, now);
        }
    }

    /// Apply one state update: bookkeeping, edge-triggered sequences, then
    /// the state-driven target write
    pub fn handle_update(&mut self, update: StateUpdate, now: FlightTime) {
        let was_running = self.running;
        self.running = update.is_running();
        self.phase = update.phase;

        // Takeoff fires on the not-running -> running transition only
        if !was_running && self.running {
            self.landing_fired = false;
            self.begin_takeoff(now);
        }

        // Landing fires once per flight, latched until the next takeoff
        if self.running && !self.landing_fired && update.time >= LANDING_TRIGGER_SECS {
            self.landing_fired = true;
            self.begin_landing(now);
        }

        // State-driven write last: it may overwrite channels a stage just
        // set. Altitude survives because mapper patches never carry it.
        target_for_state(&update.state).apply(&mut self.target);

        self.info = PerformanceInfo {
            time: update.time,
            chord: update.chord,
            state: update.state,
            weather: update.weather,
            vibe: update.vibe,
            drums: update.drums,
            sample: update.sample,
        };
    }

    /// One animation tick: fire due stages, then smooth the live vector
    pub fn tick(&mut self, now: FlightTime) {
        self.apply_due_stages(now);
        self.interpolator
            .advance(&mut self.vibe, &self.target, &mut self.rng);
    }

    fn begin_takeoff(&mut self, now: FlightTime) {
        tracing::info!("takeoff sequence started");
        self.scheduler.start(&takeoff_sequence(), now);
        self.apply_due_stages(now);
    }

    fn begin_landing(&mut self, now: FlightTime) {
        tracing::info!("landing sequence started");
        self.scheduler.start(&landing_sequence(), now);
        self.apply_due_stages(now);
    }

    fn apply_due_stages(&mut self, now: FlightTime) {
        if let Some(status) = self.scheduler.poll(now, &mut self.target) {
            tracing::debug!(status = status.label(), "flight status changed");
            self.status = status;
        }
    }

    /// Debug-panel operation: start a performance without the stream
    pub fn start_performance(&mut self, now: FlightTime) {
        if self.running {
            return;
        }
        self.running = true;
        self.landing_fired = false;
        self.info.time = 1;
        self.begin_takeoff(now);
    }

    /// Debug-panel operation: stop the performance
    ///
    /// Cancels every pending sequence stage so stale overrides from an
    /// in-flight sequence can never land on the zeroed target.
    pub fn stop_performance(&mut self) {
        self.running = false;
        self.landing_fired = false;
        self.info.time = 0;
        self.scheduler.cancel_all();
        self.target = TargetVector::default();
        self.status = FlightStatus::Boarding;
    }

    /// Debug-panel operation: force a performance state by name
    pub fn force_state(&mut self, name: &str) {
        self.info.state = name.to_string();
        target_for_state(name).apply(&mut self.target);
    }

    /// Debug-panel operation: force a time-of-day phase
    pub fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }

    /// Record the stream connection state; never stops the tick loop
    pub fn set_connection(&mut self, connection: ConnectionState) {
        if let ConnectionState::Failed(reason) = &connection {
            tracing::warn!(%reason, "stream connection failed");
        }
        self.connection = connection;
    }

    /// Read-only renderer boundary
    pub fn frame(&self) -> RenderFrame {
        RenderFrame {
            vibe: self.vibe,
            phase: self.phase,
            status: self.status,
            connection: self.connection.clone(),
        }
    }

    pub fn vibe(&self) -> &VibeVector {
        &self.vibe
    }

    pub fn target(&self) -> &TargetVector {
        &self.target
    }

    pub fn status(&self) -> FlightStatus {
        self.status
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn info(&self) -> &PerformanceInfo {
        &self.info
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn frames_emitted(&self) -> u64 {
        self.extractor.frames_emitted()
    }

    pub fn frames_discarded(&self) -> u64 {
        self.extractor.frames_discarded()
    }
}

impl Default for FlightController {
    fn default() -> Self {
        Self::new()
    }
}
