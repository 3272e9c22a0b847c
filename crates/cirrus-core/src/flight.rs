//! Flight-level enums: time-of-day phase, flight status, connection state

/// Time-of-day phase of the performance
///
/// Arrives on the wire as 1, 2 or 3; anything else falls back to Morning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Morning,
    Sunset,
    Night,
}

impl Phase {
    /// Decode the wire number (1|2|3); unknown values default to Morning
    pub fn from_wire(n: i64) -> Self {
        match n {
            2 => Phase::Sunset,
            3 => Phase::Night,
            _ => Phase::Morning,
        }
    }

    /// Wire number for this phase
    pub fn wire(self) -> u8 {
        match self {
            Phase::Morning => 1,
            Phase::Sunset => 2,
            Phase::Night => 3,
        }
    }

    /// Display label for the seat-back screen
    pub fn label(self) -> &'static str {
        match self {
            Phase::Morning => "Morning",
            Phase::Sunset => "Sunset",
            Phase::Night => "Night",
        }
    }
}

/// Flight status shown on the cabin display
///
/// Transitions are driven by the takeoff/landing sequences and by the
/// performance start/stop operations, never by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlightStatus {
    #[default]
    Boarding,
    Takeoff,
    Cruising,
    Landing,
    Arrived,
}

impl FlightStatus {
    /// Display label for this status
    pub fn label(self) -> &'static str {
        match self {
            FlightStatus::Boarding => "BOARDING",
            FlightStatus::Takeoff => "TAKEOFF",
            FlightStatus::Cruising => "CRUISING",
            FlightStatus::Landing => "LANDING",
            FlightStatus::Arrived => "ARRIVED",
        }
    }
}

/// State of the byte-stream source connection
///
/// A lost connection is surfaced here and nowhere else; the animation loop
/// keeps running on its last-known target.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConnectionState {
    #[default]
    Disconnected,
    Connected,
    Failed(String),
}

impl ConnectionState {
    pub fn is_connected(&self) -> bool {
        matches!(self, ConnectionState::Connected)
    }
}
