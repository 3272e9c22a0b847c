//! State-update event decoded from one frame
//!
//! The frame interior is an untrusted partial record: every field is read
//! with an explicit default and type coercion, never by trusting the shape.

use cirrus_core::Phase;
use serde_json::Value;

/// One decoded state-update event
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StateUpdate {
    /// Elapsed performance time in seconds
    pub time: u32,
    /// Time-of-day phase
    pub phase: Phase,
    /// Current chord (display only)
    pub chord: String,
    /// Performance state name - the target mapper's key
    pub state: String,
    /// Weather description (display only)
    pub weather: String,
    /// Vibe description (display only)
    pub vibe: String,
    /// Drum machine active
    pub drums: bool,
    /// Sampler active
    pub sample: bool,
}

impl StateUpdate {
    /// Decode from a parsed frame interior, defaulting every missing or
    /// wrongly-typed field
    pub fn from_value(value: &Value) -> Self {
        StateUpdate {
            time: field_u32(value, "time"),
            phase: Phase::from_wire(value.get("phase").and_then(Value::as_i64).unwrap_or(1)),
            chord: field_string(value, "chord"),
            state: field_string(value, "state"),
            weather: field_string(value, "weather"),
            vibe: field_string(value, "vibe"),
            drums: field_bool(value, "drums"),
            sample: field_bool(value, "sample"),
        }
    }

    /// Is a performance running? (time ticks up from zero once started)
    pub fn is_running(&self) -> bool {
        self.time > 0
    }
}

fn field_u32(value: &Value, key: &str) -> u32 {
    value
        .get(key)
        .and_then(Value::as_u64)
        .map(|n| n.min(u32::MAX as u64) as u32)
        .unwrap_or(0)
}

fn field_string(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string()
}

fn field_bool(value: &Value, key: &str) -> bool {
    value.get(key).and_then(Value::as_bool).unwrap_or(false)
}
