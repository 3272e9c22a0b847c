//! Performance-state effect catalog
//!
//! A fixed, closed mapping from the named performance states announced by
//! the instrument to qualitative visual effect descriptors. Lookups for
//! unknown names never fail - callers fall through to the default cruising
//! behavior in the target mapper.

/// Weather category driving most target channels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherCategory {
    Clear,
    Wisps,
    Bump,
    Turn,
    Descent,
    Storm,
    Holding,
    Deceptive,
    Cloudbreak,
}

/// Qualitative cabin shake level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShakeLevel {
    None,
    Dull,
    Light,
    Intense,
}

/// Qualitative cloud density
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloudDensity {
    None,
    Wisps,
    Large,
}

/// Qualitative fog level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FogLevel {
    None,
    Medium,
    Heavy,
}

/// Banking direction implied by the state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tilt {
    None,
    Left,
    Right,
}

/// Immutable effect descriptor for one performance state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateEffect {
    pub weather: WeatherCategory,
    pub shake: ShakeLevel,
    pub clouds: CloudDensity,
    pub fog: FogLevel,
    pub rain: bool,
    pub lightning: bool,
    pub tilt: Tilt,
    pub description: &'static str,
}

/// The closed catalog: every performance state the instrument can announce
pub const STATE_EFFECTS: &[(&str, StateEffect)] = &[
    (
        "Tonic Expansion Tonic",
        StateEffect {
            weather: WeatherCategory::Clear,
            shake: ShakeLevel::None,
            clouds: CloudDensity::None,
            fog: FogLevel::None,
            rain: false,
            lightning: false,
            tilt: Tilt::None,
            description: "Crystal Clear",
        },
    ),
    (
        "Tonic Expansion Pre-Dominant",
        StateEffect {
            weather: WeatherCategory::Wisps,
            shake: ShakeLevel::None,
            clouds: CloudDensity::Wisps,
            fog: FogLevel::None,
            rain: false,
            lightning: false,
            tilt: Tilt::None,
            description: "Light Wisps",
        },
    ),
    (
        "Tonic Expansion Dominant",
        StateEffect {
            weather: WeatherCategory::Bump,
            shake: ShakeLevel::Light,
            clouds: CloudDensity::Large,
            fog: FogLevel::None,
            rain: false,
            lightning: false,
            tilt: Tilt::None,
            description: "The Bump",
        },
    ),
    (
        "Cadence Pre-Pre-Dominant",
        StateEffect {
            weather: WeatherCategory::Turn,
            shake: ShakeLevel::None,
            clouds: CloudDensity::None,
            fog: FogLevel::None,
            rain: false,
            lightning: false,
            tilt: Tilt::Left,
            description: "The Turn",
        },
    ),
    (
        "Cadence Pre-Dominant",
        StateEffect {
            weather: WeatherCategory::Descent,
            shake: ShakeLevel::None,
            clouds: CloudDensity::Wisps,
            fog: FogLevel::Medium,
            rain: false,
            lightning: false,
            tilt: Tilt::None,
            description: "The Descent",
        },
    ),
    (
        "Cadence Dominant",
        StateEffect {
            weather: WeatherCategory::Storm,
            shake: ShakeLevel::Intense,
            clouds: CloudDensity::None,
            fog: FogLevel::Heavy,
            rain: true,
            lightning: true,
            tilt: Tilt::None,
            description: "The Storm",
        },
    ),
    (
        "Authentic Cadence",
        StateEffect {
            weather: WeatherCategory::Cloudbreak,
            shake: ShakeLevel::None,
            clouds: CloudDensity::None,
            fog: FogLevel::None,
            rain: false,
            lightning: false,
            tilt: Tilt::None,
            description: "Cloud Break",
        },
    ),
    (
        "Half Cadence",
        StateEffect {
            weather: WeatherCategory::Holding,
            shake: ShakeLevel::Dull,
            clouds: CloudDensity::None,
            fog: FogLevel::Medium,
            rain: false,
            lightning: false,
            tilt: Tilt::None,
            description: "Holding Pattern",
        },
    ),
    (
        "Deceptive Cadence",
        StateEffect {
            weather: WeatherCategory::Deceptive,
            shake: ShakeLevel::None,
            clouds: CloudDensity::None,
            fog: FogLevel::None,
            rain: false,
            lightning: false,
            tilt: Tilt::None,
            description: "Wrong Sky",
        },
    ),
];

/// Look up the effect for a state name; `None` for unrecognized states
pub fn state_effect(name: &str) -> Option<&'static StateEffect> {
    STATE_EFFECTS
        .iter()
        .find(|(state, _)| *state == name)
        .map(|(_, effect)| effect)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_closed_over_nine_states() {
        assert_eq!(STATE_EFFECTS.len(), 9);
    }

    #[test]
    fn test_known_state_lookup() {
        let storm = state_effect("Cadence Dominant").unwrap();
        assert_eq!(storm.weather, WeatherCategory::Storm);
        assert_eq!(storm.shake, ShakeLevel::Intense);
        assert!(storm.rain);
        assert!(storm.lightning);
        assert_eq!(storm.description, "The Storm");
    }

    #[test]
    fn test_turn_tilts_left() {
        let turn = state_effect("Cadence Pre-Pre-Dominant").unwrap();
        assert_eq!(turn.tilt, Tilt::Left);
    }

    #[test]
    fn test_unknown_state_is_none() {
        assert!(state_effect("Neapolitan Sixth").is_none());
        assert!(state_effect("").is_none());
    }
}
