//! Target mapper - performance state name to numeric target patch
//!
//! Two independent axes: the weather category drives fog/speed/rain/shake,
//! the tilt direction alone drives bank. Tilt always has the last word on
//! bank, whatever the weather category implied.

use crate::effects::{state_effect, Tilt, WeatherCategory};
use crate::vibe::TargetPatch;

/// Bank angle in degrees for a left or right tilt
const TILT_BANK_DEG: f32 = 5.0;

/// Map a state name to its target patch
///
/// Unrecognized names return the default cruising patch. The patch never
/// sets altitude - altitude belongs to the takeoff/landing sequences.
pub fn target_for_state(name: &str) -> TargetPatch {
    let effect = match state_effect(name) {
        Some(effect) => effect,
        None => return cruising_patch(),
    };

    let mut patch = weather_patch(effect.weather);
    patch.bank = Some(bank_for_tilt(effect.tilt));
    patch
}

/// Default cruising patch for unrecognized states
pub fn cruising_patch() -> TargetPatch {
    TargetPatch {
        fog: Some(0.2),
        speed: Some(8.0),
        rain: Some(0.0),
        shake: Some(0.5),
        bank: Some(0.0),
        ..Default::default()
    }
}

/// Literal per-category patch table (bank filled in by tilt afterwards)
fn weather_patch(weather: WeatherCategory) -> TargetPatch {
    let (fog, speed, rain, shake) = match weather {
        WeatherCategory::Clear | WeatherCategory::Cloudbreak => (0.0, 8.0, 0.0, 0.0),
        WeatherCategory::Wisps => (0.1, 10.0, 0.0, 0.5),
        WeatherCategory::Bump => (0.3, 12.0, 0.0, 3.0),
        WeatherCategory::Turn => (0.0, 10.0, 0.0, 0.5),
        WeatherCategory::Descent => (0.4, 15.0, 0.0, 1.0),
        WeatherCategory::Storm => (1.0, 25.0, 1.0, 5.0),
        WeatherCategory::Holding => (0.5, 6.0, 0.0, 2.0),
        WeatherCategory::Deceptive => (0.3, 8.0, 0.5, 1.0),
    };

    TargetPatch {
        fog: Some(fog),
        speed: Some(speed),
        rain: Some(rain),
        shake: Some(shake),
        ..Default::default()
    }
}

fn bank_for_tilt(tilt: Tilt) -> f32 {
    match tilt {
        Tilt::Left => -TILT_BANK_DEG,
        Tilt::Right => TILT_BANK_DEG,
        Tilt::None => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storm_patch_exact() {
        let patch = target_for_state("Cadence Dominant");
        assert_eq!(patch.fog, Some(1.0));
        assert_eq!(patch.speed, Some(25.0));
        assert_eq!(patch.rain, Some(1.0));
        assert_eq!(patch.shake, Some(5.0));
        assert_eq!(patch.bank, Some(0.0));
        assert_eq!(patch.altitude, None);
    }

    #[test]
    fn test_clear_and_cloudbreak_are_calm() {
        for state in ["Tonic Expansion Tonic", "Authentic Cadence"] {
            let patch = target_for_state(state);
            assert_eq!(patch.fog, Some(0.0));
            assert_eq!(patch.speed, Some(8.0));
            assert_eq!(patch.rain, Some(0.0));
            assert_eq!(patch.shake, Some(0.0));
        }
    }

    #[test]
    fn test_all_known_states_exact_table() {
        // (state, fog, speed, rain, shake, bank)
        let table: &[(&str, f32, f32, f32, f32, f32)] = &[
            ("Tonic Expansion Tonic", 0.0, 8.0, 0.0, 0.0, 0.0),
            ("Tonic Expansion Pre-Dominant", 0.1, 10.0, 0.0, 0.5, 0.0),
            ("Tonic Expansion Dominant", 0.3, 12.0, 0.0, 3.0, 0.0),
            ("Cadence Pre-Pre-Dominant", 0.0, 10.0, 0.0, 0.5, -5.0),
            ("Cadence Pre-Dominant", 0.4, 15.0, 0.0, 1.0, 0.0),
            ("Cadence Dominant", 1.0, 25.0, 1.0, 5.0, 0.0),
            ("Authentic Cadence", 0.0, 8.0, 0.0, 0.0, 0.0),
            ("Half Cadence", 0.5, 6.0, 0.0, 2.0, 0.0),
            ("Deceptive Cadence", 0.3, 8.0, 0.5, 1.0, 0.0),
        ];

        for (state, fog, speed, rain, shake, bank) in table {
            let patch = target_for_state(state);
            assert_eq!(patch.fog, Some(*fog), "{state} fog");
            assert_eq!(patch.speed, Some(*speed), "{state} speed");
            assert_eq!(patch.rain, Some(*rain), "{state} rain");
            assert_eq!(patch.shake, Some(*shake), "{state} shake");
            assert_eq!(patch.bank, Some(*bank), "{state} bank");
        }
    }

    #[test]
    fn test_tilt_overrides_bank() {
        // The Turn shares its weather numbers with Wisps-like calm values
        // but banks left regardless of the category.
        let patch = target_for_state("Cadence Pre-Pre-Dominant");
        assert_eq!(patch.bank, Some(-5.0));
    }

    #[test]
    fn test_unknown_state_is_cruising_default() {
        let patch = target_for_state("Picardy Third");
        assert_eq!(patch, cruising_patch());

        let patch = target_for_state("");
        assert_eq!(patch.fog, Some(0.2));
        assert_eq!(patch.speed, Some(8.0));
        assert_eq!(patch.rain, Some(0.0));
        assert_eq!(patch.shake, Some(0.5));
        assert_eq!(patch.bank, Some(0.0));
    }
}
