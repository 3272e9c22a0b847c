//! Sky palette catalog
//!
//! One named gradient preset per time-of-day phase, chosen from a fixed
//! catalog. Unknown names fall back to the phase's default preset - palette
//! selection can never fail.

use cirrus_core::Phase;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default preset key for every phase
pub const DEFAULT_PALETTE: &str = "default";

/// One sky gradient preset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkyPalette {
    /// Catalog key (what the config document stores)
    pub key: &'static str,
    /// Human-readable label for the picker
    pub label: &'static str,
    /// Gradient top color, RGB
    pub top: [u8; 3],
    /// Gradient bottom color, RGB
    pub bottom: [u8; 3],
}

pub const MORNING_PALETTES: &[SkyPalette] = &[
    SkyPalette {
        key: "default",
        label: "Default (Light Blue)",
        top: [135, 206, 235],
        bottom: [255, 255, 255],
    },
    SkyPalette {
        key: "deepAzure",
        label: "Deep Azure (Richer Blue)",
        top: [0, 127, 255],
        bottom: [173, 216, 230],
    },
    SkyPalette {
        key: "dawnPink",
        label: "Dawn Pink (Warm Pink)",
        top: [255, 183, 197],
        bottom: [255, 229, 217],
    },
    SkyPalette {
        key: "coolMorning",
        label: "Cool Morning (Steel Blue)",
        top: [70, 130, 180],
        bottom: [176, 224, 230],
    },
    SkyPalette {
        key: "brightCyan",
        label: "Bright Cyan (Vibrant)",
        top: [0, 191, 255],
        bottom: [224, 255, 255],
    },
    SkyPalette {
        key: "paleLavender",
        label: "Pale Lavender (Dreamy)",
        top: [200, 162, 200],
        bottom: [230, 230, 250],
    },
];

pub const SUNSET_PALETTES: &[SkyPalette] = &[
    SkyPalette {
        key: "default",
        label: "Default (Orange Gold)",
        top: [255, 140, 80],
        bottom: [255, 200, 100],
    },
    SkyPalette {
        key: "deepSunset",
        label: "Deep Sunset (Red-Orange)",
        top: [255, 94, 77],
        bottom: [255, 165, 0],
    },
    SkyPalette {
        key: "purpleDusk",
        label: "Purple Dusk (Purple to Orange)",
        top: [138, 43, 226],
        bottom: [255, 140, 0],
    },
    SkyPalette {
        key: "warmGold",
        label: "Warm Gold (Rich Gold)",
        top: [255, 120, 50],
        bottom: [255, 215, 0],
    },
    SkyPalette {
        key: "pinkSunset",
        label: "Pink Sunset (Coral Pink)",
        top: [255, 69, 100],
        bottom: [255, 180, 120],
    },
    SkyPalette {
        key: "fireSky",
        label: "Fire Sky (Red to Orange)",
        top: [255, 50, 50],
        bottom: [255, 140, 0],
    },
];

pub const NIGHT_PALETTES: &[SkyPalette] = &[
    SkyPalette {
        key: "default",
        label: "Default (Dark Blue)",
        top: [20, 20, 40],
        bottom: [50, 50, 80],
    },
    SkyPalette {
        key: "deepNight",
        label: "Deep Night (Darker)",
        top: [5, 5, 15],
        bottom: [20, 20, 40],
    },
    SkyPalette {
        key: "purpleNight",
        label: "Purple Night (Purple Tint)",
        top: [30, 15, 50],
        bottom: [60, 40, 80],
    },
    SkyPalette {
        key: "starryNight",
        label: "Starry Night (Deep Indigo)",
        top: [10, 10, 30],
        bottom: [25, 25, 60],
    },
    SkyPalette {
        key: "midnightBlue",
        label: "Midnight Blue (Classic)",
        top: [15, 25, 50],
        bottom: [25, 50, 100],
    },
];

/// Every preset available for a phase
pub fn palettes_for(phase: Phase) -> &'static [SkyPalette] {
    match phase {
        Phase::Morning => MORNING_PALETTES,
        Phase::Sunset => SUNSET_PALETTES,
        Phase::Night => NIGHT_PALETTES,
    }
}

/// Resolve a preset by name, falling back to the phase default
pub fn palette(phase: Phase, name: &str) -> &'static SkyPalette {
    let catalog = palettes_for(phase);
    catalog
        .iter()
        .find(|p| p.key == name)
        .unwrap_or(&catalog[0])
}

/// The selected preset name per phase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteSelection {
    pub morning: String,
    pub sunset: String,
    pub night: String,
}

impl Default for PaletteSelection {
    fn default() -> Self {
        PaletteSelection {
            morning: DEFAULT_PALETTE.to_string(),
            sunset: DEFAULT_PALETTE.to_string(),
            night: DEFAULT_PALETTE.to_string(),
        }
    }
}

impl PaletteSelection {
    /// Tolerant merge over defaults from an untrusted document section
    pub fn merge(section: Option<&Value>) -> Self {
        let mut selection = PaletteSelection::default();
        if let Some(section) = section {
            read_name(section, "morning", &mut selection.morning);
            read_name(section, "sunset", &mut selection.sunset);
            read_name(section, "night", &mut selection.night);
        }
        selection
    }

    /// Selected preset name for a phase
    pub fn for_phase(&self, phase: Phase) -> &str {
        match phase {
            Phase::Morning => &self.morning,
            Phase::Sunset => &self.sunset,
            Phase::Night => &self.night,
        }
    }

    /// Resolve the selected preset for a phase (with fallback)
    pub fn resolve(&self, phase: Phase) -> &'static SkyPalette {
        palette(phase, self.for_phase(phase))
    }
}

fn read_name(section: &Value, key: &str, out: &mut String) {
    if let Some(name) = section.get(key).and_then(Value::as_str) {
        *out = name.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_every_phase_has_a_default_preset() {
        for phase in [Phase::Morning, Phase::Sunset, Phase::Night] {
            assert_eq!(palettes_for(phase)[0].key, DEFAULT_PALETTE);
        }
    }

    #[test]
    fn test_known_preset_resolves() {
        let dusk = palette(Phase::Sunset, "purpleDusk");
        assert_eq!(dusk.top, [138, 43, 226]);
        assert_eq!(dusk.bottom, [255, 140, 0]);
    }

    #[test]
    fn test_unknown_preset_falls_back_to_default() {
        let p = palette(Phase::Night, "neonPink");
        assert_eq!(p.key, DEFAULT_PALETTE);
        assert_eq!(p.top, [20, 20, 40]);
    }

    #[test]
    fn test_selection_merge_is_tolerant() {
        let selection = PaletteSelection::merge(Some(&json!({
            "morning": "dawnPink",
            "night": 3,
        })));

        assert_eq!(selection.morning, "dawnPink");
        assert_eq!(selection.sunset, "default");
        assert_eq!(selection.night, "default");

        assert_eq!(PaletteSelection::merge(None), PaletteSelection::default());
    }

    #[test]
    fn test_selection_resolves_per_phase() {
        let selection = PaletteSelection {
            morning: "brightCyan".to_string(),
            sunset: "missing".to_string(),
            night: "starryNight".to_string(),
        };

        assert_eq!(selection.resolve(Phase::Morning).key, "brightCyan");
        assert_eq!(selection.resolve(Phase::Sunset).key, "default");
        assert_eq!(selection.resolve(Phase::Night).key, "starryNight");
    }
}
