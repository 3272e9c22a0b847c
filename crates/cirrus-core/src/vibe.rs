//! Live and target parameter vectors
//!
//! The live vector is what the renderer reads every frame; the target vector
//! is what the live vector is continuously smoothed toward. Both are owned by
//! one controller instance - there are no ambient globals.

/// Live, continuously-varying animation state
///
/// Channels: fog and altitude and rain in [0,1], speed and shake >= 0,
/// bank in signed degrees, light in [0,255] (instantaneous lightning flash,
/// decays every tick regardless of target).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VibeVector {
    pub fog: f32,
    pub speed: f32,
    pub altitude: f32,
    pub shake: f32,
    pub bank: f32,
    pub rain: f32,
    pub light: f32,
}

impl VibeVector {
    /// All channels zeroed (parked at the gate)
    pub fn zero() -> Self {
        Self::default()
    }
}

/// Desired steady-state values for every channel except `light`
///
/// Written by the target mapper on every state update and by the sequence
/// scheduler on every fired stage. Both writers share this storage with no
/// versioning: whichever wrote last wins until the next write.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TargetVector {
    pub fog: f32,
    pub speed: f32,
    pub altitude: f32,
    pub shake: f32,
    pub bank: f32,
    pub rain: f32,
}

/// Partial target: only the set channels are written on apply
///
/// Sequence stages and mapper output are both patches, so a stage that only
/// moves altitude leaves the weather channels alone.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TargetPatch {
    pub fog: Option<f32>,
    pub speed: Option<f32>,
    pub altitude: Option<f32>,
    pub shake: Option<f32>,
    pub bank: Option<f32>,
    pub rain: Option<f32>,
}

impl TargetPatch {
    /// Overwrite the set channels of `target`, leave the rest untouched
    pub fn apply(&self, target: &mut TargetVector) {
        if let Some(fog) = self.fog {
            target.fog = fog;
        }
        if let Some(speed) = self.speed {
            target.speed = speed;
        }
        if let Some(altitude) = self.altitude {
            target.altitude = altitude;
        }
        if let Some(shake) = self.shake {
            target.shake = shake;
        }
        if let Some(bank) = self.bank {
            target.bank = bank;
        }
        if let Some(rain) = self.rain {
            target.rain = rain;
        }
    }

    /// Is every channel unset?
    pub fn is_empty(&self) -> bool {
        self.fog.is_none()
            && self.speed.is_none()
            && self.altitude.is_none()
            && self.shake.is_none()
            && self.bank.is_none()
            && self.rain.is_none()
    }
}
