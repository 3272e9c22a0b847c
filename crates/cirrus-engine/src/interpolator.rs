//! Interpolation engine - per-tick smoothing of the live vector
//!
//! Every channel chases its target with single-pole exponential smoothing:
//! `live += (target - live) * rate`, one evaluation per animation frame.
//! Rates are fixed per channel, not derived from wall time - the loop is
//! assumed to tick at a steady frame cadence.

use cirrus_core::{TargetVector, VibeVector};
use rand::Rng;

/// Rain target above which lightning may strike
pub const STORM_RAIN_THRESHOLD: f32 = 0.8;

/// Per-tick lightning probability during a storm
pub const LIGHTNING_ODDS: f32 = 0.02;

/// Flash intensity when lightning strikes
pub const LIGHTNING_FLASH: f32 = 255.0;

/// Linear flash decay per tick
pub const LIGHTNING_DECAY: f32 = 20.0;

/// Per-channel smoothing rates
///
/// Altitude is deliberately an order of magnitude slower than the rest:
/// a climb or descent must read as a multi-second maneuver, not a snap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothingRates {
    pub fog: f32,
    pub speed: f32,
    pub altitude: f32,
    pub shake: f32,
    pub rain: f32,
    pub bank: f32,
}

impl Default for SmoothingRates {
    fn default() -> Self {
        SmoothingRates {
            fog: 0.05,
            speed: 0.02,
            altitude: 0.005,
            shake: 0.1,
            rain: 0.05,
            bank: 0.05,
        }
    }
}

/// Advances the live vector one tick toward its target
#[derive(Debug, Clone, Default)]
pub struct Interpolator {
    rates: SmoothingRates,
}

impl Interpolator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rates(rates: SmoothingRates) -> Self {
        Interpolator { rates }
    }

    /// One animation tick: smooth every channel, decay the flash, and roll
    /// for lightning while the target says storm
    pub fn advance<R: Rng>(&self, vibe: &mut VibeVector, target: &TargetVector, rng: &mut R) {
        vibe.fog = lerp_toward(vibe.fog, target.fog, self.rates.fog);
        vibe.speed = lerp_toward(vibe.speed, target.speed, self.rates.speed);
        vibe.altitude = lerp_toward(vibe.altitude, target.altitude, self.rates.altitude);
        vibe.shake = lerp_toward(vibe.shake, target.shake, self.rates.shake);
        vibe.rain = lerp_toward(vibe.rain, target.rain, self.rates.rain);
        vibe.bank = lerp_toward(vibe.bank, target.bank, self.rates.bank);

        if vibe.light > 0.0 {
            vibe.light = (vibe.light - LIGHTNING_DECAY).max(0.0);
        }

        // Poisson-ish cadence: an independent roll per tick, storms only
        if target.rain > STORM_RAIN_THRESHOLD && rng.gen::<f32>() < LIGHTNING_ODDS {
            vibe.light = LIGHTNING_FLASH;
        }
    }

    pub fn rates(&self) -> &SmoothingRates {
        &self.rates
    }
}

#[inline]
fn lerp_toward(live: f32, target: f32, rate: f32) -> f32 {
    live + (target - live) * rate
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn storm_free_target() -> TargetVector {
        TargetVector {
            fog: 1.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_single_tick_fog_step() {
        let interp = Interpolator::new();
        let mut rng = StdRng::seed_from_u64(1);
        let mut vibe = VibeVector::zero();

        interp.advance(&mut vibe, &storm_free_target(), &mut rng);

        assert!((vibe.fog - 0.05).abs() < 1e-6);
    }

    #[test]
    fn test_fog_converges_without_overshoot() {
        let interp = Interpolator::new();
        let mut rng = StdRng::seed_from_u64(1);
        let mut vibe = VibeVector::zero();
        let target = storm_free_target();

        for _ in 0..2000 {
            interp.advance(&mut vibe, &target, &mut rng);
            assert!(vibe.fog <= 1.0, "fog overshot: {}", vibe.fog);
        }

        assert!((vibe.fog - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_altitude_is_much_slower_than_fog() {
        let interp = Interpolator::new();
        let mut rng = StdRng::seed_from_u64(1);
        let mut vibe = VibeVector::zero();
        let target = TargetVector {
            fog: 1.0,
            altitude: 1.0,
            ..Default::default()
        };

        for _ in 0..100 {
            interp.advance(&mut vibe, &target, &mut rng);
        }

        // Equal start/target deltas: altitude must lag fog by at least 4x
        // remaining-distance (ordering property, not exact equality).
        let fog_remaining = 1.0 - vibe.fog;
        let altitude_remaining = 1.0 - vibe.altitude;
        assert!(altitude_remaining > fog_remaining * 4.0);
        assert!(vibe.altitude < vibe.fog);
    }

    #[test]
    fn test_no_lightning_below_storm_threshold() {
        let interp = Interpolator::new();
        let mut rng = StdRng::seed_from_u64(7);
        let mut vibe = VibeVector::zero();
        let target = TargetVector {
            rain: 0.8, // at the threshold, not above it
            ..Default::default()
        };

        for _ in 0..10_000 {
            interp.advance(&mut vibe, &target, &mut rng);
            assert_eq!(vibe.light, 0.0);
        }
    }

    #[test]
    fn test_lightning_frequency_during_storm() {
        let interp = Interpolator::new();
        let mut rng = StdRng::seed_from_u64(42);
        let mut vibe = VibeVector::zero();
        let target = TargetVector {
            rain: 1.0,
            ..Default::default()
        };

        let mut strikes = 0u32;
        let ticks = 50_000;
        for _ in 0..ticks {
            let before = vibe.light;
            interp.advance(&mut vibe, &target, &mut rng);
            if vibe.light == LIGHTNING_FLASH && before < LIGHTNING_FLASH {
                strikes += 1;
            }
        }

        // Expected odds 0.02/tick; accept a generous statistical band
        let observed = strikes as f32 / ticks as f32;
        assert!(
            (0.01..0.03).contains(&observed),
            "observed strike rate {observed}"
        );
    }

    #[test]
    fn test_flash_decays_linearly_to_zero() {
        let interp = Interpolator::new();
        let mut rng = StdRng::seed_from_u64(1);
        let mut vibe = VibeVector {
            light: LIGHTNING_FLASH,
            ..VibeVector::zero()
        };
        let target = TargetVector::default(); // no storm, no retrigger

        interp.advance(&mut vibe, &target, &mut rng);
        assert!((vibe.light - (LIGHTNING_FLASH - LIGHTNING_DECAY)).abs() < 1e-6);

        for _ in 0..20 {
            interp.advance(&mut vibe, &target, &mut rng);
        }
        assert_eq!(vibe.light, 0.0);
    }
}
