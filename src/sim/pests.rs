//! Rats show up once the pantry gets large and nibble at the stockpile.
//! Cats bought in the prestige shop eat some of them first.
//!
//! Everything here is recomputed from the current run every tick; the
//! constants are balance values and are kept as-is.

use super::accumulator::FractionalAccumulator;
use std::time::Duration;

pub const PEST_THRESHOLD: u64 = 50_000;
pub const RAT_MAX: u64 = 999_999;
pub const BASE_EAT_RATE: f64 = 0.1;
const PROGRESS_SCALE: f64 = 1_000_000.0;
const RATS_PER_CAT: u64 = 5;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PestReport {
    /// Rats left after the cats have eaten.
    pub rats: u64,
    pub rats_eaten: u64,
    pub cats: u32,
    pub progress: f64,
    pub drain_per_second: u64,
}

impl PestReport {
    pub fn is_active(&self) -> bool {
        self.rats > 0 || self.rats_eaten > 0
    }
}

pub fn rats_eaten_per_cat(suppression_level: u32) -> u64 {
    RATS_PER_CAT.saturating_add(RATS_PER_CAT.saturating_mul(u64::from(suppression_level)))
}

pub fn assess(pies: u64, production_rate: u64, cats: u32, suppression_level: u32) -> PestReport {
    if pies < PEST_THRESHOLD {
        return PestReport {
            cats,
            ..PestReport::default()
        };
    }

    let progress = (pies as f64 / PROGRESS_SCALE).min(1.0);
    let exponent = 1.01 + 0.7 * progress * progress;
    let pressure = 3.0 * (pies as f64 / PEST_THRESHOLD as f64).powf(exponent);
    let spawned = (pressure.floor() as u64).min(RAT_MAX);

    let capacity = u64::from(cats).saturating_mul(rats_eaten_per_cat(suppression_level));
    let rats_eaten = spawned.min(capacity);
    let rats = spawned - rats_eaten;

    let per_rat = BASE_EAT_RATE + (0.005 + 0.025 * progress.powi(3)) * production_rate as f64;
    let drain_per_second = (rats as f64 * per_rat).floor() as u64;

    PestReport {
        rats,
        rats_eaten,
        cats,
        progress,
        drain_per_second,
    }
}

/// Pies the rats take this tick, never more than the pantry holds.
pub fn drain_tick(
    accumulator: &mut FractionalAccumulator,
    report: &PestReport,
    elapsed: Duration,
    pies: u64,
) -> u64 {
    if report.drain_per_second == 0 {
        accumulator.reset();
        return 0;
    }
    accumulator
        .advance(report.drain_per_second as f64, elapsed)
        .min(pies)
}
