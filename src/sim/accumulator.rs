use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Turns a per-second rate into whole units, carrying the fractional
/// remainder into the next tick so nothing is lost to truncation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FractionalAccumulator {
    pending: f64,
}

impl FractionalAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self, rate_per_second: f64, elapsed: Duration) -> u64 {
        if rate_per_second.is_finite() && rate_per_second > 0.0 {
            self.pending += rate_per_second * elapsed.as_secs_f64();
        }
        if !self.pending.is_finite() || self.pending < 0.0 {
            self.pending = 0.0;
            return 0;
        }
        let whole = self.pending.floor();
        self.pending -= whole;
        whole as u64
    }

    #[cfg(test)]
    pub fn pending(&self) -> f64 {
        self.pending
    }

    pub fn reset(&mut self) {
        self.pending = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fractions_carry_between_ticks() {
        let mut acc = FractionalAccumulator::new();
        assert_eq!(acc.advance(1.0, Duration::from_millis(400)), 0);
        assert_eq!(acc.advance(1.0, Duration::from_millis(400)), 0);
        assert_eq!(acc.advance(1.0, Duration::from_millis(400)), 1);
        assert!((acc.pending() - 0.2).abs() < 1e-9);
    }

    #[test]
    fn zero_or_invalid_rate_adds_nothing() {
        let mut acc = FractionalAccumulator::new();
        assert_eq!(acc.advance(0.0, Duration::from_secs(10)), 0);
        assert_eq!(acc.advance(-5.0, Duration::from_secs(10)), 0);
        assert_eq!(acc.advance(f64::NAN, Duration::from_secs(10)), 0);
        assert_eq!(acc.pending(), 0.0);
    }

    #[test]
    fn reset_drops_the_remainder() {
        let mut acc = FractionalAccumulator::new();
        acc.advance(3.0, Duration::from_millis(500));
        acc.reset();
        assert_eq!(acc.pending(), 0.0);
    }
}
