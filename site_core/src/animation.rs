//! # Value Animator
//!
//! Numeric tweens for the animated counters in the pricing results.
//!
//! A [`Tween`] is sampled with the current time and returns the value to
//! display; it does not schedule anything itself. The browser layer calls
//! [`Tween::sample`] once per animation frame until it reports finished.
//!
//! ## Example
//!
//! ```rust
//! use site_core::animation::Tween;
//!
//! let tween = Tween::new(0.0, 100.0, 800.0, 1_000.0);
//! assert_eq!(tween.value_at(1_000.0), 0.0);
//! assert_eq!(tween.value_at(1_800.0), 100.0);
//! assert!(tween.value_at(1_400.0) > 50.0); // ease-out runs ahead of linear
//! ```

use serde::{Deserialize, Serialize};

/// Ease-out quartic, `1 - (1 - t)^4`, with `t` clamped to [0, 1]
pub fn ease_out_quart(t: f64) -> f64 {
    1.0 - (1.0 - t.clamp(0.0, 1.0)).powi(4)
}

/// One start → end transition over a fixed duration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub from: f64,
    pub to: f64,
    pub duration_ms: f64,
    pub started_at_ms: f64,
}

/// A single sampled frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub value: f64,
    pub finished: bool,
}

impl Tween {
    pub fn new(from: f64, to: f64, duration_ms: f64, started_at_ms: f64) -> Self {
        Tween {
            from,
            to,
            duration_ms,
            started_at_ms,
        }
    }

    /// Linear progress in [0, 1]. A non-positive duration is already done.
    pub fn progress(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.started_at_ms) / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn value_at(&self, now_ms: f64) -> f64 {
        let eased = ease_out_quart(self.progress(now_ms));
        self.from + (self.to - self.from) * eased
    }

    pub fn is_finished(&self, now_ms: f64) -> bool {
        self.progress(now_ms) >= 1.0
    }

    pub fn sample(&self, now_ms: f64) -> Frame {
        Frame {
            value: self.value_at(now_ms),
            finished: self.is_finished(now_ms),
        }
    }
}

/// How an animated counter renders its current value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CounterFormat {
    /// `"592 sq in"`
    SquareInches,
    /// `"$5.92"`
    Currency,
}

impl CounterFormat {
    pub fn format(&self, value: f64) -> String {
        match self {
            CounterFormat::SquareInches => format!("{} sq in", value.round()),
            CounterFormat::Currency => format!("${:.2}", value),
        }
    }
}

/// Replace policy for one animated element.
///
/// Starting a tween bumps the generation; frame loops holding an older
/// generation stop at their next frame instead of fighting the new one.
#[derive(Debug, Default, Clone)]
pub struct TweenSlot {
    generation: u64,
}

impl TweenSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the slot for a new tween and return its generation
    pub fn begin(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        let tween = Tween::new(0.0, 592.0, 800.0, 0.0);
        assert_eq!(tween.value_at(0.0), 0.0);
        assert_eq!(tween.value_at(800.0), 592.0);
        assert_eq!(tween.value_at(5_000.0), 592.0);
        assert!(tween.is_finished(800.0));
        assert!(!tween.is_finished(799.0));
    }

    #[test]
    fn test_before_start_clamps() {
        let tween = Tween::new(10.0, 20.0, 100.0, 500.0);
        assert_eq!(tween.value_at(0.0), 10.0);
    }

    #[test]
    fn test_ease_out_quart_midpoint() {
        // 1 - 0.5^4 = 0.9375
        let tween = Tween::new(0.0, 1.0, 1_000.0, 0.0);
        assert!((tween.value_at(500.0) - 0.9375).abs() < 1e-12);
    }

    #[test]
    fn test_monotone_increase() {
        let tween = Tween::new(0.0, 9.0, 1_000.0, 0.0);
        let mut last = f64::MIN;
        for step in 0..=100 {
            let value = tween.value_at(step as f64 * 10.0);
            assert!(value >= last);
            last = value;
        }
    }

    #[test]
    fn test_zero_duration_finishes_immediately() {
        let tween = Tween::new(0.0, 6.0, 0.0, 42.0);
        assert_eq!(tween.sample(42.0), Frame { value: 6.0, finished: true });
    }

    #[test]
    fn test_ease_out_quart_clamps() {
        assert_eq!(ease_out_quart(-1.0), 0.0);
        assert_eq!(ease_out_quart(2.0), 1.0);
    }

    #[test]
    fn test_counter_formats() {
        assert_eq!(CounterFormat::SquareInches.format(591.6), "592 sq in");
        assert_eq!(CounterFormat::Currency.format(5.916), "$5.92");
    }

    #[test]
    fn test_slot_replacement() {
        let mut slot = TweenSlot::new();
        let first = slot.begin();
        assert!(slot.is_current(first));
        let second = slot.begin();
        assert!(!slot.is_current(first));
        assert!(slot.is_current(second));
    }
}
