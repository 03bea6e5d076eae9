//! Animated counters
//!
//! Drives [`Tween`]s on animation frames and writes the formatted value into
//! an element's text. One live tween per element id; a newer one replaces
//! an older one.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use site_core::animation::{CounterFormat, Tween, TweenSlot};
use site_core::clock::Clock;
use site_core::errors::SiteResult;
use web_sys::Element;

use crate::timers::{self, PerformanceClock};

#[derive(Default)]
pub struct CounterAnimator {
    clock: PerformanceClock,
    slots: RefCell<HashMap<String, TweenSlot>>,
}

impl CounterAnimator {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Tween `element`'s text from `from` to `to` over `duration_ms`.
    pub fn animate(
        self: &Rc<Self>,
        key: &str,
        element: Element,
        from: f64,
        to: f64,
        duration_ms: u32,
        format: CounterFormat,
    ) -> SiteResult<()> {
        let generation = self
            .slots
            .borrow_mut()
            .entry(key.to_string())
            .or_default()
            .begin();
        let tween = Tween::new(from, to, f64::from(duration_ms), self.clock.now_ms());

        let animator = Rc::clone(self);
        let key = key.to_string();
        timers::run_frames(move || {
            if !animator.is_current(&key, generation) {
                return false;
            }
            let frame = tween.sample(animator.clock.now_ms());
            element.set_text_content(Some(&format.format(frame.value)));
            !frame.finished
        })
    }

    fn is_current(&self, key: &str, generation: u64) -> bool {
        self.slots
            .borrow()
            .get(key)
            .map(|slot| slot.is_current(generation))
            .unwrap_or(false)
    }
}
