//! The slide-index state machine.
//!
//! `Carousel` owns the current position and the autoplay flag, nothing else:
//! no timer, no I/O. The controller task arms the actual timer from
//! [`Carousel::autoplay_active`] and publishes the [`Frame`] values this type
//! computes.

use std::time::Duration;

use crate::events::Frame;

/// Default delay between automatic advances.
pub const DEFAULT_AUTOPLAY_PERIOD: Duration = Duration::from_millis(3000);

#[derive(Debug)]
pub struct Carousel {
    current_index: usize,
    slide_count: usize,
    autoplay_active: bool,
    autoplay_period: Duration,
}

impl Carousel {
    /// Precondition: `slide_count >= 1`. The configuration layer rejects
    /// zero before construction; behavior with zero slides is undefined.
    pub fn new(slide_count: usize, autoplay_period: Duration) -> Self {
        debug_assert!(slide_count >= 1, "carousel needs at least one slide");
        Self {
            current_index: 0,
            slide_count,
            autoplay_active: false,
            autoplay_period,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn autoplay_active(&self) -> bool {
        self.autoplay_active
    }

    pub fn autoplay_period(&self) -> Duration {
        self.autoplay_period
    }

    /// Advance one slide, wrapping past the last back to the first.
    pub fn next(&mut self) {
        self.current_index = (self.current_index + 1) % self.slide_count;
    }

    /// Retreat one slide, wrapping past the first back to the last.
    /// Adding `slide_count` before the modulo keeps the result in range and
    /// avoids unsigned underflow at index zero.
    pub fn previous(&mut self) {
        self.current_index = (self.current_index + self.slide_count - 1) % self.slide_count;
    }

    /// Jump straight to `index`, without bounds checking or wraparound.
    ///
    /// An out-of-range index leaves the carousel out of invariant: the next
    /// frame translates the strip past its end and marks no indicator
    /// active. Callers own the `index < slide_count` contract.
    pub fn goto(&mut self, index: usize) {
        self.current_index = index;
    }

    pub fn start_autoplay(&mut self) {
        self.autoplay_active = true;
    }

    /// Idempotent; stopping an already-paused carousel is a no-op.
    pub fn stop_autoplay(&mut self) {
        self.autoplay_active = false;
    }

    pub fn toggle_autoplay(&mut self) {
        if self.autoplay_active {
            self.stop_autoplay();
        } else {
            self.start_autoplay();
        }
    }

    /// Presentation state for the current position: the strip translation
    /// and one active flag per indicator.
    pub fn frame(&self) -> Frame {
        Frame {
            translate_percent: -(self.current_index as f64) * 100.0,
            indicators: (0..self.slide_count)
                .map(|i| i == self.current_index)
                .collect(),
        }
    }
}
