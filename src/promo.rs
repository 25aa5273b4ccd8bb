//! Promo
//!
//! Decorative home-screen state: the hero banner carousel and the daily
//! deal countdown. Both are plain counters advanced by the caller; the
//! library schedules nothing, so a headless build can ignore them
//! entirely.

/// Rotating hero banner position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroCarousel {
    index: usize,
    len: usize,
}

impl HeroCarousel {
    /// A carousel over `len` slides, starting on the first.
    #[must_use]
    pub fn new(len: usize) -> Self {
        HeroCarousel { index: 0, len }
    }

    /// Index of the slide currently shown.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of slides.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the deck has no slides.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Advance to the next slide, wrapping to the first after the last.
    pub fn advance(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }
}

/// Daily deal countdown, in whole seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DealCountdown {
    remaining: u64,
}

impl DealCountdown {
    /// A countdown with `seconds` remaining.
    #[must_use]
    pub fn new(seconds: u64) -> Self {
        DealCountdown { remaining: seconds }
    }

    /// Seconds remaining.
    #[must_use]
    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    /// Whether the deal has expired.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.remaining == 0
    }

    /// Remaining time as (hours, minutes, seconds) for display.
    #[must_use]
    pub fn hms(&self) -> (u64, u64, u64) {
        (
            self.remaining / 3600,
            (self.remaining % 3600) / 60,
            self.remaining % 60,
        )
    }

    /// Tick one second off the clock, stopping at zero.
    pub fn tick(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }
}
