//! Sample history of a single button.

use core::fmt;

/// The most samples a window can keep.
///
/// Enough for runs of up to 31 consecutive ticks, which at common polling
/// intervals covers presses of several seconds.
pub const MAX_WINDOW: usize = 32;

/// Ring of recent boolean pin levels, newest at the tail.
///
/// The length is fixed at construction and must cover the longest run the
/// classification rules inspect, plus the one sample before it. Samples
/// start out inactive, as a released button would read.
pub struct Window {
    samples: [bool; MAX_WINDOW],
    len: usize,
    pointer: usize,
}

impl fmt::Debug for Window {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "Window(len: {}, pointer: {})", self.len, self.pointer)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Window {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "Window(len: {}, pointer: {})", self.len, self.pointer);
    }
}

impl Window {
    /// # Panics
    ///
    /// Panics when the requested length is zero or exceeds [`MAX_WINDOW`].
    #[must_use]
    pub fn new(len: usize) -> Self {
        assert!(0 < len && len <= MAX_WINDOW);
        Self {
            samples: [false; MAX_WINDOW],
            len,
            pointer: 0,
        }
    }

    /// Overwrite the oldest sample with the given level.
    pub fn push(&mut self, level: bool) {
        self.samples[self.pointer] = level;
        self.pointer = (self.pointer + 1) % self.len;
    }

    /// Level sampled `age` ticks ago, 0 being the newest sample.
    #[must_use]
    pub fn peek(&self, age: usize) -> bool {
        debug_assert!(age < self.len);
        let index = (self.pointer + self.len - 1 - age) % self.len;
        self.samples[index]
    }

    /// Check that the `n` samples ending `skip` ticks before the newest
    /// all sit at the given level.
    ///
    /// A run reaching past the window reports a mismatch.
    #[must_use]
    pub fn run_matches(&self, skip: usize, n: usize, level: bool) -> bool {
        if self.len < skip + n {
            return false;
        }
        (skip..skip + n).all(|age| self.peek(age) == level)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
