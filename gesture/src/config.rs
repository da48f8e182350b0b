//! Configuration of a button's debounce behavior.

use core::cmp::max;

use crate::window::MAX_WINDOW;

/// Consecutive-sample counts deciding when a level change is real.
///
/// All counts are in detection ticks. With a 20 ms polling interval the
/// defaults accept a press after one sample, treat presses of 100 ms and
/// more as long, and fire a hold every 60 ms while the button stays down.
///
/// The counts are captured when a button is built and cannot change
/// afterwards; the sample window is sized from them once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Thresholds {
    /// Consecutive active samples accepting a press.
    pub press: usize,
    /// Consecutive inactive samples accepting a release.
    pub release: usize,
    /// Length of one hold cycle while the button stays down.
    pub hold: usize,
    /// Active samples past which a press counts as long.
    pub long: usize,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            press: 1,
            release: 1,
            hold: 3,
            long: 5,
        }
    }
}

impl Thresholds {
    /// Samples the window must keep: the longest inspected run and the one
    /// sample before it, which the edge rules look at.
    #[must_use]
    pub fn window_len(&self) -> usize {
        max(self.press, max(self.hold, self.long)) + 1
    }

    /// # Errors
    ///
    /// Fails when any count is zero, when the window sized from the counts
    /// would not fit [`MAX_WINDOW`], or when the release run reaches past
    /// the part of the window the release rule can inspect.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.press == 0 || self.release == 0 || self.hold == 0 || self.long == 0 {
            return Err(ConfigError::ZeroCount);
        }
        if self.window_len() > MAX_WINDOW {
            return Err(ConfigError::WindowTooLong);
        }
        if self.release + 1 > self.window_len() {
            return Err(ConfigError::ReleaseTooLong);
        }
        Ok(())
    }
}

/// Rejected button configuration.
///
/// Raised when a button is built, never later. A configuration that passed
/// validation cannot corrupt classification at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Every count must be at least one tick.
    ZeroCount,
    /// The longest run does not fit the window capacity.
    WindowTooLong,
    /// The release run must fit before the newest sample, so it must not
    /// exceed any of the other counts.
    ReleaseTooLong,
}
