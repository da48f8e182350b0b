//! One classification pass over all registered buttons.

use heapless::Vec;

use crate::button::Button;
use crate::config::Thresholds;
use crate::log;
use crate::source::InputSource;

/// Classified outcome of one detection pass over one button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Gesture {
    /// The press run was just satisfied.
    Press,
    /// The button just went inactive.
    Release(PressKind),
    /// One hold cycle elapsed with the button still down.
    Hold,
}

/// How long the button was down when it was released.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PressKind {
    Short,
    Long,
}

/// Polls registered buttons and fires their handlers.
///
/// Buttons are detected in the order they were added; nothing ever
/// reorders or removes them, so replays of the same level sequences are
/// deterministic. `N` caps how many buttons fit.
///
/// The detector is interval-agnostic: one call classifies one tick. It is
/// up to the driver loop to keep the cadence, sleeping `interval_ms`
/// between calls.
pub struct Detector<'a, const N: usize> {
    buttons: Vec<Button<'a>, N>,
    /// Tick spacing the driver loop should keep, in milliseconds.
    pub interval_ms: u32,
}

impl<'a, const N: usize> Detector<'a, N> {
    #[must_use]
    pub fn new(interval_ms: u32) -> Self {
        Self {
            buttons: Vec::new(),
            interval_ms,
        }
    }

    /// Register another button.
    ///
    /// # Errors
    ///
    /// Returns the button back when all `N` slots are taken.
    pub fn add(&mut self, button: Button<'a>) -> Result<(), Button<'a>> {
        self.buttons.push(button)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }

    /// Run exactly one classification pass over all buttons.
    ///
    /// Each button samples its source once, shifts the sample into its
    /// window, and fires at most one gesture. Handler panics are not
    /// caught; they propagate to the caller.
    pub fn detect_once(&mut self) {
        for button in self.buttons.iter_mut() {
            let level = button.source.is_active();
            if let Some(gesture) = classify(button, level) {
                dispatch(button, gesture);
            }
        }
    }
}

/// Apply the rule ladder on a button that just sampled `level`.
///
/// At most one branch applies per tick. Press wins over release and
/// release over hold, so a press with an immediate release can never be
/// read as a hold cycle on the same tick.
fn classify(button: &mut Button, level: bool) -> Option<Gesture> {
    button.window.push(level);

    let Thresholds {
        press,
        release,
        hold,
        long,
    } = button.thresholds;
    let window = &button.window;

    // The press run is complete and the sample right before it was still
    // inactive, so the run completed on this very tick.
    if window.run_matches(0, press, true) && !window.peek(press) {
        return Some(Gesture::Press);
    }

    // The newest sample is inactive but the window before it was not yet
    // released for a full release run: the button just came up.
    if !window.run_matches(1, release, false) && !window.peek(0) {
        let kind = if window.run_matches(1, long, true) {
            PressKind::Long
        } else {
            PressKind::Short
        };
        return Some(Gesture::Release(kind));
    }

    // Continuously held. The first complete run only arms the cycle
    // counter; every time it counts down to one, a hold fires and the
    // counter re-arms.
    if window.run_matches(0, hold, true) {
        if button.hold_rearm == 0 {
            log::debug!("Hold cycle armed");
            button.hold_rearm = hold;
        } else if button.hold_rearm <= 1 {
            button.hold_rearm = hold;
            return Some(Gesture::Hold);
        } else {
            button.hold_rearm -= 1;
        }
        return None;
    }

    // Mid-debounce or bouncing input. Disarm the hold cycle.
    button.hold_rearm = 0;
    None
}

fn dispatch(button: &mut Button, gesture: Gesture) {
    log::info!("Classified gesture={:?}", gesture);
    match gesture {
        Gesture::Press => button.callbacks.press.call(),
        Gesture::Release(PressKind::Short) => {
            button.callbacks.short.call();
            button.callbacks.release.call();
        }
        Gesture::Release(PressKind::Long) => {
            button.callbacks.long.call();
            button.callbacks.release.call();
        }
        Gesture::Hold => button.callbacks.hold.call(),
    }
}
