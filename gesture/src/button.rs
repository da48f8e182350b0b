//! Per-button state and handler registration.

use core::fmt;

use crate::callback::{Callbacks, Hook};
use crate::config::{ConfigError, Thresholds};
use crate::source::InputSource;
use crate::window::Window;

/// State of one physical button between detection passes.
///
/// The button does not poll itself. Register it in a
/// [`Detector`](crate::detector::Detector) and let the driver loop tick
/// the detector at its interval. The level source stays owned by the
/// caller; the button only borrows it for its lifetime.
pub struct Button<'a> {
    pub(crate) source: &'a mut dyn InputSource,
    pub(crate) thresholds: Thresholds,
    pub(crate) window: Window,
    pub(crate) hold_rearm: usize,
    pub(crate) callbacks: Callbacks<'a>,
}

impl fmt::Debug for Button<'_> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(
            fmt,
            "Button(thresholds: {:?}, hold_rearm: {})",
            self.thresholds, self.hold_rearm,
        )
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Button<'_> {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "Button(thresholds: {}, hold_rearm: {})",
            self.thresholds,
            self.hold_rearm,
        );
    }
}

impl<'a> Button<'a> {
    /// Build a button over the given level source.
    ///
    /// The window is sized to the thresholds once and the thresholds stay
    /// fixed afterwards, so the sizing invariant cannot break later.
    ///
    /// # Errors
    ///
    /// Fails when the thresholds do not pass [`Thresholds::validate`].
    pub fn new(
        source: &'a mut dyn InputSource,
        thresholds: Thresholds,
    ) -> Result<Self, ConfigError> {
        thresholds.validate()?;
        Ok(Self {
            source,
            thresholds,
            window: Window::new(thresholds.window_len()),
            hold_rearm: 0,
            callbacks: Callbacks::default(),
        })
    }

    /// Fired once when the press run is first satisfied.
    pub fn on_press(&mut self, hook: Hook<'a>) {
        self.callbacks.press.set(hook);
    }

    /// Fired on every release, after the short or long handler.
    pub fn on_release(&mut self, hook: Hook<'a>) {
        self.callbacks.release.set(hook);
    }

    /// Fired on release of a press shorter than the long run.
    pub fn on_short(&mut self, hook: Hook<'a>) {
        self.callbacks.short.set(hook);
    }

    /// Fired on release of a press lasting at least the long run.
    pub fn on_long(&mut self, hook: Hook<'a>) {
        self.callbacks.long.set(hook);
    }

    /// Fired every hold cycle while the button stays down.
    pub fn on_hold(&mut self, hook: Hook<'a>) {
        self.callbacks.hold.set(hook);
    }

    #[must_use]
    pub fn thresholds(&self) -> Thresholds {
        self.thresholds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;
    use crate::source::from_fn;

    #[test]
    fn when_built_the_window_is_sized_to_the_thresholds() {
        let mut source = from_fn(|| false);
        let button = Button::new(&mut source, Thresholds::default()).unwrap();
        assert_eq!(button.window.len(), 6);
    }

    #[test]
    fn when_thresholds_are_invalid_construction_fails() {
        let mut source = from_fn(|| false);
        let thresholds = Thresholds {
            press: 0,
            ..Thresholds::default()
        };
        let result = Button::new(&mut source, thresholds);
        assert_eq!(result.err(), Some(ConfigError::ZeroCount));
    }

    #[test]
    fn when_handlers_are_registered_their_slots_are_set() {
        let mut source = from_fn(|| false);
        let mut on_press = || ();
        let mut on_hold = || ();
        let mut button = Button::new(&mut source, Thresholds::default()).unwrap();
        assert!(!button.callbacks.press.is_set());
        button.on_press(&mut on_press);
        button.on_hold(&mut on_hold);
        assert!(button.callbacks.press.is_set());
        assert!(button.callbacks.hold.is_set());
        assert!(!button.callbacks.release.is_set());
    }
}
