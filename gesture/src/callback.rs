//! Gesture handlers registered on a button.

/// Handler invoked when its gesture fires.
///
/// The detector passes no arguments. Anything a handler needs is captured
/// by the closure at the registration site, so a "bound argument" is just
/// a captured variable.
pub type Hook<'a> = &'a mut dyn FnMut();

/// One optional handler slot.
///
/// An unset slot swallows its gesture.
#[derive(Default)]
pub struct Slot<'a>(Option<Hook<'a>>);

impl<'a> Slot<'a> {
    pub fn set(&mut self, hook: Hook<'a>) {
        self.0 = Some(hook);
    }

    #[must_use]
    pub fn is_set(&self) -> bool {
        self.0.is_some()
    }

    pub(crate) fn call(&mut self) {
        if let Some(hook) = self.0.as_mut() {
            hook();
        }
    }
}

/// The five per-button handler slots, each settable independently.
///
/// A handler panic is not caught here; it propagates to whoever drives
/// the detection pass.
#[derive(Default)]
pub struct Callbacks<'a> {
    pub press: Slot<'a>,
    pub release: Slot<'a>,
    pub short: Slot<'a>,
    pub long: Slot<'a>,
    pub hold: Slot<'a>,
}
