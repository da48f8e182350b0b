//! Helpers shared by the scenario tests.

use std::cell::Cell;

use tapline_gesture::Detector;

/// Per-gesture hit counters the scenario tests assert on.
///
/// The cells are bumped from gesture hooks, which only hold a shared
/// borrow of the counters.
#[derive(Debug, Default)]
pub struct Counters {
    pub press: Cell<u32>,
    pub release: Cell<u32>,
    pub short: Cell<u32>,
    pub long: Cell<u32>,
    pub hold: Cell<u32>,
}

impl Counters {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bump(cell: &Cell<u32>) {
        cell.set(cell.get() + 1);
    }
}

/// Run the given number of detection passes back to back.
pub fn ticks<const N: usize>(detector: &mut Detector<'_, N>, n: usize) {
    for _ in 0..n {
        detector.detect_once();
    }
}
