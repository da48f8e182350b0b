//! Fixed-cadence polling loop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use tapline_gesture::Detector;

/// Keep detecting until the stop flag is raised.
///
/// One detection pass runs per interval, with the sleep after the pass,
/// so the first pass happens immediately. The flag is checked between
/// passes only; a pass in flight always completes.
pub fn run<const N: usize>(detector: &mut Detector<'_, N>, stop: &AtomicBool) {
    while !stop.load(Ordering::Relaxed) {
        detector.detect_once();
        thread::sleep(Duration::from_millis(u64::from(detector.interval_ms)));
    }
}

/// Keep detecting forever at the detector's interval.
pub fn run_forever<const N: usize>(detector: &mut Detector<'_, N>) -> ! {
    loop {
        detector.detect_once();
        thread::sleep(Duration::from_millis(u64::from(detector.interval_ms)));
    }
}
