use std::cell::Cell;
use std::sync::atomic::{AtomicBool, Ordering};

use tapline_gesture::{from_fn, Button, Detector, Thresholds};
use tapline_sim::runner;
use tapline_sim::testlib::Counters;

#[test]
fn run_keeps_detecting_until_the_stop_flag_is_raised() {
    let stop = AtomicBool::new(false);
    let samples = Cell::new(0);
    let mut source = from_fn(|| {
        Counters::bump(&samples);
        if samples.get() >= 10 {
            stop.store(true, Ordering::Relaxed);
        }
        false
    });
    let button = Button::new(&mut source, Thresholds::default()).unwrap();
    let mut detector: Detector<1> = Detector::new(0);
    detector.add(button).unwrap();

    runner::run(&mut detector, &stop);
    assert_eq!(samples.get(), 10);
}

#[test]
fn run_returns_without_a_pass_when_already_stopped() {
    let stop = AtomicBool::new(true);
    let samples = Cell::new(0);
    let mut source = from_fn(|| {
        Counters::bump(&samples);
        false
    });
    let button = Button::new(&mut source, Thresholds::default()).unwrap();
    let mut detector: Detector<1> = Detector::new(0);
    detector.add(button).unwrap();

    runner::run(&mut detector, &stop);
    assert_eq!(samples.get(), 0);
}
