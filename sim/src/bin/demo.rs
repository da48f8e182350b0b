//! Scripted walk through every gesture the detector classifies.
//!
//! The level script plays one short tap, then one press held long enough
//! to fire a hold cycle and classify as long on release. Handlers print
//! what fired, one line per gesture.

use std::sync::atomic::{AtomicBool, Ordering};

use tapline_gesture::{from_fn, Button, Detector, InputSource, Thresholds};
use tapline_sim::replay::Replay;
use tapline_sim::runner;

fn main() {
    let stop = AtomicBool::new(false);
    let mut replay = Replay::from_script("0 111 0000 11111111 000");
    let mut source = from_fn(|| {
        if replay.is_exhausted() {
            stop.store(true, Ordering::Relaxed);
        }
        replay.is_active()
    });

    let mut on_press = || println!("down");
    let mut on_release = || println!("up");
    let mut on_long = || println!("long press");
    let mut on_hold = || println!("still held");
    // Handlers take no arguments; anything they need is captured at the
    // registration site.
    let short_label = "short tap";
    let mut on_short = move || println!("{short_label}");

    let mut button = Button::new(&mut source, Thresholds::default()).expect("thresholds are valid");
    button.on_press(&mut on_press);
    button.on_release(&mut on_release);
    button.on_long(&mut on_long);
    button.on_hold(&mut on_hold);
    button.on_short(&mut on_short);

    let mut detector: Detector<1> = Detector::new(100);
    detector.add(button).expect("detector has a free slot");
    runner::run(&mut detector, &stop);
}
