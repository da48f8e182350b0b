use tapline_gesture::{Button, Detector, Thresholds};
use tapline_sim::replay::Replay;
use tapline_sim::testlib::{ticks, Counters};

#[test]
fn press_fires_once_per_physical_press() {
    let counters = Counters::new();
    let mut source = Replay::from_script("0 111 0 111");
    let mut on_press = || Counters::bump(&counters.press);
    let mut button = Button::new(&mut source, Thresholds::default()).unwrap();
    button.on_press(&mut on_press);
    let mut detector: Detector<1> = Detector::new(20);
    detector.add(button).unwrap();

    ticks(&mut detector, 9);
    assert_eq!(counters.press.get(), 2);
}

#[test]
fn press_waits_for_the_full_debounce_run() {
    let counters = Counters::new();
    let mut source = Replay::from_script("0 10 110 111");
    let mut on_press = || Counters::bump(&counters.press);
    let thresholds = Thresholds {
        press: 3,
        ..Thresholds::default()
    };
    let mut button = Button::new(&mut source, thresholds).unwrap();
    button.on_press(&mut on_press);
    let mut detector: Detector<1> = Detector::new(20);
    detector.add(button).unwrap();

    ticks(&mut detector, 8);
    assert_eq!(counters.press.get(), 0);
    ticks(&mut detector, 1);
    assert_eq!(counters.press.get(), 1);
}
