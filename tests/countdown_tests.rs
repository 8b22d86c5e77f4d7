// Host-side tests for countdown arithmetic and the display lifecycle.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod countdown {
    include!("../src/core/countdown.rs");
}

use chrono::DateTime;
use constants::{COUNTDOWN_TARGET_MS, MS_PER_DAY};
use countdown::*;
use proptest::prelude::*;
use std::cell::Cell;
use std::rc::Rc;

#[derive(Clone, Default)]
struct ManualClock(Rc<Cell<i64>>);

impl ManualClock {
    fn at(ms: i64) -> Self {
        Self(Rc::new(Cell::new(ms)))
    }
    fn advance(&self, ms: i64) {
        self.0.set(self.0.get() + ms);
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> i64 {
        self.0.get()
    }
}

fn cd(days: u64, hours: u64, minutes: u64, seconds: u64) -> Countdown {
    Countdown {
        days,
        hours,
        minutes,
        seconds,
    }
}

#[test]
fn one_day_before_target() {
    let day_before = DateTime::parse_from_rfc3339("2025-12-31T00:00:00+08:00").unwrap();
    assert_eq!(
        Countdown::until(COUNTDOWN_TARGET_MS, day_before.timestamp_millis()),
        cd(1, 0, 0, 0)
    );
}

#[test]
fn at_and_after_target_is_zero() {
    assert_eq!(Countdown::until(COUNTDOWN_TARGET_MS, COUNTDOWN_TARGET_MS), Countdown::ZERO);
    assert_eq!(
        Countdown::until(COUNTDOWN_TARGET_MS, COUNTDOWN_TARGET_MS + 5_000),
        Countdown::ZERO
    );
    assert!(Countdown::until(0, i64::MAX).is_zero());
    assert!(Countdown::until(i64::MIN, i64::MAX).is_zero());
}

#[test]
fn decomposes_into_units() {
    assert_eq!(Countdown::from_millis(90_061_000), cd(1, 1, 1, 1));
    assert_eq!(Countdown::from_millis(MS_PER_DAY - 1), cd(0, 23, 59, 59));
    assert_eq!(Countdown::from_millis(400 * MS_PER_DAY), cd(400, 0, 0, 0));
}

#[test]
fn units_truncate_rather_than_round() {
    assert_eq!(Countdown::from_millis(999), Countdown::ZERO);
    assert_eq!(Countdown::from_millis(1_999), cd(0, 0, 0, 1));
    assert_eq!(Countdown::from_millis(59_999), cd(0, 0, 0, 59));
}

proptest! {
    #[test]
    fn fields_stay_in_range_and_recompose(ms in 1i64..2_000_000_000_000) {
        let c = Countdown::from_millis(ms);
        prop_assert!(c.hours < 24);
        prop_assert!(c.minutes < 60);
        prop_assert!(c.seconds < 60);
        let whole = ((c.days * 24 + c.hours) * 60 + c.minutes) * 60 + c.seconds;
        prop_assert_eq!(whole, ms as u64 / 1_000);
    }
}

#[test]
fn fields_are_labelled_in_display_order() {
    let labels: Vec<&str> = cd(4, 3, 2, 1).fields().iter().map(|(l, _)| *l).collect();
    assert_eq!(labels, ["Days", "Hours", "Minutes", "Seconds"]);
    let values: Vec<u64> = cd(4, 3, 2, 1).fields().iter().map(|(_, v)| *v).collect();
    assert_eq!(values, [4, 3, 2, 1]);
}

#[test]
fn pad2_zero_pads_to_two_digits() {
    assert_eq!(pad2(3), "03");
    assert_eq!(pad2(0), "00");
    assert_eq!(pad2(59), "59");
    assert_eq!(pad2(123), "123");
}

#[test]
fn activate_computes_immediately() {
    let clock = ManualClock::at(COUNTDOWN_TARGET_MS - 90_061_000);
    let mut display = CountdownDisplay::new(COUNTDOWN_TARGET_MS, clock);
    assert!(!display.is_active());
    assert_eq!(display.activate(), cd(1, 1, 1, 1));
    assert!(display.is_active());
    assert_eq!(display.current(), cd(1, 1, 1, 1));
}

#[test]
fn tick_follows_the_clock() {
    let clock = ManualClock::at(COUNTDOWN_TARGET_MS - 61_000);
    let mut display = CountdownDisplay::new(COUNTDOWN_TARGET_MS, clock.clone());
    display.activate();
    clock.advance(1_000);
    assert_eq!(display.tick(), Some(cd(0, 0, 1, 0)));
    clock.advance(60_000);
    assert_eq!(display.tick(), Some(Countdown::ZERO));
    clock.advance(5_000);
    assert_eq!(display.tick(), Some(Countdown::ZERO));
}

#[test]
fn deactivated_display_ignores_further_ticks() {
    let clock = ManualClock::at(COUNTDOWN_TARGET_MS - 10_000);
    let mut display = CountdownDisplay::new(COUNTDOWN_TARGET_MS, clock.clone());
    let before = display.activate();
    display.deactivate();
    clock.advance(3_000);
    assert_eq!(display.tick(), None);
    assert_eq!(display.current(), before);
    assert_eq!(before, cd(0, 0, 0, 10));
}

#[test]
fn shared_clock_through_rc() {
    let clock = Rc::new(ManualClock::at(COUNTDOWN_TARGET_MS - MS_PER_DAY));
    let mut display = CountdownDisplay::new(COUNTDOWN_TARGET_MS, clock.clone());
    assert_eq!(display.activate(), cd(1, 0, 0, 0));
    clock.advance(MS_PER_DAY);
    assert_eq!(display.tick(), Some(Countdown::ZERO));
    assert_eq!(display.target_ms(), COUNTDOWN_TARGET_MS);
}
