use crate::constants::{ids, COUNTDOWN_PERIOD_MS};
use crate::core::{pad2, Clock, Countdown, CountdownDisplay};
use crate::dom;
use gloo_timers::callback::Interval;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub struct BrowserClock;

impl Clock for BrowserClock {
    fn now_millis(&self) -> i64 {
        js_sys::Date::now() as i64
    }
}

const FIELD_IDS: [&str; 4] = [
    ids::COUNTDOWN_DAYS,
    ids::COUNTDOWN_HOURS,
    ids::COUNTDOWN_MINUTES,
    ids::COUNTDOWN_SECONDS,
];

fn render(document: &web::Document, countdown: &Countdown) {
    for (id, (_, value)) in FIELD_IDS.iter().zip(countdown.fields()) {
        dom::set_text(document, id, &pad2(value));
    }
}

/// Live countdown section. Owns its one-second interval; dropping the timer
/// clears the interval and freezes the display.
pub struct CountdownTimer {
    display: Rc<RefCell<CountdownDisplay<BrowserClock>>>,
    interval: Option<Interval>,
}

impl CountdownTimer {
    pub fn start(document: &web::Document, target_ms: i64) -> Self {
        let display = Rc::new(RefCell::new(CountdownDisplay::new(target_ms, BrowserClock)));
        let first = display.borrow_mut().activate();
        render(document, &first);
        log::info!(
            "[countdown] target={} remaining={}d {}h {}m {}s",
            target_ms,
            first.days,
            first.hours,
            first.minutes,
            first.seconds
        );

        let tick_display = display.clone();
        let tick_document = document.clone();
        let interval = Interval::new(COUNTDOWN_PERIOD_MS, move || {
            let next = tick_display.borrow_mut().tick();
            if let Some(countdown) = next {
                render(&tick_document, &countdown);
            }
        });

        Self {
            display,
            interval: Some(interval),
        }
    }

    pub fn stop(&mut self) {
        if let Some(interval) = self.interval.take() {
            interval.cancel();
            self.display.borrow_mut().deactivate();
            log::debug!("[countdown] stopped");
        }
    }
}

impl Drop for CountdownTimer {
    fn drop(&mut self) {
        self.stop();
    }
}
