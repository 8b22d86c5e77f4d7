use crate::constants::{MS_PER_DAY, MS_PER_HOUR, MS_PER_MINUTE, MS_PER_SECOND};

/// Read-only wall clock, in Unix epoch milliseconds.
pub trait Clock {
    fn now_millis(&self) -> i64;
}

impl<C: Clock + ?Sized> Clock for std::rc::Rc<C> {
    fn now_millis(&self) -> i64 {
        (**self).now_millis()
    }
}

/// Time remaining until a target instant, broken into display units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Countdown {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl Countdown {
    pub const ZERO: Countdown = Countdown {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Decompose a remaining duration. Every unit truncates; non-positive
    /// durations yield all zeros.
    pub fn from_millis(remaining_ms: i64) -> Self {
        if remaining_ms <= 0 {
            return Self::ZERO;
        }
        let ms = remaining_ms as u64;
        Self {
            days: ms / MS_PER_DAY as u64,
            hours: (ms / MS_PER_HOUR as u64) % 24,
            minutes: (ms / MS_PER_MINUTE as u64) % 60,
            seconds: (ms / MS_PER_SECOND as u64) % 60,
        }
    }

    pub fn until(target_ms: i64, now_ms: i64) -> Self {
        Self::from_millis(target_ms.saturating_sub(now_ms))
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Label/value pairs in display order.
    pub fn fields(&self) -> [(&'static str, u64); 4] {
        [
            ("Days", self.days),
            ("Hours", self.hours),
            ("Minutes", self.minutes),
            ("Seconds", self.seconds),
        ]
    }
}

/// Render a countdown field with at least two digits.
#[inline]
pub fn pad2(value: u64) -> String {
    format!("{:02}", value)
}

/// Countdown bound to a clock, recomputed on demand while active.
///
/// Once deactivated, `tick` is a no-op and the last value is kept, so a
/// late timer callback cannot change what is shown.
pub struct CountdownDisplay<C: Clock> {
    target_ms: i64,
    clock: C,
    current: Countdown,
    active: bool,
}

impl<C: Clock> CountdownDisplay<C> {
    pub fn new(target_ms: i64, clock: C) -> Self {
        Self {
            target_ms,
            clock,
            current: Countdown::ZERO,
            active: false,
        }
    }

    pub fn activate(&mut self) -> Countdown {
        self.active = true;
        self.recompute()
    }

    pub fn tick(&mut self) -> Option<Countdown> {
        if !self.active {
            return None;
        }
        Some(self.recompute())
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn current(&self) -> Countdown {
        self.current
    }

    pub fn target_ms(&self) -> i64 {
        self.target_ms
    }

    fn recompute(&mut self) -> Countdown {
        self.current = Countdown::until(self.target_ms, self.clock.now_millis());
        self.current
    }
}
