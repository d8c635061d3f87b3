//! Time source for the store.

use crate::model::EpochMillis;
use chrono::{DateTime, Local, NaiveDate, Utc};
use std::cell::Cell;

/// Supplies the current instant and the current local calendar day.
pub trait Clock {
    fn now_ms(&self) -> EpochMillis;
    fn today(&self) -> NaiveDate;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> EpochMillis {
        (**self).now_ms()
    }

    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

/// Wall clock; `today` uses the host's local time zone.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> EpochMillis {
        Utc::now().timestamp_millis()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Manually driven clock for tests and replays.
///
/// `today` is derived from `now_ms` in UTC so advancing by whole days moves
/// the calendar day deterministically on every host.
#[derive(Debug)]
pub struct ManualClock {
    now_ms: Cell<EpochMillis>,
}

impl ManualClock {
    pub fn new(now_ms: EpochMillis) -> Self {
        Self {
            now_ms: Cell::new(now_ms),
        }
    }

    /// Clock set to noon UTC of `day`.
    pub fn at_noon(day: NaiveDate) -> Self {
        let noon = day
            .and_hms_opt(12, 0, 0)
            .map(|at| at.and_utc().timestamp_millis())
            .unwrap_or_default();
        Self::new(noon)
    }

    pub fn advance_ms(&self, delta: EpochMillis) {
        self.now_ms.set(self.now_ms.get() + delta);
    }

    pub fn set_ms(&self, now_ms: EpochMillis) {
        self.now_ms.set(now_ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> EpochMillis {
        self.now_ms.get()
    }

    fn today(&self) -> NaiveDate {
        DateTime::from_timestamp_millis(self.now_ms.get())
            .map(|instant| instant.date_naive())
            .unwrap_or(NaiveDate::MIN)
    }
}
