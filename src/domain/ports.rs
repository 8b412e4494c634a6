use crate::domain::model::CalendarDate;
use chrono::Local;

/// Source of the reference date that ages are computed against.
///
/// Core functions never read the system clock themselves; anything that
/// needs "today" asks a `Clock` for it.
pub trait Clock: Send + Sync {
    fn today(&self) -> CalendarDate;
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn today(&self) -> CalendarDate {
        (**self).today()
    }
}

/// Reads the local date from the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> CalendarDate {
        CalendarDate::saturating(Local::now().date_naive())
    }
}

/// Always answers with the same date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    date: CalendarDate,
}

impl FixedClock {
    pub fn new(date: CalendarDate) -> Self {
        Self { date }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> CalendarDate {
        self.date
    }
}
