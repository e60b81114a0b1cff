//! Calendar and clock answers (en-US formatting)

use chrono::{Local, NaiveDateTime};

/// Which calendar value was asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalendarKind {
    Time,
    Date,
    DayOfWeek,
    Year,
    Month,
}

/// Source of the current local time
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Wall clock in the local timezone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock pinned to one instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Format the requested calendar value for `now`
pub fn answer(kind: CalendarKind, now: NaiveDateTime) -> String {
    let pattern = match kind {
        CalendarKind::Time => "%-I:%M:%S %p",
        CalendarKind::Date => "%A, %B %-d, %Y",
        CalendarKind::DayOfWeek => "%A",
        CalendarKind::Year => "%Y",
        CalendarKind::Month => "%B",
    };
    now.format(pattern).to_string()
}
