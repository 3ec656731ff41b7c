//! Calendar date source for the quest day boundary.

use std::sync::Mutex;

use chrono::{Days, Local, NaiveDate};

/// Format used for stored date keys.
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Supplies today's local calendar date.
pub trait Clock {
    fn today(&self) -> NaiveDate;

    fn today_key(&self) -> String {
        date_key(self.today())
    }
}

impl<T: Clock + ?Sized> Clock for &T {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

impl<T: Clock + ?Sized> Clock for Box<T> {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

/// `YYYY-MM-DD` key for a date.
pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// Wall clock in the ambient local timezone, read on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock pinned to a date that only moves when told to.
#[derive(Debug)]
pub struct FixedClock {
    date: Mutex<NaiveDate>,
}

impl FixedClock {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date: Mutex::new(date),
        }
    }

    pub fn set(&self, date: NaiveDate) {
        if let Ok(mut current) = self.date.lock() {
            *current = date;
        }
    }

    /// Move forward by whole days.
    pub fn advance_days(&self, days: u64) {
        if let Ok(mut current) = self.date.lock()
            && let Some(next) = current.checked_add_days(Days::new(days))
        {
            *current = next;
        }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        match self.date.lock() {
            Ok(date) => *date,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_date_key_is_zero_padded() {
        assert_eq!(date_key(ymd(2026, 3, 7)), "2026-03-07");
    }

    #[test]
    fn test_fixed_clock_advances_across_month() {
        let clock = FixedClock::new(ymd(2026, 1, 31));
        assert_eq!(clock.today_key(), "2026-01-31");
        clock.advance_days(1);
        assert_eq!(clock.today_key(), "2026-02-01");
        clock.set(ymd(2025, 12, 31));
        assert_eq!(clock.today(), ymd(2025, 12, 31));
    }

    #[test]
    fn test_system_clock_key_shape() {
        let key = SystemClock.today_key();
        assert_eq!(key.len(), 10);
        assert!(NaiveDate::parse_from_str(&key, DATE_KEY_FORMAT).is_ok());
    }
}
