use chrono::{Datelike, Duration, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::{Result, SimulationError};

/// one calendar month of account activity, first day to last day inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BillingCycle {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl BillingCycle {
    /// cycle with explicit bounds, end must not precede start
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if end < start {
            return Err(SimulationError::InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// the calendar month containing `date`
    pub fn containing(date: NaiveDate) -> Self {
        let start = first_of_month(date);
        Self {
            start,
            end: last_of_month(start),
        }
    }

    /// the following calendar month
    pub fn next(&self) -> Self {
        let start = self
            .start
            .checked_add_months(Months::new(1))
            .unwrap_or(NaiveDate::MAX);
        Self::containing(start)
    }

    /// number of days covered, both ends inclusive
    pub fn days(&self) -> u32 {
        ((self.end - self.start).num_days() + 1) as u32
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// date `days` after the cycle closes
    pub fn days_after_close(&self, days: u32) -> NaiveDate {
        self.end + Duration::days(days as i64)
    }
}

/// iterate the calendar months from `start`'s month through `end`'s month
pub fn cycles_between(start: NaiveDate, end: NaiveDate) -> Result<CycleIter> {
    if end < start {
        return Err(SimulationError::InvalidDateRange { start, end });
    }
    Ok(CycleIter {
        cursor: Some(BillingCycle::containing(start)),
        final_month: first_of_month(end),
    })
}

/// month cursor used by the simulator
pub struct CycleIter {
    cursor: Option<BillingCycle>,
    final_month: NaiveDate,
}

impl Iterator for CycleIter {
    type Item = BillingCycle;

    fn next(&mut self) -> Option<BillingCycle> {
        let current = self.cursor?;
        if current.start > self.final_month {
            self.cursor = None;
            return None;
        }
        self.cursor = if current.end == NaiveDate::MAX {
            None
        } else {
            Some(current.next())
        };
        Some(current)
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

fn last_of_month(first: NaiveDate) -> NaiveDate {
    match first.checked_add_months(Months::new(1)) {
        Some(next) => next - Duration::days(1),
        None => NaiveDate::MAX,
    }
}
