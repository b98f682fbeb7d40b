// Closed interval of calendar dates.
//
// Both ends are inclusive: a period from 2020-03-04 to 2020-03-06 covers three days, and a
// period whose start equals its end covers exactly one. Days are produced lazily so long
// periods never get materialised.

use chrono::NaiveDate;
use std::iter::FusedIterator;

use crate::modules::apartments::core::errors::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Period {
    start: NaiveDate,
    end: NaiveDate,
}

impl Period {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DomainError> {
        if end < start {
            return Err(DomainError::InvertedPeriod { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn single_day(day: NaiveDate) -> Self {
        Self {
            start: day,
            end: day,
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }

    pub fn len_in_days(&self) -> u64 {
        (self.end - self.start).num_days() as u64 + 1
    }

    pub fn days(&self) -> PeriodDays {
        PeriodDays {
            front: self.start,
            back: self.end,
            exhausted: false,
        }
    }
}

impl IntoIterator for Period {
    type Item = NaiveDate;
    type IntoIter = PeriodDays;

    fn into_iter(self) -> Self::IntoIter {
        self.days()
    }
}

#[derive(Debug, Clone)]
pub struct PeriodDays {
    front: NaiveDate,
    back: NaiveDate,
    exhausted: bool,
}

impl Iterator for PeriodDays {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        if self.exhausted {
            return None;
        }
        let day = self.front;
        if day == self.back {
            self.exhausted = true;
        } else {
            match day.succ_opt() {
                Some(next) => self.front = next,
                None => self.exhausted = true,
            }
        }
        Some(day)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len();
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for PeriodDays {
    fn next_back(&mut self) -> Option<NaiveDate> {
        if self.exhausted {
            return None;
        }
        let day = self.back;
        if day == self.front {
            self.exhausted = true;
        } else {
            match day.pred_opt() {
                Some(previous) => self.back = previous,
                None => self.exhausted = true,
            }
        }
        Some(day)
    }
}

impl ExactSizeIterator for PeriodDays {
    fn len(&self) -> usize {
        if self.exhausted {
            0
        } else {
            (self.back - self.front).num_days() as usize + 1
        }
    }
}

impl FusedIterator for PeriodDays {}
