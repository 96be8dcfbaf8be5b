// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2025 Daniel Negri
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Calendar dates.
//!
//! [`Date`] is a self-validating Gregorian day/month/year value. Every way of
//! building or changing one keeps it on the calendar: construction and
//! [`Date::set`] reject impossible dates with a precondition violation, and
//! [`Date::add_days`] rolls over month and year boundaries.
//!
//! # Example
//!
//! ```
//! use bank_portfolio::Date;
//!
//! let mut date = Date::new(28, 2, 2024).unwrap();
//! date.add_days(2);
//! assert_eq!(date.to_string(), "01/03/2024");
//! assert_eq!(date.formatted(), "Vendredi le 01 mars 2024");
//! ```

use crate::contract::{ContractViolation, assertion, invariant, postcondition, precondition};
use crate::error::ParseDateError;
use chrono::Datelike;
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Weekday names indexed by Zeller's congruence, which counts from Saturday.
const WEEKDAY_NAMES: [&str; 7] = [
    "Samedi", "Dimanche", "Lundi", "Mardi", "Mercredi", "Jeudi", "Vendredi",
];

const MONTH_NAMES: [&str; 12] = [
    "janvier",
    "fevrier",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "aout",
    "septembre",
    "octobre",
    "novembre",
    "decembre",
];

/// A valid Gregorian calendar date.
///
/// Fields are declared year first so the derived ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date {
    year: i32,
    month: u32,
    day: u32,
}

impl Date {
    /// Four-digit years only.
    pub const YEAR_RANGE: RangeInclusive<i32> = 1..=9999;

    /// Builds a date from its parts.
    ///
    /// # Errors
    ///
    /// Precondition violation unless `(day, month, year)` is a calendar date.
    pub fn new(day: u32, month: u32, year: i32) -> Result<Self, ContractViolation> {
        precondition!(Self::is_valid_date(day, month, year));

        let date = Self { year, month, day };

        postcondition!(date.day == day && date.month == month && date.year == year);
        date.check_invariants()?;
        Ok(date)
    }

    /// Today's date on the local system clock.
    pub fn today() -> Self {
        let now = chrono::Local::now().date_naive();
        Self {
            year: now.year(),
            month: now.month(),
            day: now.day(),
        }
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Replaces the date in place. On failure the date is left unchanged.
    ///
    /// # Errors
    ///
    /// Precondition violation unless `(day, month, year)` is a calendar date.
    pub fn set(&mut self, day: u32, month: u32, year: i32) -> Result<(), ContractViolation> {
        precondition!(Self::is_valid_date(day, month, year));

        self.day = day;
        self.month = month;
        self.year = year;

        postcondition!(self.day == day && self.month == month && self.year == year);
        self.check_invariants()
    }

    /// Moves the date forward by `days`, or backward when `days` is negative.
    ///
    /// Works a month at a time, so the cost grows with the number of months
    /// crossed rather than the number of days. Stops at the first or last day
    /// of [`Date::YEAR_RANGE`] instead of leaving it.
    pub fn add_days(&mut self, days: i64) -> &mut Self {
        let mut remaining = days;
        while remaining != 0 {
            let day = i64::from(self.day);
            let month_length = i64::from(Self::days_in_month(self.year, self.month));

            if remaining > 0 {
                if remaining <= month_length - day {
                    self.day = (day + remaining) as u32;
                    remaining = 0;
                } else if self.next_month() {
                    remaining -= month_length - day + 1;
                    self.day = 1;
                } else {
                    tracing::debug!(days, "date clamped to the last supported day");
                    self.day = Self::days_in_month(self.year, self.month);
                    remaining = 0;
                }
            } else if day + remaining > 0 {
                self.day = (day + remaining) as u32;
                remaining = 0;
            } else if self.previous_month() {
                remaining += day;
                self.day = Self::days_in_month(self.year, self.month);
            } else {
                tracing::debug!(days, "date clamped to the first supported day");
                self.day = 1;
                remaining = 0;
            }
        }
        debug_assert!(self.check_date_arithmetic().is_ok());
        self
    }

    /// Steps to the next month; `false` past the end of [`Date::YEAR_RANGE`].
    fn next_month(&mut self) -> bool {
        if self.month < 12 {
            self.month += 1;
        } else if self.year < *Self::YEAR_RANGE.end() {
            self.month = 1;
            self.year += 1;
        } else {
            return false;
        }
        true
    }

    /// Steps to the previous month; `false` before the start of [`Date::YEAR_RANGE`].
    fn previous_month(&mut self) -> bool {
        if self.month > 1 {
            self.month -= 1;
        } else if self.year > *Self::YEAR_RANGE.start() {
            self.month = 12;
            self.year -= 1;
        } else {
            return false;
        }
        true
    }

    fn check_date_arithmetic(&self) -> Result<(), ContractViolation> {
        assertion!(Self::is_valid_date(self.day, self.month, self.year));
        Ok(())
    }

    /// 1-based position of the date within its year.
    pub fn day_of_year(&self) -> u32 {
        (1..self.month)
            .map(|month| Self::days_in_month(self.year, month))
            .sum::<u32>()
            + self.day
    }

    /// Gregorian rule: divisible by 4 and not by 100, or divisible by 400.
    pub fn is_leap_year(year: i32) -> bool {
        (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
    }

    /// Length of `month` in `year`; zero for a month outside `1..=12`.
    pub fn days_in_month(year: i32, month: u32) -> u32 {
        match month {
            4 | 6 | 9 | 11 => 30,
            2 if Self::is_leap_year(year) => 29,
            2 => 28,
            1..=12 => 31,
            _ => 0,
        }
    }

    /// A real calendar day within [`Date::YEAR_RANGE`].
    pub fn is_valid_date(day: u32, month: u32, year: i32) -> bool {
        Self::YEAR_RANGE.contains(&year)
            && (1..=12).contains(&month)
            && (1..=Self::days_in_month(year, month)).contains(&day)
    }

    /// French weekday name, computed with Zeller's congruence.
    pub fn weekday_name(&self) -> &'static str {
        let (mut month, mut year) = (i64::from(self.month), i64::from(self.year));
        if month < 3 {
            month += 12;
            year -= 1;
        }
        let year_of_century = year.rem_euclid(100);
        let century = year.div_euclid(100);
        let h = (i64::from(self.day)
            + 13 * (month + 1) / 5
            + year_of_century
            + year_of_century / 4
            + century / 4
            + 5 * century)
            .rem_euclid(7);
        WEEKDAY_NAMES[h as usize]
    }

    /// French month name, lower case and unaccented.
    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[(self.month - 1) as usize]
    }

    /// Long form used on statements, e.g. `"Lundi le 02 septembre 2024"`.
    pub fn formatted(&self) -> String {
        format!(
            "{} le {:02} {} {}",
            self.weekday_name(),
            self.day,
            self.month_name(),
            self.year
        )
    }

    /// Signed number of days from `other` to `self`.
    ///
    /// Antisymmetric: `a.difference(&b) == -b.difference(&a)`.
    pub fn difference(&self, other: &Date) -> i64 {
        self.day_number() - other.day_number()
    }

    /// Days elapsed since a fixed reference day, counting years from March so
    /// the leap day falls at the end of the counting year.
    fn day_number(&self) -> i64 {
        let (mut month, mut year) = (i64::from(self.month), i64::from(self.year));
        if month < 3 {
            year -= 1;
            month += 12;
        }
        365 * year + year / 4 - year / 100 + year / 400 + (153 * month - 457) / 5
            + i64::from(self.day)
            - 306
    }

    fn check_invariants(&self) -> Result<(), ContractViolation> {
        invariant!(Self::is_valid_date(self.day, self.month, self.year));
        Ok(())
    }
}

impl Default for Date {
    /// Today's date.
    fn default() -> Self {
        Self::today()
    }
}

impl fmt::Display for Date {
    /// Short numeric form, `dd/mm/yyyy`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}/{}", self.day, self.month, self.year)
    }
}

impl FromStr for Date {
    type Err = ParseDateError;

    /// Parses `dd/mm/yyyy`. Spaces or dashes are accepted as separators too.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let malformed = || ParseDateError::Format(text.to_string());

        let mut parts = text.trim().split(['/', ' ', '-']);
        let (Some(day), Some(month), Some(year), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(malformed());
        };
        if [day, month, year]
            .iter()
            .any(|part| part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()))
        {
            return Err(malformed());
        }

        let day: u32 = day.parse().map_err(|_| malformed())?;
        let month: u32 = month.parse().map_err(|_| malformed())?;
        let year: i32 = year.parse().map_err(|_| malformed())?;

        if !Self::is_valid_date(day, month, year) {
            return Err(ParseDateError::OutOfRange { day, month, year });
        }
        Ok(Self { year, month, day })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(day: u32, month: u32, year: i32) -> Date {
        Date::new(day, month, year).unwrap()
    }

    #[test]
    fn day_number_counts_from_reference() {
        assert_eq!(date(1, 3, 2000).day_number(), 730_180);
        assert_eq!(date(2, 3, 2000).day_number() - date(1, 3, 2000).day_number(), 1);
    }

    #[test]
    fn next_and_previous_month_wrap_year() {
        let mut d = date(15, 12, 2023);
        assert!(d.next_month());
        assert_eq!((d.month, d.year), (1, 2024));
        assert!(d.previous_month());
        assert_eq!((d.month, d.year), (12, 2023));
    }

    #[test]
    fn month_steps_stop_at_year_range_ends() {
        let mut last = date(31, 12, 9999);
        assert!(!last.next_month());
        assert_eq!(last, date(31, 12, 9999));

        let mut first = date(1, 1, 1);
        assert!(!first.previous_month());
        assert_eq!(first, date(1, 1, 1));
    }

    #[test]
    fn days_in_month_rejects_month_thirteen() {
        assert_eq!(Date::days_in_month(2024, 13), 0);
        assert_eq!(Date::days_in_month(2024, 0), 0);
    }

    #[test]
    fn failed_set_leaves_date_unchanged() {
        let mut d = date(10, 6, 2020);
        assert!(d.set(31, 6, 2020).is_err());
        assert_eq!(d, date(10, 6, 2020));
    }

    #[test]
    fn today_is_a_calendar_date() {
        let today = Date::today();
        assert!(today.check_invariants().is_ok());
    }
}
