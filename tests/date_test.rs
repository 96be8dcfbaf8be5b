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

//! Date public API integration tests.

use bank_portfolio::{ContractKind, Date, ParseDateError};

fn date(day: u32, month: u32, year: i32) -> Date {
    Date::new(day, month, year).unwrap()
}

// === Validity ===

#[test]
fn leap_years() {
    assert!(Date::is_leap_year(2000));
    assert!(!Date::is_leap_year(1900));
    assert!(Date::is_leap_year(2024));
    assert!(!Date::is_leap_year(2023));
}

#[test]
fn calendar_validity() {
    assert!(Date::is_valid_date(29, 2, 2000));
    assert!(!Date::is_valid_date(29, 2, 1900));
    assert!(!Date::is_valid_date(31, 4, 2024));
    assert!(Date::is_valid_date(31, 12, 2024));
    assert!(!Date::is_valid_date(0, 1, 2024));
    assert!(!Date::is_valid_date(1, 0, 2024));
    assert!(!Date::is_valid_date(1, 13, 2024));
}

#[test]
fn days_in_month_is_leap_aware() {
    assert_eq!(Date::days_in_month(2024, 2), 29);
    assert_eq!(Date::days_in_month(2023, 2), 28);
    assert_eq!(Date::days_in_month(2023, 4), 30);
    assert_eq!(Date::days_in_month(2023, 7), 31);
}

#[test]
fn construct_rejects_invalid_date() {
    let violation = Date::new(2, 20, 2000).unwrap_err();
    assert_eq!(violation.kind(), ContractKind::Precondition);
    assert!(Date::new(42, 10, 2000).is_err());
    assert!(Date::new(29, 2, 2023).is_err());
}

#[test]
fn set_replaces_or_leaves_unchanged() {
    let mut d = date(1, 1, 2020);
    d.set(29, 2, 2020).unwrap();
    assert_eq!(d, date(29, 2, 2020));

    assert!(d.set(29, 2, 2021).is_err());
    assert_eq!(d, date(29, 2, 2020));
}

// === Arithmetic ===

#[test]
fn add_days_within_month() {
    let mut d = date(10, 5, 2024);
    d.add_days(5);
    assert_eq!(d, date(15, 5, 2024));
}

#[test]
fn add_days_across_year_end() {
    let mut d = date(30, 12, 2023);
    d.add_days(3);
    assert_eq!(d, date(2, 1, 2024));
}

#[test]
fn add_days_through_leap_february() {
    let mut d = date(28, 2, 2024);
    d.add_days(1);
    assert_eq!(d, date(29, 2, 2024));
    d.add_days(1);
    assert_eq!(d, date(1, 3, 2024));
}

#[test]
fn subtract_days_across_year_start() {
    let mut d = date(2, 1, 2024);
    d.add_days(-3);
    assert_eq!(d, date(30, 12, 2023));
}

#[test]
fn subtract_days_into_february() {
    let mut d = date(1, 3, 2023);
    d.add_days(-1);
    assert_eq!(d, date(28, 2, 2023));
}

#[test]
fn add_many_days() {
    let mut d = date(1, 1, 2000);
    d.add_days(366 + 365 * 3);
    assert_eq!(d, date(1, 1, 2004));
}

#[test]
fn add_days_chains_back_to_start() {
    let start = date(17, 8, 1999);
    let mut d = start;
    d.add_days(1234).add_days(-1234);
    assert_eq!(d, start);
}

#[test]
fn add_zero_days_is_identity() {
    let mut d = date(31, 1, 2024);
    d.add_days(0);
    assert_eq!(d, date(31, 1, 2024));
}

#[test]
fn day_of_year() {
    assert_eq!(date(1, 1, 2023).day_of_year(), 1);
    assert_eq!(date(1, 3, 2023).day_of_year(), 60);
    assert_eq!(date(1, 3, 2024).day_of_year(), 61);
    assert_eq!(date(31, 12, 2024).day_of_year(), 366);
}

#[test]
fn difference_counts_days() {
    assert_eq!(date(1, 1, 2025).difference(&date(1, 1, 2024)), 366);
    assert_eq!(date(1, 3, 2000).difference(&date(28, 2, 2000)), 2);
    assert_eq!(date(1, 3, 1900).difference(&date(28, 2, 1900)), 1);
}

#[test]
fn difference_is_antisymmetric() {
    let a = date(14, 7, 1789);
    let b = date(16, 10, 2026);
    assert_eq!(a.difference(&b), -b.difference(&a));
    assert_eq!(a.difference(&a), 0);
}

#[test]
fn difference_matches_add_days() {
    let start = date(5, 11, 2021);
    let mut end = start;
    end.add_days(500);
    assert_eq!(end.difference(&start), 500);
}

// === Ordering ===

#[test]
fn ordering_is_chronological() {
    assert!(date(31, 12, 2023) < date(1, 1, 2024));
    assert!(date(1, 2, 2024) < date(2, 2, 2024));
    assert!(date(30, 1, 2024) < date(1, 2, 2024));
    assert!(!(date(1, 1, 2024) < date(1, 1, 2024)));
}

// === Formatting ===

#[test]
fn weekday_and_month_names() {
    let d = date(16, 10, 2026);
    assert_eq!(d.weekday_name(), "Vendredi");
    assert_eq!(d.month_name(), "octobre");
    assert_eq!(date(1, 1, 2000).weekday_name(), "Samedi");
    assert_eq!(date(2, 1, 2000).weekday_name(), "Dimanche");
    assert_eq!(date(20, 1, 1983).weekday_name(), "Jeudi");
    assert_eq!(date(19, 3, 1975).weekday_name(), "Mercredi");
}

#[test]
fn formatted_pads_day() {
    assert_eq!(date(2, 9, 2024).formatted(), "Lundi le 02 septembre 2024");
    assert_eq!(date(25, 12, 2023).formatted(), "Lundi le 25 decembre 2023");
    assert_eq!(date(14, 2, 2024).formatted(), "Mercredi le 14 fevrier 2024");
}

#[test]
fn display_is_numeric() {
    assert_eq!(date(2, 3, 2000).to_string(), "02/03/2000");
    assert_eq!(date(31, 12, 1999).to_string(), "31/12/1999");
}

// === Year Range ===

#[test]
fn years_outside_range_are_invalid() {
    assert!(Date::is_valid_date(1, 1, 1));
    assert!(Date::is_valid_date(31, 12, 9999));
    assert!(!Date::is_valid_date(1, 1, 0));
    assert!(!Date::is_valid_date(1, 1, 10000));
    assert!(Date::new(31, 12, i32::MAX).is_err());
    assert!(Date::new(1, 1, i32::MIN).is_err());
}

#[test]
fn add_days_stops_at_last_supported_day() {
    let mut d = date(31, 12, 9999);
    d.add_days(1);
    assert_eq!(d, date(31, 12, 9999));

    let mut d = date(1, 12, 9999);
    d.add_days(i64::MAX);
    assert_eq!(d, date(31, 12, 9999));
}

#[test]
fn subtract_days_stops_at_first_supported_day() {
    let mut d = date(1, 1, 1);
    d.add_days(-1);
    assert_eq!(d, date(1, 1, 1));

    let mut d = date(15, 1, 1);
    d.add_days(i64::MIN);
    assert_eq!(d, date(1, 1, 1));
}

#[test]
fn parse_rejects_year_out_of_range() {
    assert!(matches!(
        "01/01/0".parse::<Date>(),
        Err(ParseDateError::OutOfRange { year: 0, .. })
    ));
}

// === Parsing ===

#[test]
fn parse_accepts_common_separators() {
    assert_eq!("02/03/2000".parse::<Date>().unwrap(), date(2, 3, 2000));
    assert_eq!("02 03 2000".parse::<Date>().unwrap(), date(2, 3, 2000));
    assert_eq!("2-3-2000".parse::<Date>().unwrap(), date(2, 3, 2000));
}

#[test]
fn parse_round_trips_display() {
    let d = date(29, 2, 2024);
    assert_eq!(d.to_string().parse::<Date>().unwrap(), d);
}

#[test]
fn parse_rejects_malformed_text() {
    for text in ["", "2000", "02/03", "02/03/2000/1", "aa/03/2000", "02//2000"] {
        assert!(
            matches!(text.parse::<Date>(), Err(ParseDateError::Format(_))),
            "{text:?} should be malformed"
        );
    }
}

#[test]
fn parse_rejects_impossible_date() {
    assert_eq!(
        "31/04/2024".parse::<Date>(),
        Err(ParseDateError::OutOfRange {
            day: 31,
            month: 4,
            year: 2024
        })
    );
}

#[test]
fn today_is_valid() {
    let today = Date::today();
    assert!(Date::is_valid_date(today.day(), today.month(), today.year()));
}
