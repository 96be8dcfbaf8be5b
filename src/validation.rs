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

//! Format predicates for personal data.
//!
//! These are plain checks with no side effects. [`Client`](crate::Client)
//! relies on [`is_valid_name`]; the others serve front ends validating raw
//! input before building domain values.

use crate::date::Date;

const SEPARATORS: [char; 2] = [' ', '-'];

/// A person's name: letters (accented letters included), with single spaces
/// or hyphens allowed between letters.
///
/// The first and last characters must be letters, and two separators may not
/// follow each other.
///
/// ```
/// use bank_portfolio::validation::is_valid_name;
///
/// assert!(is_valid_name("Jean-Luc"));
/// assert!(is_valid_name("Hélène"));
/// assert!(!is_valid_name("B7"));
/// assert!(!is_valid_name("Anne--Marie"));
/// ```
pub fn is_valid_name(name: &str) -> bool {
    let (Some(first), Some(last)) = (name.chars().next(), name.chars().last()) else {
        return false;
    };
    if !first.is_alphabetic() || !last.is_alphabetic() {
        return false;
    }

    let mut previous_was_separator = false;
    for c in name.chars() {
        let is_separator = SEPARATORS.contains(&c);
        if !(c.is_alphabetic() || is_separator) || (is_separator && previous_was_separator) {
            return false;
        }
        previous_was_separator = is_separator;
    }
    true
}

/// A North American phone number written `NNN NNN-NNNN`.
pub fn is_valid_phone(phone: &str) -> bool {
    let bytes = phone.as_bytes();
    bytes.len() == 12
        && bytes.iter().enumerate().all(|(i, &b)| match i {
            3 => b == b' ',
            7 => b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// A date typed as `dd mm yyyy` that names a real calendar day.
///
/// Only the shape is fixed (two-digit day and month, four-digit year); the
/// calendar rules are those of [`Date::is_valid_date`].
pub fn is_valid_date_text(text: &str) -> bool {
    let bytes = text.as_bytes();
    let shaped = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, &b)| match i {
            2 | 5 => b == b' ',
            _ => b.is_ascii_digit(),
        });
    if !shaped {
        return false;
    }

    let field = |range: std::ops::Range<usize>| text[range].parse::<u32>().ok();
    match (field(0..2), field(3..5), field(6..10)) {
        (Some(day), Some(month), Some(year)) => {
            i32::try_from(year).is_ok_and(|year| Date::is_valid_date(day, month, year))
        }
        _ => false,
    }
}
